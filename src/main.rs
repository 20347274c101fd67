//! retext - Inline text commands and spacing cleanup

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs::File;
use std::io;
use std::path::Path;

use retext::process::{fix_text, read_source, write_output, FixReport};
use retext::{parse_args, CliArgs, Config, Result, RetextError};

fn main() -> Result<()> {
    let args = parse_args();
    init_logging(args.debug);

    let (Some(input), Some(output)) = (&args.input, &args.output) else {
        print_usage();
        return Ok(());
    };

    if !args.extra.is_empty() {
        log::warn!("Ignoring {} extra argument(s)", args.extra.len());
    }

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            println!("Error loading config: {e:#}");
            return Ok(());
        }
    };

    let report = match transform(input, &config) {
        Ok(report) => report,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    // Printed before the output is touched
    if config.report_diagnostics {
        for diagnostic in &report.diagnostics {
            println!("{diagnostic}");
        }
    }

    if let Err(e) = write_document(output, &report.text) {
        println!("{e}");
    }

    Ok(())
}

/// Set up `env_logger`; `--debug` overrides `RUST_LOG`
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

/// Build configuration from CLI args and an optional config file
fn build_config(args: &CliArgs) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        log::debug!("Using explicit config file: {}", config_path.display());
        Config::from_toml_file(config_path)?
    } else {
        Config::from_discovered_files(&std::env::current_dir().unwrap_or_default())
    };

    // Override with CLI arguments
    if args.no_articles {
        config.fix_articles = false;
    }
    if args.no_punctuation {
        config.fix_punctuation = false;
    }
    if args.no_quotes {
        config.fix_quotes = false;
    }
    if args.silent {
        config.report_diagnostics = false;
    }

    log::debug!("Configuration: {config:?}");

    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read one document and run every enabled pass over it
fn transform(input: &Path, config: &Config) -> std::result::Result<FixReport, RetextError> {
    let text = if is_stdio(input) {
        read_source(io::stdin().lock(), config.max_file_size)?
    } else {
        let file = File::open(input).map_err(RetextError::Open)?;
        read_source(file, config.max_file_size)?
    };
    log::debug!("Read {} bytes from {}", text.len(), input.display());

    Ok(fix_text(&text, config))
}

/// Write the transformed document
///
/// Only called once the input has been read in full, so a missing input
/// never truncates an existing output file.
fn write_document(output: &Path, text: &str) -> std::result::Result<(), RetextError> {
    if is_stdio(output) {
        let mut stdout = io::stdout().lock();
        write_output(&mut stdout, text)?;
    } else {
        let mut file = File::create(output).map_err(RetextError::Create)?;
        write_output(&mut file, text)?;
    }
    log::debug!("Wrote {} bytes to {}", text.len(), output.display());
    Ok(())
}

fn print_usage() {
    println!(
        "retext v{} - inline text commands and spacing cleanup",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Usage:");
    println!("  retext [OPTIONS] <INPUT> <OUTPUT>");
    println!("  retext [OPTIONS] - -              # Read stdin, write stdout");
    println!();
    println!("Inline commands (apply to the preceding word):");
    println!("  (cap) (up) (low)                Capitalize, upper-case, lower-case");
    println!("  (cap,N) (up,N) (low,N)          Same, for the preceding N words");
    println!("  (hex) (bin)                     Hexadecimal / binary to decimal");
    println!();
    println!("Options:");
    println!("  -c, --config <FILE>             Config file path (overrides auto-discovery)");
    println!("  --no-articles                   Don't rewrite \"a\" to \"an\"");
    println!("  --no-punctuation                Don't fix spacing around punctuation");
    println!("  --no-quotes                     Don't fix spacing inside single quotes");
    println!("  -S, --silent                    Don't print conversion errors");
    println!("  -D, --debug                     Enable debug output");
    println!("  -h, --help                      Print help");
    println!();
    println!("Config file auto-discovery:");
    println!("  Searches for retext.toml in the current directory and its parents.");
    println!(
        "  More specific configs (closer to the current directory) override less specific ones."
    );
}
