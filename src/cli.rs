//! Command-line interface for retext.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Source document (`-` for stdin)
    pub input: Option<PathBuf>,

    /// Destination document (`-` for stdout)
    pub output: Option<PathBuf>,

    /// Positional arguments after the first two, ignored
    pub extra: Vec<PathBuf>,

    /// Config file path
    pub config: Option<PathBuf>,

    /// Skip the indefinite article pass
    pub no_articles: bool,

    /// Skip the punctuation spacing pass
    pub no_punctuation: bool,

    /// Skip the quote spacing pass
    pub no_quotes: bool,

    /// Silent mode (no conversion diagnostics)
    pub silent: bool,

    /// Enable debug output
    pub debug: bool,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("retext")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Applies inline text commands and fixes article, punctuation and quote spacing")
        .arg(
            Arg::new("paths")
                .help("Input file and output file (- for stdin/stdout)")
                .value_name("FILE")
                .num_args(1..)
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file (overrides auto-discovery)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("no-articles")
                .long("no-articles")
                .help("Don't rewrite \"a\" to \"an\"")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-punctuation")
                .long("no-punctuation")
                .help("Don't normalize spacing around punctuation")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-quotes")
                .long("no-quotes")
                .help("Don't normalize spacing inside single quotes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output (config, dropped commands, conversion failures)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Don't print conversion errors")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    let mut paths = matches
        .get_many::<PathBuf>("paths")
        .map(|vals| vals.cloned().collect::<Vec<_>>())
        .unwrap_or_default()
        .into_iter();

    CliArgs {
        input: paths.next(),
        output: paths.next(),
        extra: paths.collect(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        no_articles: matches.get_flag("no-articles"),
        no_punctuation: matches.get_flag("no-punctuation"),
        no_quotes: matches.get_flag("no-quotes"),
        silent: matches.get_flag("silent"),
        debug: matches.get_flag("debug"),
    }
}
