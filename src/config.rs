//! Configuration management for retext.
//!
//! This module provides the [`Config`] struct which controls which passes run.
//! Configuration can be loaded from:
//! - TOML files (`retext.toml`)
//! - CLI arguments (which override file settings)
//!
//! Config files are auto-discovered by searching the working directory and its
//! ancestors up to the filesystem root.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Config file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["retext.toml"];

/// Default maximum input size in bytes (100 MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Main configuration struct for retext
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Rewrite "a" to "an" before vowel-or-h words (default: true)
    pub fix_articles: bool,

    /// Normalize spacing around `. ! , ? : ;` (default: true)
    pub fix_punctuation: bool,

    /// Remove spaces inside single-quote spans (default: true)
    pub fix_quotes: bool,

    /// Inputs larger than this many bytes are rejected (default: 100 MB)
    pub max_file_size: u64,

    /// Print conversion diagnostics after processing (default: true)
    pub report_diagnostics: bool,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    pub fix_articles: Option<bool>,
    pub fix_punctuation: Option<bool>,
    pub fix_quotes: Option<bool>,
    pub max_file_size: Option<u64>,
    pub report_diagnostics: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fix_articles: true,
            fix_punctuation: true,
            fix_quotes: true,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            report_diagnostics: true,
        }
    }
}

impl Config {
    /// Validate configuration values are within reasonable bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.max_file_size == 0 {
            return Some("max_file_size must be at least 1".to_string());
        }
        None
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text, starting from the defaults
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let partial: PartialConfig = toml::from_str(contents)?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = partial.fix_articles {
            self.fix_articles = v;
        }
        if let Some(v) = partial.fix_punctuation {
            self.fix_punctuation = v;
        }
        if let Some(v) = partial.fix_quotes {
            self.fix_quotes = v;
        }
        if let Some(v) = partial.max_file_size {
            self.max_file_size = v;
        }
        if let Some(v) = partial.report_diagnostics {
            self.report_diagnostics = v;
        }
    }

    /// Discover config files in a directory and its ancestors
    ///
    /// Returns config file paths ordered from least to most specific.
    #[must_use]
    pub fn discover_config_files(start_dir: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        let mut ancestors: Vec<&Path> = start_dir.ancestors().collect();
        // Root first, so closer files override
        ancestors.reverse();

        for ancestor in ancestors {
            for config_name in CONFIG_FILE_NAMES {
                let config_path = ancestor.join(config_name);
                if config_path.is_file() && !config_files.contains(&config_path) {
                    config_files.push(config_path);
                }
            }
        }

        config_files
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones (only explicitly set values).
    /// Unreadable or malformed files are logged and skipped.
    #[must_use]
    pub fn from_discovered_files(start_dir: &Path) -> Self {
        let mut config = Self::default();
        for path in Self::discover_config_files(start_dir) {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match toml::from_str::<PartialConfig>(&contents) {
                    Ok(partial) => {
                        log::debug!("Loaded config file {}", path.display());
                        config.apply_partial(&partial);
                    }
                    Err(e) => log::warn!("failed to parse {}: {e}", path.display()),
                },
                Err(e) => log::warn!("failed to read {}: {e}", path.display()),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.fix_articles);
        assert!(config.fix_punctuation);
        assert!(config.fix_quotes);
        assert!(config.report_diagnostics);
        assert_eq!(config.max_file_size, DEFAULT_MAX_FILE_SIZE);
    }

    #[test]
    fn test_config_apply_partial_preserves_unset() {
        let mut base = Config {
            fix_quotes: false,
            ..Default::default()
        };

        let partial = PartialConfig {
            fix_articles: Some(false),
            ..Default::default()
        };

        base.apply_partial(&partial);
        assert!(!base.fix_articles);
        // Not reset to the default
        assert!(!base.fix_quotes);
        assert!(base.fix_punctuation);
    }

    #[test]
    fn test_from_toml_str() {
        let config =
            Config::from_toml_str("fix_punctuation = false\nmax_file_size = 1024\n").unwrap();
        assert!(!config.fix_punctuation);
        assert_eq!(config.max_file_size, 1024);
        assert!(config.fix_articles);
    }

    #[test]
    fn test_from_toml_str_ignores_unknown_keys() {
        let config = Config::from_toml_str("colour = \"blue\"\n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_toml_str_rejects_wrong_type() {
        assert!(Config::from_toml_str("fix_quotes = 3\n").is_err());
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("retext.toml");
        std::fs::write(&path, "fix_quotes = false\n").unwrap();

        let config = Config::from_toml_file(&path).unwrap();
        assert!(!config.fix_quotes);
    }

    #[test]
    fn test_discovered_files_closest_wins() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(
            dir.path().join("retext.toml"),
            "fix_quotes = false\nfix_articles = false\n",
        )
        .unwrap();
        std::fs::write(nested.join("retext.toml"), "fix_articles = true\n").unwrap();

        let config = Config::from_discovered_files(&nested);
        assert!(!config.fix_quotes);
        assert!(config.fix_articles);
    }

    #[test]
    fn test_from_discovered_files_skips_malformed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("retext.toml"), "fix_quotes = [").unwrap();

        let config = Config::from_discovered_files(dir.path());
        assert!(config.fix_quotes);
    }

    #[test]
    fn test_validate_default_config() {
        assert!(
            Config::default().validate().is_none(),
            "Default config should be valid"
        );
    }

    #[test]
    fn test_validate_max_file_size_zero() {
        let config = Config {
            max_file_size: 0,
            ..Default::default()
        };
        assert!(config.validate().unwrap().contains("max_file_size"));
    }
}
