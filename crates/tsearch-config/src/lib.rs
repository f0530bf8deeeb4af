//! Configuration system for tsearch.
//!
//! tsearch uses TOML configuration files named `.tsearch.toml`. Configuration is
//! resolved by walking up the directory tree from the current working directory,
//! collecting any `.tsearch.toml` files found, then loading `~/.tsearch.toml` as the
//! global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawOutputSettings, RawSearchSettings, parse_config_file, parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
use tsearch_engine::{DEFAULT_CONTEXT_RADIUS, DEFAULT_TIMESTAMP_LOOKBACK};

/// Top-level merged configuration for tsearch.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Search-related settings.
    pub search: SearchSettings,
    /// Output settings.
    pub output: OutputSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.tsearch.toml`
    /// files.
    ///
    /// Returns the default configuration if no files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths, highest
    /// precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed = files
            .iter()
            .map(|path| {
                Ok(ParsedConfig {
                    path: path.clone(),
                    config: parse_config_file(path)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Serializes the effective settings to TOML, in the same layout as a
    /// `.tsearch.toml` file.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            search: &self.search,
            output: &self.output,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Settings that control how queries match transcript lines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Accept Soundex and edit-distance equivalents.
    pub soundex: bool,
    /// Require query words in order and contiguous.
    pub phrase: bool,
    /// Escape unquoted boolean terms instead of treating them as patterns.
    pub literal_terms: bool,
    /// Characters of context on each side of a match.
    pub context_radius: usize,
    /// Preceding lines scanned for a timestamp.
    pub timestamp_lookback: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            soundex: false,
            phrase: false,
            literal_terms: false,
            context_radius: DEFAULT_CONTEXT_RADIUS,
            timestamp_lookback: DEFAULT_TIMESTAMP_LOOKBACK,
        }
    }
}

/// Settings for printing results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Maximum results per file; 0 means no limit.
    pub limit: usize,
    /// Print JSON instead of text.
    pub json: bool,
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Search settings.
    search: &'a SearchSettings,
    /// Output settings.
    output: &'a OutputSettings,
}

/// Returns the path `tsearch init` writes to: the global file when `global` is set,
/// otherwise `.tsearch.toml` in `cwd`.
pub fn init_path(cwd: &Path, global: bool) -> Result<PathBuf, ConfigError> {
    if global {
        global_config_path().ok_or(ConfigError::NoHomeDirectory)
    } else {
        Ok(cwd.join(CONFIG_FILENAME))
    }
}

/// Writes a configuration file, refusing to replace an existing one unless `force`
/// is set.
pub fn write_config_file(path: &Path, contents: &str, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    fs::write(path, contents).map_err(|source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn test_search_settings_defaults() {
        let search = SearchSettings::default();
        assert!(!search.soundex);
        assert!(!search.phrase);
        assert!(!search.literal_terms);
        assert_eq!(search.context_radius, 50);
        assert_eq!(search.timestamp_lookback, 10);
    }

    #[test]
    fn test_output_settings_defaults() {
        let output = OutputSettings::default();
        assert_eq!(output.limit, 0);
        assert!(!output.json);
    }

    #[test]
    fn test_settings_to_toml() {
        let toml = Config::default().settings_to_toml().unwrap();

        assert!(toml.contains("[search]"));
        assert!(toml.contains("[output]"));
        assert!(toml.contains("context_radius = 50"));
        assert!(toml.contains("soundex = false"));

        let parsed = parse_config_str(&toml, Path::new("effective.toml")).unwrap();
        assert_eq!(parsed.search.unwrap().timestamp_lookback, Some(10));
        assert_eq!(parsed.output.unwrap().limit, Some(0));
    }

    #[test]
    fn test_init_path_local() {
        let path = init_path(Path::new("/work"), false).unwrap();
        assert_eq!(path, Path::new("/work").join(CONFIG_FILENAME));
    }

    #[test]
    fn test_write_config_file_respects_force() {
        let dir = TestDir::new();
        let path = dir.path().join(CONFIG_FILENAME);

        write_config_file(&path, "first\n", false).unwrap();
        let err = write_config_file(&path, "second\n", false).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\n");

        write_config_file(&path, "second\n", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn test_write_config_file_reports_io_errors() {
        let dir = TestDir::new();
        let path = dir.path().join("missing").join(CONFIG_FILENAME);
        let err = write_config_file(&path, "x", false).unwrap_err();
        assert!(matches!(err, ConfigError::WriteFile { .. }));
    }
}
