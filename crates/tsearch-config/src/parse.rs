//! Configuration file parsing.
//!
//! Parses individual `.tsearch.toml` files into `RawConfig` structures that keep every
//! field optional until merging.

use std::{fs, path::Path};

use serde::Deserialize;
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// Search settings section.
    pub search: Option<RawSearchSettings>,
    /// Output settings section.
    pub output: Option<RawOutputSettings>,
}

/// Raw `[search]` settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawSearchSettings {
    /// Accept Soundex and edit-distance equivalents.
    pub soundex: Option<bool>,
    /// Require query words in order and contiguous.
    pub phrase: Option<bool>,
    /// Escape unquoted boolean terms.
    pub literal_terms: Option<bool>,
    /// Characters of context on each side of a match.
    pub context_radius: Option<usize>,
    /// Preceding lines scanned for a timestamp.
    pub timestamp_lookback: Option<usize>,
}

/// Raw `[output]` settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawOutputSettings {
    /// Maximum results per file (0 = no limit).
    pub limit: Option<usize>,
    /// Print JSON.
    pub json: Option<bool>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    let config: RawConfig = toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;

    // A zero radius would cut every context down to the ellipsis.
    if config
        .search
        .as_ref()
        .is_some_and(|search| search.context_radius == Some(0))
    {
        return Err(ConfigError::InvalidValue {
            path: path.to_path_buf(),
            key: "search.context_radius",
            message: "must be at least 1",
        });
    }

    Ok(config)
}

/// Parses configuration from a TOML string without path context.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.search.is_none());
        assert!(config.output.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
root = true

[search]
soundex = true
phrase = true
literal_terms = true
context_radius = 80
timestamp_lookback = 4

[output]
limit = 3
json = true
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.root, Some(true));

        let search = config.search.unwrap();
        assert_eq!(search.soundex, Some(true));
        assert_eq!(search.phrase, Some(true));
        assert_eq!(search.literal_terms, Some(true));
        assert_eq!(search.context_radius, Some(80));
        assert_eq!(search.timestamp_lookback, Some(4));

        let output = config.output.unwrap();
        assert_eq!(output.limit, Some(3));
        assert_eq!(output.json, Some(true));
    }

    #[test]
    fn test_parse_partial_section() {
        let config = parse_config_str("[search]\nsoundex = true\n", Path::new("t.toml")).unwrap();
        let search = config.search.unwrap();
        assert_eq!(search.soundex, Some(true));
        assert!(search.phrase.is_none());
        assert!(search.context_radius.is_none());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_config_str("[search\n", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_parse_wrong_type() {
        let result = parse_config("[search]\ncontext_radius = \"wide\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_unknown_key() {
        let result = parse_config("[search]\nsoundx = true\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_zero_context_radius() {
        let err = parse_config_str("[search]\ncontext_radius = 0\n", Path::new("zero.toml"))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "search.context_radius",
                ..
            }
        ));
        assert!(err.to_string().contains("zero.toml"));

        let config =
            parse_config_str("[search]\ntimestamp_lookback = 0\n", Path::new("t.toml")).unwrap();
        assert_eq!(config.search.unwrap().timestamp_lookback, Some(0));
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_config_file(Path::new("/nonexistent/.tsearch.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }
}
