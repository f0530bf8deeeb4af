//! Error types for tsearch configuration.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::{de, ser};

/// Errors that can occur when loading, rendering or writing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// A setting has a value outside its accepted range.
    #[error("invalid value for {key} in {path}: {message}")]
    InvalidValue {
        /// File holding the setting.
        path: PathBuf,
        /// Dotted setting name, such as `search.context_radius`.
        key: &'static str,
        /// What the accepted values are.
        message: &'static str,
    },

    /// Failed to render settings as TOML.
    #[error("failed to serialize settings: {source}")]
    SerializeToml {
        /// Underlying TOML serialization error.
        #[from]
        source: ser::Error,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// A configuration file already exists and overwriting was not requested.
    #[error("configuration file already exists: {path}")]
    AlreadyExists {
        /// Path to the existing file.
        path: PathBuf,
    },

    /// Failed to write a configuration file.
    #[error("failed to write {path}: {source}")]
    WriteFile {
        /// Path to the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
