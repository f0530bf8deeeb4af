//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use tracing::debug;
use tsearch_config::Config;
use tsearch_engine::{SearchOptions, TranscriptSearcher};

use crate::cli::args::MatchArgs;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        debug!(root = ?config.config_root, "configuration loaded");
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Builds search options from configuration and flags.
    ///
    /// A flag can turn a matching option on but never off: each option is the
    /// flag OR the configured value.
    pub fn search_options(&self, flags: &MatchArgs) -> SearchOptions {
        let search = &self.config.search;
        SearchOptions {
            use_soundex: flags.soundex || search.soundex,
            use_phrase_search: flags.phrase || search.phrase,
            literal_terms: flags.literal || search.literal_terms,
            context_radius: search.context_radius,
            timestamp_lookback: search.timestamp_lookback,
        }
    }

    /// Returns a searcher configured from settings and flags.
    pub fn searcher(&self, flags: &MatchArgs) -> TranscriptSearcher {
        TranscriptSearcher::new(self.search_options(flags))
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
