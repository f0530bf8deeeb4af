//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`.

use std::path::PathBuf;

use crate::{
    Config, OutputSettings, SearchSettings,
    parse::{RawConfig, RawOutputSettings, RawSearchSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest
/// to the working directory), lowest last (global). Each field takes the first value
/// defined.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    let mut search = SearchSettings::default();
    let mut output = OutputSettings::default();

    // Lowest precedence first so higher precedence overwrites.
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.search {
            apply_raw_search(&mut search, raw);
        }
        if let Some(ref raw) = parsed.config.output {
            apply_raw_output(&mut output, raw);
        }
    }

    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(PathBuf::from);

    Config {
        search,
        output,
        config_root,
    }
}

/// Applies raw search settings, overwriting present values.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.soundex {
        result.soundex = v;
    }
    if let Some(v) = raw.phrase {
        result.phrase = v;
    }
    if let Some(v) = raw.literal_terms {
        result.literal_terms = v;
    }
    if let Some(v) = raw.context_radius {
        result.context_radius = v;
    }
    if let Some(v) = raw.timestamp_lookback {
        result.timestamp_lookback = v;
    }
}

/// Applies raw output settings, overwriting present values.
fn apply_raw_output(result: &mut OutputSettings, raw: &RawOutputSettings) {
    if let Some(v) = raw.limit {
        result.limit = v;
    }
    if let Some(v) = raw.json {
        result.json = v;
    }
}
