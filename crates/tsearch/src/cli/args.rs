//! Clap argument definitions for the `tsearch` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tsearch_engine::DEFAULT_CONTEXT_RADIUS;

/// Parses a context radius, which must be at least 1.
fn parse_context_radius(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("context radius must be at least 1".to_string()),
        Ok(radius) => Ok(radius),
        Err(e) => Err(e.to_string()),
    }
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "tsearch")]
#[command(about = "Search transcripts and subtitles phonetically, by phrase or with boolean queries")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags that enable matching options on top of configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct MatchArgs {
    /// Accept sound-alike words (Soundex and small edit distances)
    #[arg(short = 's', long)]
    pub soundex: bool,

    /// Require query words in order and next to each other
    #[arg(short = 'p', long)]
    pub phrase: bool,

    /// Match unquoted boolean terms literally instead of as regular expressions
    #[arg(long)]
    pub literal: bool,
}

/// Arguments for `tsearch search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Search query
    pub query: String,

    /// Transcript files (plain text or SRT); `-` reads standard input
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    /// Matching flags.
    pub matching: MatchArgs,

    /// Maximum results per file (0 = no limit)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Characters of context on each side of a match
    #[arg(
        short = 'C',
        long,
        value_parser = parse_context_radius,
        help = format!("Characters of context on each side of a match [default: {DEFAULT_CONTEXT_RADIUS}]")
    )]
    pub context_radius: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `tsearch cues`.
#[derive(Args, Debug, Clone)]
pub struct CuesCommand {
    /// Search query
    pub query: String,

    /// SRT subtitle file; `-` reads standard input
    pub file: PathBuf,

    #[command(flatten)]
    /// Matching flags.
    pub matching: MatchArgs,

    /// Output in JSON format
    #[arg(long, conflicts_with = "srt")]
    pub json: bool,

    /// Output matching cues as a renumbered SRT document
    #[arg(long)]
    pub srt: bool,
}

/// Arguments for `tsearch explain`.
#[derive(Args, Debug, Clone)]
pub struct ExplainCommand {
    /// Query to classify
    pub query: String,

    #[command(flatten)]
    /// Matching flags.
    pub matching: MatchArgs,
}

/// Arguments for `tsearch init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.tsearch.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `tsearch` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print transcript lines matching a query
    #[command(after_help = "\
QUERY SYNTAX:
  word1 word2            Any word matches (sound-alikes with --soundex)
  word1 word2 --phrase   Words in order, next to each other
  \"exact phrase\"         Case-insensitive substring
  a OR b                 Either term
  a AND b                Both terms
  a NOT b                First term without the second
  \"word\" OR b            Quoted terms match whole words only

Keywords are uppercase and need spaces on both sides. Operators are resolved in
passes (all OR, then AND, then NOT) from left to right; there is no grouping.")]
    Search(SearchCommand),

    /// Print SRT cues whose text matches a query
    Cues(CuesCommand),

    /// Show how a query is classified and parsed
    Explain(ExplainCommand),

    /// Initialize tsearch configuration in current directory
    Init(InitCommand),

    /// Print the effective configuration
    Config,
}

/// Parses CLI arguments, exiting with a usage message on error.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    /// Gets help text for a subcommand's argument.
    fn get_arg_help(cmd: &clap::Command, subcmd: &str, arg: &str) -> String {
        cmd.get_subcommands()
            .find(|c| c.get_name() == subcmd)
            .and_then(|c| c.get_arguments().find(|a| a.get_id() == arg))
            .and_then(|a| a.get_help().map(|h| h.to_string()))
            .unwrap_or_default()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn context_radius_help_matches_default() {
        let help = get_arg_help(&Cli::command(), "search", "context_radius");
        assert!(
            help.contains(&format!("[default: {DEFAULT_CONTEXT_RADIUS}]")),
            "search --context-radius help should contain default {DEFAULT_CONTEXT_RADIUS}: {help}"
        );
    }

    #[test]
    fn parses_search_flags() {
        let cli = Cli::try_parse_from([
            "tsearch", "search", "robert", "a.srt", "b.txt", "-s", "--phrase", "-n", "3",
        ])
        .unwrap();
        let Commands::Search(cmd) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(cmd.query, "robert");
        assert_eq!(cmd.files.len(), 2);
        assert!(cmd.matching.soundex);
        assert!(cmd.matching.phrase);
        assert!(!cmd.matching.literal);
        assert_eq!(cmd.limit, Some(3));
    }

    #[test]
    fn context_radius_must_be_positive() {
        assert!(Cli::try_parse_from(["tsearch", "search", "q", "a.srt", "-C", "0"]).is_err());
        let cli = Cli::try_parse_from(["tsearch", "search", "q", "a.srt", "-C", "7"]).unwrap();
        let Commands::Search(cmd) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(cmd.context_radius, Some(7));
    }

    #[test]
    fn search_requires_a_file() {
        assert!(Cli::try_parse_from(["tsearch", "search", "robert"]).is_err());
    }

    #[test]
    fn cues_json_conflicts_with_srt() {
        assert!(Cli::try_parse_from(["tsearch", "cues", "q", "a.srt", "--json", "--srt"]).is_err());
    }
}
