//! Implementation of `tsearch cues`.

use std::process::ExitCode;

use tsearch_engine::{Cue, parse_srt, render_srt};

use crate::cli::{
    args::CuesCommand,
    context::CommandContext,
    input::read_source_or_report,
    output::{format_cue, to_json},
};

/// Prints the SRT cues whose text matches the query.
pub fn run(ctx: &CommandContext, cmd: &CuesCommand) -> ExitCode {
    let Some(text) = read_source_or_report(&cmd.file) else {
        return ExitCode::FAILURE;
    };

    let searcher = ctx.searcher(&cmd.matching);
    let matching: Vec<Cue> = parse_srt(&text)
        .into_iter()
        .filter(|cue| searcher.matches(&cmd.query, &cue.text))
        .collect();

    // `--srt` is explicit, so it beats `json` from the config.
    if cmd.srt {
        print!("{}", render_srt(&matching));
    } else if cmd.json || ctx.config.output.json {
        let Some(json) = to_json(&matching) else {
            return ExitCode::FAILURE;
        };
        println!("{json}");
    } else {
        for cue in &matching {
            println!("{}", format_cue(cue));
        }
    }

    ExitCode::SUCCESS
}
