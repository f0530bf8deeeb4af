//! Implementation of `tsearch search`.

use std::process::ExitCode;

use tracing::debug;
use tsearch_engine::TranscriptSearcher;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    input::{read_source_or_report, source_label},
    output::{JsonFileResults, apply_limit, format_result, to_json},
};

/// Searches each transcript file and prints matching lines.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let mut options = ctx.search_options(&cmd.matching);
    if let Some(radius) = cmd.context_radius {
        options.context_radius = radius;
    }
    let searcher = TranscriptSearcher::new(options);
    let limit = cmd.limit.unwrap_or(ctx.config.output.limit);
    let json = cmd.json || ctx.config.output.json;

    let mut failed = false;
    let mut files = Vec::new();

    for path in &cmd.files {
        let Some(text) = read_source_or_report(path) else {
            failed = true;
            continue;
        };
        let lines: Vec<&str> = text.lines().collect();
        let results = searcher.par_search(&cmd.query, &lines);
        let label = source_label(path);
        debug!(file = %label, hits = results.len(), "searched transcript");
        files.push((label, results));
    }

    if json {
        let output: Vec<_> = files
            .iter()
            .map(|(path, results)| JsonFileResults {
                path: path.clone(),
                results: apply_limit(results, limit),
            })
            .collect();
        match to_json(&output) {
            Some(json) => println!("{json}"),
            None => return ExitCode::FAILURE,
        }
    } else {
        for (path, results) in &files {
            for result in apply_limit(results, limit) {
                println!("{}", format_result(path, result));
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
