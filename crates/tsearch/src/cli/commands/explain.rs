//! Implementation of `tsearch explain`.

use std::process::ExitCode;

use tsearch_engine::QueryPlan;

use crate::cli::{args::ExplainCommand, context::CommandContext};

/// Prints how a query is classified, its parse tree and any term diagnostics.
pub fn run(ctx: &CommandContext, cmd: &ExplainCommand) -> ExitCode {
    let searcher = ctx.searcher(&cmd.matching);

    println!("Query:");
    println!("   {}", cmd.query);
    println!();

    let Some(plan) = searcher.plan(&cmd.query) else {
        println!("(empty query: matches nothing)");
        return ExitCode::SUCCESS;
    };

    println!("Plan ({}):", plan.kind());
    for line in plan.to_string().lines() {
        println!("   {line}");
    }

    if let QueryPlan::Boolean(query) = &plan
        && !query.diagnostics().is_empty()
    {
        println!();
        println!("Diagnostics:");
        for diagnostic in query.diagnostics() {
            for line in diagnostic.to_string().lines() {
                println!("   {line}");
            }
        }
    }

    ExitCode::SUCCESS
}
