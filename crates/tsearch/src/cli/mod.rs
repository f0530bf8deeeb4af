//! CLI support for the `tsearch` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod input;
pub mod output;
