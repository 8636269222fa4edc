//! CLI domain: parse, route, presentation, and output only.
//! No domain orchestration; a single route table dispatches to the builder.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_dry_run, format_run_summary};
pub use route::RunContext;
