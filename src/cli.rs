//! CLI domain: parse, route, output, and presentation only.
//! No tree logic; the route table dispatches to the tree builder.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_children_json, format_children_text, format_hash, format_show_json, format_show_text,
    ChildSummary, NodeSummary,
};
pub use route::RunContext;
