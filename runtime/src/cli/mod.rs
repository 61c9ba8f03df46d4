//! CLI subcommand implementations for the `docsum` binary.

pub mod output;
pub mod render_cmd;
pub mod serve_cmd;
pub mod summarize_cmd;
