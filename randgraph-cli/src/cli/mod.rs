//! Command-line interface for generating and exploring random graphs.
//!
//! `generate` produces one graph and renders it as text or JSON. `explore`
//! keeps a [`crate::session::Session`] alive and regenerates for every
//! request read from stdin.

mod commands;
mod render;

pub use commands::{
    Cli, CliError, Command, ExploreCommand, ExploreSummary, GenerateCommand, OutputFormat,
    run_cli, run_explore, run_generate,
};
pub use render::{render_json, render_summary};

#[cfg(test)]
mod tests;
