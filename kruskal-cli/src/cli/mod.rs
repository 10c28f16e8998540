//! Command-line interface for stepping through Kruskal's algorithm.
//!
//! `run` drives the engine to completion with an optional pause between
//! decisions; `step` performs a fixed number of single steps and reports the
//! paused state. Both load either the built-in example graph or a JSON graph
//! file.

mod commands;
mod render;
mod source;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, FileArgs, GraphSource, RunCommand, StepCommand,
    run_cli,
};
pub use render::{OutputFormat, render_observation, render_start, render_summary};
pub use source::{example_graph, load_graph_file};
