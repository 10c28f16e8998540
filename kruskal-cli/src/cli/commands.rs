//! Command implementations and argument parsing for the `kruskal` binary.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use kruskal_core::{
    CallRejection, ComponentPartition, EngineError, EngineStatus, Graph, KruskalEngine,
    RunProgress, RunSummary, StepOutcome,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::render::{OutputFormat, render_observation, render_start};
use super::source::{example_graph, load_graph_file};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kruskal",
    about = "Step through Kruskal's minimum spanning tree algorithm."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run the algorithm to completion, printing every decision.
    Run(RunCommand),
    /// Make a fixed number of single-step decisions and report the paused state.
    Step(StepCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Pause after each decision, in milliseconds.
    #[arg(long = "delay-ms", default_value_t = 0)]
    pub delay_ms: u64,

    /// Output format for decisions and the summary.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub source: GraphSource,
}

/// Options accepted by the `step` command.
#[derive(Debug, Args, Clone)]
pub struct StepCommand {
    /// Number of single steps to take.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(usize))]
    pub steps: usize,

    /// Output format for decisions and the summary.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub source: GraphSource,
}

/// Where the graph comes from.
#[derive(Debug, Subcommand, Clone)]
pub enum GraphSource {
    /// The built-in seven-vertex demonstration graph.
    Example,
    /// A JSON graph document.
    File(FileArgs),
}

/// Arguments for [`GraphSource::File`].
#[derive(Debug, Args, Clone)]
pub struct FileArgs {
    /// Path to a JSON file with `vertices` and `edges`.
    pub path: PathBuf,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The graph file is not a valid graph document.
    #[error("failed to parse `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The engine rejected the graph.
    #[error(transparent)]
    Graph(#[from] EngineError),
    /// The engine refused a call.
    #[error(transparent)]
    Rejected(#[from] CallRejection),
    /// Writing progress to the output stream failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Returns the stable code of the underlying engine error, if any.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Graph(err) => Some(err.code().as_str()),
            Self::Rejected(rejection) => Some(rejection.as_str()),
            Self::Io { .. } | Self::Parse { .. } | Self::Output(_) => None,
        }
    }
}

/// State of the engine when a command finished.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the graph source (`example` or the file stem).
    pub source: String,
    pub format: OutputFormat,
    pub status: EngineStatus,
    pub target_edge_count: usize,
    pub result: RunSummary<String>,
    pub components: ComponentPartition<String>,
}

impl ExecutionSummary {
    fn capture(source: String, format: OutputFormat, engine: &mut KruskalEngine<String>) -> Self {
        Self {
            source,
            format,
            status: engine.status(),
            target_edge_count: engine.target_edge_count(),
            result: engine.summary(),
            components: engine.current_components(),
        }
    }
}

/// Executes the command represented by `cli`, streaming every decision to
/// `out`.
///
/// # Errors
/// Returns [`CliError`] when the graph cannot be loaded or output fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{Cli, Command, GraphSource, OutputFormat, RunCommand, run_cli};
/// # use kruskal_core::RunOutcome;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         delay_ms: 0,
///         format: OutputFormat::Human,
///         source: GraphSource::Example,
///     }),
/// };
/// let mut out = Vec::new();
/// let summary = run_cli(cli, &mut out)?;
/// assert_eq!(summary.result.outcome(), RunOutcome::SpanningTree);
/// assert_eq!(summary.result.total_weight(), 20.0);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli, out), fields(command = field::Empty))]
pub fn run_cli(cli: Cli, out: &mut impl Write) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", "run");
            run_command(run, out)
        }
        Command::Step(step) => {
            Span::current().record("command", "step");
            step_command(step, out)
        }
    }
}

#[instrument(
    name = "cli.execute_run",
    err,
    skip(command, out),
    fields(delay_ms = command.delay_ms, source = field::Empty),
)]
pub(super) fn run_command(
    command: RunCommand,
    out: &mut impl Write,
) -> Result<ExecutionSummary, CliError> {
    let (name, mut engine) = prepare(&command.source, command.format, out)?;
    let delay = Duration::from_millis(command.delay_ms);

    let run = engine.begin_run()?;
    while let RunProgress::Decided(observation) = run.advance(&mut engine) {
        render_observation(&observation, command.format, &mut *out)?;
        if !delay.is_zero() {
            out.flush()?;
            thread::sleep(delay);
        }
    }

    let summary = ExecutionSummary::capture(name, command.format, &mut engine);
    info!(
        source = summary.source.as_str(),
        total_weight = summary.result.total_weight(),
        decisions = summary.result.decisions(),
        "run command completed"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.execute_step",
    err,
    skip(command, out),
    fields(steps = command.steps, source = field::Empty),
)]
pub(super) fn step_command(
    command: StepCommand,
    out: &mut impl Write,
) -> Result<ExecutionSummary, CliError> {
    let (name, mut engine) = prepare(&command.source, command.format, out)?;

    let mut taken = 0;
    while taken < command.steps {
        match engine.step_once() {
            StepOutcome::Decided(observation) => {
                render_observation(&observation, command.format, &mut *out)?;
                taken += 1;
            }
            StepOutcome::Rejected(CallRejection::AlreadyComplete) => break,
            StepOutcome::Rejected(rejection) => return Err(rejection.into()),
        }
    }

    let summary = ExecutionSummary::capture(name, command.format, &mut engine);
    info!(
        source = summary.source.as_str(),
        requested = command.steps,
        taken,
        status = %summary.status,
        "step command completed"
    );
    Ok(summary)
}

/// Loads the graph, builds the engine and prints the start banner.
fn prepare(
    source: &GraphSource,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(String, KruskalEngine<String>), CliError> {
    let (name, graph) = load_source(source)?;
    Span::current().record("source", name.as_str());
    let engine = KruskalEngine::new(graph)?;
    render_start(
        &name,
        engine.vertex_count(),
        engine.frontier().len(),
        engine.target_edge_count(),
        format,
        &mut *out,
    )?;
    Ok((name, engine))
}

fn load_source(source: &GraphSource) -> Result<(String, Graph<String>), CliError> {
    match source {
        GraphSource::Example => Ok(("example".to_owned(), example_graph()?)),
        GraphSource::File(args) => Ok((source_name(&args.path), load_graph_file(&args.path)?)),
    }
}

pub(super) fn source_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}
