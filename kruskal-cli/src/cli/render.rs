//! Human and JSON renderings of engine progress.
//!
//! Human output follows the status line of a visualiser: each decision
//! prints the edge under consideration followed by its outcome, and the
//! summary reports the total tree weight. JSON output writes one object per
//! line, tagged by `event`.

use std::io::{self, Write};

use clap::ValueEnum;
use kruskal_core::{ComponentPartition, Decision, Edge, Observation, RunOutcome};
use serde::Serialize;

use super::ExecutionSummary;

/// Output format for decisions and summaries.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Status lines for people.
    #[default]
    Human,
    /// One JSON object per line.
    Json,
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Record<'a> {
    Start {
        source: &'a str,
        vertices: usize,
        edges: usize,
        target: usize,
    },
    Decision {
        position: usize,
        input_index: usize,
        from: &'a str,
        to: &'a str,
        weight: f64,
        decision: &'static str,
        accepted: usize,
        target: usize,
        total_weight: f64,
        status: &'static str,
        components: Vec<Vec<&'a str>>,
    },
    Summary {
        source: &'a str,
        status: &'static str,
        outcome: &'static str,
        decisions: usize,
        accepted: usize,
        target: usize,
        total_weight: f64,
        tree: Vec<TreeEdge<'a>>,
        components: Vec<Vec<&'a str>>,
    },
}

#[derive(Serialize)]
struct TreeEdge<'a> {
    from: &'a str,
    to: &'a str,
    weight: f64,
}

impl<'a> From<&'a Edge<String>> for TreeEdge<'a> {
    fn from(edge: &'a Edge<String>) -> Self {
        Self {
            from: edge.from(),
            to: edge.to(),
            weight: edge.weight(),
        }
    }
}

fn write_record(record: &Record<'_>, mut writer: impl Write) -> io::Result<()> {
    serde_json::to_writer(&mut writer, record)?;
    writeln!(writer)
}

fn groups(partition: &ComponentPartition<String>) -> Vec<Vec<&str>> {
    partition
        .components()
        .into_iter()
        .map(|group| group.into_iter().map(String::as_str).collect())
        .collect()
}

fn outcome_label(outcome: RunOutcome) -> &'static str {
    match outcome {
        RunOutcome::SpanningTree => "spanning_tree",
        RunOutcome::SpanningForest { .. } => "spanning_forest",
        RunOutcome::InProgress => "in_progress",
    }
}

/// Writes the banner printed before the first decision.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
pub fn render_start(
    source: &str,
    vertices: usize,
    edges: usize,
    target: usize,
    format: OutputFormat,
    mut writer: impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Human => writeln!(
            writer,
            "starting Kruskal on {source}: {vertices} vertices, {edges} edges, \
             {target} tree edges needed"
        ),
        OutputFormat::Json => write_record(
            &Record::Start {
                source,
                vertices,
                edges,
                target,
            },
            writer,
        ),
    }
}

/// Writes one decision.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{OutputFormat, example_graph, render_observation};
/// # use kruskal_core::KruskalEngine;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut engine = KruskalEngine::new(example_graph()?)?;
/// let observation = engine.step_once().observation().ok_or("no decision")?;
/// let mut buffer = Vec::new();
/// render_observation(&observation, OutputFormat::Human, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "considering edge X-Y with weight 1\n  edge X-Y added to the MST (1/6)\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_observation(
    observation: &Observation<String>,
    format: OutputFormat,
    mut writer: impl Write,
) -> io::Result<()> {
    let edge = observation.edge();
    match format {
        OutputFormat::Human => {
            writeln!(
                writer,
                "considering edge {}-{} with weight {}",
                edge.from(),
                edge.to(),
                edge.weight()
            )?;
            match observation.decision() {
                Decision::Accepted => writeln!(
                    writer,
                    "  edge {}-{} added to the MST ({}/{})",
                    edge.from(),
                    edge.to(),
                    observation.mst_edges().len(),
                    observation.target_edge_count()
                ),
                Decision::Rejected => writeln!(
                    writer,
                    "  edge {}-{} rejected (would create a cycle)",
                    edge.from(),
                    edge.to()
                ),
            }
        }
        OutputFormat::Json => write_record(
            &Record::Decision {
                position: observation.frontier_position(),
                input_index: observation.input_index(),
                from: edge.from(),
                to: edge.to(),
                weight: edge.weight(),
                decision: observation.decision().as_str(),
                accepted: observation.mst_edges().len(),
                target: observation.target_edge_count(),
                total_weight: observation.total_weight(),
                status: observation.status().as_str(),
                components: groups(observation.components()),
            },
            writer,
        ),
    }
}

/// Writes the final summary in the summary's own format.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let result = &summary.result;
    match summary.format {
        OutputFormat::Human => {
            match result.outcome() {
                RunOutcome::SpanningTree => writeln!(
                    writer,
                    "complete; total MST weight: {}",
                    result.total_weight()
                )?,
                RunOutcome::SpanningForest { components } => writeln!(
                    writer,
                    "complete; spanning forest of {components} trees; total weight: {}",
                    result.total_weight()
                )?,
                RunOutcome::InProgress => writeln!(
                    writer,
                    "{} after {} decisions ({}/{} edges); total weight so far: {}",
                    summary.status,
                    result.decisions(),
                    result.mst_edges().len(),
                    summary.target_edge_count,
                    result.total_weight()
                )?,
            }
            let tree: Vec<String> = result.mst_edges().iter().map(ToString::to_string).collect();
            writeln!(writer, "tree: {}", tree.join(", "))?;
            let components: Vec<String> = groups(&summary.components)
                .into_iter()
                .map(|group| format!("{{{}}}", group.join(", ")))
                .collect();
            writeln!(writer, "components: {}", components.join(" "))
        }
        OutputFormat::Json => write_record(
            &Record::Summary {
                source: &summary.source,
                status: summary.status.as_str(),
                outcome: outcome_label(result.outcome()),
                decisions: result.decisions(),
                accepted: result.mst_edges().len(),
                target: summary.target_edge_count,
                total_weight: result.total_weight(),
                tree: result.mst_edges().iter().map(TreeEdge::from).collect(),
                components: groups(&summary.components),
            },
            writer,
        ),
    }
}
