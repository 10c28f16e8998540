//! Graph inputs accepted by the CLI.
//!
//! `example` loads the built-in seven-vertex demonstration graph; `file`
//! reads a JSON document of the form
//!
//! ```json
//! {
//!   "vertices": ["A", "B", "C"],
//!   "edges": [{ "from": "A", "to": "B", "weight": 1.5 }]
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use kruskal_core::{Edge, Graph, GraphBuilder};
use serde::Deserialize;
use tracing::{Span, field, instrument};

use super::CliError;

/// Vertices and weighted edges of the demonstration graph.
const EXAMPLE_VERTICES: [&str; 7] = ["S", "T", "U", "V", "W", "X", "Y"];
const EXAMPLE_EDGES: [(&str, &str, f64); 10] = [
    ("S", "T", 3.0),
    ("S", "Y", 5.0),
    ("T", "U", 6.0),
    ("T", "Y", 4.0),
    ("U", "V", 2.0),
    ("V", "W", 8.0),
    ("W", "X", 7.0),
    ("X", "Y", 1.0),
    ("S", "X", 9.0),
    ("U", "W", 4.0),
];

/// On-disk graph document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct GraphDocument {
    vertices: Vec<String>,
    #[serde(default)]
    edges: Vec<EdgeDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeDocument {
    from: String,
    to: String,
    weight: f64,
}

impl GraphDocument {
    /// Converts the document into a validated graph, keeping edge order.
    pub(super) fn into_graph(self) -> Result<Graph<String>, CliError> {
        let Self { vertices, edges } = self;
        let edges = edges
            .into_iter()
            .map(|edge| Edge::new(edge.from, edge.to, edge.weight));
        let graph = GraphBuilder::new()
            .with_vertices(vertices)
            .with_edges(edges)
            .build()?;
        Ok(graph)
    }
}

/// Returns the seven-vertex demonstration graph (S through Y).
///
/// # Errors
/// Returns [`CliError::Graph`] if the built-in table fails validation.
pub fn example_graph() -> Result<Graph<String>, CliError> {
    let edges = EXAMPLE_EDGES.iter().map(example_edge);
    let graph = GraphBuilder::new()
        .with_vertices(EXAMPLE_VERTICES.map(str::to_owned))
        .with_edges(edges)
        .build()?;
    Ok(graph)
}

fn example_edge(&(from, to, weight): &(&str, &str, f64)) -> Edge<String> {
    Edge::new(from.to_owned(), to.to_owned(), weight)
}

/// Loads and validates a JSON graph document from `path`.
///
/// # Errors
/// Returns [`CliError::Io`] when the file cannot be opened,
/// [`CliError::Parse`] when it is not a graph document and
/// [`CliError::Graph`] when the graph fails validation.
#[instrument(
    name = "cli.load_graph_file",
    err,
    skip(path),
    fields(path = %path.display(), vertices = field::Empty, edges = field::Empty),
)]
pub fn load_graph_file(path: &Path) -> Result<Graph<String>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: serde_json::Result<GraphDocument> = serde_json::from_reader(BufReader::new(file));
    let document = parsed.map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = document.into_graph()?;

    let span = Span::current();
    span.record("vertices", graph.vertex_count());
    span.record("edges", graph.edges().len());
    Ok(graph)
}
