//! Benchmark parameter types.

use std::fmt;

/// Parameters for an engine benchmark run, used as the Criterion id.
#[derive(Clone, Debug)]
pub struct EngineBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of edges in the graph.
    pub edge_count: usize,
}

impl fmt::Display for EngineBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V={},E={}", self.vertex_count, self.edge_count)
    }
}
