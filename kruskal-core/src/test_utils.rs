//! Shared test utilities for `kruskal-core`.

use kruskal_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::graph::{Edge, Graph};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `KRUSKAL_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// The seven-vertex demonstration graph (S through Y, ten edges).
///
/// Its MST weighs 20 and the run stops before evaluating `W-X`, `V-W` and
/// `S-X`.
#[must_use]
pub(crate) fn demo_graph() -> Graph<&'static str> {
    Graph::new(
        vec!["S", "T", "U", "V", "W", "X", "Y"],
        vec![
            Edge::new("S", "T", 3.0),
            Edge::new("S", "Y", 5.0),
            Edge::new("T", "U", 6.0),
            Edge::new("T", "Y", 4.0),
            Edge::new("U", "V", 2.0),
            Edge::new("V", "W", 8.0),
            Edge::new("W", "X", 7.0),
            Edge::new("X", "Y", 1.0),
            Edge::new("S", "X", 9.0),
            Edge::new("U", "W", 4.0),
        ],
    )
}

/// Builds a graph over integer vertices `0..vertex_count`.
#[must_use]
pub(crate) fn numbered_graph(vertex_count: usize, edges: &[(usize, usize, f64)]) -> Graph<usize> {
    Graph::new(
        (0..vertex_count).collect(),
        edges
            .iter()
            .map(|&(from, to, weight)| Edge::new(from, to, weight))
            .collect(),
    )
}
