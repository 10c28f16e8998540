//! Property 1: agreement with the sequential oracle.
//!
//! Running the engine to completion must accept exactly the edges the
//! oracle accepts, in the same order, with the same total weight and the
//! same number of components left.

use proptest::test_runner::TestCaseResult;

use crate::engine::KruskalEngine;

use super::oracle::sequential_kruskal;
use super::types::KruskalFixture;

pub(super) fn run_oracle_equivalence_property(fixture: &KruskalFixture) -> TestCaseResult {
    let mut engine = match KruskalEngine::new(fixture.graph()) {
        Ok(engine) => engine,
        Err(err) => return Err(fixture.failure(format!("engine rejected graph: {err}"))),
    };

    let mut accepted = Vec::new();
    let result = engine.run_to_completion(|observation| {
        if observation.is_accepted() {
            accepted.push(observation.input_index());
        }
    });
    let summary = match result {
        Ok(summary) => summary,
        Err(rejection) => return Err(fixture.failure(format!("run rejected: {rejection}"))),
    };

    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);

    if accepted != oracle.accepted {
        return Err(fixture.failure(format!(
            "accepted edges differ: engine={accepted:?}, oracle={:?}",
            oracle.accepted,
        )));
    }

    // Same edges summed in the same order, so the totals match exactly.
    if summary.total_weight().to_bits() != oracle.total_weight.to_bits() {
        return Err(fixture.failure(format!(
            "total weight mismatch: engine={}, oracle={}",
            summary.total_weight(),
            oracle.total_weight,
        )));
    }

    if summary.component_count() != oracle.component_count {
        return Err(fixture.failure(format!(
            "component count mismatch: engine={}, oracle={}",
            summary.component_count(),
            oracle.component_count,
        )));
    }

    Ok(())
}
