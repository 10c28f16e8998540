//! Property 2: structural invariants of every observation.
//!
//! For each decision of a run, verifies that:
//!
//! - evaluated weights never decrease;
//! - the reported edge is the input edge at the reported index;
//! - the tree never exceeds `|V| - 1` edges and always has `|V| - c` edges
//!   for `c` components;
//! - the reported partition matches reachability over the accepted edges.
//!
//! At the end, the accepted edges must be acyclic and the outcome must match
//! the connectivity of the input graph.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    engine::{KruskalEngine, Observation, RunOutcome},
    graph::Edge,
};

use super::oracle::find_root;
use super::types::KruskalFixture;

pub(super) fn run_structural_invariants_property(fixture: &KruskalFixture) -> TestCaseResult {
    let mut engine = match KruskalEngine::new(fixture.graph()) {
        Ok(engine) => engine,
        Err(err) => return Err(fixture.failure(format!("graph rejected: {err}"))),
    };

    let mut observations = Vec::new();
    let result = engine.run_to_completion(|observation| observations.push(observation.clone()));
    let summary = match result {
        Ok(summary) => summary,
        Err(rejection) => return Err(fixture.failure(format!("run rejected: {rejection}"))),
    };

    let mut previous_weight = f64::NEG_INFINITY;
    for (step, observation) in observations.iter().enumerate() {
        let weight = observation.edge().weight();
        if weight < previous_weight {
            let message = format!("weight {weight} evaluated after {previous_weight}");
            return Err(fail(fixture, step, &message));
        }
        previous_weight = weight;

        validate_input_edge(fixture, step, observation)?;
        validate_edge_count(fixture, step, observation)?;
        validate_partition(fixture, step, observation)?;
    }

    validate_acyclicity(fixture, summary.mst_edges())?;

    let expected = match count_input_components(fixture) {
        1 => RunOutcome::SpanningTree,
        components => RunOutcome::SpanningForest { components },
    };
    let outcome = summary.outcome();
    if outcome != expected {
        let message = format!("outcome {outcome:?}, expected {expected:?}");
        return Err(fixture.failure(message));
    }
    Ok(())
}

fn fail(fixture: &KruskalFixture, step: usize, message: &str) -> TestCaseError {
    fixture.failure(format!("decision {step}: {message}"))
}

fn validate_input_edge(
    fixture: &KruskalFixture,
    step: usize,
    observation: &Observation<usize>,
) -> TestCaseResult {
    match fixture.edges.get(observation.input_index()) {
        Some(edge) if edge == observation.edge() => Ok(()),
        other => {
            let message = format!(
                "reported {} at input index {}, input holds {other:?}",
                observation.edge(),
                observation.input_index(),
            );
            Err(fail(fixture, step, &message))
        }
    }
}

fn validate_edge_count(
    fixture: &KruskalFixture,
    step: usize,
    observation: &Observation<usize>,
) -> TestCaseResult {
    let edges = observation.mst_edges().len();
    let target = fixture.vertex_count - 1;
    let reported = observation.target_edge_count();
    if reported != target || edges > target {
        let message = format!("{edges} accepted edges with target {reported} (expected {target})");
        return Err(fail(fixture, step, &message));
    }
    let components = observation.components().component_count();
    if edges != fixture.vertex_count - components {
        let message = format!("{edges} accepted edges but {components} components");
        return Err(fail(fixture, step, &message));
    }
    Ok(())
}

/// Two vertices share a root exactly when the accepted edges connect them.
fn validate_partition(
    fixture: &KruskalFixture,
    step: usize,
    observation: &Observation<usize>,
) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    for edge in observation.mst_edges() {
        let a = find_root(&mut parent, *edge.from());
        let b = find_root(&mut parent, *edge.to());
        parent[b] = a;
    }

    // Vertices are registered as 0..n, so assignments are indexed by vertex.
    let roots: Vec<usize> = observation
        .components()
        .assignments()
        .iter()
        .map(|&(_, root)| root)
        .collect();
    if roots.len() != fixture.vertex_count {
        let message = format!(
            "partition covers {} of {} vertices",
            roots.len(),
            fixture.vertex_count,
        );
        return Err(fail(fixture, step, &message));
    }
    for a in 0..fixture.vertex_count {
        for b in (a + 1)..fixture.vertex_count {
            let reachable = find_root(&mut parent, a) == find_root(&mut parent, b);
            let same_root = roots[a] == roots[b];
            if reachable != same_root {
                let message =
                    format!("vertices {a} and {b}: reachable={reachable}, same root={same_root}");
                return Err(fail(fixture, step, &message));
            }
        }
    }
    Ok(())
}

fn validate_acyclicity(fixture: &KruskalFixture, edges: &[Edge<usize>]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    for (i, edge) in edges.iter().enumerate() {
        let a = find_root(&mut parent, *edge.from());
        let b = find_root(&mut parent, *edge.to());
        if a == b {
            let message = format!("accepted edge {i} ({edge}) closes a cycle");
            return Err(fixture.failure(message));
        }
        parent[b] = a;
    }
    Ok(())
}

fn count_input_components(fixture: &KruskalFixture) -> usize {
    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    let mut components = fixture.vertex_count;
    for edge in &fixture.edges {
        let a = find_root(&mut parent, *edge.from());
        let b = find_root(&mut parent, *edge.to());
        if a != b {
            parent[b] = a;
            components -= 1;
        }
    }
    components
}
