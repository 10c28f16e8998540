//! Property 3: stepping and running make identical decisions.
//!
//! Three drivers walk the same fixture: one steps to completion, one runs to
//! completion, and one steps partway, resets mid-run and then runs from
//! scratch. Every driver must see the same decision sequence and end in the
//! same state. Observation status is excluded because it names the driver.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    disjoint_set::ComponentPartition,
    engine::{Decision, EngineStatus, KruskalEngine, Observation, RunProgress, StepOutcome},
    error::CallRejection,
    graph::Edge,
};

use super::types::KruskalFixture;

/// Frontier position, input index, decision, tree, weight and partition.
type TraceEntry = (
    usize,
    usize,
    Decision,
    Vec<Edge<usize>>,
    f64,
    ComponentPartition<usize>,
);
type Trace = Vec<TraceEntry>;

pub(super) fn run_step_run_equivalence_property(fixture: &KruskalFixture) -> TestCaseResult {
    let stepped = drive_by_steps(fixture)?;
    let ran = drive_by_run(fixture)?;
    let resumed = drive_with_reset(fixture)?;

    for (label, other) in [("run", &ran), ("reset-then-run", &resumed)] {
        if stepped.len() != other.len() {
            return Err(fixture.failure(format!(
                "{label} made {} decisions, stepping made {}",
                other.len(),
                stepped.len(),
            )));
        }
        if let Some(position) = stepped.iter().zip(other).position(|(a, b)| a != b) {
            return Err(fixture.failure(format!(
                "{label} diverged from stepping at decision {position}"
            )));
        }
    }
    Ok(())
}

fn trace_entry(observation: &Observation<usize>) -> TraceEntry {
    (
        observation.frontier_position(),
        observation.input_index(),
        observation.decision(),
        observation.mst_edges().to_vec(),
        observation.total_weight(),
        observation.components().clone(),
    )
}

fn new_engine(fixture: &KruskalFixture) -> Result<KruskalEngine<usize>, TestCaseError> {
    KruskalEngine::new(fixture.graph())
        .map_err(|err| fixture.failure(format!("graph rejected: {err}")))
}

fn ensure_complete(engine: &KruskalEngine<usize>, fixture: &KruskalFixture) -> TestCaseResult {
    let status = engine.status();
    if status != EngineStatus::Complete {
        let message = format!("engine ended in {status} instead of complete");
        return Err(fixture.failure(message));
    }
    Ok(())
}

fn drive_by_steps(fixture: &KruskalFixture) -> Result<Trace, TestCaseError> {
    let mut engine = new_engine(fixture)?;
    let mut trace = Trace::new();
    loop {
        match engine.step_once() {
            StepOutcome::Decided(observation) => trace.push(trace_entry(&observation)),
            StepOutcome::Rejected(CallRejection::AlreadyComplete) => break,
            StepOutcome::Rejected(other) => {
                let message = format!("unexpected step rejection {other}");
                return Err(fixture.failure(message));
            }
        }
    }
    ensure_complete(&engine, fixture)?;
    Ok(trace)
}

fn drive_by_run(fixture: &KruskalFixture) -> Result<Trace, TestCaseError> {
    let mut engine = new_engine(fixture)?;
    let mut trace = Trace::new();
    let result = engine.run_to_completion(|observation| trace.push(trace_entry(observation)));
    if let Err(rejection) = result {
        return Err(fixture.failure(format!("run rejected: {rejection}")));
    }
    ensure_complete(&engine, fixture)?;
    Ok(trace)
}

/// Steps a third of the way, runs another third, resets, then runs a fresh
/// pass whose decisions are the only ones reported.
fn drive_with_reset(fixture: &KruskalFixture) -> Result<Trace, TestCaseError> {
    let mut engine = new_engine(fixture)?;
    let third = fixture.edges.len() / 3;

    for _ in 0..third {
        let _ = engine.step_once();
    }
    if let Ok(run) = engine.begin_run() {
        for _ in 0..third {
            if !matches!(run.advance(&mut engine), RunProgress::Decided(_)) {
                break;
            }
        }
        engine.reset();
        if run.advance(&mut engine) != RunProgress::Cancelled {
            return Err(fixture.failure("stale handle kept running after reset"));
        }
    } else {
        engine.reset();
    }

    let mut trace = Trace::new();
    let result = engine.run_to_completion(|observation| trace.push(trace_entry(observation)));
    if let Err(rejection) = result {
        let message = format!("run after reset rejected: {rejection}");
        return Err(fixture.failure(message));
    }
    ensure_complete(&engine, fixture)?;
    Ok(trace)
}
