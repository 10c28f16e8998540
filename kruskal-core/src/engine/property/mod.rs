//! Property-based tests for the steppable Kruskal engine.
//!
//! Checks the engine against an independent sequential oracle, verifies the
//! structural invariants of every observation, and confirms that stepping
//! and running make the same decisions across graph topologies with varied
//! weight distributions.

mod equivalence;
mod step_run;
mod strategies;
mod structural;
mod types;
