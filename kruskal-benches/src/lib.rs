//! Benchmark support crate for the Kruskal engine.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks that compare stepping against running.

pub mod error;
pub mod graph;
pub mod params;
