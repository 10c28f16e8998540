//! Support library for the `kruskal` binary.
//!
//! Exposes the command pipeline and logging setup so tests can drive the CLI
//! in-process.

pub mod cli;
pub mod logging;
