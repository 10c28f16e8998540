//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use kruskal_core::{CallRejection, EngineError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The generated graph failed engine validation.
    #[error("engine rejected the graph: {0}")]
    Engine(#[from] EngineError),
    /// The engine refused a call.
    #[error("engine refused the call: {0}")]
    Rejected(#[from] CallRejection),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was unexpectedly zero.
        context: &'static str,
    },
}
