//! Error types for the Kruskal core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and the non-fatal [`CallRejection`] signal returned
//! for out-of-sequence engine calls.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The vertex was never registered with the set.
    #[error("unknown vertex `{vertex}`")]
    UnknownVertex {
        /// Display form of the unregistered vertex.
        vertex: String,
    },
    /// The same vertex was registered twice.
    #[error("vertex `{vertex}` is registered more than once")]
    DuplicateVertex {
        /// Display form of the repeated vertex.
        vertex: String,
    },
}

impl DisjointSetError {
    /// Consumes the error, returning the display form of the vertex involved.
    pub(crate) fn into_vertex(self) -> String {
        match self {
            Self::UnknownVertex { vertex } | Self::DuplicateVertex { vertex } => vertex,
        }
    }
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The vertex was never registered with the set.
        UnknownVertex => UnknownVertex { .. } => "DISJOINT_SET_UNKNOWN_VERTEX",
        /// The same vertex was registered twice.
        DuplicateVertex => DuplicateVertex { .. } => "DISJOINT_SET_DUPLICATE_VERTEX",
    }
}

/// Error produced when a graph is supplied to a [`crate::KruskalEngine`].
///
/// Validation happens before any engine state is rebuilt, so an engine that
/// rejects a replacement graph keeps its previous state.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EngineError {
    /// The graph has no vertices.
    #[error("cannot compute an MST for a graph without vertices")]
    EmptyGraph,
    /// A vertex appears more than once in the vertex set.
    #[error("vertex `{vertex}` appears more than once in the vertex set")]
    DuplicateVertex {
        /// Display form of the repeated vertex.
        vertex: String,
    },
    /// An edge references a vertex that is not part of the vertex set.
    #[error("edge {edge_index} references unknown vertex `{vertex}`")]
    UnknownVertex {
        /// Display form of the missing vertex.
        vertex: String,
        /// Position of the offending edge in the supplied edge list.
        edge_index: usize,
    },
    /// An edge carries a NaN or infinite weight.
    #[error("edge {edge_index} ({from}-{to}) has non-finite weight {weight}")]
    NonFiniteWeight {
        /// Position of the offending edge in the supplied edge list.
        edge_index: usize,
        /// Display form of the first endpoint.
        from: String,
        /// Display form of the second endpoint.
        to: String,
        /// The rejected weight.
        weight: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`EngineError`] variants.
    enum EngineErrorCode for EngineError {
        /// The graph has no vertices.
        EmptyGraph => EmptyGraph => "ENGINE_EMPTY_GRAPH",
        /// A vertex appears more than once in the vertex set.
        DuplicateVertex => DuplicateVertex { .. } => "ENGINE_DUPLICATE_VERTEX",
        /// An edge references a vertex that is not part of the vertex set.
        UnknownVertex => UnknownVertex { .. } => "ENGINE_UNKNOWN_VERTEX",
        /// An edge carries a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "ENGINE_NON_FINITE_WEIGHT",
    }
}

/// Signal returned when an engine operation is called out of sequence.
///
/// Rejections never mutate the engine. They are reported to the caller
/// instead of panicking or interleaving decisions.
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
#[non_exhaustive]
pub enum CallRejection {
    /// The engine already reached [`crate::EngineStatus::Complete`].
    #[error("the engine has already completed; reset it to start over")]
    AlreadyComplete,
    /// A run started by [`crate::KruskalEngine::begin_run`] has not finished.
    #[error("a run is already in progress on this engine")]
    RunInProgress,
}

impl CallRejection {
    /// Return the stable machine-readable representation of this rejection.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::CallRejection;
    ///
    /// assert_eq!(CallRejection::RunInProgress.as_str(), "RUN_IN_PROGRESS");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlreadyComplete => "ALREADY_COMPLETE",
            Self::RunInProgress => "RUN_IN_PROGRESS",
        }
    }
}

/// Convenient alias for results returned by engine construction.
pub type Result<T> = core::result::Result<T, EngineError>;
