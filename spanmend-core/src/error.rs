//! Error types for the spanmend core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::graph::{Edge, VertexId};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
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
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while constructing a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A graph must contain at least one vertex.
    #[error("a graph must contain at least one vertex")]
    EmptyGraph,
    /// An edge referenced a vertex outside `[0, vertex_count)`.
    #[error("edge {edge} references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertex {
        /// The offending edge.
        edge: Edge,
        /// The out-of-range vertex id.
        vertex: VertexId,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A graph must contain at least one vertex.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// An edge referenced a vertex outside the graph.
        InvalidVertex => InvalidVertex { .. } => "GRAPH_INVALID_VERTEX",
    }
}

/// Error type produced while partitioning a tree or planning a replacement.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ReplacementError {
    /// The edge chosen for removal is not an edge of the spanning tree.
    #[error("edge {edge} is not part of the spanning tree")]
    EdgeNotInTree {
        /// The edge the caller asked to remove.
        edge: Edge,
    },
    /// Removing the edge did not split the tree into exactly two components.
    #[error("removing {removed} produced {component_count} components; expected exactly 2")]
    InvalidPartition {
        /// The edge that was removed.
        removed: Edge,
        /// The number of components observed after the removal.
        component_count: usize,
    },
    /// A removal was requested by tree position, but the position is past the end.
    #[error("tree edge index {index} is out of range for a tree with {edge_count} edges")]
    EdgeIndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The number of edges in the tree.
        edge_count: usize,
    },
    /// The parallel sweep was requested but the `parallel` feature is disabled.
    #[error("parallel sweep requested but the `parallel` feature is not enabled")]
    ParallelUnavailable,
    /// Graph construction failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`ReplacementError`] variants.
    enum ReplacementErrorCode for ReplacementError {
        /// The edge chosen for removal is not an edge of the spanning tree.
        EdgeNotInTree => EdgeNotInTree { .. } => "REPLACEMENT_EDGE_NOT_IN_TREE",
        /// Removing the edge did not yield exactly two components.
        InvalidPartition => InvalidPartition { .. } => "REPLACEMENT_INVALID_PARTITION",
        /// The requested tree position is past the end of the tree.
        EdgeIndexOutOfRange => EdgeIndexOutOfRange { .. } => "REPLACEMENT_EDGE_INDEX_OUT_OF_RANGE",
        /// The parallel sweep is not compiled in.
        ParallelUnavailable => ParallelUnavailable => "REPLACEMENT_PARALLEL_UNAVAILABLE",
        /// Graph construction failed.
        Graph => Graph(..) => "REPLACEMENT_GRAPH",
    }
}

impl ReplacementError {
    /// Returns the wrapped [`GraphErrorCode`] when the failure originated in
    /// graph construction.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(inner) => Some(inner.code()),
            _ => None,
        }
    }
}

/// Convenient result alias for replacement planning.
pub type Result<T, E = ReplacementError> = std::result::Result<T, E>;
