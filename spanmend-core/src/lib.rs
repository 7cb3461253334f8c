//! Spanmend core library.
//!
//! Builds a minimum spanning tree with Kruskal's algorithm, simulates the
//! removal of a single tree edge, and finds the cheapest edge that reconnects
//! the two resulting components.
//!
//! # Edge identity
//!
//! Whether a graph edge "is already in the tree" is decided by
//! [`EdgeMatching`]. The default, [`EdgeMatching::Exact`], compares the
//! `(source, target, weight)` triple including direction, so a graph that
//! stores both `(a, b, w)` and `(b, a, w)` treats the reversed twin of a tree
//! edge as an ordinary candidate. [`EdgeMatching::Undirected`] compares the
//! canonical `(min, max, weight)` form instead.
//!
//! # Example
//! ```
//! use spanmend_core::{Edge, Graph, ReplacementPlanner};
//!
//! let graph = Graph::from_edges(
//!     3,
//!     [Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(0, 2, 5)],
//! )?;
//! let planner = ReplacementPlanner::default();
//! let tree = planner.spanning_tree(&graph);
//! assert_eq!(tree.total_weight(), 3);
//!
//! let outcome = planner.plan_removal(&graph, &tree, &Edge::new(1, 2, 2))?;
//! assert_eq!(outcome.replacement(), Some(&Edge::new(1, 2, 2)));
//! # Ok::<(), spanmend_core::ReplacementError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod graph;
mod matching;
mod mst;
mod partition;
mod planner;
mod replacement;
pub mod union_find;

#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{GraphError, GraphErrorCode, ReplacementError, ReplacementErrorCode, Result},
    graph::{Edge, Graph, VertexId, Weight},
    matching::{CandidatePolicy, EdgeMatching},
    mst::{SpanningForest, kruskal},
    partition::{ComponentMap, Partition, Side, find_components, partition},
    planner::{PlannerBuilder, RemovalOutcome, ReplacementPlanner, SweepStrategy},
    replacement::find_replacement,
    union_find::DisjointSet,
};
