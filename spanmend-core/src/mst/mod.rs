//! Minimum spanning tree (MST) construction.
//!
//! Sequential Kruskal over the full edge list. Edges are sorted by weight
//! with a stable sort, so among equal weights the earlier input edge is
//! considered first and the result is reproducible for a fixed edge order.

use tracing::{debug, instrument};

use crate::{
    graph::{Edge, Graph, sum_weights},
    matching::EdgeMatching,
    union_find::DisjointSet,
};

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree
/// with exactly `vertex_count - 1` edges. A disconnected graph yields fewer
/// edges and more than one component; that is a valid result, not an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    vertex_count: usize,
    component_count: usize,
}

impl SpanningForest {
    /// Returns the forest edges in the order Kruskal accepted them.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of vertices the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of connected components in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the sum of the member edge weights.
    #[must_use]
    pub fn total_weight(&self) -> i128 {
        sum_weights(&self.edges)
    }

    /// Returns the position of the first forest edge matching `edge`.
    #[must_use]
    pub fn position(&self, edge: &Edge, matching: EdgeMatching) -> Option<usize> {
        self.edges
            .iter()
            .position(|candidate| matching.matches(candidate, edge))
    }

    /// Returns `true` when some forest edge matches `edge`.
    #[must_use]
    pub fn contains(&self, edge: &Edge, matching: EdgeMatching) -> bool {
        self.position(edge, matching).is_some()
    }

    /// Returns a copy of the forest with the first edge matching `removed`
    /// dropped and `replacement` appended.
    ///
    /// The component count is recomputed, so a replacement that does not
    /// reconnect the cut leaves the result with one more component. Returns
    /// `None` when no forest edge matches `removed` or `replacement` has an
    /// endpoint outside the forest.
    #[must_use]
    pub fn with_replacement(
        &self,
        removed: &Edge,
        replacement: Edge,
        matching: EdgeMatching,
    ) -> Option<Self> {
        if replacement.source().max(replacement.target()) >= self.vertex_count {
            return None;
        }
        let index = self.position(removed, matching)?;
        let mut edges = self.edges.clone();
        edges.remove(index);
        edges.push(replacement);

        let mut sets = DisjointSet::new(self.vertex_count);
        for edge in &edges {
            sets.union(edge.source(), edge.target());
        }
        Some(Self {
            edges,
            vertex_count: self.vertex_count,
            component_count: sets.component_count(),
        })
    }
}

/// Computes a minimum spanning forest using Kruskal's algorithm.
///
/// Edges are processed in ascending weight order; ties keep their input
/// order. An edge is accepted when its endpoints lie in different
/// components. Self-loops never join two components and are therefore never
/// accepted.
///
/// # Examples
/// ```
/// use spanmend_core::{Edge, Graph, kruskal};
///
/// let graph = Graph::from_edges(
///     4,
///     [
///         Edge::new(0, 1, 1),
///         Edge::new(1, 2, 2),
///         Edge::new(2, 3, 3),
///         Edge::new(0, 2, 6),
///     ],
/// )?;
/// let forest = kruskal(&graph);
/// assert!(forest.is_tree());
/// assert_eq!(forest.total_weight(), 6);
/// # Ok::<(), spanmend_core::GraphError>(())
/// ```
#[instrument(
    name = "kruskal",
    skip(graph),
    fields(vertex_count = graph.vertex_count(), edge_count = graph.edges().len())
)]
#[must_use]
pub fn kruskal(graph: &Graph) -> SpanningForest {
    let vertex_count = graph.vertex_count();
    let target_len = vertex_count.saturating_sub(1);

    let mut sorted: Vec<&Edge> = graph.edges().iter().collect();
    sorted.sort_by_key(|edge| edge.weight());

    let mut sets = DisjointSet::new(vertex_count);
    let mut edges = Vec::with_capacity(target_len);
    for edge in sorted {
        if edges.len() == target_len {
            break;
        }
        if sets.union(edge.source(), edge.target()) {
            debug!(edge = %edge, "accepted tree edge");
            edges.push(*edge);
        }
    }

    let component_count = sets.component_count();
    debug!(
        accepted = edges.len(),
        component_count, "spanning forest complete"
    );
    SpanningForest {
        edges,
        vertex_count,
        component_count,
    }
}


#[cfg(test)]
mod property;
