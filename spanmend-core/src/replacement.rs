//! Replacement-edge search across a two-way cut.

use tracing::debug;

use crate::{
    graph::{Edge, Graph},
    matching::{CandidatePolicy, EdgeMatching, EdgeSet},
    partition::Partition,
};

/// Finds the cheapest graph edge that reconnects the two sides of `split`.
///
/// Graph edges are scanned in input order. An edge is skipped when it is
/// still an active tree edge, meaning it matches a tree edge without matching
/// `removed`. Under [`CandidatePolicy::ExcludeRemoved`] edges matching
/// `removed` are skipped as well. The remaining edges qualify when their
/// endpoints fall on different sides of the cut. The strictly lightest
/// qualifying edge wins; among equal weights the earliest one is kept.
///
/// Returns `None` when no edge crosses the cut. This never mutates its
/// inputs.
///
/// # Examples
/// ```
/// use spanmend_core::{
///     CandidatePolicy, Edge, EdgeMatching, Graph, find_replacement, kruskal, partition,
/// };
///
/// let graph = Graph::from_edges(
///     3,
///     [Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(0, 2, 5)],
/// )?;
/// let tree = kruskal(&graph);
/// let removed = Edge::new(1, 2, 2);
/// let split = partition(tree.edges(), 3, &removed, EdgeMatching::Exact)?;
///
/// let alternative = find_replacement(
///     &graph,
///     tree.edges(),
///     &removed,
///     &split,
///     EdgeMatching::Exact,
///     CandidatePolicy::ExcludeRemoved,
/// );
/// assert_eq!(alternative, Some(Edge::new(0, 2, 5)));
/// # Ok::<(), spanmend_core::ReplacementError>(())
/// ```
#[must_use]
pub fn find_replacement(
    graph: &Graph,
    tree_edges: &[Edge],
    removed: &Edge,
    split: &Partition,
    matching: EdgeMatching,
    policy: CandidatePolicy,
) -> Option<Edge> {
    let active = EdgeSet::new(matching, tree_edges);

    let mut best: Option<Edge> = None;
    for edge in graph.edges() {
        let is_removed = matching.matches(edge, removed);
        if is_removed && policy == CandidatePolicy::ExcludeRemoved {
            continue;
        }
        if !is_removed && active.contains(edge) {
            continue;
        }
        if !split.crosses(edge) {
            continue;
        }
        if best.is_none_or(|current| edge.weight() < current.weight()) {
            best = Some(*edge);
        }
    }

    match &best {
        Some(edge) => debug!(removed = %removed, replacement = %edge, "replacement edge selected"),
        None => debug!(removed = %removed, "no edge crosses the cut"),
    }
    best
}


#[cfg(test)]
mod property;
