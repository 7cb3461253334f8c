//! Property-based tests for partitioning and replacement search.
//!
//! Every tree edge of a connected fixture is removed in turn and checked
//! against:
//!
//! - **Partition shape**: two disjoint, non-empty sides covering every vertex,
//!   with the removed edge crossing between them.
//! - **Reference search**: an edge qualifies when adding it to the remaining
//!   tree edges reconnects the graph; the finder must return the first
//!   qualifying edge of minimum weight.
//! - **Repair**: swapping the replacement in yields a spanning tree of the
//!   predicted weight.
//! - **Optimality**: with the removed edge excluded, the repaired weight
//!   equals the MST weight of the graph without that edge.

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::test_utils::{
    GraphFixture, connected_fixture_strategy, is_spanning_tree, suite_proptest_config,
};
use crate::{
    CandidatePolicy, DisjointSet, Edge, EdgeMatching, Graph, Partition, SpanningForest, kruskal,
    partition,
};

use super::find_replacement;

/// Finds the replacement by testing full reconnection for each graph edge.
fn reference_replacement(
    graph: &Graph,
    tree: &SpanningForest,
    removed: &Edge,
    policy: CandidatePolicy,
) -> Option<Edge> {
    let mut best: Option<Edge> = None;
    for edge in graph.edges() {
        let is_removed = edge == removed;
        if is_removed && policy == CandidatePolicy::ExcludeRemoved {
            continue;
        }
        if !is_removed && tree.edges().contains(edge) {
            continue;
        }

        let mut sets = DisjointSet::new(graph.vertex_count());
        for tree_edge in tree.edges().iter().filter(|tree_edge| *tree_edge != removed) {
            sets.union(tree_edge.source(), tree_edge.target());
        }
        sets.union(edge.source(), edge.target());
        if sets.component_count() != 1 {
            continue;
        }
        if best.is_none_or(|current| edge.weight() < current.weight()) {
            best = Some(*edge);
        }
    }
    best
}

fn check_partition_shape(
    split: &Partition,
    vertex_count: usize,
    removed: &Edge,
) -> TestCaseResult {
    let [first, second] = split.components();
    if first.is_empty() || second.is_empty() {
        return Err(TestCaseError::fail(format!(
            "removing {removed} left an empty side"
        )));
    }
    if first.len() + second.len() != vertex_count {
        return Err(TestCaseError::fail(format!(
            "sides of {removed} hold {} vertices, expected {vertex_count}",
            first.len() + second.len(),
        )));
    }
    if first.iter().any(|vertex| second.contains(vertex)) {
        return Err(TestCaseError::fail(format!("sides of {removed} overlap")));
    }
    if first.first() != Some(&0) {
        return Err(TestCaseError::fail(format!(
            "vertex 0 is not on the first side after removing {removed}"
        )));
    }
    if !split.crosses(removed) {
        return Err(TestCaseError::fail(format!(
            "removed edge {removed} does not cross its own cut"
        )));
    }
    Ok(())
}

fn run_removal_properties(fixture: &GraphFixture, policy: CandidatePolicy) -> TestCaseResult {
    let graph = &fixture.graph;
    let tree = kruskal(graph);
    prop_assert!(tree.is_tree(), "connected fixture {:?} produced a forest", fixture.shape);

    for removed in tree.edges() {
        let split = partition(tree.edges(), graph.vertex_count(), removed, EdgeMatching::Exact)
            .map_err(|err| TestCaseError::fail(format!("partition failed: {err}")))?;
        check_partition_shape(&split, graph.vertex_count(), removed)?;

        let found = find_replacement(
            graph,
            tree.edges(),
            removed,
            &split,
            EdgeMatching::Exact,
            policy,
        );
        let expected = reference_replacement(graph, &tree, removed, policy);
        prop_assert_eq!(found, expected, "removed {} shape {:?}", removed, fixture.shape);

        if policy == CandidatePolicy::IncludeRemoved {
            prop_assert!(found.is_some(), "removed edge {} always crosses its cut", removed);
        }

        let Some(replacement) = found else {
            continue;
        };
        let repaired = tree
            .with_replacement(removed, replacement, EdgeMatching::Exact)
            .ok_or_else(|| TestCaseError::fail(format!("{removed} vanished from the tree")))?;
        prop_assert!(is_spanning_tree(graph.vertex_count(), repaired.edges()));
        prop_assert_eq!(
            repaired.total_weight(),
            tree.total_weight() - i128::from(removed.weight()) + i128::from(replacement.weight())
        );

        if policy == CandidatePolicy::ExcludeRemoved {
            let remaining = graph.edges().iter().copied().filter(|edge| edge != removed);
            let reduced = Graph::from_edges(graph.vertex_count(), remaining)
                .map_err(|err| TestCaseError::fail(format!("reduced graph invalid: {err}")))?;
            let reduced_tree = kruskal(&reduced);
            prop_assert!(reduced_tree.is_tree());
            prop_assert_eq!(repaired.total_weight(), reduced_tree.total_weight());
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn replacement_including_removed_matches_reference(fixture in connected_fixture_strategy()) {
        run_removal_properties(&fixture, CandidatePolicy::IncludeRemoved)?;
    }

    #[test]
    fn replacement_excluding_removed_matches_reference(fixture in connected_fixture_strategy()) {
        run_removal_properties(&fixture, CandidatePolicy::ExcludeRemoved)?;
    }
}
