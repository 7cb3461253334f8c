//! Structural invariants of a Kruskal forest.
//!
//! For any generated graph, verifies:
//!
//! - **Membership**: every forest edge appears in the graph edge list.
//! - **Acyclicity**: no forest edge closes a cycle.
//! - **Edge count**: `V - C` edges for `C` components.
//! - **Connectivity**: a connected input produces a tree.
//! - **Minimality**: total weight equals Prim's forest weight.
//! - **Determinism**: a second run yields the identical edge list.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DisjointSet, kruskal, test_utils::GraphFixture};

use super::oracle::prim_forest_weight;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let forest = kruskal(graph);
    let context = format!(
        "(shape={:?}, vertices={}, edges={})",
        fixture.shape,
        graph.vertex_count(),
        graph.edges().len(),
    );

    for (index, edge) in forest.edges().iter().enumerate() {
        if !graph.edges().contains(edge) {
            return Err(TestCaseError::fail(format!(
                "forest edge {index} {edge} is not a graph edge {context}"
            )));
        }
    }

    let mut sets = DisjointSet::new(graph.vertex_count());
    for (index, edge) in forest.edges().iter().enumerate() {
        if !sets.union(edge.source(), edge.target()) {
            return Err(TestCaseError::fail(format!(
                "forest edge {index} {edge} closes a cycle {context}"
            )));
        }
    }

    let expected_edges = graph.vertex_count() - forest.component_count();
    if forest.edges().len() != expected_edges {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected n - c = {expected_edges} {context}",
            forest.edges().len(),
        )));
    }

    let (oracle_weight, oracle_components) = prim_forest_weight(graph);
    if forest.component_count() != oracle_components {
        return Err(TestCaseError::fail(format!(
            "component count {}, oracle {oracle_components} {context}",
            forest.component_count(),
        )));
    }
    if forest.total_weight() != oracle_weight {
        return Err(TestCaseError::fail(format!(
            "total weight {}, oracle {oracle_weight} {context}",
            forest.total_weight(),
        )));
    }

    if kruskal(graph) != forest {
        return Err(TestCaseError::fail(format!(
            "repeated run produced a different forest {context}"
        )));
    }

    Ok(())
}
