//! Reference MST weights computed without Kruskal.
//!
//! Both oracles ignore edge direction and self-loops, so they agree with
//! Kruskal on any input the graph model accepts.

use crate::{DisjointSet, Edge, Graph};

/// Minimum spanning tree weight by exhaustive search over every
/// `(vertex_count - 1)`-edge subset.
///
/// Returns `None` when no subset spans the graph. Intended for graphs with
/// at most a dozen edges.
pub(super) fn brute_force_minimum_weight(graph: &Graph) -> Option<i128> {
    let vertex_count = graph.vertex_count();
    let edges = graph.edges();
    let wanted = vertex_count - 1;
    assert!(edges.len() <= 16, "brute force is limited to 16 edges");

    let mut best: Option<i128> = None;
    for mask in 0_u32..(1_u32 << edges.len()) {
        if mask.count_ones() as usize != wanted {
            continue;
        }
        let chosen: Vec<&Edge> = edges
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, edge)| edge)
            .collect();
        let mut sets = DisjointSet::new(vertex_count);
        if !chosen
            .iter()
            .all(|edge| sets.union(edge.source(), edge.target()))
        {
            continue;
        }
        let weight: i128 = chosen.iter().map(|edge| i128::from(edge.weight())).sum();
        best = Some(best.map_or(weight, |current| current.min(weight)));
    }
    best
}

/// Minimum spanning forest weight and component count via Prim's algorithm
/// on a dense adjacency matrix, restarted once per component.
pub(super) fn prim_forest_weight(graph: &Graph) -> (i128, usize) {
    let n = graph.vertex_count();
    let mut adjacency: Vec<Vec<Option<i64>>> = vec![vec![None; n]; n];
    for edge in graph.edges() {
        if edge.is_self_loop() {
            continue;
        }
        let (a, b) = (edge.source(), edge.target());
        let lighter = adjacency[a][b].map_or(edge.weight(), |w| w.min(edge.weight()));
        adjacency[a][b] = Some(lighter);
        adjacency[b][a] = Some(lighter);
    }

    let mut in_tree = vec![false; n];
    let mut best: Vec<Option<i64>> = vec![None; n];
    let mut total: i128 = 0;
    let mut components = 0;

    for _ in 0..n {
        let next = (0..n)
            .filter(|&v| !in_tree[v])
            .min_by_key(|&v| best[v].map_or((1, 0), |w| (0, w)));
        let Some(vertex) = next else {
            break;
        };
        match best[vertex] {
            Some(weight) => total += i128::from(weight),
            None => components += 1,
        }
        in_tree[vertex] = true;
        for other in 0..n {
            if in_tree[other] {
                continue;
            }
            if let Some(weight) = adjacency[vertex][other] {
                if best[other].is_none_or(|current| weight < current) {
                    best[other] = Some(weight);
                }
            }
        }
    }
    (total, components)
}
