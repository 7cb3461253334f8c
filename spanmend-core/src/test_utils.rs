//! Shared test utilities for `spanmend-core`.
//!
//! Hosts the proptest configuration shared by every property suite, seeded
//! graph generators, and a small-graph strategy suitable for brute-force
//! oracles.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use spanmend_test_support::ci::property_test_profile::ProptestRunProfile;
use test_strategy::Arbitrary;

use crate::{DisjointSet, Edge, Graph, VertexId, Weight};

/// Minimum vertex count for generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for generated graphs.
const MAX_VERTICES: usize = 40;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `SPANMEND_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Topology and weight pattern of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(crate) enum GraphShape {
    /// Connected, with weights drawn from a wide range.
    #[weight(2)]
    Unique,
    /// Connected, with every weight drawn from a pool of at most three values.
    #[weight(3)]
    ManyIdentical,
    /// Connected, with every edge stored in both directions back to back.
    #[weight(3)]
    Bidirectional,
    /// A random spanning tree plus a handful of extra edges and self-loops.
    #[weight(2)]
    Sparse,
    /// Two or more components with no edge between them.
    #[weight(2)]
    Disconnected,
}

impl GraphShape {
    /// Shapes that always yield a connected graph.
    pub(crate) const CONNECTED: [Self; 4] = [
        Self::Unique,
        Self::ManyIdentical,
        Self::Bidirectional,
        Self::Sparse,
    ];
}

/// A generated graph together with the shape used to build it.
#[derive(Clone, Debug)]
pub(crate) struct GraphFixture {
    /// The generated graph.
    pub graph: Graph,
    /// Shape used during generation.
    pub shape: GraphShape,
}

/// Strategy producing fixtures of every shape.
pub(crate) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Strategy producing connected fixtures only.
pub(crate) fn connected_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (
        proptest::sample::select(GraphShape::CONNECTED.to_vec()),
        any::<u64>(),
    )
        .prop_map(|(shape, seed)| {
            let mut rng = SmallRng::seed_from_u64(seed);
            generate_fixture(shape, &mut rng)
        })
}

/// Generates a fixture for a specific shape.
///
/// Useful for targeted rstest cases where the shape is chosen explicitly
/// rather than sampled by proptest.
pub(crate) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut builder = EdgeListBuilder::default();
    match shape {
        GraphShape::Unique => {
            builder.random_tree(0, vertex_count, rng, |r| r.gen_range(1..=10_000));
            builder.random_extras(0, vertex_count, vertex_count * 2, rng, |r| {
                r.gen_range(1..=10_000)
            });
        }
        GraphShape::ManyIdentical => {
            let pool_size = rng.gen_range(1..=3);
            let pool: Vec<Weight> = (0..pool_size).map(|_| rng.gen_range(1..=5)).collect();
            let pick = |r: &mut SmallRng| pool[r.gen_range(0..pool.len())];
            builder.random_tree(0, vertex_count, rng, pick);
            builder.random_extras(0, vertex_count, vertex_count * 2, rng, pick);
        }
        GraphShape::Bidirectional => {
            builder.bidirectional = true;
            builder.random_tree(0, vertex_count, rng, |r| r.gen_range(1..=20));
            builder.random_extras(0, vertex_count, vertex_count, rng, |r| r.gen_range(1..=20));
        }
        GraphShape::Sparse => {
            builder.random_tree(0, vertex_count, rng, |r| r.gen_range(1..=100));
            builder.random_extras(0, vertex_count, vertex_count / 2, rng, |r| {
                r.gen_range(1..=100)
            });
            let looped = rng.gen_range(0..vertex_count);
            builder.push(looped, looped, rng.gen_range(1..=100));
        }
        GraphShape::Disconnected => {
            let split = rng.gen_range(1..vertex_count);
            for (offset, size) in [(0, split), (split, vertex_count - split)] {
                builder.random_tree(offset, size, rng, |r| r.gen_range(1..=50));
                builder.random_extras(offset, size, size, rng, |r| r.gen_range(1..=50));
            }
        }
    }

    let graph = match Graph::from_edges(vertex_count, builder.edges) {
        Ok(graph) => graph,
        Err(err) => panic!("generator produced an invalid graph: {err}"),
    };
    GraphFixture { graph, shape }
}

/// Small graphs for brute-force oracles: up to 5 vertices and 10 edges with
/// arbitrary direction, duplicates, self-loops, and tied weights.
pub(crate) fn small_graph_strategy() -> impl Strategy<Value = Graph> {
    (MIN_VERTICES..=5_usize).prop_flat_map(|vertex_count| {
        proptest::collection::vec((0..vertex_count, 0..vertex_count, 1..=6_i64), 0..=10).prop_map(
            move |triples| {
                let edges = triples
                    .into_iter()
                    .map(|(source, target, weight)| Edge::new(source, target, weight));
                match Graph::from_edges(vertex_count, edges) {
                    Ok(graph) => graph,
                    Err(err) => panic!("strategy produced an invalid graph: {err}"),
                }
            },
        )
    })
}

/// Returns `true` when `edges` form a spanning tree over `vertex_count` vertices.
pub(crate) fn is_spanning_tree(vertex_count: usize, edges: &[Edge]) -> bool {
    if edges.len() != vertex_count.saturating_sub(1) {
        return false;
    }
    let mut sets = DisjointSet::new(vertex_count);
    edges
        .iter()
        .all(|edge| sets.union(edge.source(), edge.target()))
}

#[derive(Default)]
struct EdgeListBuilder {
    edges: Vec<Edge>,
    bidirectional: bool,
}

impl EdgeListBuilder {
    fn push(&mut self, source: VertexId, target: VertexId, weight: Weight) {
        self.edges.push(Edge::new(source, target, weight));
        if self.bidirectional && source != target {
            self.edges.push(Edge::new(target, source, weight));
        }
    }

    /// Adds a random spanning tree over `offset..offset + size` with random
    /// edge directions.
    fn random_tree(
        &mut self,
        offset: usize,
        size: usize,
        rng: &mut SmallRng,
        mut weight: impl FnMut(&mut SmallRng) -> Weight,
    ) {
        let mut order: Vec<VertexId> = (offset..offset + size).collect();
        shuffle(&mut order, rng);
        for index in 1..order.len() {
            let parent = order[rng.gen_range(0..index)];
            let child = order[index];
            let w = weight(rng);
            if rng.gen_bool(0.5) {
                self.push(parent, child, w);
            } else {
                self.push(child, parent, w);
            }
        }
    }

    /// Adds up to `count` random non-loop edges inside `offset..offset + size`.
    fn random_extras(
        &mut self,
        offset: usize,
        size: usize,
        count: usize,
        rng: &mut SmallRng,
        mut weight: impl FnMut(&mut SmallRng) -> Weight,
    ) {
        if size < 2 {
            return;
        }
        for _ in 0..count {
            let source = offset + rng.gen_range(0..size);
            let target = offset + rng.gen_range(0..size);
            if source != target {
                let w = weight(rng);
                self.push(source, target, w);
            }
        }
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
