//! Synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: a random spanning tree is laid down
//! first, then extra edges between random vertex pairs are appended. Data is
//! seeded for reproducibility across benchmark runs.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use spanmend_core::{Edge, Graph, Weight};

use crate::error::BenchSetupError;

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested maximum weight was below one.
    #[error("maximum weight must be at least 1, got {max_weight}")]
    NonPositiveWeight {
        /// The rejected bound.
        max_weight: Weight,
    },
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Edges appended on top of the connecting tree.
    pub extra_edges: usize,
    /// Weights are drawn uniformly from `1..=max_weight`.
    pub max_weight: Weight,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl SyntheticConfig {
    /// Total number of edges the generated graph will hold.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.vertex_count
            .saturating_sub(1)
            .saturating_add(self.extra_edges)
    }
}

/// Generates a connected graph from the given configuration.
///
/// # Errors
///
/// Returns [`SyntheticError`] for a zero vertex count or a maximum weight
/// below one.
///
/// # Examples
///
/// ```
/// use spanmend_benches::source::{SyntheticConfig, generate};
///
/// let config = SyntheticConfig { vertex_count: 10, extra_edges: 20, max_weight: 50, seed: 7 };
/// let graph = generate(&config).expect("valid config");
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edges().len(), 29);
/// ```
pub fn generate(config: &SyntheticConfig) -> Result<Graph, BenchSetupError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices.into());
    }
    if config.max_weight < 1 {
        return Err(SyntheticError::NonPositiveWeight {
            max_weight: config.max_weight,
        }
        .into());
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut edges = Vec::with_capacity(config.edge_count());
    for vertex in 1..config.vertex_count {
        let parent = rng.gen_range(0..vertex);
        let weight = rng.gen_range(1..=config.max_weight);
        edges.push(Edge::new(parent, vertex, weight));
    }
    for _ in 0..config.extra_edges {
        let source = rng.gen_range(0..config.vertex_count);
        let target = rng.gen_range(0..config.vertex_count);
        let weight = rng.gen_range(1..=config.max_weight);
        edges.push(Edge::new(source, target, weight));
    }

    Ok(Graph::from_edges(config.vertex_count, edges)?)
}
