//! Benchmark parameter types.

use std::fmt;

use spanmend_core::SweepStrategy;

/// Parameters for a spanning-tree benchmark run.
#[derive(Clone, Debug)]
pub struct TreeBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of edges in the graph.
    pub edge_count: usize,
}

impl fmt::Display for TreeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.vertex_count, self.edge_count)
    }
}

/// Parameters for a removal sweep benchmark run.
#[derive(Clone, Debug)]
pub struct SweepBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Scheduler used for the sweep.
    pub strategy: SweepStrategy,
}

impl fmt::Display for SweepBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategy = match self.strategy {
            SweepStrategy::Auto => "auto",
            SweepStrategy::Sequential => "sequential",
            SweepStrategy::Parallel => "parallel",
        };
        write!(f, "n={},{strategy}", self.vertex_count)
    }
}
