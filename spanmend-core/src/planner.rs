//! Configured entry point for removal scenarios.
//!
//! [`ReplacementPlanner`] ties the MST builder, the partitioner, and the
//! replacement finder together. Each removal scenario owns its union-find and
//! partition; the graph and tree are only read, so scenarios can run in any
//! order or in parallel and still produce identical results.

use tracing::{debug, info, instrument};

use crate::{
    error::{ReplacementError, Result},
    graph::{Edge, Graph},
    matching::{CandidatePolicy, EdgeMatching},
    mst::{SpanningForest, kruskal},
    partition::{Partition, partition},
    replacement::find_replacement,
};

/// Indicates how [`ReplacementPlanner::sweep`] schedules removal scenarios.
///
/// `Auto` resolves to `Parallel` when the `parallel` feature is compiled in
/// and to `Sequential` otherwise, so results stay identical across builds.
///
/// # Examples
/// ```
/// use spanmend_core::SweepStrategy;
///
/// assert_eq!(SweepStrategy::default(), SweepStrategy::Auto);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SweepStrategy {
    /// Let the library pick the scheduler.
    #[default]
    Auto,
    /// Evaluate scenarios one after another on the calling thread.
    Sequential,
    /// Evaluate scenarios on the rayon thread pool.
    Parallel,
}

/// Configures and constructs [`ReplacementPlanner`] instances.
///
/// # Examples
/// ```
/// use spanmend_core::{CandidatePolicy, EdgeMatching, PlannerBuilder, SweepStrategy};
///
/// let planner = PlannerBuilder::new()
///     .with_edge_matching(EdgeMatching::Undirected)
///     .with_candidate_policy(CandidatePolicy::ExcludeRemoved)
///     .with_sweep_strategy(SweepStrategy::Sequential)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(planner.edge_matching(), EdgeMatching::Undirected);
/// assert_eq!(planner.sweep_strategy(), SweepStrategy::Sequential);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PlannerBuilder {
    edge_matching: EdgeMatching,
    candidate_policy: CandidatePolicy,
    sweep_strategy: SweepStrategy,
}

impl PlannerBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how edges are compared when checking tree membership.
    #[must_use]
    pub const fn with_edge_matching(mut self, matching: EdgeMatching) -> Self {
        self.edge_matching = matching;
        self
    }

    /// Sets whether the removed edge may be chosen as its own replacement.
    #[must_use]
    pub const fn with_candidate_policy(mut self, policy: CandidatePolicy) -> Self {
        self.candidate_policy = policy;
        self
    }

    /// Sets how sweeps schedule their scenarios.
    #[must_use]
    pub const fn with_sweep_strategy(mut self, strategy: SweepStrategy) -> Self {
        self.sweep_strategy = strategy;
        self
    }

    /// Validates the configuration and constructs a [`ReplacementPlanner`].
    ///
    /// # Errors
    /// Returns [`ReplacementError::ParallelUnavailable`] when
    /// [`SweepStrategy::Parallel`] is requested without the `parallel`
    /// feature.
    pub fn build(self) -> Result<ReplacementPlanner> {
        if self.sweep_strategy == SweepStrategy::Parallel && !cfg!(feature = "parallel") {
            return Err(ReplacementError::ParallelUnavailable);
        }
        Ok(ReplacementPlanner {
            edge_matching: self.edge_matching,
            candidate_policy: self.candidate_policy,
            sweep_strategy: self.sweep_strategy,
        })
    }
}

/// The result of removing one tree edge and searching for its replacement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RemovalOutcome {
    removed: Edge,
    partition: Partition,
    replacement: Option<Edge>,
    edge_matching: EdgeMatching,
}

impl RemovalOutcome {
    /// Returns the edge that was removed from the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn removed(&self) -> &Edge { &self.removed }

    /// Returns the two components left by the removal.
    #[must_use]
    #[rustfmt::skip]
    pub const fn partition(&self) -> &Partition { &self.partition }

    /// Returns the reconnecting edge, or `None` when the cut cannot be bridged.
    #[must_use]
    pub const fn replacement(&self) -> Option<&Edge> {
        self.replacement.as_ref()
    }

    /// Returns the tree with the removed edge swapped for its replacement.
    ///
    /// Returns `None` when no replacement exists or `tree` does not contain
    /// the removed edge.
    #[must_use]
    pub fn repaired_tree(&self, tree: &SpanningForest) -> Option<SpanningForest> {
        let replacement = self.replacement?;
        tree.with_replacement(&self.removed, replacement, self.edge_matching)
    }

    /// Returns `weight(tree) - weight(removed) + weight(replacement)`, or
    /// `None` when no replacement exists.
    #[must_use]
    pub fn repaired_weight(&self, tree: &SpanningForest) -> Option<i128> {
        let replacement = self.replacement?;
        Some(
            tree.total_weight() - i128::from(self.removed.weight())
                + i128::from(replacement.weight()),
        )
    }
}

/// Plans single-edge removals against a fixed graph and spanning tree.
///
/// # Examples
/// ```
/// use spanmend_core::{Edge, Graph, ReplacementPlanner};
///
/// let graph = Graph::from_edges(
///     4,
///     [
///         Edge::new(0, 1, 1),
///         Edge::new(1, 2, 1),
///         Edge::new(2, 3, 1),
///         Edge::new(3, 0, 7),
///     ],
/// )?;
/// let planner = ReplacementPlanner::default();
/// let tree = planner.spanning_tree(&graph);
/// let outcomes = planner.sweep(&graph, &tree)?;
/// assert_eq!(outcomes.len(), 3);
/// assert!(outcomes.iter().all(|outcome| outcome.replacement().is_some()));
/// # Ok::<(), spanmend_core::ReplacementError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ReplacementPlanner {
    edge_matching: EdgeMatching,
    candidate_policy: CandidatePolicy,
    sweep_strategy: SweepStrategy,
}

impl ReplacementPlanner {
    /// Returns the configured edge matching mode.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_matching(&self) -> EdgeMatching { self.edge_matching }

    /// Returns the configured candidate policy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn candidate_policy(&self) -> CandidatePolicy { self.candidate_policy }

    /// Returns the configured sweep strategy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn sweep_strategy(&self) -> SweepStrategy { self.sweep_strategy }

    /// Builds the minimum spanning forest of `graph`.
    #[must_use]
    pub fn spanning_tree(&self, graph: &Graph) -> SpanningForest {
        kruskal(graph)
    }

    /// Removes `removed` from `tree` and searches `graph` for a replacement.
    ///
    /// # Errors
    /// Returns [`ReplacementError::EdgeNotInTree`] when `removed` is not a
    /// tree edge, and [`ReplacementError::InvalidPartition`] when the removal
    /// does not split the tree in two.
    #[instrument(
        name = "plan_removal",
        skip(self, graph, tree, removed),
        fields(removed = %removed, matching = self.edge_matching.as_str())
    )]
    pub fn plan_removal(
        &self,
        graph: &Graph,
        tree: &SpanningForest,
        removed: &Edge,
    ) -> Result<RemovalOutcome> {
        let split = partition(
            tree.edges(),
            graph.vertex_count(),
            removed,
            self.edge_matching,
        )?;
        let replacement = find_replacement(
            graph,
            tree.edges(),
            removed,
            &split,
            self.edge_matching,
            self.candidate_policy,
        );
        Ok(RemovalOutcome {
            removed: *removed,
            partition: split,
            replacement,
            edge_matching: self.edge_matching,
        })
    }

    /// Removes the tree edge at position `index` (Kruskal acceptance order).
    ///
    /// # Errors
    /// Returns [`ReplacementError::EdgeIndexOutOfRange`] when `index` is past
    /// the end of the tree, plus everything [`Self::plan_removal`] returns.
    pub fn plan_removal_at(
        &self,
        graph: &Graph,
        tree: &SpanningForest,
        index: usize,
    ) -> Result<RemovalOutcome> {
        let removed = tree
            .edges()
            .get(index)
            .ok_or(ReplacementError::EdgeIndexOutOfRange {
                index,
                edge_count: tree.edges().len(),
            })?;
        self.plan_removal(graph, tree, removed)
    }

    /// Plans the removal of every tree edge independently.
    ///
    /// Outcomes are returned in tree order regardless of the strategy.
    ///
    /// # Errors
    /// Returns the error of the first failing scenario in tree order, for
    /// example [`ReplacementError::InvalidPartition`] when `tree` is a forest
    /// with more than one component. Every strategy reports the same error.
    #[instrument(
        name = "sweep",
        skip(self, graph, tree),
        fields(tree_edges = tree.edges().len(), strategy = ?self.sweep_strategy)
    )]
    pub fn sweep(&self, graph: &Graph, tree: &SpanningForest) -> Result<Vec<RemovalOutcome>> {
        let outcomes = if self.runs_parallel() {
            self.sweep_parallel(graph, tree)
        } else {
            debug!("running sweep sequentially");
            tree.edges()
                .iter()
                .map(|removed| self.plan_removal(graph, tree, removed))
                .collect::<Result<Vec<_>>>()
        }?;

        let bridged = outcomes
            .iter()
            .filter(|outcome| outcome.replacement.is_some())
            .count();
        info!(
            scenarios = outcomes.len(),
            bridged, "removal sweep complete"
        );
        Ok(outcomes)
    }

    const fn runs_parallel(&self) -> bool {
        match self.sweep_strategy {
            SweepStrategy::Sequential => false,
            SweepStrategy::Parallel | SweepStrategy::Auto => cfg!(feature = "parallel"),
        }
    }

    #[cfg(feature = "parallel")]
    fn sweep_parallel(&self, graph: &Graph, tree: &SpanningForest) -> Result<Vec<RemovalOutcome>> {
        use rayon::prelude::*;

        debug!("running sweep on the rayon pool");
        let results: Vec<Result<RemovalOutcome>> = tree
            .edges()
            .par_iter()
            .map(|removed| self.plan_removal(graph, tree, removed))
            .collect();
        // Collect sequentially so the reported error is the first in tree order.
        results.into_iter().collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn sweep_parallel(&self, _graph: &Graph, _tree: &SpanningForest) -> Result<Vec<RemovalOutcome>> {
        Err(ReplacementError::ParallelUnavailable)
    }
}
