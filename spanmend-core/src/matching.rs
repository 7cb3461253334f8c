//! Edge identity and candidate selection policies.

use std::collections::HashSet;

use crate::graph::{Edge, VertexId, Weight};

/// Decides when two edges count as "the same edge".
///
/// # Examples
/// ```
/// use spanmend_core::{Edge, EdgeMatching};
///
/// let forward = Edge::new(2, 3, 3);
/// assert!(!EdgeMatching::Exact.matches(&forward, &forward.reversed()));
/// assert!(EdgeMatching::Undirected.matches(&forward, &forward.reversed()));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum EdgeMatching {
    /// Compare the `(source, target, weight)` triple, direction included.
    #[default]
    Exact,
    /// Compare the canonical `(min, max, weight)` form.
    Undirected,
}

impl EdgeMatching {
    /// Returns `true` when `left` and `right` identify the same edge.
    #[must_use]
    pub fn matches(self, left: &Edge, right: &Edge) -> bool {
        self.key(left) == self.key(right)
    }

    fn key(self, edge: &Edge) -> (VertexId, VertexId, Weight) {
        let edge = match self {
            Self::Exact => *edge,
            Self::Undirected => edge.canonical(),
        };
        (edge.source(), edge.target(), edge.weight())
    }

    /// Returns the stable lowercase name used by configuration surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Undirected => "undirected",
        }
    }
}

/// Whether the removed edge may be chosen as its own replacement.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum CandidatePolicy {
    /// The removed edge competes with every other crossing edge.
    #[default]
    IncludeRemoved,
    /// Edges matching the removed edge are skipped, so the result is the
    /// cheapest alternative across the cut.
    ExcludeRemoved,
}

/// Set of tree edges keyed under a given [`EdgeMatching`].
#[derive(Debug)]
pub(crate) struct EdgeSet {
    matching: EdgeMatching,
    keys: HashSet<(VertexId, VertexId, Weight)>,
}

impl EdgeSet {
    pub(crate) fn new<'a>(matching: EdgeMatching, edges: impl IntoIterator<Item = &'a Edge>) -> Self {
        Self {
            matching,
            keys: edges.into_iter().map(|edge| matching.key(edge)).collect(),
        }
    }

    pub(crate) fn contains(&self, edge: &Edge) -> bool {
        self.keys.contains(&self.matching.key(edge))
    }
}
