//! Weighted undirected graph model.
//!
//! Graphs are built once and are read-only afterwards. Edges keep the
//! direction they were inserted with: the edge list may hold both `(a, b, w)`
//! and `(b, a, w)`, and neither is deduplicated.

use std::fmt;

use crate::error::GraphError;

/// Identifier of a vertex, an index in `[0, vertex_count)`.
pub type VertexId = usize;

/// Edge weight.
pub type Weight = i64;

/// A weighted edge as stored in the graph's edge list.
///
/// Equality is the exact `(source, target, weight)` triple, so the reversed
/// twin of an edge compares unequal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
    weight: Weight,
}

impl Edge {
    /// Creates an edge from `source` to `target` with the given weight.
    ///
    /// # Examples
    /// ```
    /// use spanmend_core::Edge;
    ///
    /// let edge = Edge::new(2, 3, 3);
    /// assert_eq!(edge.to_string(), "(2-3: 3)");
    /// assert_ne!(edge, edge.reversed());
    /// ```
    #[must_use]
    pub const fn new(source: VertexId, target: VertexId, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the endpoint the edge was inserted from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the endpoint the edge was inserted to.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexId { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns the same edge with its endpoints swapped.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.target, self.source, self.weight)
    }

    /// Returns the edge in canonical undirected form (`source <= target`).
    #[must_use]
    pub const fn canonical(&self) -> Self {
        if self.source <= self.target {
            *self
        } else {
            self.reversed()
        }
    }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}-{}: {})", self.source, self.target, self.weight)
    }
}

/// Sums edge weights as `i128` so totals cannot overflow.
pub(crate) fn sum_weights<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> i128 {
    edges.into_iter().map(|edge| i128::from(edge.weight)).sum()
}

/// A weighted undirected graph with a validated edge list.
///
/// # Examples
/// ```
/// use spanmend_core::{Edge, Graph};
///
/// let mut graph = Graph::new(3)?;
/// graph.add_edge(0, 1, 4)?;
/// graph.add_edge(1, 2, 2)?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edges(), &[Edge::new(0, 1, 4), Edge::new(1, 2, 2)]);
/// # Ok::<(), spanmend_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count == 0`.
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        Ok(Self {
            vertex_count,
            edges: Vec::new(),
        })
    }

    /// Creates a graph and inserts `edges` in iteration order.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count == 0` and
    /// [`GraphError::InvalidVertex`] for the first edge with an endpoint
    /// outside the graph.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count)?;
        for edge in edges {
            graph.push_edge(edge)?;
        }
        Ok(graph)
    }

    /// Appends an edge built from its parts.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when an endpoint is outside the graph.
    pub fn add_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        weight: Weight,
    ) -> Result<(), GraphError> {
        self.push_edge(Edge::new(source, target, weight))
    }

    /// Appends an existing edge.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when an endpoint is outside the graph.
    pub fn push_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        for vertex in [edge.source, edge.target] {
            if vertex >= self.vertex_count {
                return Err(GraphError::InvalidVertex {
                    edge,
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        self.edges.push(edge);
        Ok(())
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
