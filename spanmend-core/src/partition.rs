//! Component partitioning after a single tree-edge removal.
//!
//! The partitioner rebuilds connectivity from the tree edges that remain
//! after the removal and groups vertices by their union-find root.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::{
    error::{GraphError, ReplacementError, Result},
    graph::{Edge, VertexId},
    matching::EdgeMatching,
    union_find::DisjointSet,
};

/// Mapping from a component's canonical root to its member vertices.
///
/// Members are listed in ascending order.
pub type ComponentMap = BTreeMap<VertexId, Vec<VertexId>>;

/// Groups vertices into the components left by `tree_edges` once every edge
/// matching `removed` is dropped.
///
/// A `removed` edge that matches nothing leaves the tree intact and yields
/// the original components. Use [`partition`] when the result must be a
/// two-way split.
///
/// # Errors
/// Returns [`ReplacementError::Graph`] wrapping [`GraphError::InvalidVertex`]
/// when a tree edge has an endpoint outside `[0, vertex_count)`.
pub fn find_components(
    tree_edges: &[Edge],
    vertex_count: usize,
    removed: &Edge,
    matching: EdgeMatching,
) -> Result<ComponentMap> {
    check_endpoints(tree_edges, vertex_count)?;

    let mut sets = DisjointSet::new(vertex_count);
    for edge in tree_edges {
        if matching.matches(edge, removed) {
            continue;
        }
        sets.union(edge.source(), edge.target());
    }

    let mut components = ComponentMap::new();
    for vertex in 0..vertex_count {
        let root = sets.find(vertex);
        components.entry(root).or_default().push(vertex);
    }
    Ok(components)
}

fn check_endpoints(tree_edges: &[Edge], vertex_count: usize) -> Result<()> {
    for edge in tree_edges {
        for vertex in [edge.source(), edge.target()] {
            if vertex >= vertex_count {
                return Err(GraphError::InvalidVertex {
                    edge: *edge,
                    vertex,
                    vertex_count,
                }
                .into());
            }
        }
    }
    Ok(())
}

/// Which side of a [`Partition`] a vertex lies on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Side {
    /// The component holding the smallest vertex id.
    First,
    /// The other component.
    Second,
}

/// A validated two-way split of the vertex set.
///
/// # Examples
/// ```
/// use spanmend_core::{Edge, EdgeMatching, Side, partition};
///
/// let tree = [Edge::new(0, 1, 1), Edge::new(1, 2, 2)];
/// let split = partition(&tree, 3, &Edge::new(1, 2, 2), EdgeMatching::Exact)?;
/// assert_eq!(split.first(), &[0, 1]);
/// assert_eq!(split.second(), &[2]);
/// assert_eq!(split.side(2), Some(Side::Second));
/// # Ok::<(), spanmend_core::ReplacementError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Partition {
    first: Vec<VertexId>,
    second: Vec<VertexId>,
    sides: Vec<Side>,
}

impl Partition {
    /// Validates that `components` holds exactly two groups.
    ///
    /// The group containing the smallest vertex becomes [`Side::First`].
    ///
    /// # Errors
    /// Returns [`ReplacementError::InvalidPartition`] when the map does not
    /// contain exactly two components.
    pub fn from_components(
        components: ComponentMap,
        vertex_count: usize,
        removed: &Edge,
    ) -> Result<Self> {
        let component_count = components.len();
        let invalid = || ReplacementError::InvalidPartition {
            removed: *removed,
            component_count,
        };
        if component_count != 2 {
            return Err(invalid());
        }

        let mut groups = components.into_values();
        let (Some(mut first), Some(mut second)) = (groups.next(), groups.next()) else {
            return Err(invalid());
        };
        if second.first() < first.first() {
            std::mem::swap(&mut first, &mut second);
        }

        let mut sides = vec![Side::First; vertex_count];
        for &vertex in &second {
            if let Some(side) = sides.get_mut(vertex) {
                *side = Side::Second;
            }
        }
        Ok(Self {
            first,
            second,
            sides,
        })
    }

    /// Returns the vertices of the component holding the smallest vertex id.
    #[must_use]
    pub fn first(&self) -> &[VertexId] {
        &self.first
    }

    /// Returns the vertices of the other component.
    #[must_use]
    pub fn second(&self) -> &[VertexId] {
        &self.second
    }

    /// Returns the side `vertex` lies on, or `None` when it is out of range.
    #[must_use]
    pub fn side(&self, vertex: VertexId) -> Option<Side> {
        self.sides.get(vertex).copied()
    }

    /// Returns `true` when the endpoints of `edge` lie in different components.
    #[must_use]
    pub fn crosses(&self, edge: &Edge) -> bool {
        match (self.side(edge.source()), self.side(edge.target())) {
            (Some(left), Some(right)) => left != right,
            _ => false,
        }
    }

    /// Returns the two components in side order.
    #[must_use]
    pub fn components(&self) -> [&[VertexId]; 2] {
        [&self.first, &self.second]
    }
}

/// Splits a spanning tree into the two components left by removing `removed`.
///
/// # Errors
/// Returns [`ReplacementError::Graph`] when a tree edge lies outside
/// `[0, vertex_count)`, [`ReplacementError::EdgeNotInTree`] when no tree edge
/// matches `removed`, and [`ReplacementError::InvalidPartition`] when the removal does
/// not leave exactly two components (for example when `tree_edges` is a
/// forest of a disconnected graph).
#[instrument(
    name = "partition",
    skip(tree_edges, removed),
    fields(removed = %removed, tree_edges = tree_edges.len())
)]
pub fn partition(
    tree_edges: &[Edge],
    vertex_count: usize,
    removed: &Edge,
    matching: EdgeMatching,
) -> Result<Partition> {
    check_endpoints(tree_edges, vertex_count)?;
    if !tree_edges
        .iter()
        .any(|edge| matching.matches(edge, removed))
    {
        return Err(ReplacementError::EdgeNotInTree { edge: *removed });
    }

    let components = find_components(tree_edges, vertex_count, removed, matching)?;
    let split = Partition::from_components(components, vertex_count, removed)?;
    debug!(
        first = split.first.len(),
        second = split.second.len(),
        "tree split into two components"
    );
    Ok(split)
}
