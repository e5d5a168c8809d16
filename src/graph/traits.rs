use std::fmt::Debug;
use num_traits::{Float, Num};
use ordered_float::OrderedFloat;

use crate::graph::{EdgeDescriptor, EdgeId, VertexId};

/// Numeric edge weight: integers, or floats wrapped in `OrderedFloat`
pub trait EdgeWeight: Num + Copy + PartialOrd + Debug {}

impl<T> EdgeWeight for T where T: Num + Copy + PartialOrd + Debug {}

/// Totally ordered weight whose path sums report overflow instead of wrapping
pub trait PathWeight: EdgeWeight + Ord {
    /// Sum of two path lengths, `None` if it does not fit the type
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_path_weight {
    ($($t:ty),*) => {
        $(
            impl PathWeight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )*
    };
}

integer_path_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// Float sums saturate at infinity rather than overflowing
impl<F: Float + Debug> PathWeight for OrderedFloat<F> {
    fn checked_sum(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}

/// Trait representing an undirected graph over dense vertex indices
pub trait Graph: Debug {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all vertex IDs
    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Returns an iterator over all edges in insertion order
    fn edges(&self) -> Box<dyn Iterator<Item = EdgeDescriptor> + '_>;

    /// Returns an iterator over the edges incident to a vertex, oriented away from it
    fn out_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = EdgeDescriptor> + '_>;

    /// Returns an iterator over the vertices adjacent to a vertex
    fn adjacent_vertices(&self, vertex: VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.out_edges(vertex).map(|edge| edge.target))
    }

    /// Returns the number of edges incident to a vertex
    fn degree(&self, vertex: VertexId) -> usize {
        self.out_edges(vertex).count()
    }

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns the first edge joining the two vertices, if any
    fn find_edge(&self, u: VertexId, v: VertexId) -> Option<EdgeDescriptor> {
        self.out_edges(u).find(|edge| edge.target == v)
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.find_edge(u, v).is_some()
    }
}

/// Trait for graphs carrying per-vertex and per-edge property records
pub trait PropertyGraph: Graph {
    type VertexProperty;
    type EdgeProperty;

    /// Gets the property attached to a vertex
    fn vertex_property(&self, vertex: VertexId) -> Option<&Self::VertexProperty>;

    /// Gets the property attached to an edge
    fn edge_property(&self, edge: EdgeId) -> Option<&Self::EdgeProperty>;
}

/// Trait for mutable graph operations
pub trait MutableGraph: PropertyGraph {
    /// Adds a vertex carrying the given property and returns its ID
    fn add_vertex_with(&mut self, property: Self::VertexProperty) -> VertexId;

    /// Adds an undirected edge carrying the given property.
    ///
    /// Endpoints beyond the current vertex count are created on demand. The flag
    /// is false when the edge already exists and the graph rejects parallel edges;
    /// the returned ID then names the existing edge.
    fn add_edge_with(
        &mut self,
        u: VertexId,
        v: VertexId,
        property: Self::EdgeProperty,
    ) -> (EdgeId, bool);

    /// Adds a vertex with a default property
    fn add_vertex(&mut self) -> VertexId
    where
        Self::VertexProperty: Default,
    {
        self.add_vertex_with(Default::default())
    }

    /// Adds an edge with a default property
    fn add_edge(&mut self, u: VertexId, v: VertexId) -> (EdgeId, bool)
    where
        Self::EdgeProperty: Default,
    {
        self.add_edge_with(u, v, Default::default())
    }

    /// Gets a mutable reference to a vertex property
    fn vertex_property_mut(&mut self, vertex: VertexId) -> Option<&mut Self::VertexProperty>;

    /// Gets a mutable reference to an edge property
    fn edge_property_mut(&mut self, edge: EdgeId) -> Option<&mut Self::EdgeProperty>;
}
