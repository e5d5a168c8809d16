pub mod traits;
pub mod undirected;
pub mod generators;
pub mod dot;

pub use traits::{EdgeWeight, Graph, MutableGraph, PathWeight, PropertyGraph};
pub use undirected::{EdgePolicy, UndirectedGraph};

/// Dense vertex index in `[0, vertex_count)`
pub type VertexId = usize;

/// Dense edge index assigned in insertion order
pub type EdgeId = usize;

/// Names an edge together with its endpoints.
///
/// Out-edge iteration orients the descriptor so that `source` is the vertex
/// being queried; edge iteration reports the endpoints in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeDescriptor {
    pub id: EdgeId,
    pub source: VertexId,
    pub target: VertexId,
}

impl EdgeDescriptor {
    /// Returns the same edge with its endpoints swapped
    pub fn reversed(self) -> Self {
        EdgeDescriptor {
            id: self.id,
            source: self.target,
            target: self.source,
        }
    }
}
