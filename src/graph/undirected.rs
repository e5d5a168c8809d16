use crate::graph::traits::{EdgeWeight, Graph, MutableGraph, PropertyGraph};
use crate::graph::{EdgeDescriptor, EdgeId, VertexId};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Whether a graph keeps more than one edge between the same pair of vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgePolicy {
    /// Set-like: inserting an existing {u, v} is rejected
    #[default]
    Unique,
    /// Sequence-like: every insertion creates a new edge
    Parallel,
}

#[derive(Debug, Clone)]
struct EdgeRecord<E> {
    source: VertexId,
    target: VertexId,
    property: E,
}

/// An undirected graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V = (), E = ()> {
    /// Vertex properties, indexed by vertex ID
    vertices: Vec<V>,

    /// Edge records, indexed by edge ID
    edges: Vec<EdgeRecord<E>>,

    /// Incident edges for each vertex: vertex_id -> [(neighbour, edge_id)]
    adjacency: Vec<Vec<(VertexId, EdgeId)>>,

    policy: EdgePolicy,
}

impl<V, E> UndirectedGraph<V, E> {
    /// Creates a new empty graph that rejects parallel edges
    pub fn new() -> Self {
        Self::with_policy(EdgePolicy::Unique)
    }

    /// Creates a new empty graph with the given edge policy
    pub fn with_policy(policy: EdgePolicy) -> Self {
        UndirectedGraph {
            vertices: Vec::new(),
            edges: Vec::new(),
            adjacency: Vec::new(),
            policy,
        }
    }

    /// Returns the edge policy of this graph
    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    /// Returns the endpoints of an edge in insertion order
    pub fn edge_endpoints(&self, edge: EdgeId) -> Option<(VertexId, VertexId)> {
        self.edges.get(edge).map(|record| (record.source, record.target))
    }

    /// Iterates over all edges together with their properties
    pub fn edges_with_properties(&self) -> impl Iterator<Item = (EdgeDescriptor, &E)> + '_ {
        self.edges.iter().enumerate().map(|(id, record)| {
            (
                EdgeDescriptor {
                    id,
                    source: record.source,
                    target: record.target,
                },
                &record.property,
            )
        })
    }

    fn existing_edge(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        self.adjacency
            .get(u)?
            .iter()
            .find(|(neighbour, _)| *neighbour == v)
            .map(|(_, edge)| *edge)
    }
}

impl<V: Default, E> UndirectedGraph<V, E> {
    /// Creates a new graph with the specified number of isolated vertices
    pub fn with_vertices(vertices: usize, policy: EdgePolicy) -> Self {
        let mut graph = Self::with_policy(policy);
        graph.ensure_vertex(vertices);
        graph
    }

    /// Grows the vertex set so that it holds at least `count` vertices
    fn ensure_vertex(&mut self, count: usize) {
        if count > self.vertices.len() {
            debug!("Growing vertex set from {} to {}", self.vertices.len(), count);
            self.vertices.resize_with(count, V::default);
            self.adjacency.resize_with(count, Vec::new);
        }
    }
}

impl<V: Debug + Default, E: Debug + Default> UndirectedGraph<V, E> {
    /// Builds a graph from a list of vertex pairs.
    ///
    /// `vertex_count` allows isolated vertices; endpoints beyond it still grow
    /// the vertex set. Rejected duplicates are logged and skipped.
    pub fn from_edge_pairs<I>(pairs: I, vertex_count: usize, policy: EdgePolicy) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut graph = Self::with_vertices(vertex_count, policy);
        for (u, v) in pairs {
            let (_, inserted) = graph.add_edge(u, v);
            if !inserted {
                debug!("Skipping duplicate edge ({}, {})", u, v);
            }
        }
        graph
    }
}

impl<V: Debug + Default, W: EdgeWeight> UndirectedGraph<V, W> {
    /// Builds a weighted graph from vertex pairs and a weight per pair.
    ///
    /// Weights are aligned with the pairs by position, so a duplicate pair
    /// rejected by a `Unique` graph drops its weight.
    pub fn from_weighted_pairs(
        pairs: &[(VertexId, VertexId)],
        weights: &[W],
        vertex_count: usize,
        policy: EdgePolicy,
    ) -> crate::Result<Self> {
        if pairs.len() != weights.len() {
            return Err(crate::Error::WeightCountMismatch {
                expected: pairs.len(),
                actual: weights.len(),
            });
        }

        let mut graph = Self::with_vertices(vertex_count, policy);
        for (&(u, v), &weight) in pairs.iter().zip(weights) {
            let (_, inserted) = graph.add_edge_with(u, v, weight);
            if !inserted {
                debug!("Skipping duplicate edge ({}, {}) with weight {:?}", u, v, weight);
            }
        }
        Ok(graph)
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.edges.iter().all(|record| record.property >= W::zero())
    }
}

impl<V, E> Default for UndirectedGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug, E: Debug> Graph for UndirectedGraph<V, E> {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(0..self.vertices.len())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = EdgeDescriptor> + '_> {
        Box::new(self.edges_with_properties().map(|(edge, _)| edge))
    }

    fn out_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = EdgeDescriptor> + '_> {
        if let Some(incident) = self.adjacency.get(vertex) {
            Box::new(incident.iter().map(move |&(target, id)| EdgeDescriptor {
                id,
                source: vertex,
                target,
            }))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency.get(vertex).map_or(0, Vec::len)
    }
}

impl<V: Debug, E: Debug> PropertyGraph for UndirectedGraph<V, E> {
    type VertexProperty = V;
    type EdgeProperty = E;

    fn vertex_property(&self, vertex: VertexId) -> Option<&V> {
        self.vertices.get(vertex)
    }

    fn edge_property(&self, edge: EdgeId) -> Option<&E> {
        self.edges.get(edge).map(|record| &record.property)
    }
}

impl<V: Debug + Default, E: Debug> MutableGraph for UndirectedGraph<V, E> {
    fn add_vertex_with(&mut self, property: V) -> VertexId {
        let new_id = self.vertices.len();
        self.vertices.push(property);
        self.adjacency.push(Vec::new());
        new_id
    }

    fn add_edge_with(&mut self, u: VertexId, v: VertexId, property: E) -> (EdgeId, bool) {
        self.ensure_vertex(u.max(v) + 1);

        if self.policy == EdgePolicy::Unique {
            if let Some(existing) = self.existing_edge(u, v) {
                return (existing, false);
            }
        }

        let id = self.edges.len();
        self.edges.push(EdgeRecord {
            source: u,
            target: v,
            property,
        });

        // A self-loop is listed once in its vertex's adjacency
        self.adjacency[u].push((v, id));
        if u != v {
            self.adjacency[v].push((u, id));
        }

        (id, true)
    }

    fn vertex_property_mut(&mut self, vertex: VertexId) -> Option<&mut V> {
        self.vertices.get_mut(vertex)
    }

    fn edge_property_mut(&mut self, edge: EdgeId) -> Option<&mut E> {
        self.edges.get_mut(edge).map(|record| &mut record.property)
    }
}
