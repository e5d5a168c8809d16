//! Graph Walk - undirected adjacency-list graphs and classic traversals
//!
//! This library builds undirected graphs over densely indexed vertices (with
//! helpers for the cycle graph C_n in several construction styles) and runs
//! breadth-first search and Dijkstra's single-source shortest paths over them.
//!
//! Traversals report their progress through named callback slots
//! ([`algorithm::events::TraversalSignals`]), so distance and predecessor
//! recording can be attached to caller-owned storage.

pub mod algorithm;
pub mod cli;
pub mod data_structures;
pub mod graph;
pub mod snapshot;

pub use algorithm::{
    bfs::Bfs, dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult, TraversalResult,
};
/// Re-export main types for convenient use
pub use graph::undirected::{EdgePolicy, UndirectedGraph};
pub use graph::{EdgeDescriptor, EdgeId, VertexId};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Invalid edge weight: {0}")]
    InvalidWeight(String),

    #[error("Path length to vertex {0} overflows the weight type")]
    DistanceOverflow(usize),

    #[error("Expected {expected} weights, got {actual}")]
    WeightCountMismatch { expected: usize, actual: usize },

    #[error("Result storage holds {actual} entries but the graph has {required} vertices")]
    StorageTooSmall { required: usize, actual: usize },

    #[error("Unsupported snapshot format version: {0}")]
    UnsupportedSnapshotVersion(u32),

    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
