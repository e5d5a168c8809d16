pub mod traits;
pub mod events;
pub mod bfs;
pub mod dijkstra;
pub mod batch;

pub use events::{EventKind, TraversalEvent, TraversalSignals};
pub use traits::{ShortestPathAlgorithm, ShortestPathResult, TraversalResult};
