use std::fmt::Debug;
use log::warn;

use crate::graph::VertexId;
use crate::{Error, Result};

/// Result of a traversal from a single source
#[derive(Debug, Clone, PartialEq)]
pub struct TraversalResult<D> {
    /// Distances from source to each vertex, `None` when unreached
    pub distances: Vec<Option<D>>,

    /// Predecessor vertices in the traversal tree; the source has none
    pub predecessors: Vec<Option<VertexId>>,

    /// Source vertex ID
    pub source: VertexId,
}

/// Weighted shortest-path trees share the traversal result layout
pub type ShortestPathResult<W> = TraversalResult<W>;

impl<D: Copy + Debug> TraversalResult<D> {
    /// Returns true if the target was reached from the source
    pub fn is_reachable(&self, target: VertexId) -> bool {
        matches!(self.distances.get(target), Some(Some(_)))
    }

    /// Returns the distance to a vertex, if it was reached
    pub fn distance(&self, target: VertexId) -> Option<D> {
        self.distances.get(target).copied().flatten()
    }

    /// Number of vertices reached, the source included
    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Reconstructs the tree path from the source to `target`
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;

        while current != self.source {
            current = match self.predecessors[current] {
                Some(pred) => pred,
                None => {
                    warn!("Vertex {} was reached but has no predecessor", current);
                    return None;
                }
            };
            path.push(current);

            if path.len() > self.predecessors.len() {
                warn!("Predecessor chain from {} does not reach the source", target);
                return None;
            }
        }

        path.reverse();
        Some(path)
    }

    /// Copies predecessors into caller storage; unreached vertices and the
    /// source point at themselves
    pub fn write_predecessors(&self, out: &mut [VertexId]) -> Result<()> {
        check_storage(out.len(), self.predecessors.len())?;
        for (v, pred) in self.predecessors.iter().enumerate() {
            out[v] = pred.unwrap_or(v);
        }
        Ok(())
    }

    /// Copies distances into caller storage, writing `unreached` for vertices
    /// the traversal never reached
    pub fn write_distances(&self, out: &mut [D], unreached: D) -> Result<()> {
        check_storage(out.len(), self.distances.len())?;
        for (slot, distance) in out.iter_mut().zip(&self.distances) {
            *slot = distance.unwrap_or(unreached);
        }
        Ok(())
    }
}

pub(crate) fn check_storage(actual: usize, required: usize) -> Result<()> {
    if actual < required {
        return Err(Error::StorageTooSmall { required, actual });
    }
    Ok(())
}

/// Trait for single-source traversal algorithms
pub trait ShortestPathAlgorithm<W, G: ?Sized>
where
    W: Copy + Debug,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<TraversalResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &TraversalResult<W>, target: VertexId) -> Option<Vec<VertexId>> {
        result.path_to(target)
    }
}
