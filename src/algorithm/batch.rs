use std::fmt::Debug;

use rayon::prelude::*;

use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::{Graph, VertexId};
use crate::Result;

/// Runs `algorithm` from every listed source in parallel.
///
/// The graph is only read, so a single instance is shared across workers.
/// Results come back in the order of `sources`.
pub fn distances_from<A, W, G>(
    algorithm: &A,
    graph: &G,
    sources: &[VertexId],
) -> Result<Vec<Vec<Option<W>>>>
where
    A: ShortestPathAlgorithm<W, G> + Sync,
    W: Copy + Debug + Send,
    G: Graph + Sync + ?Sized,
{
    sources
        .par_iter()
        .map(|&source| {
            algorithm
                .compute_shortest_paths(graph, source)
                .map(|result| result.distances)
        })
        .collect()
}

/// All-pairs distance table: row `s` holds the distances from vertex `s`
pub fn distance_table<A, W, G>(algorithm: &A, graph: &G) -> Result<Vec<Vec<Option<W>>>>
where
    A: ShortestPathAlgorithm<W, G> + Sync,
    W: Copy + Debug + Send,
    G: Graph + Sync + ?Sized,
{
    let sources: Vec<VertexId> = graph.vertices().collect();
    distances_from(algorithm, graph, &sources)
}

/// Largest finite distance in a table, or `None` if no vertex reaches another
pub fn diameter<W: Copy + Ord>(table: &[Vec<Option<W>>]) -> Option<W> {
    table.iter().flatten().flatten().copied().max()
}
