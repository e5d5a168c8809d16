use std::collections::VecDeque;
use std::ops::Add;

use log::debug;
use num_traits::One;

use crate::algorithm::events::{EventKind, TraversalEvent, TraversalSignals};
use crate::algorithm::{ShortestPathAlgorithm, TraversalResult};
use crate::graph::{Graph, VertexId};
use crate::{Error, Result};

/// Breadth-first search with unit edge cost.
///
/// Vertices leave the frontier in FIFO order and their edges are inspected in
/// insertion order, so among equally short paths the first one found wins.
#[derive(Debug, Default)]
pub struct Bfs;

impl Bfs {
    pub const NAME: &'static str = "Breadth-first search";

    /// Creates a new BFS instance
    pub fn new() -> Self {
        Bfs
    }

    /// Runs BFS from `source`, emitting events to the connected slots
    pub fn traverse<G>(
        &self,
        graph: &G,
        source: VertexId,
        signals: &mut TraversalSignals<'_, usize>,
    ) -> Result<()>
    where
        G: Graph + ?Sized,
    {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        signals.check_storage(n)?;

        // Hop count doubles as the visited marker
        let mut hops: Vec<Option<usize>> = vec![None; n];
        let mut queue = VecDeque::with_capacity(n);

        hops[source] = Some(0);
        queue.push_back(source);
        signals.emit(&TraversalEvent::for_vertex(EventKind::DiscoverVertex, source, Some(0)));

        while let Some(u) = queue.pop_front() {
            let dist_u = hops[u].unwrap_or_default();
            signals.emit(&TraversalEvent::for_vertex(EventKind::ExamineVertex, u, Some(dist_u)));

            for edge in graph.out_edges(u) {
                let v = edge.target;
                signals.emit(&TraversalEvent::for_edge(EventKind::ExamineEdge, edge, hops[v]));

                if hops[v].is_none() {
                    let dist_v = dist_u + 1;
                    hops[v] = Some(dist_v);
                    signals.emit(&TraversalEvent::for_edge(EventKind::TreeEdge, edge, Some(dist_v)));
                    signals.emit(&TraversalEvent::for_vertex(
                        EventKind::DiscoverVertex,
                        v,
                        Some(dist_v),
                    ));
                    queue.push_back(v);
                } else {
                    signals.emit(&TraversalEvent::for_edge(EventKind::NonTreeEdge, edge, hops[v]));
                }
            }

            signals.emit(&TraversalEvent::for_vertex(EventKind::FinishVertex, u, Some(dist_u)));
        }

        debug!(
            "BFS from {} reached {} of {} vertices",
            source,
            hops.iter().filter(|h| h.is_some()).count(),
            n
        );
        Ok(())
    }

    /// Runs BFS and collects distances and predecessors
    pub fn compute<G>(&self, graph: &G, source: VertexId) -> Result<TraversalResult<usize>>
    where
        G: Graph + ?Sized,
    {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<usize>> = vec![None; n];
        let mut predecessors: Vec<Option<VertexId>> = vec![None; n];
        distances[source] = Some(0);

        {
            let mut signals = TraversalSignals::new();
            signals.connect(EventKind::TreeEdge, "collect", |event: &TraversalEvent<usize>| {
                distances[event.vertex] = event.distance;
                predecessors[event.vertex] = event.predecessor;
            });
            self.traverse(graph, source, &mut signals)?;
        }

        Ok(TraversalResult {
            distances,
            predecessors,
            source,
        })
    }

    /// Runs BFS, filling caller-provided, pre-initialized storage.
    ///
    /// Either slice may be omitted. Only tree edges write: the source's
    /// predecessor and every unreached vertex keep their initial values.
    pub fn record_into<G, S>(
        &self,
        graph: &G,
        source: VertexId,
        distances: Option<&mut [S]>,
        predecessors: Option<&mut [VertexId]>,
    ) -> Result<()>
    where
        G: Graph + ?Sized,
        S: Copy + Add<Output = S> + One,
    {
        let mut signals = TraversalSignals::new();
        if let Some(storage) = distances {
            signals.record_distances(storage);
        }
        if let Some(storage) = predecessors {
            signals.record_predecessors(storage);
        }
        self.traverse(graph, source, &mut signals)
    }
}

impl<G> ShortestPathAlgorithm<usize, G> for Bfs
where
    G: Graph + ?Sized,
{
    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<TraversalResult<usize>> {
        self.compute(graph, source)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
