use log::debug;

use crate::algorithm::events::{EventKind, TraversalEvent, TraversalSignals};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{EdgeDescriptor, PathWeight, PropertyGraph, VertexId};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation.
///
/// The frontier is keyed by (tentative distance, vertex), so among vertices at
/// the same distance the lowest index is settled first. Relaxation is strict:
/// a predecessor is only replaced by a strictly shorter path.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    pub const NAME: &'static str = "Dijkstra";

    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Computes shortest paths with weights taken from `weight`
    pub fn compute_with<G, W, F>(
        &self,
        graph: &G,
        source: VertexId,
        weight: F,
    ) -> Result<ShortestPathResult<W>>
    where
        G: PropertyGraph + ?Sized,
        W: PathWeight,
        F: Fn(EdgeDescriptor, &G::EdgeProperty) -> W,
    {
        self.traverse(graph, source, weight, &mut TraversalSignals::new())
    }

    /// Computes shortest paths, emitting events to the connected slots.
    ///
    /// Every edge weight is checked in both orientations before the search
    /// starts; a negative weight is rejected with `Error::InvalidWeight`. A
    /// path length that does not fit `W` fails with `Error::DistanceOverflow`.
    pub fn traverse<G, W, F>(
        &self,
        graph: &G,
        source: VertexId,
        weight: F,
        signals: &mut TraversalSignals<'_, W>,
    ) -> Result<ShortestPathResult<W>>
    where
        G: PropertyGraph + ?Sized,
        W: PathWeight,
        F: Fn(EdgeDescriptor, &G::EdgeProperty) -> W,
    {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        signals.check_storage(n)?;

        let edge_weight = |edge: EdgeDescriptor| -> Result<W> {
            let w = graph
                .edge_property(edge.id)
                .map(|property| weight(edge, property))
                .ok_or(Error::InvalidEdge(edge.source, edge.target))?;
            if w < W::zero() {
                return Err(Error::InvalidWeight(format!(
                    "{:?} on edge ({}, {})",
                    w, edge.source, edge.target
                )));
            }
            Ok(w)
        };

        // Relaxation may hand the accessor either orientation of an edge
        for edge in graph.edges() {
            edge_weight(edge)?;
            edge_weight(edge.reversed())?;
        }

        // Initialize distances and predecessors
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<VertexId>> = vec![None; n];
        let mut settled = vec![false; n];

        // Distance to source is 0
        distances[source] = Some(W::zero());

        let mut queue = BinaryHeapWrapper::with_capacity(n);
        queue.push(source, W::zero());
        signals.emit(&TraversalEvent::for_vertex(
            EventKind::DiscoverVertex,
            source,
            Some(W::zero()),
        ));

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry: u was settled through a shorter path
            if settled[u] {
                continue;
            }
            settled[u] = true;
            signals.emit(&TraversalEvent::for_vertex(EventKind::ExamineVertex, u, Some(dist_u)));

            // Relax all incident edges
            for edge in graph.out_edges(u) {
                let v = edge.target;
                let new_dist = dist_u
                    .checked_sum(edge_weight(edge)?)
                    .ok_or(Error::DistanceOverflow(v))?;

                let should_update = match distances[v] {
                    None => {
                        signals.emit(&TraversalEvent::for_vertex(
                            EventKind::DiscoverVertex,
                            v,
                            Some(new_dist),
                        ));
                        true
                    }
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(v, new_dist);
                    signals.emit(&TraversalEvent::for_edge(EventKind::EdgeRelaxed, edge, Some(new_dist)));
                } else {
                    signals.emit(&TraversalEvent::for_edge(
                        EventKind::EdgeNotRelaxed,
                        edge,
                        distances[v],
                    ));
                }
            }

            signals.emit(&TraversalEvent::for_vertex(EventKind::FinishVertex, u, Some(dist_u)));
        }

        debug!(
            "Dijkstra from {} settled {} of {} vertices",
            source,
            settled.iter().filter(|s| **s).count(),
            n
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: PathWeight,
    G: PropertyGraph<EdgeProperty = W> + ?Sized,
{
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<ShortestPathResult<W>> {
        self.compute_with(graph, source, |_, weight| *weight)
    }
}
