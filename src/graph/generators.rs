use crate::graph::traits::{EdgeWeight, MutableGraph};
use crate::graph::{EdgePolicy, UndirectedGraph, VertexId};
use crate::Result;
use log::error;
use ordered_float::OrderedFloat;
use rand::Rng;

/// Builds C_n by adding the n vertices first, then the edges i -- (i+1) mod n
pub fn cycle_by_vertices(n: usize) -> UndirectedGraph {
    let mut graph: UndirectedGraph = UndirectedGraph::new();

    let vertices: Vec<VertexId> = (0..n).map(|_| graph.add_vertex()).collect();

    for i in 0..n {
        let (_, inserted) = graph.add_edge(vertices[i], vertices[(i + 1) % n]);
        if !inserted {
            error!("Could not create edge ({}, {})", vertices[i], vertices[(i + 1) % n]);
        }
    }

    graph
}

/// Builds C_n from edges alone; the graph creates vertices as they are referenced
pub fn cycle_by_edges(n: usize) -> UndirectedGraph {
    let mut graph: UndirectedGraph = UndirectedGraph::new();

    for i in 0..n {
        let (_, inserted) = graph.add_edge(i, (i + 1) % n);
        if !inserted {
            error!("Could not create edge ({}, {})", i, (i + 1) % n);
        }
    }

    graph
}

/// The vertex pairs i -- (i+1) mod n of C_n
pub fn cycle_pairs(n: usize) -> Vec<(VertexId, VertexId)> {
    (0..n).map(|i| (i, (i + 1) % n)).collect()
}

/// Builds C_n all at once from a precomputed pair list and an explicit vertex count
pub fn cycle_from_pairs(n: usize) -> UndirectedGraph {
    UndirectedGraph::from_edge_pairs(cycle_pairs(n), n, EdgePolicy::Unique)
}

/// Builds a weighted cycle over `weights.len()` vertices linking i to (i+3) mod n.
///
/// The k-th weight belongs to the k-th pair. Pairs that collapse onto an
/// existing edge (n = 6, for instance) keep the first weight.
pub fn weighted_cycle<W: EdgeWeight>(weights: &[W]) -> Result<UndirectedGraph<(), W>> {
    let n = weights.len();
    let pairs: Vec<(VertexId, VertexId)> = (0..n).map(|i| (i, (i + 3) % n)).collect();
    UndirectedGraph::from_weighted_pairs(&pairs, weights, n, EdgePolicy::Unique)
}

/// Builds C_n with uniform random real weights in [0, 100)
pub fn random_weighted_cycle<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
) -> UndirectedGraph<(), OrderedFloat<f64>> {
    let mut graph: UndirectedGraph<(), OrderedFloat<f64>> =
        UndirectedGraph::with_vertices(n, EdgePolicy::Parallel);

    for (u, v) in cycle_pairs(n) {
        let weight = OrderedFloat(rng.gen_range(0.0..100.0));
        graph.add_edge_with(u, v, weight);
    }

    graph
}

/// A cell of a toroidal grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCell {
    pub index: VertexId,
    pub x: usize,
    pub y: usize,
    /// True for cells on the first or last row or column
    pub border: bool,
}

/// A link between two neighbouring grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridEdge {
    pub weight: u32,
    /// True when the link crosses the edge of the grid and wraps around
    pub wrapped: bool,
    pub carved: bool,
}

impl Default for GridEdge {
    fn default() -> Self {
        GridEdge {
            weight: 1,
            wrapped: false,
            carved: false,
        }
    }
}

/// Builds a `width` x `height` torus where every cell links to its 8 neighbours.
///
/// Cell (x, y) has index y * width + x. Each neighbouring pair is linked once.
pub fn torus_grid(width: usize, height: usize) -> UndirectedGraph<GridCell, GridEdge> {
    let mut graph: UndirectedGraph<GridCell, GridEdge> =
        UndirectedGraph::with_policy(EdgePolicy::Unique);

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex_with(GridCell {
                index: y * width + x,
                x,
                y,
                border: x == 0 || y == 0 || x + 1 == width || y + 1 == height,
            });
        }
    }

    if width == 0 || height == 0 {
        return graph;
    }

    // Wrap signed coordinates around the torus
    let rank = |x: isize, y: isize| -> VertexId {
        let wx = x.rem_euclid(width as isize) as usize;
        let wy = y.rem_euclid(height as isize) as usize;
        wy * width + wx
    };

    for y in 0..height as isize {
        for x in 0..width as isize {
            let v = rank(x, y);
            for dy in -1..=1isize {
                for dx in -1..=1isize {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let (nx, ny) = (x + dx, y + dy);
                    let w = rank(nx, ny);
                    if w == v {
                        continue;
                    }
                    let wrapped =
                        nx < 0 || ny < 0 || nx >= width as isize || ny >= height as isize;
                    graph.add_edge_with(
                        v,
                        w,
                        GridEdge {
                            wrapped,
                            ..GridEdge::default()
                        },
                    );
                }
            }
        }
    }

    graph
}
