//! Command-line front end for the `graph_demo` binary.
//!
//! Every command writes a plain-text report to the given writer. The report
//! layout is meant for people, not for parsing.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{info, LevelFilter};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::algorithm::batch;
use crate::algorithm::{ShortestPathAlgorithm, TraversalResult};
use crate::graph::dot::{write_dot, write_labeled_dot};
use crate::graph::generators::{
    cycle_by_edges, cycle_by_vertices, cycle_from_pairs, random_weighted_cycle, torus_grid,
    weighted_cycle,
};
use crate::graph::{Graph, MutableGraph, PropertyGraph, UndirectedGraph};
use crate::snapshot::GraphSnapshot;
use crate::{Bfs, Dijkstra, Result};

/// Edge weights of the default weighted cycle
pub const DEFAULT_WEIGHTS: [u32; 8] = [1, 3, 2, 4, 3, 1, 2, 3];

#[derive(Parser, Debug, Clone)]
#[command(name = "graph_demo", version, about = "Build small graphs and walk them")]
pub struct DemoConfig {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info", env = "GRAPH_DEMO_LOG", value_parser = parse_level)]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the vertices, edges and adjacency of a cycle graph
    Info(GraphArgs),

    /// Breadth-first search over a cycle graph
    Bfs {
        #[command(flatten)]
        graph: GraphArgs,

        /// Source vertex
        #[arg(long, short, default_value_t = 0)]
        source: usize,
    },

    /// Dijkstra over a weighted cycle
    Dijkstra {
        #[command(flatten)]
        weights: WeightArgs,

        /// Source vertex
        #[arg(long, short, default_value_t = 0)]
        source: usize,
    },

    /// Dijkstra over a cycle with seeded random real weights
    Random {
        /// Number of vertices in the cycle
        #[arg(long, short = 'n', default_value_t = 8)]
        vertices: usize,

        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Print a cycle graph in Graphviz DOT format
    Dot(GraphArgs),

    /// Print the all-pairs BFS distance table of a cycle graph
    Table(GraphArgs),

    /// Build a toroidal grid, carve some links and print it in DOT format
    Torus {
        #[arg(long, default_value_t = 10)]
        width: usize,

        #[arg(long, default_value_t = 5)]
        height: usize,
    },

    /// Save a weighted cycle as a JSON snapshot
    Save {
        #[command(flatten)]
        weights: WeightArgs,

        /// Snapshot file to write
        path: PathBuf,
    },

    /// Load a JSON snapshot and run Dijkstra over it
    Load {
        /// Snapshot file to read
        path: PathBuf,

        /// Source vertex
        #[arg(long, short, default_value_t = 0)]
        source: usize,
    },
}

/// How the unweighted cycle is constructed
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builder {
    /// Add all vertices, then the edges
    Vertices,
    /// Add only edges; vertices are created on demand
    Edges,
    /// Build from a precomputed list of vertex pairs
    Pairs,
}

#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Number of vertices in the cycle
    #[arg(long, short = 'n', default_value_t = 8)]
    pub vertices: usize,

    /// Construction style
    #[arg(long, value_enum, default_value_t = Builder::Pairs)]
    pub builder: Builder,
}

impl GraphArgs {
    pub fn build(&self) -> UndirectedGraph {
        match self.builder {
            Builder::Vertices => cycle_by_vertices(self.vertices),
            Builder::Edges => cycle_by_edges(self.vertices),
            Builder::Pairs => cycle_from_pairs(self.vertices),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct WeightArgs {
    /// Comma-separated edge weights; the cycle gets one vertex per weight
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_WEIGHTS)]
    pub weights: Vec<u32>,
}

impl WeightArgs {
    pub fn build(&self) -> Result<UndirectedGraph<(), u32>> {
        weighted_cycle(&self.weights)
    }
}

/// Runs one command, writing its report to `out`
pub fn run<O: Write + ?Sized>(command: &Command, out: &mut O) -> Result<()> {
    match command {
        Command::Info(args) => report_structure(&args.build(), out),
        Command::Bfs { graph, source } => {
            let graph = graph.build();
            let result = Bfs::new().compute(&graph, *source)?;
            report_traversal(&result, out)
        }
        Command::Dijkstra { weights, source } => {
            let graph = weights.build()?;
            let result = Dijkstra::new().compute_shortest_paths(&graph, *source)?;
            report_weights(&graph, out)?;
            report_traversal(&result, out)
        }
        Command::Random { vertices, seed } => {
            let mut rng = StdRng::seed_from_u64(*seed);
            let graph = random_weighted_cycle(*vertices, &mut rng);
            let result =
                Dijkstra::new().compute_with(&graph, 0, |_, weight: &OrderedFloat<f64>| *weight)?;
            report_weights(&graph, out)?;
            report_traversal(&result, out)
        }
        Command::Dot(args) => write_dot(out, &args.build()),
        Command::Table(args) => {
            let graph = args.build();
            let table = batch::distance_table(&Bfs::new(), &graph)?;
            for (source, row) in table.iter().enumerate() {
                let cells: Vec<String> = row
                    .iter()
                    .map(|d| d.map_or_else(|| "-".to_string(), |d| d.to_string()))
                    .collect();
                writeln!(out, "{}: {}", source, cells.join(" "))?;
            }
            if let Some(diameter) = batch::diameter(&table) {
                writeln!(out, "Diameter: {}", diameter)?;
            }
            Ok(())
        }
        Command::Torus { width, height } => {
            let mut grid = torus_grid(*width, *height);
            let carve: Vec<_> = grid
                .edges()
                .filter(|edge| (edge.source + edge.target) % 2 == 0)
                .collect();
            for edge in carve {
                let bonus = edge.source.checked_rem(edge.target).unwrap_or(0) as u32;
                if let Some(link) = grid.edge_property_mut(edge.id) {
                    link.carved = true;
                    link.weight += bonus;
                }
            }
            info!(
                "Torus {}x{} has {} cells and {} links",
                width,
                height,
                grid.vertex_count(),
                grid.edge_count()
            );
            write_labeled_dot(out, &grid)
        }
        Command::Save { weights, path } => {
            let graph = weights.build()?;
            GraphSnapshot::from_weighted(&graph).save(path)?;
            writeln!(
                out,
                "Saved {} vertices and {} edges to {}",
                graph.vertex_count(),
                graph.edge_count(),
                path.display()
            )?;
            Ok(())
        }
        Command::Load { path, source } => {
            let snapshot: GraphSnapshot<u32> = GraphSnapshot::load(path)?;
            let graph = snapshot.to_weighted_graph()?;
            let result = Dijkstra::new().compute_shortest_paths(&graph, *source)?;
            report_traversal(&result, out)
        }
    }
}

fn parse_level(value: &str) -> std::result::Result<LevelFilter, String> {
    value
        .parse()
        .map_err(|_| format!("unknown log level '{}'", value))
}

/// Prints vertices, edges, counts and the neighbourhood of vertex 0
pub fn report_structure<G, O>(graph: &G, out: &mut O) -> Result<()>
where
    G: Graph + ?Sized,
    O: Write + ?Sized,
{
    let vertices: Vec<String> = graph.vertices().map(|v| v.to_string()).collect();
    writeln!(out, "Vertices: {}", vertices.join(" "))?;

    let edges: Vec<String> = graph
        .edges()
        .map(|edge| format!("({},{})", edge.source, edge.target))
        .collect();
    writeln!(out, "Edges: {}", edges.join(" "))?;

    writeln!(out, "Number of vertices: {}", graph.vertex_count())?;
    writeln!(out, "Number of edges:    {}", graph.edge_count())?;

    if graph.has_vertex(0) {
        let adjacent: Vec<String> = graph.adjacent_vertices(0).map(|v| v.to_string()).collect();
        writeln!(out, "Vertices adjacent to 0: {}", adjacent.join(" "))?;

        let out_edges: Vec<String> = graph
            .out_edges(0)
            .map(|edge| format!("{} (source: {})", edge.target, edge.source))
            .collect();
        writeln!(out, "Out edges of 0: {}", out_edges.join(" "))?;
    }
    Ok(())
}

/// Prints every edge with its weight
pub fn report_weights<G, O>(graph: &G, out: &mut O) -> Result<()>
where
    G: PropertyGraph + ?Sized,
    G::EdgeProperty: std::fmt::Debug,
    O: Write + ?Sized,
{
    writeln!(out, "Weights:")?;
    for edge in graph.edges() {
        if let Some(weight) = graph.edge_property(edge.id) {
            writeln!(out, "Edge ({},{}) = {:?}", edge.source, edge.target, weight)?;
        }
    }
    Ok(())
}

/// Prints the predecessor and distance of every vertex
pub fn report_traversal<D, O>(result: &TraversalResult<D>, out: &mut O) -> Result<()>
where
    D: Copy + std::fmt::Debug,
    O: Write + ?Sized,
{
    for (v, distance) in result.distances.iter().enumerate() {
        match distance {
            Some(distance) => writeln!(
                out,
                "Vertex {} has predecessor {} and distance {:?}",
                v,
                result.predecessors[v].unwrap_or(v),
                distance
            )?,
            None => writeln!(out, "Vertex {} is unreachable", v)?,
        }
    }
    Ok(())
}
