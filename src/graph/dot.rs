use std::fmt::Debug;
use std::io::Write;

use crate::graph::{Graph, UndirectedGraph};
use crate::Result;

/// Writes the graph structure in Graphviz DOT format, without edge labels
pub fn write_dot<V, E, O>(out: &mut O, graph: &UndirectedGraph<V, E>) -> Result<()>
where
    V: Debug,
    E: Debug,
    O: Write + ?Sized,
{
    write_graph(out, graph, |_| None)
}

/// Writes the graph in DOT format, labelling every edge with the `Debug`
/// form of its property
pub fn write_labeled_dot<V, E, O>(out: &mut O, graph: &UndirectedGraph<V, E>) -> Result<()>
where
    V: Debug,
    E: Debug,
    O: Write + ?Sized,
{
    write_graph(out, graph, |property| Some(format!("{:?}", property)))
}

/// Renders the unlabelled DOT form as a string
pub fn to_dot<V: Debug, E: Debug>(graph: &UndirectedGraph<V, E>) -> Result<String> {
    let mut buffer = Vec::new();
    write_dot(&mut buffer, graph)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Renders the labelled DOT form as a string
pub fn to_labeled_dot<V: Debug, E: Debug>(graph: &UndirectedGraph<V, E>) -> Result<String> {
    let mut buffer = Vec::new();
    write_labeled_dot(&mut buffer, graph)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_graph<V, E, O, L>(out: &mut O, graph: &UndirectedGraph<V, E>, label: L) -> Result<()>
where
    V: Debug,
    E: Debug,
    O: Write + ?Sized,
    L: Fn(&E) -> Option<String>,
{
    writeln!(out, "graph G {{")?;
    for v in graph.vertices() {
        writeln!(out, "  {};", v)?;
    }
    for (edge, property) in graph.edges_with_properties() {
        match label(property) {
            Some(text) => writeln!(
                out,
                "  {} -- {} [label=\"{}\"];",
                edge.source,
                edge.target,
                text.replace('"', "\\\"")
            )?,
            None => writeln!(out, "  {} -- {};", edge.source, edge.target)?,
        }
    }
    writeln!(out, "}}")?;
    Ok(())
}
