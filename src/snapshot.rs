//! Versioned JSON snapshots of a graph's structure.
//!
//! A snapshot stores the vertex count, the edge list in insertion order, the
//! edge policy and, for weighted graphs, one weight per edge. Vertex and edge
//! property records other than weights are not persisted.

use std::fmt::Debug;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::graph::{EdgePolicy, EdgeWeight, Graph, UndirectedGraph, VertexId};
use crate::{Error, Result};

/// Snapshot layout version written by this crate
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot<W> {
    pub format_version: u32,
    pub created_at: DateTime<Utc>,
    pub vertex_count: usize,
    #[serde(default)]
    pub policy: EdgePolicy,
    pub edges: Vec<(VertexId, VertexId)>,
    /// Read as `None` when the key is absent
    pub weights: Option<Vec<W>>,
}

impl<W> GraphSnapshot<W> {
    /// Captures the structure of a graph, leaving edge properties out
    pub fn from_graph<V: Debug, E: Debug>(graph: &UndirectedGraph<V, E>) -> Self {
        GraphSnapshot {
            format_version: FORMAT_VERSION,
            created_at: Utc::now(),
            vertex_count: graph.vertex_count(),
            policy: graph.policy(),
            edges: graph.edges().map(|edge| (edge.source, edge.target)).collect(),
            weights: None,
        }
    }

    /// Checks the version, the edge endpoints and the weight count
    pub fn validate(&self) -> Result<()> {
        if self.format_version != FORMAT_VERSION {
            return Err(Error::UnsupportedSnapshotVersion(self.format_version));
        }

        if let Some(&(u, v)) = self
            .edges
            .iter()
            .find(|(u, v)| *u >= self.vertex_count || *v >= self.vertex_count)
        {
            return Err(Error::InvalidEdge(u, v));
        }

        if let Some(weights) = &self.weights {
            if weights.len() != self.edges.len() {
                return Err(Error::WeightCountMismatch {
                    expected: self.edges.len(),
                    actual: weights.len(),
                });
            }
        }

        Ok(())
    }

    /// Rebuilds the unweighted structure; stored weights are ignored
    pub fn to_graph(&self) -> Result<UndirectedGraph> {
        self.validate()?;
        Ok(UndirectedGraph::from_edge_pairs(
            self.edges.iter().copied(),
            self.vertex_count,
            self.policy,
        ))
    }
}

impl<W: EdgeWeight> GraphSnapshot<W> {
    /// Captures a weighted graph, one weight per edge
    pub fn from_weighted<V: Debug>(graph: &UndirectedGraph<V, W>) -> Self {
        let mut snapshot = Self::from_graph(graph);
        snapshot.weights = Some(
            graph
                .edges_with_properties()
                .map(|(_, weight)| *weight)
                .collect(),
        );
        snapshot
    }

    /// Rebuilds the weighted graph
    pub fn to_weighted_graph(&self) -> Result<UndirectedGraph<(), W>> {
        self.validate()?;
        let weights = self.weights.as_deref().ok_or(Error::WeightCountMismatch {
            expected: self.edges.len(),
            actual: 0,
        })?;
        UndirectedGraph::from_weighted_pairs(&self.edges, weights, self.vertex_count, self.policy)
    }
}

impl<W: Serialize> GraphSnapshot<W> {
    /// Writes the snapshot as pretty-printed JSON
    pub fn write_json<O: Write>(&self, out: O) -> Result<()> {
        serde_json::to_writer_pretty(out, self)?;
        Ok(())
    }

    /// Saves the snapshot to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_json(&mut writer)?;
        writer.flush()?;
        debug!("Saved snapshot with {} edges to {}", self.edges.len(), path.display());
        Ok(())
    }
}

impl<W: DeserializeOwned> GraphSnapshot<W> {
    /// Reads and validates a JSON snapshot
    pub fn read_json<I: Read>(input: I) -> Result<Self> {
        let snapshot: Self = serde_json::from_reader(input)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Loads and validates a snapshot file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let snapshot = Self::read_json(BufReader::new(File::open(path)?))?;
        debug!("Loaded snapshot with {} edges from {}", snapshot.edges.len(), path.display());
        Ok(snapshot)
    }
}
