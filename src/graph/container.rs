use std::collections::BTreeMap;
use std::fmt;

use crate::error::{GraphError, Result};
use crate::graph::algos;
use crate::graph::types::{PathResult, Weight, NO_EDGE};

/// Per-vertex record: the caller-supplied payload plus the outgoing
/// adjacency (neighbor id -> weight). Keeping both in one record makes
/// the payload/adjacency key sets identical by construction.
#[derive(Debug, Clone)]
pub(crate) struct VertexRecord<P> {
    pub(crate) payload: P,
    pub(crate) edges: BTreeMap<String, Weight>,
}

/// A mutable directed weighted graph keyed by string vertex identifiers.
///
/// Vertices are created exactly once and cannot be removed or renamed;
/// edges may be overwritten (last write wins). Vertex and neighbor
/// iteration is lexicographic, so listing, rendering, and traversal
/// expansion order are all deterministic.
///
/// Single-threaded by design: mutation takes `&mut self`, traversal
/// takes `&self`, and visitor callbacks receive borrows, so a callback
/// cannot mutate the graph it is traversing.
#[derive(Debug, Clone)]
pub struct LabeledGraph<P> {
    vertices: BTreeMap<String, VertexRecord<P>>,
}

impl<P> Default for LabeledGraph<P> {
    fn default() -> Self {
        LabeledGraph {
            vertices: BTreeMap::new(),
        }
    }
}

impl<P> LabeledGraph<P> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices in the graph
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether a vertex identifier is present in the graph
    pub fn contains(&self, id: &str) -> bool {
        self.vertices.contains_key(id)
    }

    /// Insert a new vertex with its payload and empty adjacency.
    ///
    /// Fails with [`GraphError::DuplicateVertex`] if the identifier is
    /// already taken; the graph is left unchanged on failure.
    pub fn add_vertex(&mut self, id: impl Into<String>, payload: P) -> Result<()> {
        let id = id.into();
        if self.vertices.contains_key(&id) {
            return Err(GraphError::duplicate(id));
        }

        tracing::debug!(vertex = %id, "vertex inserted");
        self.vertices.insert(
            id,
            VertexRecord {
                payload,
                edges: BTreeMap::new(),
            },
        );
        Ok(())
    }

    /// Set (or overwrite) the weight of the directed edge `from -> to`.
    ///
    /// Fails with [`GraphError::UnknownVertex`] if either endpoint is
    /// absent; both endpoints are validated before any mutation.
    pub fn add_directed_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<()> {
        if !self.vertices.contains_key(to) {
            return Err(GraphError::unknown(to));
        }

        match self.vertices.get_mut(from) {
            Some(record) => {
                tracing::debug!(from = %from, to = %to, weight, "edge set");
                record.edges.insert(to.to_string(), weight);
                Ok(())
            }
            None => Err(GraphError::unknown(from)),
        }
    }

    /// All vertex identifiers in lexicographic order
    pub fn vertices(&self) -> Vec<&str> {
        self.vertices.keys().map(String::as_str).collect()
    }

    /// Copy of the outgoing adjacency of a vertex (neighbor id -> weight).
    ///
    /// A vertex with no outgoing edges yields an empty map. Mutating the
    /// returned map does not affect the graph.
    pub fn adjacent(&self, id: &str) -> Result<BTreeMap<String, Weight>> {
        self.record(id).map(|record| record.edges.clone())
    }

    /// Weight of the directed edge `from -> to`, or [`NO_EDGE`] when the
    /// endpoints exist but the edge does not.
    pub fn cost(&self, from: &str, to: &str) -> Result<Weight> {
        let record = self.record(from)?;
        if !self.vertices.contains_key(to) {
            return Err(GraphError::unknown(to));
        }

        Ok(record.edges.get(to).copied().unwrap_or(NO_EDGE))
    }

    /// Payload stored with a vertex
    pub fn payload(&self, id: &str) -> Result<&P> {
        self.record(id).map(|record| &record.payload)
    }

    /// Depth-first traversal from `start`, invoking `visit` once per
    /// reachable vertex. See [`algos::traversal::depth_first`].
    pub fn depth_first<F>(&self, start: &str, visit: F) -> Result<()>
    where
        F: FnMut(&str, &P),
    {
        algos::depth_first(self, start, visit)
    }

    /// Breadth-first traversal from `start`, invoking `visit` once per
    /// reachable vertex. See [`algos::traversal::breadth_first`].
    pub fn breadth_first<F>(&self, start: &str, visit: F) -> Result<()>
    where
        F: FnMut(&str, &P),
    {
        algos::breadth_first(self, start, visit)
    }

    /// Dijkstra shortest path from `from` to `to` over non-negative
    /// weights. See [`algos::dijkstra::shortest_path`].
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<PathResult> {
        algos::shortest_path(self, from, to)
    }

    pub(crate) fn record(&self, id: &str) -> Result<&VertexRecord<P>> {
        self.vertices.get(id).ok_or_else(|| GraphError::unknown(id))
    }

    pub(crate) fn vertex_ids(&self) -> impl Iterator<Item = &str> {
        self.vertices.keys().map(String::as_str)
    }
}

impl<P> fmt::Display for LabeledGraph<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertices: [")?;
        for (i, id) in self.vertices.keys().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", id)?;
        }
        writeln!(f, "]")?;

        write!(f, "Edges:")?;
        for (id, record) in &self.vertices {
            write!(f, "\nVertex({})---> {{", id)?;
            for (i, (to, weight)) in record.edges.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", to, weight)?;
            }
            write!(f, "}}")?;
        }
        Ok(())
    }
}
