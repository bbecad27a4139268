//! Stable dense indexing for algorithm integration.
//!
//! Provides a bidirectional mapping between vertex labels and contiguous
//! indices (0..N) so algorithm crates can work on flat vectors.

use std::collections::HashMap;

use crate::error::GraphError;
use crate::graph::DirectedGraph;
use crate::vertex::Vertex;

/// Dense index over the vertices of a graph.
///
/// Index order is the graph's ascending vertex order, so index 0 is the
/// smallest label. O(1) bidirectional lookup.
#[derive(Debug, Clone)]
pub struct VertexIndex<V: Vertex> {
    /// Contiguous list of labels (index -> vertex).
    vertices: Vec<V>,

    /// Reverse lookup: vertex -> index.
    indices: HashMap<V, usize>,
}

impl<V: Vertex> VertexIndex<V> {
    /// Build an index over a graph's current vertex set.
    pub fn from_graph(graph: &DirectedGraph<V>) -> Self {
        let vertices: Vec<V> = graph.vertices().cloned().collect();
        let indices = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        Self { vertices, indices }
    }

    /// Number of indexed vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when the index is empty.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True when the vertex is indexed.
    pub fn contains(&self, v: &V) -> bool {
        self.indices.contains_key(v)
    }

    /// Get the dense index for a vertex.
    pub fn index_of(&self, v: &V) -> Result<usize, GraphError> {
        self.indices
            .get(v)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex {
                vertex: format!("{v:?}"),
            })
    }

    /// Get the vertex for a dense index.
    pub fn vertex(&self, i: usize) -> Result<&V, GraphError> {
        self.vertices.get(i).ok_or(GraphError::IndexOutOfRange {
            index: i,
            len: self.vertices.len(),
        })
    }

    /// All vertices in index order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }
}
