//! Kahn's algorithm over dense vertex indices.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use gf_graph::{DirectedGraph, Vertex, VertexIndex};

use crate::error::{TopoError, TopoResult};

/// Compute one topological ordering of the graph.
///
/// Kahn's algorithm: repeatedly emit a vertex with in-degree zero and
/// decrement the in-degrees of its successors. The ready set is a min-heap
/// over dense indices, so ties go to the smallest vertex and the result is
/// deterministic.
///
/// An empty graph yields an empty ordering. If any vertex is never
/// emitted the graph is cyclic (self-loops included) and
/// [`TopoError::CycleDetected`] is returned.
pub fn topological_sort<V: Vertex>(graph: &DirectedGraph<V>) -> TopoResult<Vec<V>> {
    let index = VertexIndex::from_graph(graph);

    let mut in_degree = vec![0usize; index.len()];
    for (_, to) in graph.edges() {
        in_degree[index.index_of(&to)?] += 1;
    }

    let mut ready: BinaryHeap<Reverse<usize>> = in_degree
        .iter()
        .enumerate()
        .filter(|&(_, &d)| d == 0)
        .map(|(i, _)| Reverse(i))
        .collect();

    let mut order = Vec::with_capacity(index.len());
    while let Some(Reverse(i)) = ready.pop() {
        let v = index.vertex(i)?;
        order.push(v.clone());

        if let Some(successors) = graph.successors(v) {
            for next in successors {
                let j = index.index_of(next)?;
                in_degree[j] -= 1;
                if in_degree[j] == 0 {
                    ready.push(Reverse(j));
                }
            }
        }
    }

    if order.len() < index.len() {
        return Err(TopoError::CycleDetected {
            emitted: order.len(),
            total: index.len(),
        });
    }

    Ok(order)
}
