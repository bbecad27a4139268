//! Split-vertex transformation for vertex-capacitated flow.
//!
//! Every vertex v becomes a pair in(v) -> out(v) joined by an internal
//! edge carrying v's capacity; every original edge (u, w) becomes
//! out(u) -> in(w). Running the flow from in(source) to out(sink) puts
//! both endpoint internal edges on every augmenting path, so source and
//! sink capacities bound the flow exactly like interior ones.

use gf_core::Capacity;
use gf_graph::{DirectedGraph, Edge, Vertex, VertexIndex};

use crate::assignment::VertexCapacities;
use crate::error::{FlowError, FlowResult};
use crate::network::ResidualNetwork;

/// A residual network over split vertices, with the bookkeeping needed to
/// project flows back onto original edges.
#[derive(Debug)]
pub(crate) struct SplitNetwork<V: Vertex> {
    pub net: ResidualNetwork,
    /// Forward edge id in `net` for each original graph edge.
    pub edge_ids: Vec<(Edge<V>, usize)>,
    /// in(source): entry point of the run.
    pub source: usize,
    /// out(sink): exit point of the run.
    pub sink: usize,
}

fn in_node(i: usize) -> usize {
    2 * i
}

fn out_node(i: usize) -> usize {
    2 * i + 1
}

/// Build the split network. Every vertex must have a capacity entry;
/// all transformed original edges share the uniform `edge_capacity`.
pub(crate) fn build<V: Vertex>(
    graph: &DirectedGraph<V>,
    source: &V,
    sink: &V,
    capacities: &VertexCapacities<V>,
    edge_capacity: Capacity,
) -> FlowResult<SplitNetwork<V>> {
    let index = VertexIndex::from_graph(graph);
    let mut net = ResidualNetwork::new(2 * index.len());

    for (i, v) in index.vertices().iter().enumerate() {
        let cap = capacities
            .get(v)
            .copied()
            .ok_or_else(|| FlowError::missing_vertex(v))?;
        net.add_edge(in_node(i), out_node(i), cap);
    }

    let mut edge_ids = Vec::with_capacity(graph.edge_count());
    for (u, w) in graph.edges() {
        let from = out_node(index.index_of(&u)?);
        let to = in_node(index.index_of(&w)?);
        let id = net.add_edge(from, to, edge_capacity);
        edge_ids.push(((u, w), id));
    }

    Ok(SplitNetwork {
        net,
        edge_ids,
        source: in_node(index.index_of(source)?),
        sink: out_node(index.index_of(sink)?),
    })
}
