//! High-level flow interface.

use gf_core::UNBOUNDED;
use gf_graph::{DirectedGraph, Edge, Vertex, VertexIndex};

use crate::assignment::{EdgeCapacities, FlowAssignment, VertexCapacities};
use crate::edmonds_karp;
use crate::error::{FlowError, FlowResult};
use crate::network::ResidualNetwork;
use crate::paths;
use crate::split;

/// Compute a maximum flow under per-edge capacities.
///
/// Runs Edmonds-Karp over a residual network built for this call. The
/// result maps each positive-flow edge of the caller's graph to its flow;
/// it satisfies conservation at every non-source/sink vertex and respects
/// every capacity.
///
/// Every edge of the graph must have a capacity entry
/// ([`FlowError::MissingCapacity`] otherwise). An absent source or sink,
/// `source == sink`, or an unreachable sink all yield the empty (zero)
/// assignment, not an error.
pub fn max_flow<V: Vertex>(
    graph: &DirectedGraph<V>,
    source: &V,
    sink: &V,
    capacities: &EdgeCapacities<V>,
) -> FlowResult<FlowAssignment<V>> {
    for edge in graph.edges() {
        if !capacities.contains_key(&edge) {
            return Err(FlowError::missing_edge(&edge));
        }
    }

    if degenerate(graph, source, sink) {
        return Ok(FlowAssignment::new());
    }

    let index = VertexIndex::from_graph(graph);
    let mut net = ResidualNetwork::new(index.len());
    let mut edge_ids = Vec::with_capacity(graph.edge_count());
    for edge in graph.edges() {
        let capacity = capacities[&edge];
        let from = index.index_of(&edge.0)?;
        let to = index.index_of(&edge.1)?;
        let id = net.add_edge(from, to, capacity);
        edge_ids.push((edge, id));
    }

    edmonds_karp::run(&mut net, index.index_of(source)?, index.index_of(sink)?);

    Ok(collect_assignment(&net, edge_ids))
}

/// Compute a maximum flow under per-vertex capacities.
///
/// Uses the split-vertex transformation: the flow runs through each
/// vertex's internal edge, so source and sink capacities bound the result
/// exactly like interior ones. Original edges are unconstrained. The
/// returned assignment is keyed by the caller's original edges.
///
/// Every vertex of the graph must have a capacity entry
/// ([`FlowError::MissingCapacity`] otherwise). Degenerate queries behave
/// as in [`max_flow`].
pub fn max_flow_with_vertex_capacities<V: Vertex>(
    graph: &DirectedGraph<V>,
    source: &V,
    sink: &V,
    capacities: &VertexCapacities<V>,
) -> FlowResult<FlowAssignment<V>> {
    for v in graph.vertices() {
        if !capacities.contains_key(v) {
            return Err(FlowError::missing_vertex(v));
        }
    }

    if degenerate(graph, source, sink) {
        return Ok(FlowAssignment::new());
    }

    split_max_flow(graph, source, sink, capacities, UNBOUNDED)
}

/// Compute a maximum-cardinality set of vertex-disjoint source-to-sink
/// paths.
///
/// Reduction: unit capacity on every interior vertex and every edge
/// (source and sink unconstrained), maximum flow over the split network,
/// then decomposition of the unit flow into paths. Returned paths share
/// no vertex except source and sink; their number equals the max-flow
/// value of the unit network. Ties are broken toward the smallest
/// successor, so the result is deterministic.
///
/// `source == sink`, an absent endpoint, or an unreachable sink yield an
/// empty collection.
pub fn max_vertex_disjoint_paths<V: Vertex>(
    graph: &DirectedGraph<V>,
    source: &V,
    sink: &V,
) -> FlowResult<Vec<Vec<V>>> {
    if degenerate(graph, source, sink) {
        return Ok(Vec::new());
    }

    let capacities: VertexCapacities<V> = graph
        .vertices()
        .map(|v| {
            let cap = if v == source || v == sink { UNBOUNDED } else { 1 };
            (v.clone(), cap)
        })
        .collect();

    let assignment = split_max_flow(graph, source, sink, &capacities, 1)?;
    Ok(paths::decompose_unit_flow(&assignment, source, sink))
}

/// Queries defined to produce a trivial zero-flow result.
fn degenerate<V: Vertex>(graph: &DirectedGraph<V>, source: &V, sink: &V) -> bool {
    source == sink || !graph.contains_vertex(source) || !graph.contains_vertex(sink)
}

fn split_max_flow<V: Vertex>(
    graph: &DirectedGraph<V>,
    source: &V,
    sink: &V,
    capacities: &VertexCapacities<V>,
    edge_capacity: gf_core::Capacity,
) -> FlowResult<FlowAssignment<V>> {
    let mut split = split::build(graph, source, sink, capacities, edge_capacity)?;
    edmonds_karp::run(&mut split.net, split.source, split.sink);
    Ok(collect_assignment(&split.net, split.edge_ids))
}

/// Read positive per-edge flows back out of a saturated network.
fn collect_assignment<V: Vertex>(
    net: &ResidualNetwork,
    edge_ids: Vec<(Edge<V>, usize)>,
) -> FlowAssignment<V> {
    edge_ids
        .into_iter()
        .filter_map(|(edge, id)| {
            let flow = net.flow_on(id);
            (flow > 0).then_some((edge, flow))
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::assignment::{flow_value, inflow, outflow};
    use proptest::prelude::*;

    const SOURCE: u8 = 0;
    const SINK: u8 = 7;

    fn build_network(edges: &[(u8, u8, u64)]) -> (DirectedGraph<u8>, EdgeCapacities<u8>) {
        let mut g = DirectedGraph::new();
        for v in SOURCE..=SINK {
            g.add_vertex(v);
        }
        let mut caps = EdgeCapacities::new();
        for &(u, w, c) in edges {
            g.add_edge(u, w);
            caps.entry((u, w)).or_insert(c);
        }
        (g, caps)
    }

    proptest! {
        #[test]
        fn random_networks_respect_flow_invariants(
            edges in prop::collection::vec(
                (SOURCE..=SINK, SOURCE..=SINK, 1u64..50),
                1..40,
            )
        ) {
            let (g, caps) = build_network(&edges);
            let assignment = max_flow(&g, &SOURCE, &SINK, &caps).unwrap();

            for (edge, flow) in &assignment {
                prop_assert!(flow <= &caps[edge]);
            }
            for v in (SOURCE + 1)..SINK {
                prop_assert_eq!(inflow(&assignment, &v), outflow(&assignment, &v));
            }
            let sink_net = inflow(&assignment, &SINK) - outflow(&assignment, &SINK);
            prop_assert_eq!(flow_value(&assignment, &SOURCE), sink_net);
        }

        #[test]
        fn random_vertex_capacities_bound_throughflow(
            edges in prop::collection::vec((SOURCE..=SINK, SOURCE..=SINK), 1..40),
            caps in prop::collection::vec(0u64..6, (SINK as usize) + 1),
        ) {
            let mut g = DirectedGraph::new();
            for v in SOURCE..=SINK {
                g.add_vertex(v);
            }
            for &(u, w) in &edges {
                g.add_edge(u, w);
            }
            let vertex_caps: VertexCapacities<u8> =
                (SOURCE..=SINK).map(|v| (v, caps[v as usize])).collect();

            let assignment =
                max_flow_with_vertex_capacities(&g, &SOURCE, &SINK, &vertex_caps).unwrap();

            for v in SOURCE..=SINK {
                if v != SOURCE {
                    prop_assert!(inflow(&assignment, &v) <= vertex_caps[&v]);
                }
                if v != SINK {
                    prop_assert!(outflow(&assignment, &v) <= vertex_caps[&v]);
                }
            }
        }
    }
}
