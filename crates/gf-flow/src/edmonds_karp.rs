//! Edmonds-Karp: shortest augmenting paths by breadth-first search.

use std::collections::VecDeque;

use gf_core::{Flow, UNBOUNDED, saturating_flow_add};
use tracing::{debug, trace};

use crate::network::ResidualNetwork;

/// Saturate the network between `source` and `sink` and return the flow
/// value. The network is left holding the final residuals, so per-edge
/// flows can be read off afterwards.
pub(crate) fn run(net: &mut ResidualNetwork, source: usize, sink: usize) -> Flow {
    let mut total: Flow = 0;
    let mut augmentations: u64 = 0;

    while let Some(parent_edge) = shortest_augmenting_path(net, source, sink) {
        let mut bottleneck = UNBOUNDED;
        let mut hops = 0usize;
        let mut node = sink;
        while node != source {
            let edge = parent_edge[node].expect("path reaches source");
            bottleneck = bottleneck.min(net.residual(edge));
            node = net.from(edge);
            hops += 1;
        }

        let mut node = sink;
        while node != source {
            let edge = parent_edge[node].expect("path reaches source");
            net.push(edge, bottleneck);
            node = net.from(edge);
        }

        total = saturating_flow_add(total, bottleneck);
        augmentations += 1;
        trace!(bottleneck, hops, "augmented along shortest path");
    }

    debug!(value = total, augmentations, "max flow computed");
    total
}

/// BFS over positive-residual edges. Returns the incoming edge per node
/// for one shortest source-to-sink path, or `None` when the sink is
/// unreachable.
fn shortest_augmenting_path(
    net: &ResidualNetwork,
    source: usize,
    sink: usize,
) -> Option<Vec<Option<usize>>> {
    let mut parent_edge: Vec<Option<usize>> = vec![None; net.node_count()];
    let mut visited = vec![false; net.node_count()];
    let mut queue = VecDeque::new();

    visited[source] = true;
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        for &edge in net.neighbors(node) {
            let next = net.to(edge);
            if visited[next] || net.residual(edge) == 0 {
                continue;
            }
            visited[next] = true;
            parent_edge[next] = Some(edge);
            if next == sink {
                return Some(parent_edge);
            }
            queue.push_back(next);
        }
    }

    None
}
