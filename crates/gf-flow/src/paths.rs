//! Decomposition of a unit flow into source-to-sink paths.

use std::collections::{BTreeMap, BTreeSet};

use gf_graph::Vertex;

use crate::assignment::FlowAssignment;

/// Split a unit flow (every edge carries exactly one unit) into paths.
///
/// Walks from the source along flow-carrying edges, always taking the
/// smallest remaining successor and consuming each edge as it is
/// traversed, until the sink is reached; repeats while the source still
/// has outgoing flow. Unit vertex capacities upstream guarantee the walks
/// are simple, so each walk is one path and the number of paths equals
/// the flow value.
pub(crate) fn decompose_unit_flow<V: Vertex>(
    assignment: &FlowAssignment<V>,
    source: &V,
    sink: &V,
) -> Vec<Vec<V>> {
    let mut remaining: BTreeMap<V, BTreeSet<V>> = BTreeMap::new();
    for (from, to) in assignment.keys() {
        remaining
            .entry(from.clone())
            .or_default()
            .insert(to.clone());
    }

    let mut paths = Vec::new();
    while let Some(first) = take_smallest_successor(&mut remaining, source) {
        let mut path = vec![source.clone()];
        let mut current = first;
        loop {
            path.push(current.clone());
            if current == *sink {
                paths.push(path);
                break;
            }
            // Conservation guarantees a continuation at every interior
            // vertex the walk enters.
            match take_smallest_successor(&mut remaining, &current) {
                Some(next) => current = next,
                None => return paths,
            }
        }
    }

    paths
}

fn take_smallest_successor<V: Vertex>(
    remaining: &mut BTreeMap<V, BTreeSet<V>>,
    from: &V,
) -> Option<V> {
    let successors = remaining.get_mut(from)?;
    let next = successors.iter().next().cloned()?;
    successors.remove(&next);
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_assignment(edges: &[(&'static str, &'static str)]) -> FlowAssignment<&'static str> {
        edges.iter().map(|&e| (e, 1)).collect()
    }

    #[test]
    fn empty_flow_has_no_paths() {
        let assignment = FlowAssignment::new();
        assert!(decompose_unit_flow(&assignment, &"s", &"t").is_empty());
    }

    #[test]
    fn single_direct_path() {
        let assignment = unit_assignment(&[("s", "t")]);
        assert_eq!(
            decompose_unit_flow(&assignment, &"s", &"t"),
            vec![vec!["s", "t"]]
        );
    }

    #[test]
    fn two_disjoint_paths_in_successor_order() {
        let assignment = unit_assignment(&[("s", "b"), ("b", "t"), ("s", "a"), ("a", "t")]);
        assert_eq!(
            decompose_unit_flow(&assignment, &"s", &"t"),
            vec![vec!["s", "a", "t"], vec!["s", "b", "t"]]
        );
    }

    #[test]
    fn long_path_is_followed_to_the_sink() {
        let assignment = unit_assignment(&[("s", "a"), ("a", "b"), ("b", "t"), ("s", "t")]);
        assert_eq!(
            decompose_unit_flow(&assignment, &"s", &"t"),
            vec![vec!["s", "a", "b", "t"], vec!["s", "t"]]
        );
    }
}
