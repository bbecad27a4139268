//! Flow results and capacity inputs, keyed by the caller's vertices.

use std::collections::BTreeMap;

use gf_core::{Capacity, Flow};
use gf_graph::{Edge, Vertex};

/// Capacity per directed edge. Every edge of the graph needs an entry.
pub type EdgeCapacities<V> = BTreeMap<Edge<V>, Capacity>;

/// Capacity per vertex. Every vertex of the graph needs an entry.
pub type VertexCapacities<V> = BTreeMap<V, Capacity>;

/// Flow per edge; only edges carrying positive flow appear, all other
/// edges implicitly carry zero.
pub type FlowAssignment<V> = BTreeMap<Edge<V>, Flow>;

/// Total flow leaving `v`.
pub fn outflow<V: Vertex>(assignment: &FlowAssignment<V>, v: &V) -> Flow {
    assignment
        .iter()
        .filter(|((from, _), _)| from == v)
        .map(|(_, f)| *f)
        .sum()
}

/// Total flow entering `v`.
pub fn inflow<V: Vertex>(assignment: &FlowAssignment<V>, v: &V) -> Flow {
    assignment
        .iter()
        .filter(|((_, to), _)| to == v)
        .map(|(_, f)| *f)
        .sum()
}

/// Value of the flow: net outflow at the source.
pub fn flow_value<V: Vertex>(assignment: &FlowAssignment<V>, source: &V) -> Flow {
    outflow(assignment, source).saturating_sub(inflow(assignment, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_on_a_two_path_assignment() {
        let assignment: FlowAssignment<&str> = [
            (("s", "a"), 2),
            (("s", "b"), 3),
            (("a", "t"), 2),
            (("b", "t"), 3),
        ]
        .into_iter()
        .collect();

        assert_eq!(outflow(&assignment, &"s"), 5);
        assert_eq!(inflow(&assignment, &"s"), 0);
        assert_eq!(inflow(&assignment, &"t"), 5);
        assert_eq!(flow_value(&assignment, &"s"), 5);

        assert_eq!(inflow(&assignment, &"a"), outflow(&assignment, &"a"));
    }

    #[test]
    fn empty_assignment_is_all_zero() {
        let assignment: FlowAssignment<&str> = FlowAssignment::new();
        assert_eq!(flow_value(&assignment, &"s"), 0);
        assert_eq!(inflow(&assignment, &"t"), 0);
    }
}
