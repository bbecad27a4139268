//! gf-topo: topological ordering for graphflow.
//!
//! One entry point, [`topological_sort`], computing a linear order of a
//! borrowed [`gf_graph::DirectedGraph`] consistent with every edge, or
//! reporting that the graph is cyclic.

pub mod error;
pub mod kahn;

pub use error::{TopoError, TopoResult};
pub use kahn::topological_sort;
