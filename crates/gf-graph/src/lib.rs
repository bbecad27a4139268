//! gf-graph: graph layer for graphflow.
//!
//! Provides:
//! - Core graph data structure (`DirectedGraph`) over opaque vertex labels
//! - The `Vertex` bound and the `Edge` pair alias
//! - Stable dense indexing (`VertexIndex`) for algorithm integration
//!
//! # Example
//!
//! ```
//! use gf_graph::DirectedGraph;
//!
//! let mut g = DirectedGraph::new();
//! g.add_vertex("a");
//! g.add_vertex("b");
//! g.add_edge("a", "b");
//!
//! assert_eq!(g.vertex_count(), 2);
//! assert!(g.contains_edge(&"a", &"b"));
//! ```

pub mod error;
pub mod graph;
pub mod indexing;
pub mod vertex;

// Re-exports for ergonomics
pub use error::GraphError;
pub use graph::DirectedGraph;
pub use indexing::VertexIndex;
pub use vertex::{Edge, Vertex};
