//! Error types for topological ordering.

use gf_core::GfError;
use gf_graph::GraphError;
use thiserror::Error;

/// Errors that can occur while ordering a graph.
#[derive(Error, Debug)]
pub enum TopoError {
    /// The graph contains a cycle, so no topological ordering exists.
    /// `emitted` vertices were ordered before the cycle was detected.
    #[error("No topological ordering exists: ordered {emitted} of {total} vertices")]
    CycleDetected { emitted: usize, total: usize },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type TopoResult<T> = Result<T, TopoError>;

impl From<TopoError> for GfError {
    fn from(e: TopoError) -> Self {
        match e {
            TopoError::CycleDetected { .. } => GfError::InvalidArg { what: "cyclic graph" },
            TopoError::Graph(inner) => inner.into(),
        }
    }
}
