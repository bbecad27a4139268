//! Error types for flow computations.

use gf_core::GfError;
use gf_graph::GraphError;
use thiserror::Error;

/// Errors that can occur while setting up or running a flow computation.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Missing capacity: {what}")]
    MissingCapacity { what: String },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type FlowResult<T> = Result<T, FlowError>;

impl FlowError {
    pub(crate) fn missing_edge<V: std::fmt::Debug>(edge: &(V, V)) -> Self {
        FlowError::MissingCapacity {
            what: format!("no entry for edge {:?} -> {:?}", edge.0, edge.1),
        }
    }

    pub(crate) fn missing_vertex<V: std::fmt::Debug>(v: &V) -> Self {
        FlowError::MissingCapacity {
            what: format!("no entry for vertex {v:?}"),
        }
    }
}

impl From<FlowError> for GfError {
    fn from(e: FlowError) -> Self {
        match e {
            FlowError::MissingCapacity { what: _ } => GfError::InvalidArg { what: "capacity" },
            FlowError::Graph(inner) => inner.into(),
        }
    }
}
