//! Graph-specific error types.

use gf_core::GfError;

/// Graph lookup and indexing errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex was queried against an index that doesn't contain it.
    UnknownVertex { vertex: String },

    /// A dense index was out of range for the index table.
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::UnknownVertex { vertex } => {
                write!(f, "Vertex {} is not in the index", vertex)
            }
            GraphError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for {} vertices", index, len)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for GfError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::UnknownVertex { .. } => GfError::InvalidArg { what: "vertex" },
            GraphError::IndexOutOfRange { index, len } => GfError::IndexOob {
                what: "vertex index",
                index,
                len,
            },
        }
    }
}
