use core::fmt;
use core::hash::Hash;

/// Bound for opaque vertex labels.
///
/// - `Ord` gives every query and tie-break a deterministic order
/// - `Hash` supports the dense index table
/// - `Clone` lets results own their vertices independently of the graph
///
/// Blanket-implemented; any label type with these properties works
/// (`&str`, `String`, integers, ...).
pub trait Vertex: Clone + Eq + Ord + Hash + fmt::Debug {}

impl<T: Clone + Eq + Ord + Hash + fmt::Debug> Vertex for T {}

/// A directed edge as an ordered (from, to) pair of vertex labels.
pub type Edge<V> = (V, V);
