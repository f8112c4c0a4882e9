//! Core type definitions for the graph store

use indexmap::{IndexMap, IndexSet};
use std::fmt;

/// Outgoing neighbors of a single vertex
///
/// Edges carry no attributes, so a neighbor set is all that is stored per vertex.
pub type Neighbors<V> = IndexSet<V>;

/// Vertex -> outgoing neighbors, iterated in vertex insertion order
pub type Adjacency<V> = IndexMap<V, Neighbors<V>>;

/// Reason an adjacency mapping was rejected at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// The edge points at a vertex that has no adjacency entry of its own
    MissingVertex,
    /// Undirected graph where the reverse edge is not stored
    Unidirectional,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingVertex => write!(f, "targets a vertex that was never added"),
            Violation::Unidirectional => write!(f, "is unidirectional in an undirected graph"),
        }
    }
}
