//! In-memory graph representation
//!
//! - `Graph<V>`: adjacency storage over any `Eq + Hash` vertex type
//! - Directed and undirected graphs (undirected edges are stored both ways)
//! - Construction-time verification of pre-populated adjacency data

pub mod store;
pub mod types;

// Re-export main types
pub use store::{Graph, GraphError, GraphResult};
pub use types::{Adjacency, Neighbors, Violation};
