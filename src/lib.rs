//! Linkrank
//!
//! An in-memory graph with vertex and edge mutation, degree queries, and a
//! fixed-iteration PageRank for ranking vertices by link structure.
//!
//! # Modules
//!
//! - [`graph`]: `Graph<V>` over any hashable vertex type, directed or
//!   undirected, with invariants checked when built from existing data
//! - [`algo`]: PageRank over a borrowed graph
//!
//! ## Example Usage
//!
//! ```rust
//! use linkrank::{pagerank, Graph};
//!
//! let mut graph = Graph::directed();
//! graph.add_edge("B", "A");
//! graph.add_edge("B", "C");
//! graph.add_edge("C", "A");
//!
//! assert_eq!(graph.number_of_vertices(), 3);
//! assert_eq!(graph.in_degree(&"A"), 2);
//! assert_eq!(graph.out_degree(&"B"), Ok(2));
//!
//! let ranks = pagerank(&graph, 10, 0.85);
//! assert!(ranks["A"] > ranks["B"]);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use graph::{Adjacency, Graph, GraphError, GraphResult, Neighbors, Violation};

pub use algo::{page_rank, pagerank, ranked, PageRankConfig};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
