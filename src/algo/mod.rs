//! Graph algorithms module
//!
//! Algorithms take a read-only borrow of a [`Graph`](crate::graph::Graph)
//! and never mutate it.

pub mod pagerank;

pub use pagerank::{page_rank, pagerank, ranked, PageRankConfig};
