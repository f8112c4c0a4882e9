//! PageRank algorithm implementation
//!
//! Fixed-iteration power method:
//!
//! ```text
//! PR(v) = (1 - d) + d * Σ PR(u) / out_degree(u)   for each u → v
//! ```
//!
//! Scores are updated in place while vertices are visited in insertion
//! order, so a vertex later in the order already sees the scores its
//! predecessors received during the same iteration. Results are therefore
//! reproducible for a given graph but depend on vertex order.

use crate::graph::Graph;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use tracing::{debug, trace};

/// PageRank configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Number of iterations; there is no convergence check
    pub iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            iterations: 10,
        }
    }
}

impl PageRankConfig {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_damping_factor(mut self, damping_factor: f64) -> Self {
        self.damping_factor = damping_factor;
        self
    }
}

/// Calculate PageRank for every vertex of the graph
///
/// Scores start at `1 / N`. With zero iterations that uniform distribution
/// is returned as is. An empty graph yields an empty mapping. The returned
/// map follows the graph's vertex order.
pub fn page_rank<V>(graph: &Graph<V>, config: &PageRankConfig) -> IndexMap<V, f64>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    let n = graph.number_of_vertices();
    if n == 0 {
        return IndexMap::new();
    }

    debug!(
        "Running PageRank on {} vertices ({} iterations, damping {})",
        n, config.iterations, config.damping_factor
    );

    let initial_score = 1.0 / n as f64;
    let mut scores: IndexMap<V, f64> = graph
        .vertices()
        .map(|v| (v.clone(), initial_score))
        .collect();

    let d = config.damping_factor;
    let base_score = 1.0 - d;

    for iteration in 0..config.iterations {
        for vertex in graph.vertices() {
            let sum_incoming: f64 = graph
                .incoming_vertices(vertex)
                .into_iter()
                .filter_map(|source| {
                    // `source -> vertex` exists, so its out-degree is at least one
                    let out_degree = graph.neighbors(source)?.len();
                    Some(scores.get(source)? / out_degree as f64)
                })
                .sum();

            if let Some(score) = scores.get_mut(vertex) {
                *score = base_score + d * sum_incoming;
            }
        }
        trace!("PageRank iteration {} complete", iteration + 1);
    }

    scores
}

/// Calculate PageRank with an explicit iteration count and damping factor
pub fn pagerank<V>(graph: &Graph<V>, iterations: usize, damping_factor: f64) -> IndexMap<V, f64>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    page_rank(
        graph,
        &PageRankConfig {
            damping_factor,
            iterations,
        },
    )
}

/// Scores sorted from highest to lowest; ties keep vertex order
pub fn ranked<V>(scores: &IndexMap<V, f64>) -> Vec<(&V, f64)> {
    let mut ranked: Vec<(&V, f64)> = scores.iter().map(|(v, s)| (v, *s)).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}
