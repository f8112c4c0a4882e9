//! In-memory graph storage implementation
//!
//! Vertices are keys of an insertion-ordered map whose values are the sets of
//! outgoing neighbors. Undirected graphs store every edge in both directions.

use super::types::{Adjacency, Neighbors, Violation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<V: fmt::Debug> {
    #[error("Invalid graph: edge ({from:?}, {to:?}) {violation}")]
    InvalidGraph { from: V, to: V, violation: Violation },

    #[error("Vertex {0:?} is not in the graph")]
    VertexNotFound(V),

    #[error("Edge ({from:?}, {to:?}) is not in the graph")]
    EdgeNotFound { from: V, to: V },

    #[error("Vertices ({from:?}, {to:?}) don't both exist in the graph")]
    VerticesNotFound { from: V, to: V },
}

pub type GraphResult<T, V> = Result<T, GraphError<V>>;

/// In-memory graph over arbitrary hashable vertices
///
/// - adjacency: vertex -> outgoing neighbors, in vertex insertion order
/// - directed: fixed at construction; undirected graphs mirror every edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "GraphData<V>",
    into = "GraphData<V>",
    bound(
        serialize = "V: Serialize + Eq + Hash + Clone + fmt::Debug",
        deserialize = "V: Deserialize<'de> + Eq + Hash + Clone + fmt::Debug"
    )
)]
pub struct Graph<V: Eq + Hash> {
    adjacency: Adjacency<V>,
    directed: bool,
}

/// Wire shape of a graph: `{ "directed": bool, "adjacency": { v: [n, ..] } }`
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct GraphData<V: Eq + Hash> {
    #[serde(default = "default_directed")]
    directed: bool,
    adjacency: Adjacency<V>,
}

fn default_directed() -> bool {
    true
}

impl<V> TryFrom<GraphData<V>> for Graph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    type Error = GraphError<V>;

    fn try_from(data: GraphData<V>) -> Result<Self, Self::Error> {
        Graph::from_adjacency(data.adjacency, data.directed)
    }
}

impl<V: Eq + Hash> From<Graph<V>> for GraphData<V> {
    fn from(graph: Graph<V>) -> Self {
        GraphData {
            directed: graph.directed,
            adjacency: graph.adjacency,
        }
    }
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Create a new empty graph
    pub fn new(directed: bool) -> Self {
        Graph {
            adjacency: Adjacency::new(),
            directed,
        }
    }

    /// Create a new empty directed graph
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create a new empty undirected graph
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Create a graph from a pre-populated adjacency mapping
    ///
    /// The mapping is checked with [`Graph::verify`] and rejected with
    /// [`GraphError::InvalidGraph`] if it has dangling edges or, for an
    /// undirected graph, an edge without its mirror.
    pub fn from_adjacency(adjacency: Adjacency<V>, directed: bool) -> GraphResult<Self, V> {
        Self::verify(&adjacency, directed)?;
        debug!(
            "Built {} graph with {} vertices",
            if directed { "directed" } else { "undirected" },
            adjacency.len()
        );
        Ok(Graph { adjacency, directed })
    }

    /// Check the structural invariants of an adjacency mapping
    ///
    /// Every edge endpoint must be a key of the mapping, and when `directed`
    /// is false every edge (u, v) must be matched by (v, u). The first
    /// offending edge in key order is reported.
    pub fn verify(adjacency: &Adjacency<V>, directed: bool) -> GraphResult<(), V> {
        for (vertex, neighbors) in adjacency {
            for neighbor in neighbors {
                let Some(reverse) = adjacency.get(neighbor) else {
                    return Err(GraphError::InvalidGraph {
                        from: vertex.clone(),
                        to: neighbor.clone(),
                        violation: Violation::MissingVertex,
                    });
                };
                if !directed && !reverse.contains(vertex) {
                    return Err(GraphError::InvalidGraph {
                        from: vertex.clone(),
                        to: neighbor.clone(),
                        violation: Violation::Unidirectional,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Borrow the underlying adjacency mapping
    pub fn adjacency(&self) -> &Adjacency<V> {
        &self.adjacency
    }

    /// Add a vertex with no outgoing edges
    ///
    /// Adding a vertex that already exists replaces its outgoing edges with
    /// an empty set. Its position in vertex order and its incoming edges are
    /// left untouched.
    pub fn add_vertex(&mut self, v: V) {
        self.adjacency.insert(v, Neighbors::new());
    }

    /// Add an edge, creating either endpoint if it does not exist yet
    ///
    /// Undirected graphs also record the reverse edge. Re-adding an existing
    /// edge leaves the graph unchanged.
    pub fn add_edge(&mut self, source: V, dest: V) {
        if !self.adjacency.contains_key(&source) {
            self.adjacency.insert(source.clone(), Neighbors::new());
        }
        if !self.adjacency.contains_key(&dest) {
            self.adjacency.insert(dest.clone(), Neighbors::new());
        }
        if let Some(neighbors) = self.adjacency.get_mut(&source) {
            neighbors.insert(dest.clone());
        }

        if !self.directed {
            if let Some(neighbors) = self.adjacency.get_mut(&dest) {
                neighbors.insert(source);
            }
        }
    }

    /// Remove a vertex together with every edge pointing into it
    pub fn remove_vertex(&mut self, v: &V) -> GraphResult<Neighbors<V>, V> {
        let removed = self
            .adjacency
            .shift_remove(v)
            .ok_or_else(|| GraphError::VertexNotFound(v.clone()))?;

        for neighbors in self.adjacency.values_mut() {
            neighbors.shift_remove(v);
        }
        Ok(removed)
    }

    /// Remove the edge `source -> dest` (and its mirror in undirected graphs)
    pub fn remove_edge(&mut self, source: &V, dest: &V) -> GraphResult<(), V> {
        if !self.adjacency.contains_key(source) || !self.adjacency.contains_key(dest) {
            return Err(GraphError::VerticesNotFound {
                from: source.clone(),
                to: dest.clone(),
            });
        }

        let removed = self
            .adjacency
            .get_mut(source)
            .is_some_and(|neighbors| neighbors.shift_remove(dest));
        if !removed {
            return Err(GraphError::EdgeNotFound {
                from: source.clone(),
                to: dest.clone(),
            });
        }

        if !self.directed && source != dest {
            let mirrored = self
                .adjacency
                .get_mut(dest)
                .is_some_and(|neighbors| neighbors.shift_remove(source));
            if !mirrored {
                warn!("Undirected edge ({:?}, {:?}) had no mirror", dest, source);
            }
        }
        Ok(())
    }

    pub fn number_of_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored edge entries (an undirected edge counts twice,
    /// a self-loop once)
    pub fn number_of_edges(&self) -> usize {
        self.adjacency.values().map(|neighbors| neighbors.len()).sum()
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    pub fn contains_edge(&self, source: &V, dest: &V) -> bool {
        self.adjacency
            .get(source)
            .is_some_and(|neighbors| neighbors.contains(dest))
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Outgoing neighbors of a vertex, or `None` if it does not exist
    pub fn neighbors(&self, v: &V) -> Option<&Neighbors<V>> {
        self.adjacency.get(v)
    }

    /// Vertices with an edge pointing into `v`, in vertex order
    ///
    /// This is a linear scan over the whole graph. An absent vertex simply
    /// has no incoming vertices.
    pub fn incoming_vertices(&self, v: &V) -> Vec<&V> {
        self.adjacency
            .iter()
            .filter(|(_, neighbors)| neighbors.contains(v))
            .map(|(u, _)| u)
            .collect()
    }

    pub fn in_degree(&self, v: &V) -> usize {
        self.incoming_vertices(v).len()
    }

    pub fn out_degree(&self, v: &V) -> GraphResult<usize, V> {
        self.adjacency
            .get(v)
            .map(|neighbors| neighbors.len())
            .ok_or_else(|| GraphError::VertexNotFound(v.clone()))
    }
}

impl<V> Default for Graph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    fn default() -> Self {
        Self::directed()
    }
}
