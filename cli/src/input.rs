//! Graph input files
//!
//! Two JSON shapes are accepted:
//!
//! - adjacency: `{ "directed": true, "adjacency": { "A": ["B"], "B": [] } }`
//! - edge list: `{ "directed": true, "vertices": ["C"], "edges": [["A", "B"]] }`
//!
//! `directed` defaults to true in both. Unknown keys are rejected, so the
//! two shapes cannot be mixed. Adjacency input is verified before use.

use anyhow::{Context, Result};
use linkrank::Graph;
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeList {
    #[serde(default = "default_directed")]
    directed: bool,
    #[serde(default)]
    vertices: Vec<String>,
    #[serde(default)]
    edges: Vec<(String, String)>,
}

fn default_directed() -> bool {
    true
}

impl EdgeList {
    fn into_graph(self) -> Graph<String> {
        let mut graph = Graph::new(self.directed);
        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }
        for (source, dest) in self.edges {
            graph.add_edge(source, dest);
        }
        graph
    }
}

/// Load a graph from a JSON file, or from stdin when `path` is `-`
pub fn load_graph(path: &Path) -> Result<Graph<String>> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read graph from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    let graph =
        parse_graph(&text).with_context(|| format!("Invalid graph in {}", path.display()))?;
    debug!(
        "Loaded {} vertices and {} edges from {}",
        graph.number_of_vertices(),
        graph.number_of_edges(),
        path.display()
    );
    Ok(graph)
}

pub fn parse_graph(text: &str) -> Result<Graph<String>> {
    let value: serde_json::Value = serde_json::from_str(text).context("Malformed JSON")?;

    if value.get("adjacency").is_some() {
        Ok(serde_json::from_value(value)?)
    } else {
        let edges: EdgeList = serde_json::from_value(value)?;
        Ok(edges.into_graph())
    }
}
