use linkrank::{Adjacency, Graph, GraphError, Violation};

/// A <- B, A <- C, A <- D, C <- B, C <- D, B <- D
fn link_adjacency() -> Adjacency<&'static str> {
    let mut adjacency = Adjacency::new();
    adjacency.insert("A", [].into_iter().collect());
    adjacency.insert("B", ["A", "C"].into_iter().collect());
    adjacency.insert("C", ["A"].into_iter().collect());
    adjacency.insert("D", ["A", "B", "C"].into_iter().collect());
    adjacency
}

fn complete_adjacency() -> Adjacency<&'static str> {
    let vertices = ["A", "B", "C", "D"];
    vertices
        .iter()
        .map(|&v| (v, vertices.iter().copied().filter(|&u| u != v).collect()))
        .collect()
}

#[test]
fn test_add_vertices_of_mixed_values() {
    let mut graph = Graph::directed();
    graph.add_vertex("1".to_string());
    graph.add_vertex("a".to_string());
    graph.add_vertex("0.1".to_string());

    assert_eq!(graph.number_of_vertices(), 3);
}

#[test]
fn test_add_edges() {
    let mut graph = Graph::directed();
    graph.add_vertex(1);
    graph.add_vertex(2);
    graph.add_vertex(3);
    graph.add_edge(1, 2);
    graph.add_edge(1, 3);
    graph.add_edge(3, 2);

    assert_eq!(graph.incoming_vertices(&1).len(), 0);
    assert_eq!(graph.incoming_vertices(&2).len(), 2);
    assert_eq!(graph.incoming_vertices(&3).len(), 1);
}

#[test]
fn test_add_edges_creates_vertices() {
    let mut graph = Graph::directed();
    graph.add_edge(1, 2);
    graph.add_edge(1, 3);
    graph.add_edge(3, 2);

    assert_eq!(graph.number_of_vertices(), 3);
    assert_eq!(graph.incoming_vertices(&1).len(), 0);
    assert_eq!(graph.incoming_vertices(&2), vec![&1, &3]);
    assert_eq!(graph.incoming_vertices(&3), vec![&1]);
}

#[test]
fn test_directed_edge_is_one_way() {
    let mut graph = Graph::directed();
    graph.add_edge("u", "v");

    assert!(graph.incoming_vertices(&"v").contains(&&"u"));
    assert!(!graph.incoming_vertices(&"u").contains(&&"v"));
}

#[test]
fn test_remove_vertex() {
    let mut graph = Graph::from_adjacency(link_adjacency(), true).unwrap();
    graph.remove_vertex(&"B").unwrap();

    assert_eq!(graph.number_of_vertices(), 3);
    assert!(!graph.contains_vertex(&"B"));
    assert_eq!(graph.in_degree(&"A"), 2);
    assert_eq!(graph.in_degree(&"C"), 1);
    assert_eq!(graph.in_degree(&"D"), 0);
    assert!(graph
        .vertices()
        .all(|v| !graph.neighbors(v).unwrap().contains(&"B")));
}

#[test]
fn test_remove_vertex_from_undirected_graph() {
    let mut graph = Graph::from_adjacency(complete_adjacency(), false).unwrap();
    graph.remove_vertex(&"C").unwrap();

    assert_eq!(graph.number_of_vertices(), 3);
    assert_eq!(graph.number_of_edges(), 6);
    for v in ["A", "B", "D"] {
        assert_eq!(graph.in_degree(&v), 2);
        assert_eq!(graph.out_degree(&v), Ok(2));
    }
}

#[test]
fn test_remove_non_existent_vertex() {
    let mut graph: Graph<&str> = Graph::directed();
    assert_eq!(
        graph.remove_vertex(&"B"),
        Err(GraphError::VertexNotFound("B"))
    );
}

#[test]
fn test_remove_edge() {
    let mut graph = Graph::from_adjacency(link_adjacency(), true).unwrap();
    graph.remove_edge(&"B", &"A").unwrap();
    graph.remove_edge(&"B", &"C").unwrap();

    assert_eq!(graph.number_of_vertices(), 4);
    assert_eq!(graph.incoming_vertices(&"A").len(), 2);
    assert_eq!(graph.incoming_vertices(&"C").len(), 1);
    assert_eq!(graph.incoming_vertices(&"D").len(), 0);
}

#[test]
fn test_remove_nonexistent_edge() {
    let mut graph = Graph::directed();
    graph.add_vertex("A");
    graph.add_vertex("B");

    assert_eq!(
        graph.remove_edge(&"A", &"B"),
        Err(GraphError::EdgeNotFound { from: "A", to: "B" })
    );
    assert_eq!(
        graph.remove_edge(&"A", &"Z"),
        Err(GraphError::VerticesNotFound { from: "A", to: "Z" })
    );
}

#[test]
fn test_in_degree() {
    let graph = Graph::from_adjacency(link_adjacency(), true).unwrap();

    assert_eq!(graph.in_degree(&"A"), 3);
    assert_eq!(graph.in_degree(&"B"), 1);
    assert_eq!(graph.in_degree(&"C"), 2);
    assert_eq!(graph.in_degree(&"D"), 0);
}

#[test]
fn test_out_degree() {
    let graph = Graph::from_adjacency(link_adjacency(), true).unwrap();

    assert_eq!(graph.out_degree(&"A"), Ok(0));
    assert_eq!(graph.out_degree(&"B"), Ok(2));
    assert_eq!(graph.out_degree(&"C"), Ok(1));
    assert_eq!(graph.out_degree(&"D"), Ok(3));
    assert_eq!(graph.out_degree(&"E"), Err(GraphError::VertexNotFound("E")));
}

#[test]
fn test_undirected_add() {
    let mut graph = Graph::undirected();
    graph.add_vertex("A");
    graph.add_vertex("B");
    graph.add_edge("A", "B");

    assert_eq!(graph.number_of_vertices(), 2);
    assert_eq!(graph.incoming_vertices(&"A"), vec![&"B"]);
    assert_eq!(graph.incoming_vertices(&"B"), vec![&"A"]);
}

#[test]
fn test_undirected_remove() {
    let mut graph = Graph::from_adjacency(complete_adjacency(), false).unwrap();
    graph.remove_edge(&"B", &"A").unwrap();
    graph.remove_edge(&"A", &"D").unwrap();

    assert_eq!(graph.number_of_vertices(), 4);
    assert_eq!(graph.incoming_vertices(&"A").len(), 1);
    assert_eq!(graph.incoming_vertices(&"B").len(), 2);
    assert_eq!(graph.incoming_vertices(&"C").len(), 3);
    assert_eq!(graph.incoming_vertices(&"D").len(), 2);
    assert!(!graph.contains_edge(&"A", &"B"));
    assert!(!graph.contains_edge(&"D", &"A"));
}

#[test]
fn test_graph_verify() {
    assert!(Graph::from_adjacency(link_adjacency(), true).is_ok());

    let result = Graph::from_adjacency(link_adjacency(), false);
    assert_eq!(
        result,
        Err(GraphError::InvalidGraph {
            from: "B",
            to: "A",
            violation: Violation::Unidirectional,
        })
    );
}

#[test]
fn test_graph_verify_dangling_edge() {
    let mut adjacency = link_adjacency();
    adjacency.shift_remove("A");

    for directed in [true, false] {
        let err = Graph::from_adjacency(adjacency.clone(), directed).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidGraph {
                from: "B",
                to: "A",
                violation: Violation::MissingVertex,
            }
        );
    }
}

#[test]
fn test_failed_operations_leave_graph_unchanged() {
    let mut graph = Graph::from_adjacency(link_adjacency(), true).unwrap();
    let before = graph.clone();

    assert!(graph.remove_vertex(&"Z").is_err());
    assert!(graph.remove_edge(&"A", &"B").is_err());
    assert!(graph.remove_edge(&"Z", &"A").is_err());
    assert_eq!(graph, before);
}
