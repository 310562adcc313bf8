// Integration tests for the graph trace engine

use algoscope::graph::{
    mst, shortest_path, traverse, Edge, Graph, GraphError, TraversalKind, Vertex,
};

/// The built-in 5-vertex weighted graph (weights 2, 4, 3, 1, 2).
fn demo_graph() -> Graph {
    let vertices = vec![
        Vertex::new("1"),
        Vertex::new("2"),
        Vertex::new("3"),
        Vertex::new("4"),
        Vertex::new("5"),
    ];
    let edges = vec![
        Edge::new("e1-2", "1", "2", Some(2)),
        Edge::new("e1-3", "1", "3", Some(4)),
        Edge::new("e2-4", "2", "4", Some(3)),
        Edge::new("e3-5", "3", "5", Some(1)),
        Edge::new("e4-5", "4", "5", Some(2)),
    ];
    Graph::new(vertices, edges).expect("demo graph is valid")
}

fn visit_order(steps: &[algoscope::snapshot::VisitSnapshot]) -> Vec<String> {
    steps.last().map(|s| s.visited.clone()).unwrap_or_default()
}

#[test]
fn test_bfs_visits_breadth_first() {
    let graph = demo_graph();
    let steps = traverse(TraversalKind::Bfs, &graph, "1").expect("valid start");

    assert_eq!(visit_order(&steps), vec!["1", "2", "3", "4", "5"]);
    // One snapshot per visit, each extending the previous visited set.
    assert_eq!(steps.len(), 5);
    for (i, step) in steps.iter().enumerate() {
        assert_eq!(step.visited.len(), i + 1);
    }
}

#[test]
fn test_dfs_explores_first_listed_edge_first() {
    let graph = demo_graph();
    let steps = traverse(TraversalKind::Dfs, &graph, "1").expect("valid start");

    // Reverse pushes make the traversal match left-to-right recursion:
    // 1 → 2 → 4 → 5, then back up to 3.
    assert_eq!(visit_order(&steps), vec!["1", "2", "4", "5", "3"]);
}

#[test]
fn test_traversal_is_directed() {
    // Only source → target is walkable: 2 has no out-edges here.
    let graph = Graph::new(
        vec![Vertex::new("1"), Vertex::new("2")],
        vec![Edge::new("e1-2", "1", "2", None)],
    )
    .expect("valid graph");

    let from_target = traverse(TraversalKind::Bfs, &graph, "2").expect("valid start");
    assert_eq!(visit_order(&from_target), vec!["2"]);
}

#[test]
fn test_mst_has_n_minus_one_edges_of_minimum_weight() {
    let graph = demo_graph();
    let steps = mst(&graph);

    let last = steps.last().expect("MST steps");
    assert_eq!(last.edges.len(), graph.vertices().len() - 1);
    // Minimum spanning weight of the demo graph: 1 + 2 + 2 + 3.
    assert_eq!(last.total_weight(), 8);

    // Edges are accepted in ascending weight order.
    let weights: Vec<u64> = last.edges.iter().map(|e| e.weight).collect();
    assert_eq!(weights, vec![1, 2, 2, 3]);

    // The rejected edge is the heaviest one.
    assert!(!last
        .edges
        .iter()
        .any(|e| e.source == "1" && e.target == "3"));
}

#[test]
fn test_mst_emits_one_snapshot_per_accepted_edge() {
    let steps = mst(&demo_graph());
    assert_eq!(steps.len(), 4);
    for (i, step) in steps.iter().enumerate() {
        assert_eq!(step.edges.len(), i + 1);
    }
}

#[test]
fn test_mst_defaults_missing_weights_to_one() {
    let graph = Graph::new(
        vec![Vertex::new("a"), Vertex::new("b"), Vertex::new("c")],
        vec![
            Edge::new("ab", "a", "b", Some(5)),
            Edge::new("bc", "b", "c", None),
            Edge::new("ac", "a", "c", None),
        ],
    )
    .expect("valid graph");

    let last = mst(&graph).pop().expect("MST steps");
    // Both unweighted edges (weight 1) win over the weight-5 edge.
    assert_eq!(last.total_weight(), 2);
}

#[test]
fn test_dijkstra_computes_shortest_distances() {
    let graph = demo_graph();
    let result = shortest_path(&graph, "1").expect("valid start");

    assert_eq!(result.distances.get("1"), Some(&0));
    assert_eq!(result.distances.get("2"), Some(&2));
    assert_eq!(result.distances.get("3"), Some(&4));
    assert_eq!(result.distances.get("4"), Some(&5));
    // 5 is reached through 3 (4 + 1), cheaper than through 4 (5 + 2).
    assert_eq!(result.distances.get("5"), Some(&5));
}

#[test]
fn test_dijkstra_finalizes_in_distance_order_with_insertion_tiebreak() {
    let result = shortest_path(&demo_graph(), "1").expect("valid start");
    // 4 and 5 tie at distance 5; 4 was inserted first.
    assert_eq!(visit_order(&result.steps), vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_dijkstra_never_finalizes_unreachable_vertices() {
    let graph = Graph::new(
        vec![Vertex::new("1"), Vertex::new("2"), Vertex::new("6")],
        vec![Edge::new("e1-2", "1", "2", Some(3))],
    )
    .expect("valid graph");

    let result = shortest_path(&graph, "1").expect("valid start");
    assert_eq!(visit_order(&result.steps), vec!["1", "2"]);
    assert_eq!(result.distances.get("6"), None);
}

#[test]
fn test_edge_endpoints_must_exist() {
    let err = Graph::new(
        vec![Vertex::new("1")],
        vec![Edge::new("dangling", "1", "9", None)],
    )
    .expect_err("endpoint 9 does not exist");

    assert_eq!(
        err,
        GraphError::UnknownVertex {
            edge: "dangling".to_string(),
            vertex: "9".to_string(),
        }
    );
}

#[test]
fn test_unknown_start_is_rejected() {
    let graph = demo_graph();
    assert!(matches!(
        traverse(TraversalKind::Bfs, &graph, "99"),
        Err(GraphError::UnknownStart { .. })
    ));
    assert!(matches!(
        shortest_path(&graph, "99"),
        Err(GraphError::UnknownStart { .. })
    ));
}

#[test]
fn test_engines_do_not_mutate_the_graph() {
    let graph = demo_graph();
    let edges_before = graph.edges().to_vec();

    let _ = traverse(TraversalKind::Bfs, &graph, "1");
    let _ = traverse(TraversalKind::Dfs, &graph, "1");
    let _ = mst(&graph);
    let _ = shortest_path(&graph, "1");

    assert_eq!(graph.edges(), &edges_before[..]);
}
