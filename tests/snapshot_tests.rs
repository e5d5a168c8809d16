use graph_walk::algorithm::ShortestPathAlgorithm;
use graph_walk::graph::generators::{cycle_by_edges, weighted_cycle};
use graph_walk::graph::{EdgePolicy, Graph, MutableGraph, PropertyGraph, UndirectedGraph};
use graph_walk::snapshot::{GraphSnapshot, FORMAT_VERSION};
use graph_walk::{Dijkstra, Error};

fn edge_list<G: Graph>(graph: &G) -> Vec<(usize, usize)> {
    graph.edges().map(|e| (e.source, e.target)).collect()
}

#[test]
fn test_weighted_snapshot_round_trip() {
    let graph = weighted_cycle(&[1u32, 3, 2, 4, 3, 1, 2, 3]).unwrap();
    let snapshot = GraphSnapshot::from_weighted(&graph);
    assert_eq!(snapshot.format_version, FORMAT_VERSION);
    assert_eq!(snapshot.weights.as_deref(), Some(&[1, 3, 2, 4, 3, 1, 2, 3][..]));

    let mut buffer = Vec::new();
    snapshot.write_json(&mut buffer).unwrap();
    let loaded: GraphSnapshot<u32> = GraphSnapshot::read_json(buffer.as_slice()).unwrap();
    assert_eq!(loaded, snapshot);

    let rebuilt = loaded.to_weighted_graph().unwrap();
    assert_eq!(rebuilt.vertex_count(), graph.vertex_count());
    assert_eq!(edge_list(&rebuilt), edge_list(&graph));
    for edge in graph.edges() {
        assert_eq!(rebuilt.edge_property(edge.id), graph.edge_property(edge.id));
    }

    let before = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let after = Dijkstra::new().compute_shortest_paths(&rebuilt, 0).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_unweighted_snapshot_keeps_isolated_vertices() {
    let mut graph = cycle_by_edges(5);
    graph.add_vertex();
    graph.add_vertex();

    let snapshot: GraphSnapshot<u32> = GraphSnapshot::from_graph(&graph);
    assert!(snapshot.weights.is_none());

    let rebuilt = snapshot.to_graph().unwrap();
    assert_eq!(rebuilt.vertex_count(), 7);
    assert_eq!(edge_list(&rebuilt), edge_list(&graph));
    assert_eq!(rebuilt.degree(6), 0);

    assert!(matches!(
        snapshot.to_weighted_graph(),
        Err(Error::WeightCountMismatch { expected: 5, actual: 0 })
    ));
}

#[test]
fn test_snapshot_preserves_parallel_policy() {
    let mut graph: UndirectedGraph = UndirectedGraph::with_policy(EdgePolicy::Parallel);
    graph.add_edge(0, 1);
    graph.add_edge(0, 1);

    let snapshot: GraphSnapshot<u32> = GraphSnapshot::from_graph(&graph);
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"policy\":\"parallel\""));

    let rebuilt = snapshot.to_graph().unwrap();
    assert_eq!(rebuilt.policy(), EdgePolicy::Parallel);
    assert_eq!(rebuilt.edge_count(), 2);
}

#[test]
fn test_unknown_version_is_rejected() {
    let mut snapshot: GraphSnapshot<u32> = GraphSnapshot::from_graph(&cycle_by_edges(4));
    snapshot.format_version = FORMAT_VERSION + 1;

    let json = serde_json::to_vec(&snapshot).unwrap();
    let err = GraphSnapshot::<u32>::read_json(json.as_slice()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedSnapshotVersion(v) if v == FORMAT_VERSION + 1));
}

#[test]
fn test_dangling_edge_is_rejected() {
    let mut snapshot: GraphSnapshot<u32> = GraphSnapshot::from_graph(&cycle_by_edges(4));
    snapshot.edges.push((2, 9));

    assert!(matches!(snapshot.validate(), Err(Error::InvalidEdge(2, 9))));
    assert!(snapshot.to_graph().is_err());
}

#[test]
fn test_weight_count_must_match_edges() {
    let graph = weighted_cycle(&[1u32, 2, 3, 4]).unwrap();
    let mut snapshot = GraphSnapshot::from_weighted(&graph);
    if let Some(weights) = snapshot.weights.as_mut() {
        weights.pop();
    }

    assert!(matches!(
        snapshot.validate(),
        Err(Error::WeightCountMismatch { expected: 4, actual: 3 })
    ));
}

#[test]
fn test_malformed_json_is_a_serialization_error() {
    let err = GraphSnapshot::<u32>::read_json("{ \"vertex_count\": ".as_bytes()).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn test_save_and_load_file() {
    let graph = weighted_cycle(&[3u32, 1, 4, 1, 5]).unwrap();
    let path = std::env::temp_dir().join(format!("graph_walk_snapshot_{}.json", std::process::id()));

    GraphSnapshot::from_weighted(&graph).save(&path).unwrap();
    let loaded: GraphSnapshot<u32> = GraphSnapshot::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.vertex_count, 5);
    assert_eq!(loaded.weights, Some(vec![3, 1, 4, 1, 5]));

    let missing = GraphSnapshot::<u32>::load(&path).unwrap_err();
    assert!(matches!(missing, Error::Io(_)));
}

#[test]
fn test_snapshot_without_weights_key() {
    let json = r#"{
        "format_version": 1,
        "created_at": "2024-03-01T12:00:00Z",
        "vertex_count": 3,
        "edges": [[0, 1], [1, 2]]
    }"#;

    let snapshot = GraphSnapshot::<u32>::read_json(json.as_bytes()).unwrap();
    assert_eq!(snapshot.weights, None);
    assert_eq!(snapshot.policy, EdgePolicy::Unique);

    let graph = snapshot.to_graph().unwrap();
    assert_eq!(edge_list(&graph), vec![(0, 1), (1, 2)]);
}
