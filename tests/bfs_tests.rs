use std::cell::RefCell;

use graph_walk::algorithm::{EventKind, TraversalEvent, TraversalSignals};
use graph_walk::graph::generators::{cycle_by_edges, cycle_by_vertices, cycle_from_pairs};
use graph_walk::graph::{EdgePolicy, Graph, UndirectedGraph};
use graph_walk::{Bfs, Error};

fn arc_distance(n: usize, s: usize, v: usize) -> usize {
    let d = if v > s { v - s } else { s - v };
    d.min(n - d)
}

#[test]
fn test_bfs_on_eight_cycle() {
    let bfs = Bfs::new();

    for graph in [cycle_by_vertices(8), cycle_by_edges(8), cycle_from_pairs(8)] {
        let result = bfs.compute(&graph, 0).unwrap();
        let distances: Vec<usize> = result.distances.iter().map(|d| d.unwrap()).collect();
        assert_eq!(distances, vec![0, 1, 2, 3, 4, 3, 2, 1]);

        // Both 3 and 5 lie on a shortest path to 4; FIFO order over
        // insertion-ordered adjacency reaches it through 3 first
        let pred = result.predecessors[4].unwrap();
        assert!(pred == 3 || pred == 5);
        assert_eq!(pred, 3);
        assert_eq!(result.predecessors[0], None);
    }
}

#[test]
fn test_bfs_distances_follow_shorter_arc() {
    let bfs = Bfs::new();
    for n in 3..14 {
        let graph = cycle_from_pairs(n);
        for s in 0..n {
            let result = bfs.compute(&graph, s).unwrap();
            for v in 0..n {
                assert_eq!(
                    result.distance(v),
                    Some(arc_distance(n, s, v)),
                    "C_{} from {} to {}",
                    n,
                    s,
                    v
                );
            }
        }
    }
}

#[test]
fn test_predecessor_chain_length_matches_distance() {
    let graph = cycle_by_vertices(11);
    let result = Bfs::new().compute(&graph, 4).unwrap();

    for v in graph.vertices() {
        let mut steps = 0;
        let mut current = v;
        while current != result.source {
            current = result.predecessors[current].unwrap();
            steps += 1;
            assert!(steps <= graph.vertex_count(), "predecessor chain should terminate");
        }
        assert_eq!(steps, result.distance(v).unwrap());

        let path = result.path_to(v).unwrap();
        assert_eq!(path.len(), steps + 1);
        assert_eq!(path[0], 4);
        assert_eq!(*path.last().unwrap(), v);
    }
}

#[test]
fn test_bfs_is_idempotent() {
    let graph = cycle_by_edges(9);
    let bfs = Bfs::new();

    let first = bfs.compute(&graph, 2).unwrap();
    let second = bfs.compute(&graph, 2).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_record_into_caller_storage() {
    let graph = cycle_from_pairs(9);
    let mut distances = [0i32; 9];
    let mut predecessors = [0usize; 9];

    Bfs::new()
        .record_into(&graph, 0, Some(&mut distances[..]), Some(&mut predecessors[..]))
        .unwrap();

    assert_eq!(distances, [0, 1, 2, 3, 4, 4, 3, 2, 1]);
    assert_eq!(predecessors, [0, 0, 1, 2, 3, 6, 7, 8, 0]);
}

#[test]
fn test_unreached_vertices_keep_sentinels() {
    let graph: UndirectedGraph =
        UndirectedGraph::from_edge_pairs(vec![(0, 1), (1, 2), (3, 4)], 6, EdgePolicy::Unique);

    let mut distances = vec![usize::MAX; 6];
    distances[0] = 0;
    let mut predecessors: Vec<usize> = (0..6).collect();

    Bfs::new()
        .record_into(&graph, 0, Some(&mut distances[..]), Some(&mut predecessors[..]))
        .unwrap();

    assert_eq!(distances, vec![0, 1, 2, usize::MAX, usize::MAX, usize::MAX]);
    assert_eq!(predecessors, vec![0, 0, 1, 3, 4, 5]);

    let result = Bfs::new().compute(&graph, 0).unwrap();
    assert!(!result.is_reachable(3));
    assert_eq!(result.path_to(4), None);
    assert_eq!(result.reached_count(), 3);
}

#[test]
fn test_record_only_predecessors() {
    let graph = cycle_by_vertices(8);
    let mut predecessors = [0usize; 8];

    Bfs::new()
        .record_into::<_, u32>(&graph, 0, None, Some(&mut predecessors[..]))
        .unwrap();

    assert_eq!(predecessors, [0, 0, 1, 2, 3, 6, 7, 0]);
}

#[test]
fn test_storage_too_small_is_rejected() {
    let graph = cycle_by_vertices(8);
    let mut distances = [0u32; 3];

    let err = Bfs::new()
        .record_into(&graph, 0, Some(&mut distances[..]), None)
        .unwrap_err();
    assert!(matches!(err, Error::StorageTooSmall { required: 8, actual: 3 }));
    assert_eq!(distances, [0, 0, 0], "nothing should be written");
}

#[test]
fn test_invalid_source_is_rejected() {
    let graph = cycle_by_vertices(8);

    assert!(matches!(Bfs::new().compute(&graph, 8), Err(Error::InvalidVertex(8))));
    let mut signals = TraversalSignals::new();
    assert!(matches!(
        Bfs::new().traverse(&graph, 100, &mut signals),
        Err(Error::InvalidVertex(100))
    ));
}

#[test]
fn test_observers_fire_once_per_tree_edge_in_order() {
    let n = 10;
    let graph = cycle_from_pairs(n);
    let log = RefCell::new(Vec::new());

    let mut signals = TraversalSignals::new();
    signals.connect(EventKind::TreeEdge, "first", |event: &TraversalEvent<usize>| {
        log.borrow_mut().push(("first", event.vertex));
    });
    signals.connect(EventKind::TreeEdge, "second", |event: &TraversalEvent<usize>| {
        log.borrow_mut().push(("second", event.vertex));
    });
    assert_eq!(signals.slot_count(EventKind::TreeEdge), 2);

    Bfs::new().traverse(&graph, 0, &mut signals).unwrap();
    drop(signals);

    let log = log.into_inner();
    assert_eq!(log.len(), 2 * (n - 1));
    for pair in log.chunks(2) {
        assert_eq!(pair[0].0, "first");
        assert_eq!(pair[1].0, "second");
        assert_eq!(pair[0].1, pair[1].1);
    }
}

#[test]
fn test_recorders_and_observers_share_events() {
    let graph = cycle_by_edges(6);
    let mut distances = [0u64; 6];
    let mut predecessors = [0usize; 6];
    let tree_edges = RefCell::new(0);

    let mut signals = TraversalSignals::new();
    signals.record_distances(&mut distances[..]);
    signals.record_predecessors(&mut predecessors[..]);
    signals.connect(EventKind::TreeEdge, "count", |_: &TraversalEvent<usize>| {
        *tree_edges.borrow_mut() += 1;
    });
    Bfs::new().traverse(&graph, 0, &mut signals).unwrap();
    drop(signals);

    assert_eq!(distances, [0, 1, 2, 3, 2, 1]);
    assert_eq!(predecessors, [0, 0, 1, 2, 5, 0]);
    assert_eq!(tree_edges.into_inner(), 5);
}

#[test]
fn test_event_counts_on_cycle() {
    let n = 7;
    let graph = cycle_by_vertices(n);
    let counts = RefCell::new(std::collections::HashMap::new());

    let mut signals = TraversalSignals::new();
    for kind in [
        EventKind::DiscoverVertex,
        EventKind::ExamineVertex,
        EventKind::ExamineEdge,
        EventKind::TreeEdge,
        EventKind::NonTreeEdge,
        EventKind::FinishVertex,
    ] {
        signals.connect(kind, "count", |event: &TraversalEvent<usize>| {
            *counts.borrow_mut().entry(event.kind).or_insert(0usize) += 1;
        });
    }
    Bfs::new().traverse(&graph, 3, &mut signals).unwrap();
    drop(signals);

    let counts = counts.into_inner();
    assert_eq!(counts[&EventKind::DiscoverVertex], n);
    assert_eq!(counts[&EventKind::ExamineVertex], n);
    assert_eq!(counts[&EventKind::FinishVertex], n);
    assert_eq!(counts[&EventKind::ExamineEdge], 2 * n);
    assert_eq!(counts[&EventKind::TreeEdge], n - 1);
    assert_eq!(counts[&EventKind::NonTreeEdge], n + 1);
}

#[test]
fn test_disconnect_removes_named_slots() {
    let graph = cycle_by_vertices(5);
    let hits = RefCell::new(0);

    let mut signals = TraversalSignals::new();
    signals.connect(EventKind::DiscoverVertex, "noisy", |_: &TraversalEvent<usize>| {
        *hits.borrow_mut() += 1;
    });
    signals.connect(EventKind::FinishVertex, "noisy", |_: &TraversalEvent<usize>| {
        *hits.borrow_mut() += 1;
    });
    assert_eq!(signals.disconnect("noisy"), 2);
    assert_eq!(signals.disconnect("noisy"), 0);
    assert!(signals.is_empty());

    Bfs::new().traverse(&graph, 0, &mut signals).unwrap();
    drop(signals);
    assert_eq!(hits.into_inner(), 0);
}

#[test]
fn test_source_is_discovered_first() {
    let graph = cycle_by_vertices(5);
    let order = RefCell::new(Vec::new());

    let mut signals = TraversalSignals::new();
    signals.connect(EventKind::DiscoverVertex, "order", |event: &TraversalEvent<usize>| {
        order.borrow_mut().push((event.vertex, event.distance));
    });
    Bfs::new().traverse(&graph, 2, &mut signals).unwrap();
    drop(signals);

    let order = order.into_inner();
    assert_eq!(order[0], (2, Some(0)));
    assert_eq!(order.len(), 5);
    let distances: Vec<usize> = order.iter().map(|(_, d)| d.unwrap()).collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]), "discovery is in distance order");
}
