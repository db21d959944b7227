//! 最小生成树集成测试

use mstgraph::{Error, Graph, VertexId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn sample_graph() -> Graph<&'static str> {
    let mut graph = Graph::new();
    for v in ["A", "B", "C", "D"] {
        graph.add_vertex(v).unwrap();
    }
    graph.add_bidirectional_edge(&"A", &"B", 1.0).unwrap();
    graph.add_bidirectional_edge(&"B", &"C", 2.0).unwrap();
    graph.add_bidirectional_edge(&"A", &"C", 4.0).unwrap();
    graph.add_bidirectional_edge(&"C", &"D", 3.0).unwrap();
    graph
}

/// 随机连通图：先连一条随机权重的链，再加随机边（整数权重，求和无舍入误差）
fn random_connected_graph(rng: &mut StdRng, n: u32, extra: usize) -> Graph<u32> {
    let mut graph = Graph::with_capacity(n as usize);
    for v in 0..n {
        graph.add_vertex(v).unwrap();
    }
    for v in 1..n {
        let u = rng.gen_range(0..v);
        let w = rng.gen_range(1..50) as f64;
        graph.add_bidirectional_edge(&u, &v, w).unwrap();
    }
    for _ in 0..extra {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        let w = rng.gen_range(1..50) as f64;
        graph.add_bidirectional_edge(&u, &v, w).unwrap();
    }
    graph
}

#[test]
fn test_construction_failures() {
    let mut graph = sample_graph();

    assert!(matches!(
        graph.add_vertex("A"),
        Err(Error::VertexAlreadyExists(_))
    ));
    assert!(graph.add_vertex("E").is_ok());
    assert!(matches!(
        graph.add_edge(&"A", &"Z", 1.0),
        Err(Error::VertexNotFound(_))
    ));
    assert!(matches!(
        graph.add_bidirectional_edge(&"Z", &"A", 1.0),
        Err(Error::VertexNotFound(_))
    ));
    assert_eq!(graph.num_vertex(), 5);
    assert_eq!(graph.num_edges(), 8);
}

#[test]
fn test_negative_weight_accepted() {
    let mut graph = sample_graph();
    assert!(graph.add_bidirectional_edge(&"A", &"D", -1.0).is_ok());

    graph.calculate_prim().unwrap();
    let prim = graph.spanning_tree_cost();
    graph.calculate_kruskal().unwrap();
    assert_eq!(prim, graph.selected_weight());
    assert_eq!(prim, 1.0 + 2.0 - 1.0);
}

#[test]
fn test_concrete_scenario_both_algorithms() {
    let mut graph = sample_graph();
    let d = graph.find_vertex_id(&"D").unwrap();
    let c = graph.find_vertex_id(&"C").unwrap();

    let vertices = graph.calculate_prim().unwrap();
    assert_eq!(vertices[d.index()].path(), Some(c));
    let prim_total: f64 = vertices
        .iter()
        .filter(|v| v.path().is_some())
        .map(|v| v.dist())
        .sum();
    assert_eq!(prim_total, 6.0);

    let vertices = graph.calculate_kruskal().unwrap();
    assert_eq!(vertices[d.index()].path(), Some(c));
    assert_eq!(graph.selected_weight(), 6.0);

    let tree = graph.spanning_tree().unwrap();
    assert_eq!(tree.total_weight, 6.0);
    assert_eq!(tree.vertex_count(), 4);
}

#[test]
fn test_prim_parent_count() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut graph = random_connected_graph(&mut rng, 40, 120);

    let vertices = graph.calculate_prim().unwrap();
    let with_parent = vertices.iter().filter(|v| v.path().is_some()).count();
    assert_eq!(with_parent, 39);
    assert!(vertices[0].path().is_none());
}

#[test]
fn test_prim_and_kruskal_agree_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(2024);

    for round in 0..25 {
        let n: u32 = rng.gen_range(2..60);
        let extra = rng.gen_range(0..(n as usize * 3));
        let mut graph = random_connected_graph(&mut rng, n, extra);

        let prim_total: f64 = graph
            .calculate_prim()
            .unwrap()
            .iter()
            .skip(1)
            .map(|v| v.dist())
            .sum();
        assert_eq!(prim_total, graph.spanning_tree_cost(), "round {}", round);

        let kruskal_vertices = graph.calculate_kruskal().unwrap();
        let with_parent = kruskal_vertices
            .iter()
            .filter(|v| v.path().is_some())
            .count();
        assert_eq!(with_parent, n as usize - 1, "round {}", round);

        assert_eq!(prim_total, graph.selected_weight(), "round {}", round);
        assert_eq!(prim_total, graph.spanning_tree_cost(), "round {}", round);
    }
}

#[test]
fn test_tree_parents_reach_root() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut graph = random_connected_graph(&mut rng, 30, 60);
    graph.calculate_kruskal().unwrap();

    for v in graph.vertex_set() {
        let mut current = v.id();
        let mut steps = 0;
        while let Some(parent) = graph.vertex(current).unwrap().path() {
            current = parent;
            steps += 1;
            assert!(steps <= graph.num_vertex());
        }
        assert_eq!(current, VertexId::new(0));
    }
}

#[test]
fn test_disconnected_graph() {
    let mut graph = sample_graph();
    graph.add_vertex("X").unwrap();
    graph.add_vertex("Y").unwrap();
    graph.add_bidirectional_edge(&"X", &"Y", 5.0).unwrap();
    let x = graph.find_vertex_id(&"X").unwrap();
    let y = graph.find_vertex_id(&"Y").unwrap();

    let vertices = graph.calculate_prim().unwrap();
    for id in [x, y] {
        assert_eq!(vertices[id.index()].dist(), f64::INFINITY);
        assert!(vertices[id.index()].path().is_none());
    }

    let vertices = graph.calculate_kruskal().unwrap();
    for id in [x, y] {
        assert!(vertices[id.index()].path().is_none());
    }
    assert_eq!(graph.spanning_tree().unwrap().total_weight, 6.0);
}

#[test]
fn test_prim_then_kruskal_then_prim() {
    let mut graph = sample_graph();

    let first: Vec<_> = graph
        .calculate_prim()
        .unwrap()
        .iter()
        .map(|v| (v.dist(), v.path()))
        .collect();
    graph.calculate_kruskal().unwrap();
    let again: Vec<_> = graph
        .calculate_prim()
        .unwrap()
        .iter()
        .map(|v| (v.dist(), v.path()))
        .collect();

    assert_eq!(first, again);
}
