use std::collections::{HashMap, HashSet};

use graphkit::graph::{algorithms, AdjacencyGraph, Graph, Measure};
use proptest::prelude::*;

const MAX_VERTICES: u8 = 12;

/// Random vertex count plus weighted edges between those vertices.
fn graph_parts() -> impl Strategy<Value = (u8, Vec<(u8, u8, u32)>)> {
    (1..=MAX_VERTICES).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n, 1u32..20), 0..40),
        )
    })
}

/// Vertex count plus `u8` weights clustered at zero and at the top of the range.
fn boundary_parts() -> impl Strategy<Value = (u8, Vec<(u8, u8, u8)>)> {
    (1..=MAX_VERTICES).prop_flat_map(|n| {
        let weight = prop_oneof![0u8..4, 120u8..=130, 250u8..=u8::MAX];
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n, weight), 0..40),
        )
    })
}

/// Vertex count plus `f64` weights that include zero and infinity.
fn float_parts() -> impl Strategy<Value = (u8, Vec<(u8, u8, f64)>)> {
    (1..=MAX_VERTICES).prop_flat_map(|n| {
        let weight = prop_oneof![
            Just(0.0),
            Just(f64::INFINITY),
            Just(f64::MAX),
            0.0f64..1_000.0,
        ];
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n, weight), 0..40),
        )
    })
}

/// Cheapest cost between every pair of vertices, computed in `u64` so no sum overflows.
fn all_pairs_cost(directed: bool, n: u8, edges: &[(u8, u8, u8)]) -> Vec<Vec<Option<u64>>> {
    let n = n as usize;
    let mut cost = vec![vec![None; n]; n];
    for (v, row) in cost.iter_mut().enumerate() {
        row[v] = Some(0);
    }
    for &(from, to, weight) in edges {
        let (from, to, weight) = (from as usize, to as usize, u64::from(weight));
        let mut relax = |a: usize, b: usize| {
            if cost[a][b].map_or(true, |known| weight < known) {
                cost[a][b] = Some(weight);
            }
        };
        relax(from, to);
        if !directed {
            relax(to, from);
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (cost[i][k], cost[k][j]) {
                    if cost[i][j].map_or(true, |known| a + b < known) {
                        cost[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    cost
}

fn build<W: Measure>(directed: bool, n: u8, edges: &[(u8, u8, W)]) -> AdjacencyGraph<u8, W> {
    let mut graph = AdjacencyGraph::with_capacity(directed, n as usize);
    for v in 0..n {
        graph.add_vertex(v);
    }
    for &(from, to, weight) in edges {
        graph.add_weighted_edge(from, to, weight).unwrap();
    }
    graph
}

fn component_count(graph: &AdjacencyGraph<u8, u32>) -> usize {
    algorithms::describe_vertices(graph)
        .unwrap()
        .iter()
        .map(|d| d.component_index + 1)
        .max()
        .unwrap_or(0)
}

fn reachable<W: Measure>(graph: &AdjacencyGraph<u8, W>, from: u8) -> HashSet<u8> {
    let mut seen = HashSet::new();
    algorithms::fill_reachable(graph, &from, |v| {
        seen.insert(*v);
    })
    .unwrap();
    seen
}

fn path_weight(graph: &AdjacencyGraph<u8, u32>, path: &[u8]) -> Option<u32> {
    path.windows(2)
        .map(|step| {
            graph
                .edges_from(&step[0])
                .unwrap()
                .filter(|e| e.to == step[1])
                .map(|e| e.weight)
                .min()
        })
        .sum()
}

proptest! {
    #[test]
    fn dfs_timestamps_are_unique_and_nested(
        (n, edges) in graph_parts(),
        directed in any::<bool>(),
    ) {
        let graph = build(directed, n, &edges);
        let mut visitor = algorithms::DfsCallbacks::<u8, _, _, _>::new(|_| true, |_| true, |_, _| true);
        let tree = algorithms::traverse_dfs_forest(&graph, &mut visitor).unwrap();

        prop_assert_eq!(tree.len(), n as usize);
        let spans: Vec<(usize, usize)> = tree
            .nodes()
            .map(|node| (node.entry_time(), node.exit_time().unwrap()))
            .collect();

        let mut stamps: Vec<usize> = spans.iter().flat_map(|&(s, e)| [s, e]).collect();
        stamps.sort_unstable();
        prop_assert_eq!(stamps, (0..2 * n as usize).collect::<Vec<_>>());

        for &(s1, e1) in &spans {
            prop_assert!(s1 < e1);
            for &(s2, e2) in &spans {
                let nested = (s1 <= s2 && e2 <= e1) || (s2 <= s1 && e1 <= e2);
                let disjoint = e1 < s2 || e2 < s1;
                prop_assert!(nested || disjoint);
            }
        }

        // A child's interval lies inside its parent's
        for node in tree.nodes() {
            if let Some(parent) = node.parent() {
                let parent = tree.node(parent);
                prop_assert!(parent.entry_time() < node.entry_time());
                prop_assert!(node.exit_time() < parent.exit_time());
            }
        }
    }

    #[test]
    fn undirected_edges_are_symmetric((n, edges) in graph_parts()) {
        let graph = build(false, n, &edges);
        let mut counts: HashMap<(u8, u8), isize> = HashMap::new();
        for v in graph.vertices() {
            for edge in graph.edges_from(&v).unwrap() {
                prop_assert_eq!(edge.from, v);
                if edge.from != edge.to {
                    *counts.entry((edge.from.min(edge.to), edge.from.max(edge.to))).or_default() +=
                        if edge.from < edge.to { 1 } else { -1 };
                }
            }
        }
        prop_assert!(counts.values().all(|&c| c == 0));

        for d in algorithms::describe_vertices(&graph).unwrap() {
            prop_assert_eq!(d.in_degree, d.out_degree);
        }
    }

    #[test]
    fn topological_order_respects_edges_or_fails_on_cycle((n, edges) in graph_parts()) {
        let graph = build(true, n, &edges);
        let cyclic = algorithms::has_cycle(&graph).unwrap();

        match algorithms::topological_sort(&graph) {
            Ok(order) => {
                prop_assert!(!cyclic);
                prop_assert_eq!(order.len(), n as usize);
                let position: HashMap<u8, usize> =
                    order.iter().enumerate().map(|(i, v)| (*v, i)).collect();
                for &(from, to, _) in &edges {
                    prop_assert!(position[&from] < position[&to]);
                }
            }
            Err(error) => {
                prop_assert!(cyclic);
                prop_assert!(error.is_invalid_operation());
                let cycle = algorithms::find_cycle(&graph).unwrap().unwrap();
                prop_assert_eq!(cycle.first(), cycle.last());
            }
        }

        let sccs = algorithms::strongly_connected_components(&graph).unwrap();
        prop_assert_eq!(sccs.iter().map(Vec::len).sum::<usize>(), n as usize);
        prop_assert_eq!(cyclic, sccs.iter().any(|c| c.len() > 1) || edges.iter().any(|e| e.0 == e.1));
    }

    #[test]
    fn removing_articulation_vertex_splits_component((n, edges) in graph_parts()) {
        let graph = build(false, n, &edges);
        let cut = algorithms::find_articulation_vertices(&graph).unwrap();
        let before = component_count(&graph);

        for v in 0..n {
            let mut without = AdjacencyGraph::<u8, u32>::new_undirected();
            for u in (0..n).filter(|&u| u != v) {
                without.add_vertex(u);
            }
            for &(from, to, weight) in edges.iter().filter(|e| e.0 != v && e.1 != v) {
                without.add_weighted_edge(from, to, weight).unwrap();
            }

            let after = component_count(&without);
            prop_assert_eq!(cut.contains(&v), after > before, "vertex {}", v);
        }
    }

    #[test]
    fn shortest_path_agrees_with_reachability(
        (n, edges) in graph_parts(),
        directed in any::<bool>(),
        from_seed in any::<u8>(),
        to_seed in any::<u8>(),
    ) {
        let graph = build(directed, n, &edges);
        let (from, to) = (from_seed % n, to_seed % n);
        let path = algorithms::find_shortest_path(&graph, &from, &to).unwrap();

        prop_assert_eq!(!path.is_empty(), reachable(&graph, from).contains(&to));
        if let (Some(first), Some(last)) = (path.first(), path.last()) {
            prop_assert_eq!(*first, from);
            prop_assert_eq!(*last, to);
            prop_assert!(path_weight(&graph, &path).is_some());

            let depth = algorithms::traverse_bfs(&graph, &from, |_, _| true)
                .unwrap()
                .get(&to)
                .unwrap()
                .depth();
            prop_assert_eq!(path.len(), depth + 1);
        }
    }

    #[test]
    fn cheapest_path_is_no_heavier_than_shortest(
        (n, edges) in graph_parts(),
        directed in any::<bool>(),
        from_seed in any::<u8>(),
        to_seed in any::<u8>(),
    ) {
        let graph = build(directed, n, &edges);
        let (from, to) = (from_seed % n, to_seed % n);

        let shortest = algorithms::find_shortest_path(&graph, &from, &to).unwrap();
        let cheapest = algorithms::find_cheapest_path_with_cost(&graph, &from, &to).unwrap();

        match cheapest {
            None => prop_assert!(shortest.is_empty()),
            Some(found) => {
                prop_assert_eq!(path_weight(&graph, &found.vertices), Some(found.cost));
                prop_assert!(found.cost <= path_weight(&graph, &shortest).unwrap());
            }
        }
    }

    #[test]
    fn cheapest_cost_is_exact_or_unrepresentable(
        (n, edges) in boundary_parts(),
        directed in any::<bool>(),
        from_seed in any::<u8>(),
        to_seed in any::<u8>(),
    ) {
        let graph = build(directed, n, &edges);
        let (from, to) = (from_seed % n, to_seed % n);
        let expected = all_pairs_cost(directed, n, &edges)[from as usize][to as usize]
            .filter(|cost| *cost <= u64::from(u8::MAX));

        let found = algorithms::find_cheapest_path_with_cost(&graph, &from, &to).unwrap();
        prop_assert_eq!(found.as_ref().map(|path| u64::from(path.cost)), expected);
        if let Some(path) = found {
            prop_assert_eq!(path.vertices.first(), Some(&from));
            prop_assert_eq!(path.vertices.last(), Some(&to));
        }
    }

    #[test]
    fn float_cheapest_path_reaches_every_reachable_target(
        (n, edges) in float_parts(),
        directed in any::<bool>(),
        from_seed in any::<u8>(),
        to_seed in any::<u8>(),
    ) {
        let graph = build(directed, n, &edges);
        let (from, to) = (from_seed % n, to_seed % n);

        let found = algorithms::find_cheapest_path_with_cost(&graph, &from, &to).unwrap();
        prop_assert_eq!(found.is_some(), reachable(&graph, from).contains(&to));
        if let Some(path) = found {
            prop_assert!(path.cost >= 0.0);
            prop_assert!(!path.cost.is_nan());
            prop_assert_eq!(path.vertices.last(), Some(&to));
        }
    }
}
