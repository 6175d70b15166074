#![no_main]

use libfuzzer_sys::fuzz_target;
use graphkit::graph::{algorithms, AdjacencyGraph};

fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };

    let mut graph = if flags & 1 == 0 {
        AdjacencyGraph::<u8>::new_directed()
    } else {
        AdjacencyGraph::<u8>::new_undirected()
    };
    for pair in rest.chunks_exact(2) {
        graph.add_vertex(pair[0] % 32);
        graph.add_vertex(pair[1] % 32);
        let _ = graph.add_edge(pair[0] % 32, pair[1] % 32);
    }

    let _ = algorithms::describe_vertices(&graph);
    let _ = algorithms::topological_sort(&graph);
    let _ = algorithms::find_articulation_vertices(&graph);
    if let Some(start) = rest.first() {
        let start = start % 32;
        if let Ok(tree) = algorithms::traverse_dfs(&graph, &start, |_| true, |_| true, |_, _| true) {
            for node in tree.nodes() {
                assert!(node.exit_time().is_some_and(|exit| node.entry_time() < exit));
            }
        }
        let _ = algorithms::find_shortest_path(&graph, &start, &0);
        let _ = algorithms::find_cheapest_path(&graph, &start, &0);
    }
});
