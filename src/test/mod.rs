//! Graph builders shared by the unit tests.

use crate::graph::AdjacencyGraph;

// Helper function to create a directed graph from unit-weight edges
pub fn directed(edges: &[(&'static str, &'static str)]) -> AdjacencyGraph<&'static str> {
    AdjacencyGraph::from_edges(true, edges.iter().copied())
}

// Helper function to create an undirected graph from unit-weight edges
pub fn undirected(edges: &[(&'static str, &'static str)]) -> AdjacencyGraph<&'static str> {
    AdjacencyGraph::from_edges(false, edges.iter().copied())
}

// Helper function to create a weighted graph
pub fn weighted(
    directed: bool,
    edges: &[(&'static str, &'static str, u32)],
) -> AdjacencyGraph<&'static str, u32> {
    AdjacencyGraph::from_weighted_edges(directed, edges.iter().copied())
}

// Helper function to create a graph of `n` isolated vertices `0..n`
pub fn isolated(directed: bool, n: u32) -> AdjacencyGraph<u32> {
    let mut graph = AdjacencyGraph::with_capacity(directed, n as usize);
    for v in 0..n {
        graph.add_vertex(v);
    }
    graph
}
