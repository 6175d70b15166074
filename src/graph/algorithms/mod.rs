//! Graph algorithms for traversal and structural analysis.
//!
//! This module provides the two traversal engines and the analyses built on top of them.
//! Every function is generic over [`Graph`](crate::graph::Graph), so it runs unchanged on
//! [`AdjacencyGraph`](crate::graph::AdjacencyGraph) or any caller-defined graph.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`traverse_dfs`] / [`traverse_dfs_with`] / [`traverse_dfs_forest`] - Timestamped
//!   depth-first traversal with visitor hooks
//! - [`traverse_bfs`] / [`bfs`] - Breadth-first traversal, by callback or lazily
//! - [`postorder`] / [`reverse_postorder`] - Depth-first orderings
//! - [`fill_reachable`] - Touch every reachable vertex once
//!
//! ## Structure
//!
//! - [`find_articulation_vertices`] - Cut vertices of an undirected graph
//! - [`topological_sort`] - Dependency ordering of a DAG
//! - [`has_cycle`] / [`find_cycle`] - Cycle detection
//! - [`strongly_connected_components`] - Tarjan's SCC
//! - [`describe_vertices`] - Component index and degrees per vertex
//!
//! ## Paths
//!
//! - [`find_shortest_path`] - Fewest edges
//! - [`find_cheapest_path`] / [`find_cheapest_path_with_cost`] / [`find_cheapest_path_with`] -
//!   Lowest total weight (Dijkstra / A*)
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Graph Kind |
//! |-----------|-----------------|------------|
//! | DFS/BFS | O(V + E) | Any |
//! | Articulation vertices | O(V + E) | Undirected |
//! | Topological Sort | O(V + E) | Directed |
//! | SCC | O(V + E) | Directed |
//! | Shortest path | O(V + E) | Any |
//! | Cheapest path | O((V + E) log V) | Any, non-negative weights |
//!
//! # Examples
//!
//! ## Traversal
//!
//! ```rust
//! use graphkit::graph::{algorithms, AdjacencyGraph};
//!
//! let graph = AdjacencyGraph::<&str>::from_edges(true, [("A", "B"), ("B", "C")]);
//!
//! let mut discovered = Vec::new();
//! algorithms::traverse_dfs(&graph, &"A", |n| { discovered.push(*n.vertex()); true }, |_| true, |_, _| true)?;
//! assert_eq!(discovered, vec!["A", "B", "C"]);
//! # Ok::<(), graphkit::Error>(())
//! ```
//!
//! ## Cycle Detection
//!
//! ```rust
//! use graphkit::graph::{algorithms, AdjacencyGraph};
//!
//! let dag = AdjacencyGraph::<u32>::from_edges(true, [(0, 1), (1, 2)]);
//! assert!(!algorithms::has_cycle(&dag)?);
//! assert!(algorithms::topological_sort(&dag).is_ok());
//! # Ok::<(), graphkit::Error>(())
//! ```

mod articulation;
mod bfs;
mod cycles;
mod describe;
mod dfs;
mod paths;
mod scc;
mod topological;

pub use articulation::find_articulation_vertices;
pub use bfs::{bfs, fill_reachable, traverse_bfs, BfsIterator, BfsNode, BfsTree};
pub use cycles::{find_cycle, has_cycle};
pub use describe::{describe_vertices, VertexDescriptor};
pub use dfs::{
    postorder, reverse_postorder, traverse_dfs, traverse_dfs_forest, traverse_dfs_with,
    DfsCallbacks, DfsNode, DfsTree, DfsVisitor, EdgeKind, VisitState,
};
pub use paths::{
    find_cheapest_path, find_cheapest_path_with, find_cheapest_path_with_cost,
    find_shortest_path, CheapestPath, PathOptions,
};
pub use scc::strongly_connected_components;
pub use topological::topological_sort;
