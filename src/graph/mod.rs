//! Generic graph infrastructure for traversal and analysis.
//!
//! This module provides the abstraction every algorithm in the crate is written against,
//! the small value types those algorithms exchange, and a ready-made adjacency-list graph.
//! The implementation prioritizes correctness, clear semantics, and well-defined
//! interruption behaviour over raw performance.
//!
//! # Architecture
//!
//! The graph module is organized into several components:
//!
//! - **Contract**: [`Graph`] describes a finite vertex set, per-vertex edge enumeration and
//!   a directed/undirected flag, plus an optional path-cost heuristic
//! - **Core Types**: [`Edge`] carries `(from, to, weight)`; [`NodeId`] indexes the node arena
//!   a traversal builds; [`Measure`] is the weight arithmetic the path finders need
//! - **Reference Graph**: [`AdjacencyGraph`] implements the contract over adjacency lists
//! - **Algorithms**: [`algorithms`] holds the traversal engines and the analyses built on them
//!
//! # Design Principles
//!
//! ## Caller-Chosen Vertices
//!
//! Vertices are plain values of any `Clone + Eq + Hash` type. Algorithms never mutate them
//! and identify them by equality only.
//!
//! ## Arena-Indexed Traversal Records
//!
//! Every traversal records the nodes it produces in a flat arena. Parent links are
//! [`NodeId`] indices into that arena, so traversal trees never own each other and never
//! form reference cycles.
//!
//! ## Immutable During Traversal
//!
//! Every algorithm borrows the graph immutably for the whole call. Structural mutation while
//! a traversal is running is therefore rejected by the borrow checker.
//!
//! # Usage Examples
//!
//! ## Creating a Simple Graph
//!
//! ```rust
//! use graphkit::graph::{AdjacencyGraph, Graph};
//!
//! // Create a diamond-shaped graph: A -> B, A -> C, B -> D, C -> D
//! let mut graph = AdjacencyGraph::<&str>::new_directed();
//! for v in ["A", "B", "C", "D"] {
//!     graph.add_vertex(v);
//! }
//! graph.add_edge("A", "B")?;
//! graph.add_edge("A", "C")?;
//! graph.add_edge("B", "D")?;
//! graph.add_edge("C", "D")?;
//!
//! assert_eq!(graph.vertex_count(), 4);
//! assert_eq!(graph.edge_count(), 4);
//! assert!(graph.is_directed());
//! # Ok::<(), graphkit::Error>(())
//! ```
//!
//! ## Traversing a Graph
//!
//! ```rust
//! use graphkit::graph::{algorithms, AdjacencyGraph};
//!
//! let graph = AdjacencyGraph::<&str>::from_edges(true, [("A", "B"), ("B", "C")]);
//!
//! let tree = algorithms::traverse_dfs(&graph, &"A", |_| true, |_| true, |_, _| true)?;
//! assert_eq!(tree.len(), 3);
//! # Ok::<(), graphkit::Error>(())
//! ```

mod adjacency;
mod edge;
mod node;
mod traits;

pub mod algorithms;

// Re-export core types at module level
pub use adjacency::AdjacencyGraph;
pub use edge::Edge;
pub use node::NodeId;
pub use traits::{Graph, Measure};
