//! # graphkit Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the graphkit library. Import this module to get quick access to the graph contract,
//! the adjacency-list graph and the algorithm entry points.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphkit operations
pub use crate::Error;

/// The result type used throughout graphkit
pub use crate::Result;

// ================================================================================================
// Graph Contract
// ================================================================================================

/// Graph abstraction, edge values and weight arithmetic
pub use crate::graph::{Edge, Graph, Measure, NodeId};

/// Ready-made adjacency-list graph
pub use crate::graph::AdjacencyGraph;

// ================================================================================================
// Algorithms
// ================================================================================================

/// Algorithm module, for `algorithms::topological_sort(&graph)` style calls
pub use crate::graph::algorithms;

/// Traversal records and visitor hooks
pub use crate::graph::algorithms::{
    BfsNode, BfsTree, DfsCallbacks, DfsNode, DfsTree, DfsVisitor, EdgeKind, VisitState,
};

/// Path search configuration and results
pub use crate::graph::algorithms::{CheapestPath, PathOptions};

/// Per-vertex description record
pub use crate::graph::algorithms::VertexDescriptor;
