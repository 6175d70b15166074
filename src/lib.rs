// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # graphkit
//!
//! Generic graph traversal and analysis over any graph representation.
//!
//! `graphkit` works against a small contract, the [`graph::Graph`] trait: a finite vertex
//! collection, per-vertex edge enumeration and a directed/undirected flag. Anything that can
//! answer those three questions (an adjacency list, a procedurally generated grid, a graph
//! parsed from text) gets the full set of algorithms.
//!
//! ## Features
//!
//! - **Depth-first traversal** - Discovery/finish timestamps, visitor callbacks, back-edge
//!   (cycle) reporting and cooperative abort
//! - **Breadth-first traversal** - Layered walk exposing each vertex with its parent
//! - **Cut vertices** - Tarjan low-link articulation-vertex detection for undirected graphs
//! - **Topological order** - DFS post-order sorting with explicit cycle failure
//! - **Paths** - Unweighted shortest path and weighted cheapest path (Dijkstra, A*)
//! - **Description** - Connected-component index and in/out degree for every vertex
//!
//! ## Quick Start
//!
//! ```rust
//! use graphkit::prelude::*;
//!
//! let mut graph = AdjacencyGraph::<&str, u32>::new_undirected();
//! for v in ["A", "B", "C"] {
//!     graph.add_vertex(v);
//! }
//! graph.add_weighted_edge("A", "B", 3)?;
//! graph.add_weighted_edge("A", "C", 1)?;
//! graph.add_weighted_edge("C", "B", 1)?;
//!
//! let path = algorithms::find_cheapest_path(&graph, &"A", &"B")?;
//! assert_eq!(path, vec!["A", "C", "B"]);
//! # Ok::<(), graphkit::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - The graph contract, edge and node-id types, and an adjacency-list graph
//! - [`graph::algorithms`] - Traversal engines and the analyses built on top of them
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`Error`] and [`Result`] - Error handling
//!
//! Higher-level algorithms never walk the graph themselves: the articulation finder,
//! topological sorter and cycle search are visitors driven by the depth-first engine, and the
//! path finder and describer are driven by the breadth-first engine.
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result):
//!
//! ```rust
//! use graphkit::{graph::{algorithms, AdjacencyGraph}, Error};
//!
//! let graph = AdjacencyGraph::<&str>::new_directed();
//! match algorithms::find_articulation_vertices(&graph) {
//!     Err(Error::InvalidOperation(reason)) => println!("{reason}"),
//!     other => println!("{other:?}"),
//! }
//! ```
//!
//! ## Logging
//!
//! Algorithms report through the [`log`](https://docs.rs/log) facade: `debug` for per-call
//! summaries and `trace` for per-vertex events. Install any logger to see them.
#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use graphkit::prelude::*;
///
/// let mut graph = AdjacencyGraph::<u32>::new_directed();
/// graph.add_vertex(1);
/// assert_eq!(graph.vertex_count(), 1);
/// ```
pub mod prelude;

/// Graph contract, core types and graph algorithms.
///
/// # Key Types
///
/// - [`graph::Graph`] - The trait every algorithm is written against
/// - [`graph::Edge`] - A `(from, to, weight)` edge value
/// - [`graph::NodeId`] - Arena index of a node produced by a traversal
/// - [`graph::AdjacencyGraph`] - Ready-made adjacency-list graph
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{algorithms, AdjacencyGraph};
///
/// let graph = AdjacencyGraph::<char>::from_edges(true, [('a', 'b'), ('b', 'c')]);
/// let order = algorithms::topological_sort(&graph)?;
/// assert_eq!(order, vec!['a', 'b', 'c']);
/// # Ok::<(), graphkit::Error>(())
/// ```
pub mod graph;

/// `graphkit` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `graphkit` Error type
///
/// # Examples
///
/// ```rust
/// use graphkit::{graph::{algorithms, AdjacencyGraph}, Error};
///
/// let graph = AdjacencyGraph::<&str>::new_undirected();
/// let result = algorithms::find_shortest_path(&graph, &"missing", &"other");
/// assert!(matches!(result, Err(Error::InvalidArgument(_))));
/// ```
pub use error::Error;
