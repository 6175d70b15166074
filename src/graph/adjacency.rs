//! Adjacency-list graph implementation.
//!
//! This module provides [`AdjacencyGraph`], a ready-made implementation of the
//! [`Graph`] contract. Vertices are caller-chosen values mapped to dense internal
//! positions; each position owns the list of edges leaving it.
//!
//! The graph can be directed or undirected. Undirected edges are stored once per
//! endpoint so that [`Graph::edges_from`] reports `(u, v)` from `u` and `(v, u)`
//! from `v` without any extra work at query time.

use std::{collections::HashMap, hash::Hash};

use crate::{
    graph::{Edge, Graph, Measure},
    Result,
};

/// A graph backed by per-vertex adjacency lists.
///
/// `AdjacencyGraph` supports:
///
/// - Any `Clone + Eq + Hash` vertex type (`V`)
/// - Any [`Measure`] weight type (`W`, `u32` by default)
/// - Directed and undirected edges, chosen at construction
/// - Parallel edges and self-loops
///
/// # Memory Layout
///
/// - Vertices are stored in insertion order, which is also the order of
///   [`Graph::vertices`]
/// - A hash map resolves a vertex to its position
/// - Each position holds its outgoing [`Edge`] values
///
/// # Thread Safety
///
/// `AdjacencyGraph<V, W>` is [`Send`] and [`Sync`] when `V` and `W` are. Build it
/// single-threaded, then run any number of algorithms over shared references.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{AdjacencyGraph, Graph};
///
/// let mut graph = AdjacencyGraph::<&str>::new_undirected();
/// graph.add_vertex("A");
/// graph.add_vertex("B");
/// graph.add_edge("A", "B")?;
///
/// // Undirected edges are reported from both endpoints
/// assert_eq!(graph.edges_from(&"A")?.count(), 1);
/// assert_eq!(graph.edges_from(&"B")?.next().unwrap().to, "A");
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), graphkit::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, W = u32>
where
    V: Clone + Eq + Hash,
{
    /// Whether edges are one-way
    directed: bool,
    /// Vertices in insertion order
    vertices: Vec<V>,
    /// Vertex to position lookup
    index: HashMap<V, usize>,
    /// Outgoing edges per position
    outgoing: Vec<Vec<Edge<V, W>>>,
    /// Number of edges added (undirected edges count once)
    edge_count: usize,
}

impl<V, W> AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash,
{
    /// Creates a new empty graph.
    ///
    /// # Arguments
    ///
    /// * `directed` - `true` for one-way edges, `false` for undirected edges
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self::with_capacity(directed, 0)
    }

    /// Creates a new empty directed graph.
    #[must_use]
    pub fn new_directed() -> Self {
        Self::new(true)
    }

    /// Creates a new empty undirected graph.
    #[must_use]
    pub fn new_undirected() -> Self {
        Self::new(false)
    }

    /// Creates a new empty graph with room for `vertex_capacity` vertices.
    #[must_use]
    pub fn with_capacity(directed: bool, vertex_capacity: usize) -> Self {
        AdjacencyGraph {
            directed,
            vertices: Vec::with_capacity(vertex_capacity),
            index: HashMap::with_capacity(vertex_capacity),
            outgoing: Vec::with_capacity(vertex_capacity),
            edge_count: 0,
        }
    }

    /// Adds a vertex to the graph.
    ///
    /// This method is idempotent: adding a vertex that already exists leaves the
    /// graph unchanged.
    ///
    /// # Returns
    ///
    /// `true` if the vertex was newly added, `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.index.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        self.outgoing.push(Vec::new());
        true
    }

    /// Adds an edge with an explicit weight.
    ///
    /// Undirected graphs record the edge from both endpoints (once for a self-loop).
    /// Multiple edges between the same pair of vertices are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if either
    /// endpoint has not been added to the graph.
    pub fn add_weighted_edge(&mut self, from: V, to: V, weight: W) -> Result<()>
    where
        W: Clone,
    {
        let Some(&source) = self.index.get(&from) else {
            return Err(invalid_argument!(
                "source vertex does not exist in graph with {} vertices",
                self.vertices.len()
            ));
        };
        let Some(&target) = self.index.get(&to) else {
            return Err(invalid_argument!(
                "target vertex does not exist in graph with {} vertices",
                self.vertices.len()
            ));
        };

        if !self.directed && source != target {
            self.outgoing[target].push(Edge::weighted(to.clone(), from.clone(), weight.clone()));
        }
        self.outgoing[source].push(Edge::weighted(from, to, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// Returns the number of edges added to the graph.
    ///
    /// An undirected edge counts once even though it is reported from both endpoints.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of edges leaving `vertex`, or `None` for an unknown vertex.
    #[must_use]
    pub fn out_degree(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).map(|&pos| self.outgoing[pos].len())
    }
}

impl<V, W> AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash,
    W: Measure,
{
    /// Adds an edge with the unit weight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if either
    /// endpoint has not been added to the graph.
    pub fn add_edge(&mut self, from: V, to: V) -> Result<()> {
        self.add_weighted_edge(from, to, W::one())
    }

    /// Builds a graph from unit-weight edges, adding endpoints as they appear.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphkit::graph::{AdjacencyGraph, Graph};
    ///
    /// let graph = AdjacencyGraph::<char>::from_edges(true, [('a', 'b'), ('b', 'c')]);
    /// assert_eq!(graph.vertices().collect::<Vec<_>>(), vec!['a', 'b', 'c']);
    /// ```
    #[must_use]
    pub fn from_edges<I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        Self::from_weighted_edges(
            directed,
            edges.into_iter().map(|(from, to)| (from, to, W::one())),
        )
    }

    /// Builds a graph from weighted edges, adding endpoints as they appear.
    #[must_use]
    pub fn from_weighted_edges<I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = Self::new(directed);
        for (from, to, weight) in edges {
            graph.add_vertex(from.clone());
            graph.add_vertex(to.clone());
            // Both endpoints were just added, so this cannot fail.
            let _ = graph.add_weighted_edge(from, to, weight);
        }
        graph
    }
}

impl<V, W> Graph for AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash,
    W: Measure,
{
    type Vertex = V;
    type Weight = W;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertices(&self) -> impl Iterator<Item = V> {
        self.vertices.iter().cloned()
    }

    fn edges_from(&self, vertex: &V) -> Result<impl Iterator<Item = Edge<V, W>>> {
        let Some(&position) = self.index.get(vertex) else {
            return Err(invalid_argument!("vertex is not part of the graph"));
        };
        Ok(self.outgoing[position].iter().cloned())
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}
