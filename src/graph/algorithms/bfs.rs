//! Breadth-first traversal engine.
//!
//! Vertices are visited in order of increasing hop distance from the start. Each visited
//! vertex is recorded as a [`BfsNode`] whose parent is the node that was being expanded when
//! the vertex was first seen, so the parent chain of any node is a shortest (fewest edges)
//! path back to the start.
//!
//! Two entry points share one engine:
//!
//! - [`bfs`] - A lazy [`BfsIterator`]; a node's edges are only enumerated when the iterator
//!   is advanced past it
//! - [`traverse_bfs`] - A callback walk that stops as soon as the callback returns `false`
//!
//! [`fill_reachable`] builds on the same walk to touch every reachable vertex exactly once.

use std::{
    collections::{HashMap, VecDeque},
    hash::Hash,
};

use crate::{
    graph::{Graph, NodeId},
    Result,
};

/// A vertex as recorded by a breadth-first traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsNode<V> {
    id: NodeId,
    vertex: V,
    parent: Option<NodeId>,
    depth: usize,
}

impl<V> BfsNode<V> {
    /// Returns the arena position of this node.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the graph vertex this node records.
    #[must_use]
    pub fn vertex(&self) -> &V {
        &self.vertex
    }

    /// Returns the node that was being expanded when this one was found, or `None` for the start.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the number of edges between the start and this node.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// The arena of nodes produced by one breadth-first traversal.
///
/// Nodes are stored in the order they were first seen, which is also the order they are
/// visited in.
#[derive(Debug, Clone)]
pub struct BfsTree<V> {
    nodes: Vec<BfsNode<V>>,
    index: HashMap<V, NodeId>,
}

impl<V: Clone + Eq + Hash> BfsTree<V> {
    fn new() -> Self {
        BfsTree {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn push(&mut self, vertex: V, parent: Option<NodeId>, depth: usize) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.index.insert(vertex.clone(), id);
        self.nodes.push(BfsNode {
            id,
            vertex,
            parent,
            depth,
        });
        id
    }

    /// Returns the number of vertices seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no vertex was seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &BfsNode<V> {
        &self.nodes[id.index()]
    }

    /// Returns the node recording `vertex`, if it was seen.
    #[must_use]
    pub fn get(&self, vertex: &V) -> Option<&BfsNode<V>> {
        self.index.get(vertex).map(|id| &self.nodes[id.index()])
    }

    /// Returns `true` if `vertex` was seen.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns all nodes in the order they were seen.
    pub fn nodes(&self) -> impl Iterator<Item = &BfsNode<V>> {
        self.nodes.iter()
    }

    /// Returns the path from the start to `vertex` by following parent links.
    ///
    /// The path is a shortest path in edge count. Returns `None` if `vertex` was not seen.
    #[must_use]
    pub fn path_to(&self, vertex: &V) -> Option<Vec<V>> {
        let mut current = *self.index.get(vertex)?;
        let mut path = vec![self.nodes[current.index()].vertex.clone()];
        while let Some(parent) = self.nodes[current.index()].parent {
            path.push(self.nodes[parent.index()].vertex.clone());
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}

/// Lazy breadth-first iterator.
///
/// Yields each reachable vertex exactly once as a [`BfsNode`]. The edges of the node most
/// recently yielded are enumerated on the following call to `next`, so stopping iteration
/// early never touches edges that would not be needed.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{algorithms, AdjacencyGraph};
///
/// let graph = AdjacencyGraph::<&str>::from_edges(true, [("A", "B"), ("A", "C"), ("B", "D")]);
///
/// let mut walk = algorithms::bfs(&graph, &"A")?;
/// let order: Vec<&str> = walk.by_ref().map(|n| n.map(|n| *n.vertex())).collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(order, vec!["A", "B", "C", "D"]);
/// assert_eq!(walk.tree().path_to(&"D"), Some(vec!["A", "B", "D"]));
/// # Ok::<(), graphkit::Error>(())
/// ```
pub struct BfsIterator<'g, G: Graph> {
    graph: &'g G,
    tree: BfsTree<G::Vertex>,
    queue: VecDeque<NodeId>,
    pending: Option<NodeId>,
    failed: bool,
}

impl<'g, G: Graph> BfsIterator<'g, G> {
    fn new(graph: &'g G, start: &G::Vertex) -> Result<Self> {
        if !graph.contains_vertex(start) {
            return Err(invalid_argument!("start vertex is not part of the graph"));
        }

        let mut tree = BfsTree::new();
        let root = tree.push(start.clone(), None, 0);
        Ok(BfsIterator {
            graph,
            tree,
            queue: VecDeque::from([root]),
            pending: None,
            failed: false,
        })
    }

    /// Enqueues every unseen target of `node`.
    fn expand(&mut self, node: NodeId) -> Result<()> {
        let depth = self.tree.nodes[node.index()].depth + 1;
        let vertex = self.tree.nodes[node.index()].vertex.clone();
        for edge in self.graph.edges_from(&vertex)? {
            if self.tree.contains(&edge.to) {
                continue;
            }
            let child = self.tree.push(edge.to, Some(node), depth);
            self.queue.push_back(child);
        }
        Ok(())
    }

    /// Expands the previously visited node, then dequeues the next one.
    fn advance(&mut self) -> Result<Option<NodeId>> {
        if let Some(previous) = self.pending.take() {
            self.expand(previous)?;
        }
        let next = self.queue.pop_front();
        if let Some(id) = next {
            log::trace!("bfs: visiting {} at depth {}", id, self.tree.nodes[id.index()].depth);
        }
        self.pending = next;
        Ok(next)
    }

    /// Returns the tree built so far, including seen but not yet visited vertices.
    #[must_use]
    pub fn tree(&self) -> &BfsTree<G::Vertex> {
        &self.tree
    }

    /// Consumes the iterator, returning the tree built so far.
    #[must_use]
    pub fn into_tree(self) -> BfsTree<G::Vertex> {
        self.tree
    }
}

impl<G: Graph> Iterator for BfsIterator<'_, G> {
    type Item = Result<BfsNode<G::Vertex>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.advance() {
            Ok(next) => next.map(|id| Ok(self.tree.nodes[id.index()].clone())),
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }
}

/// Returns a lazy breadth-first iterator starting at `start`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `start` is not part
/// of the graph. Edge-enumeration failures are yielded by the iterator.
pub fn bfs<'g, G: Graph>(graph: &'g G, start: &G::Vertex) -> Result<BfsIterator<'g, G>> {
    BfsIterator::new(graph, start)
}

/// Runs a breadth-first traversal from `start`, calling `on_visit` as each node is dequeued.
///
/// `on_visit` receives the tree built so far and the node being visited. Returning `false`
/// stops the traversal: the node is not expanded and nothing else is visited.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `start` is not part
/// of the graph, and propagates edge-enumeration failures of the graph.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{algorithms, AdjacencyGraph};
///
/// let graph = AdjacencyGraph::<u32>::from_edges(false, [(1, 2), (2, 3), (3, 4)]);
///
/// // Stop once vertex 3 is reached
/// let tree = algorithms::traverse_bfs(&graph, &1, |_, node| *node.vertex() != 3)?;
/// assert_eq!(tree.path_to(&3), Some(vec![1, 2, 3]));
/// assert!(!tree.contains(&4));
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn traverse_bfs<G, F>(
    graph: &G,
    start: &G::Vertex,
    mut on_visit: F,
) -> Result<BfsTree<G::Vertex>>
where
    G: Graph,
    F: FnMut(&BfsTree<G::Vertex>, &BfsNode<G::Vertex>) -> bool,
{
    let mut walk = BfsIterator::new(graph, start)?;
    let mut stopped = false;

    while let Some(id) = walk.advance()? {
        if !on_visit(&walk.tree, &walk.tree.nodes[id.index()]) {
            stopped = true;
            break;
        }
    }

    log::debug!(
        "bfs: saw {} vertices (stopped early: {})",
        walk.tree.len(),
        stopped
    );
    Ok(walk.into_tree())
}

/// Calls `paint` exactly once for every vertex reachable from `start`, `start` included.
///
/// Reachability follows [`Graph::edges_from`] as reported: on a directed graph only
/// vertices reachable along edge directions are painted.
///
/// # Returns
///
/// The number of painted vertices.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `start` is not part
/// of the graph.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use graphkit::graph::{algorithms, AdjacencyGraph};
///
/// let graph = AdjacencyGraph::<char>::from_edges(false, [('a', 'b'), ('c', 'd')]);
/// let mut colour = HashMap::new();
///
/// let painted = algorithms::fill_reachable(&graph, &'a', |v| {
///     colour.insert(*v, "red");
/// })?;
/// assert_eq!(painted, 2);
/// assert!(!colour.contains_key(&'c'));
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn fill_reachable<G, P>(graph: &G, start: &G::Vertex, mut paint: P) -> Result<usize>
where
    G: Graph,
    P: FnMut(&G::Vertex),
{
    let tree = traverse_bfs(graph, start, |_, node| {
        paint(node.vertex());
        true
    })?;
    Ok(tree.len())
}
