//! Depth-first traversal engine.
//!
//! This module provides the timestamping depth-first engine the structural analyses in this
//! crate are built on. A traversal records every vertex it reaches as a [`DfsNode`] in a
//! [`DfsTree`] arena and reports progress to a [`DfsVisitor`]:
//!
//! - [`DfsVisitor::discover`] - A vertex is reached for the first time
//! - [`DfsVisitor::examine_edge`] - An edge has been classified
//! - [`DfsVisitor::back_edge`] - An edge leads to a vertex that is still on the stack
//! - [`DfsVisitor::finish`] - All edges of a vertex have been explored
//!
//! # Timestamps
//!
//! One clock per call ticks once at every discovery and once at every finish, so the
//! `2 × visited` timestamps are pairwise distinct, `entry_time < exit_time` for every finished
//! node, and the `[entry, exit]` intervals of two nodes are either nested (ancestor and
//! descendant) or disjoint.
//!
//! # Abort
//!
//! Returning `false` from [`finish`](DfsVisitor::finish) or
//! [`back_edge`](DfsVisitor::back_edge) stops the traversal immediately. This is not an error:
//! the partial tree is returned and [`DfsTree::completed`] reports `false`. Returning `false`
//! from [`discover`](DfsVisitor::discover) only prunes that vertex.
//!
//! # Undirected Graphs
//!
//! Undirected graphs report every edge from both endpoints, so the edge leading back to the
//! DFS parent is suppressed once per vertex (classified as [`EdgeKind::Reverse`]). Additional
//! parallel edges to the parent, self-loops and longer cycles are reported as back edges.
//!
//! The engine is iterative and keeps its own frame stack, so very deep graphs cannot overflow
//! the call stack.

use std::{collections::HashMap, hash::Hash, marker::PhantomData};

use strum::Display;

use crate::{
    graph::{Graph, NodeId},
    Result,
};

/// Traversal state of a vertex within one depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum VisitState {
    /// Not reached yet
    Unvisited,
    /// Discovered and not yet finished
    OnStack,
    /// Discovered and finished
    Finished,
}

/// Classification of an edge encountered during a depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum EdgeKind {
    /// The edge discovered its target
    Tree,
    /// The target is still on the stack
    Back,
    /// The target has already finished
    ForwardOrCross,
    /// The undirected mirror of the tree edge that discovered the source
    Reverse,
}

/// A vertex as recorded by a depth-first traversal.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{algorithms, AdjacencyGraph};
///
/// let graph = AdjacencyGraph::<&str>::from_edges(true, [("A", "B")]);
/// let tree = algorithms::traverse_dfs(&graph, &"A", |_| true, |_| true, |_, _| true)?;
///
/// let a = tree.get(&"A").unwrap();
/// let b = tree.get(&"B").unwrap();
/// assert_eq!(a.entry_time(), 0);
/// assert_eq!(b.entry_time(), 1);
/// assert_eq!(b.exit_time(), Some(2));
/// assert_eq!(a.exit_time(), Some(3));
/// # Ok::<(), graphkit::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsNode<V> {
    id: NodeId,
    vertex: V,
    parent: Option<NodeId>,
    entry_time: usize,
    exit_time: Option<usize>,
}

impl<V> DfsNode<V> {
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

    /// Returns the node that discovered this one, or `None` for a traversal root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the clock value at discovery.
    #[must_use]
    pub fn entry_time(&self) -> usize {
        self.entry_time
    }

    /// Returns the clock value at finish, or `None` while the node is still on the stack
    /// (or when the traversal was aborted before the node finished).
    #[must_use]
    pub fn exit_time(&self) -> Option<usize> {
        self.exit_time
    }

    /// Returns `true` once the node has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.exit_time.is_some()
    }

    /// Returns `true` if this node was a traversal root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// The arena of nodes produced by one depth-first traversal.
///
/// Nodes are stored in discovery order, so `tree.node(id).entry_time()` grows with
/// `id.index()`. For a forest traversal the tree holds several roots.
#[derive(Debug, Clone)]
pub struct DfsTree<V> {
    nodes: Vec<DfsNode<V>>,
    index: HashMap<V, NodeId>,
    completed: bool,
}

impl<V> Default for DfsTree<V> {
    fn default() -> Self {
        DfsTree {
            nodes: Vec::new(),
            index: HashMap::new(),
            completed: true,
        }
    }
}

impl<V: Clone + Eq + Hash> DfsTree<V> {
    fn push(&mut self, vertex: V, parent: Option<NodeId>, entry_time: usize) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.index.insert(vertex.clone(), id);
        self.nodes.push(DfsNode {
            id,
            vertex,
            parent,
            entry_time,
            exit_time: None,
        });
        id
    }

    /// Returns the number of discovered vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if nothing was discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `false` if a visitor aborted the traversal.
    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the node at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &DfsNode<V> {
        &self.nodes[id.index()]
    }

    /// Returns the node recording `vertex`, if it was discovered.
    #[must_use]
    pub fn get(&self, vertex: &V) -> Option<&DfsNode<V>> {
        self.index.get(vertex).map(|id| &self.nodes[id.index()])
    }

    /// Returns the arena position of `vertex`, if it was discovered.
    #[must_use]
    pub fn node_id(&self, vertex: &V) -> Option<NodeId> {
        self.index.get(vertex).copied()
    }

    /// Returns `true` if `vertex` was discovered.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns the traversal state `vertex` was left in.
    #[must_use]
    pub fn state(&self, vertex: &V) -> VisitState {
        match self.get(vertex) {
            None => VisitState::Unvisited,
            Some(node) if node.is_finished() => VisitState::Finished,
            Some(_) => VisitState::OnStack,
        }
    }

    /// Returns all nodes in discovery order.
    pub fn nodes(&self) -> impl Iterator<Item = &DfsNode<V>> {
        self.nodes.iter()
    }

    /// Returns the traversal roots in discovery order.
    pub fn roots(&self) -> impl Iterator<Item = &DfsNode<V>> {
        self.nodes.iter().filter(|node| node.is_root())
    }

    /// Returns the tree path from the root of `vertex`'s tree down to `vertex`.
    #[must_use]
    pub fn path_to(&self, vertex: &V) -> Option<Vec<V>> {
        let mut current = self.node_id(vertex)?;
        let mut path = vec![self.nodes[current.index()].vertex.clone()];
        while let Some(parent) = self.nodes[current.index()].parent {
            path.push(self.nodes[parent.index()].vertex.clone());
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}

/// Hooks invoked by the depth-first engine.
///
/// Every method has a default, so a visitor implements only what it needs. The `bool`
/// returned from [`finish`](DfsVisitor::finish) and [`back_edge`](DfsVisitor::back_edge)
/// continues (`true`) or aborts (`false`) the whole traversal.
pub trait DfsVisitor<V> {
    /// Called the instant `node` is first reached, before any of its edges.
    ///
    /// Returning `false` skips the node's edges. The node stays discovered and
    /// [`finish`](DfsVisitor::finish) is still called for it.
    fn discover(&mut self, node: &DfsNode<V>) -> bool {
        let _ = node;
        true
    }

    /// Called for every edge enumerated from `from`, once it has been classified.
    ///
    /// For [`EdgeKind::Tree`] edges `to` has just been created and is discovered right after.
    /// For [`EdgeKind::Back`] edges this runs before [`back_edge`](DfsVisitor::back_edge).
    fn examine_edge(&mut self, from: &DfsNode<V>, to: &DfsNode<V>, kind: EdgeKind) {
        let _ = (from, to, kind);
    }

    /// Called for an edge from `from` to the on-stack node `to`.
    fn back_edge(&mut self, from: &DfsNode<V>, to: &DfsNode<V>) -> bool {
        let _ = (from, to);
        true
    }

    /// Called once all edges of `node` were explored, or skipped by `discover`.
    fn finish(&mut self, node: &DfsNode<V>) -> bool {
        let _ = node;
        true
    }
}

/// A [`DfsVisitor`] assembled from three closures.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{algorithms::{self, DfsCallbacks}, AdjacencyGraph};
///
/// let graph = AdjacencyGraph::<u32>::from_edges(true, [(1, 2), (2, 3)]);
/// let mut finished: Vec<u32> = Vec::new();
/// let mut visitor = DfsCallbacks::<u32, _, _, _>::new(
///     |_| true,
///     |node| {
///         finished.push(*node.vertex());
///         true
///     },
///     |_, _| true,
/// );
/// algorithms::traverse_dfs_with(&graph, &1, &mut visitor)?;
/// drop(visitor);
/// assert_eq!(finished, vec![3, 2, 1]);
/// # Ok::<(), graphkit::Error>(())
/// ```
pub struct DfsCallbacks<V, D, F, B> {
    discover: D,
    finish: F,
    back_edge: B,
    _vertex: PhantomData<fn(&V)>,
}

impl<V, D, F, B> DfsCallbacks<V, D, F, B>
where
    D: FnMut(&DfsNode<V>) -> bool,
    F: FnMut(&DfsNode<V>) -> bool,
    B: FnMut(&DfsNode<V>, &DfsNode<V>) -> bool,
{
    /// Creates a visitor from discover, finish and back-edge closures.
    pub fn new(discover: D, finish: F, back_edge: B) -> Self {
        DfsCallbacks {
            discover,
            finish,
            back_edge,
            _vertex: PhantomData,
        }
    }
}

impl<V, D, F, B> DfsVisitor<V> for DfsCallbacks<V, D, F, B>
where
    D: FnMut(&DfsNode<V>) -> bool,
    F: FnMut(&DfsNode<V>) -> bool,
    B: FnMut(&DfsNode<V>, &DfsNode<V>) -> bool,
{
    fn discover(&mut self, node: &DfsNode<V>) -> bool {
        (self.discover)(node)
    }

    fn back_edge(&mut self, from: &DfsNode<V>, to: &DfsNode<V>) -> bool {
        (self.back_edge)(from, to)
    }

    fn finish(&mut self, node: &DfsNode<V>) -> bool {
        (self.finish)(node)
    }
}

/// One pending vertex on the explicit DFS stack.
struct Frame<V> {
    node: NodeId,
    targets: std::vec::IntoIter<V>,
    skipped_parent: bool,
}

/// Shared engine state for one traversal call, possibly spanning several roots.
struct Engine<'g, G: Graph, Vis> {
    graph: &'g G,
    visitor: Vis,
    tree: DfsTree<G::Vertex>,
    clock: usize,
}

impl<'g, G, Vis> Engine<'g, G, Vis>
where
    G: Graph,
    Vis: DfsVisitor<G::Vertex>,
{
    fn new(graph: &'g G, visitor: Vis) -> Self {
        Engine {
            graph,
            visitor,
            tree: DfsTree::default(),
            clock: 0,
        }
    }

    fn tick(&mut self) -> usize {
        let now = self.clock;
        self.clock += 1;
        now
    }

    /// Runs `discover` for a freshly created node and collects its targets.
    fn open(&mut self, node: NodeId) -> Result<Frame<G::Vertex>> {
        let expand = self.visitor.discover(&self.tree.nodes[node.index()]);
        let targets: Vec<G::Vertex> = if expand {
            self.graph
                .edges_from(&self.tree.nodes[node.index()].vertex)?
                .map(|edge| edge.to)
                .collect()
        } else {
            Vec::new()
        };
        Ok(Frame {
            node,
            targets: targets.into_iter(),
            skipped_parent: false,
        })
    }

    /// Explores everything reachable from `start`.
    ///
    /// Returns `Ok(false)` if the visitor aborted.
    fn run(&mut self, start: &G::Vertex) -> Result<bool> {
        let directed = self.graph.is_directed();
        let time = self.tick();
        let root = self.tree.push(start.clone(), None, time);
        log::trace!("dfs: root {} discovered at {}", root, time);

        let mut stack = vec![self.open(root)?];

        while let Some(frame) = stack.last_mut() {
            let current = frame.node;
            let Some(target) = frame.targets.next() else {
                stack.pop();
                let time = self.tick();
                self.tree.nodes[current.index()].exit_time = Some(time);
                log::trace!("dfs: {} finished at {}", current, time);
                if !self.visitor.finish(&self.tree.nodes[current.index()]) {
                    return Ok(false);
                }
                continue;
            };

            let Some(existing) = self.tree.node_id(&target) else {
                let time = self.tick();
                let child = self.tree.push(target, Some(current), time);
                log::trace!("dfs: {} discovered from {} at {}", child, current, time);
                self.visitor.examine_edge(
                    &self.tree.nodes[current.index()],
                    &self.tree.nodes[child.index()],
                    EdgeKind::Tree,
                );
                let frame = self.open(child)?;
                stack.push(frame);
                continue;
            };

            let from = &self.tree.nodes[current.index()];
            let to = &self.tree.nodes[existing.index()];
            if to.is_finished() {
                self.visitor.examine_edge(from, to, EdgeKind::ForwardOrCross);
                continue;
            }

            if !directed && !frame.skipped_parent && from.parent == Some(existing) {
                frame.skipped_parent = true;
                self.visitor.examine_edge(from, to, EdgeKind::Reverse);
                continue;
            }

            log::trace!("dfs: back edge {} -> {}", current, existing);
            self.visitor.examine_edge(from, to, EdgeKind::Back);
            if !self.visitor.back_edge(from, to) {
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn into_tree(mut self, completed: bool) -> DfsTree<G::Vertex> {
        self.tree.completed = completed;
        self.tree
    }
}

/// Runs a depth-first traversal from `start` with closure callbacks.
///
/// This is a convenience wrapper around [`traverse_dfs_with`] and [`DfsCallbacks`].
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The vertex to start from
/// * `discover` - Called on first reach; `false` skips the vertex's edges
/// * `finish` - Called after the vertex's edges; `false` aborts the traversal
/// * `back_edge` - Called for edges to on-stack vertices; `false` aborts the traversal
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
/// let graph = AdjacencyGraph::<&str>::from_edges(true, [("A", "B"), ("B", "C"), ("C", "A")]);
///
/// let mut cycles = 0;
/// let tree = algorithms::traverse_dfs(&graph, &"A", |_| true, |_| true, |_, _| {
///     cycles += 1;
///     true
/// })?;
/// assert_eq!(cycles, 1);
/// assert!(tree.completed());
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn traverse_dfs<G, D, F, B>(
    graph: &G,
    start: &G::Vertex,
    discover: D,
    finish: F,
    back_edge: B,
) -> Result<DfsTree<G::Vertex>>
where
    G: Graph,
    D: FnMut(&DfsNode<G::Vertex>) -> bool,
    F: FnMut(&DfsNode<G::Vertex>) -> bool,
    B: FnMut(&DfsNode<G::Vertex>, &DfsNode<G::Vertex>) -> bool,
{
    let mut visitor = DfsCallbacks::<G::Vertex, _, _, _>::new(discover, finish, back_edge);
    traverse_dfs_with(graph, start, &mut visitor)
}

/// Runs a depth-first traversal from `start`, reporting to `visitor`.
///
/// Only vertices reachable from `start` are visited.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `start` is not part
/// of the graph, and propagates edge-enumeration failures of the graph.
pub fn traverse_dfs_with<G, Vis>(
    graph: &G,
    start: &G::Vertex,
    visitor: &mut Vis,
) -> Result<DfsTree<G::Vertex>>
where
    G: Graph,
    Vis: DfsVisitor<G::Vertex>,
{
    if !graph.contains_vertex(start) {
        return Err(invalid_argument!("start vertex is not part of the graph"));
    }

    let mut engine = Engine::new(graph, visitor);
    let completed = engine.run(start)?;
    log::debug!(
        "dfs: visited {} vertices (completed: {})",
        engine.tree.len(),
        completed
    );
    Ok(engine.into_tree(completed))
}

/// Runs depth-first traversals until every vertex has been visited.
///
/// Roots are taken in [`Graph::vertices`] order, restarting from the first vertex not yet
/// visited. One clock is shared by all roots, so timestamps stay unique across the forest.
///
/// # Errors
///
/// Propagates edge-enumeration failures of the graph.
pub fn traverse_dfs_forest<G, Vis>(graph: &G, visitor: &mut Vis) -> Result<DfsTree<G::Vertex>>
where
    G: Graph,
    Vis: DfsVisitor<G::Vertex>,
{
    let mut engine = Engine::new(graph, visitor);
    let mut completed = true;
    let mut roots = 0usize;

    for vertex in graph.vertices() {
        if engine.tree.contains(&vertex) {
            continue;
        }
        roots += 1;
        if !engine.run(&vertex)? {
            completed = false;
            break;
        }
    }

    log::debug!(
        "dfs forest: visited {} vertices from {} roots (completed: {})",
        engine.tree.len(),
        roots,
        completed
    );
    Ok(engine.into_tree(completed))
}

impl<V, T: DfsVisitor<V> + ?Sized> DfsVisitor<V> for &mut T {
    fn discover(&mut self, node: &DfsNode<V>) -> bool {
        (**self).discover(node)
    }

    fn examine_edge(&mut self, from: &DfsNode<V>, to: &DfsNode<V>, kind: EdgeKind) {
        (**self).examine_edge(from, to, kind);
    }

    fn back_edge(&mut self, from: &DfsNode<V>, to: &DfsNode<V>) -> bool {
        (**self).back_edge(from, to)
    }

    fn finish(&mut self, node: &DfsNode<V>) -> bool {
        (**self).finish(node)
    }
}

/// Records vertices in the order they finish.
struct FinishOrder<V> {
    order: Vec<V>,
}

impl<V: Clone> DfsVisitor<V> for FinishOrder<V> {
    fn finish(&mut self, node: &DfsNode<V>) -> bool {
        self.order.push(node.vertex.clone());
        true
    }
}

/// Returns the vertices reachable from `start` in post-order.
///
/// A vertex appears after every vertex it discovered.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `start` is not part
/// of the graph.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{algorithms, AdjacencyGraph};
///
/// let graph = AdjacencyGraph::<&str>::from_edges(true, [("A", "B"), ("B", "C")]);
/// assert_eq!(algorithms::postorder(&graph, &"A")?, vec!["C", "B", "A"]);
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn postorder<G: Graph>(graph: &G, start: &G::Vertex) -> Result<Vec<G::Vertex>> {
    let mut visitor = FinishOrder { order: Vec::new() };
    traverse_dfs_with(graph, start, &mut visitor)?;
    Ok(visitor.order)
}

/// Returns the vertices reachable from `start` in reverse post-order.
///
/// On an acyclic graph every vertex precedes its successors, which makes this the natural
/// iteration order for forward propagation.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `start` is not part
/// of the graph.
pub fn reverse_postorder<G: Graph>(graph: &G, start: &G::Vertex) -> Result<Vec<G::Vertex>> {
    let mut order = postorder(graph, start)?;
    order.reverse();
    Ok(order)
}
