//! Articulation vertices (cut vertices) of undirected graphs.
//!
//! An articulation vertex is a vertex whose removal increases the number of connected
//! components. The finder is a low-link visitor driven by the depth-first engine over the
//! whole forest, in the manner of Tarjan's algorithm:
//!
//! - `low(v) = min(entry(v), entry(w) for back edges v-w, low(c) for tree children c)`
//! - a root is a cut vertex iff it has more than one tree child
//! - a non-root `v` with a tree child `c` is a cut vertex iff `low(c) >= entry(v)`

use std::collections::HashSet;

use crate::{
    graph::{
        algorithms::dfs::{traverse_dfs_forest, DfsNode, DfsVisitor},
        Graph,
    },
    Result,
};

/// Low-link bookkeeping, indexed by DFS node id.
struct LowLink<V> {
    vertices: Vec<V>,
    entry: Vec<usize>,
    low: Vec<usize>,
    children: Vec<usize>,
    is_root: Vec<bool>,
    cut: HashSet<V>,
}

impl<V> LowLink<V> {
    fn new() -> Self {
        LowLink {
            vertices: Vec::new(),
            entry: Vec::new(),
            low: Vec::new(),
            children: Vec::new(),
            is_root: Vec::new(),
            cut: HashSet::new(),
        }
    }
}

impl<V: Clone + Eq + std::hash::Hash> DfsVisitor<V> for LowLink<V> {
    fn discover(&mut self, node: &DfsNode<V>) -> bool {
        debug_assert_eq!(node.id().index(), self.vertices.len());
        self.vertices.push(node.vertex().clone());
        self.entry.push(node.entry_time());
        self.low.push(node.entry_time());
        self.children.push(0);
        self.is_root.push(node.is_root());
        true
    }

    fn back_edge(&mut self, from: &DfsNode<V>, to: &DfsNode<V>) -> bool {
        let v = from.id().index();
        self.low[v] = self.low[v].min(to.entry_time());
        true
    }

    fn finish(&mut self, node: &DfsNode<V>) -> bool {
        let child = node.id().index();
        match node.parent() {
            Some(parent) => {
                let parent = parent.index();
                self.low[parent] = self.low[parent].min(self.low[child]);
                self.children[parent] += 1;
                if !self.is_root[parent] && self.low[child] >= self.entry[parent] {
                    self.cut.insert(self.vertices[parent].clone());
                }
            }
            None => {
                if self.children[child] > 1 {
                    self.cut.insert(self.vertices[child].clone());
                }
            }
        }
        true
    }
}

/// Finds every articulation vertex of an undirected graph.
///
/// Every connected component is searched, so isolated vertices and disconnected graphs are
/// handled. Parallel edges and self-loops never create or hide a cut vertex.
///
/// # Errors
///
/// Returns [`Error::InvalidOperation`](crate::Error::InvalidOperation) for a directed graph.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{algorithms, AdjacencyGraph};
///
/// // Two triangles sharing vertex C
/// let graph = AdjacencyGraph::<char>::from_edges(
///     false,
///     [('A', 'B'), ('B', 'C'), ('C', 'A'), ('C', 'D'), ('D', 'E'), ('E', 'C')],
/// );
/// let cut = algorithms::find_articulation_vertices(&graph)?;
/// assert_eq!(cut.len(), 1);
/// assert!(cut.contains(&'C'));
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn find_articulation_vertices<G: Graph>(graph: &G) -> Result<HashSet<G::Vertex>> {
    if graph.is_directed() {
        return Err(invalid_operation!(
            "articulation vertices are only defined for undirected graphs"
        ));
    }

    let mut visitor = LowLink::new();
    traverse_dfs_forest(graph, &mut visitor)?;

    log::debug!(
        "articulation: {} cut vertices among {} vertices",
        visitor.cut.len(),
        visitor.vertices.len()
    );
    Ok(visitor.cut)
}
