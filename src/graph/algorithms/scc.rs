//! Strongly Connected Components (SCC) using Tarjan's algorithm.
//!
//! A strongly connected component is a maximal set of vertices such that there is a path
//! from every vertex to every other vertex in the set. Tarjan's algorithm runs here as a
//! visitor of the depth-first engine: DFS node ids double as Tarjan discovery indices.
//!
//! # Use Cases
//!
//! - **Dependency analysis**: Detecting groups of mutually dependent items
//! - **Condensation**: Collapsing cycles to obtain a DAG that can be topologically sorted
//! - **Reachability**: Every vertex of a component reaches every other one

use crate::{
    graph::{
        algorithms::dfs::{traverse_dfs_forest, DfsNode, DfsVisitor, EdgeKind},
        Graph, NodeId,
    },
    Result,
};

/// Internal state for Tarjan's algorithm, indexed by DFS node id.
struct Tarjan<V> {
    /// Vertex of each node
    vertices: Vec<V>,
    /// Lowlink value for each node
    lowlink: Vec<usize>,
    /// Whether a node is currently on the component stack
    on_stack: Vec<bool>,
    /// The component stack
    stack: Vec<NodeId>,
    /// Collected SCCs
    components: Vec<Vec<V>>,
}

impl<V: Clone> DfsVisitor<V> for Tarjan<V> {
    fn discover(&mut self, node: &DfsNode<V>) -> bool {
        let id = node.id();
        self.vertices.push(node.vertex().clone());
        self.lowlink.push(id.index());
        self.on_stack.push(true);
        self.stack.push(id);
        true
    }

    fn examine_edge(&mut self, from: &DfsNode<V>, to: &DfsNode<V>, kind: EdgeKind) {
        if kind == EdgeKind::Tree {
            return;
        }
        let (v, w) = (from.id().index(), to.id().index());
        if self.on_stack[w] {
            self.lowlink[v] = self.lowlink[v].min(w);
        }
    }

    fn finish(&mut self, node: &DfsNode<V>) -> bool {
        let v = node.id().index();

        // If v is a root node, pop the stack and generate an SCC
        if self.lowlink[v] == v {
            let mut component = Vec::new();
            while let Some(w) = self.stack.pop() {
                self.on_stack[w.index()] = false;
                component.push(self.vertices[w.index()].clone());
                if w.index() == v {
                    break;
                }
            }
            self.components.push(component);
        }

        if let Some(parent) = node.parent() {
            let p = parent.index();
            self.lowlink[p] = self.lowlink[p].min(self.lowlink[v]);
        }
        true
    }
}

/// Computes the strongly connected components of a directed graph.
///
/// Every vertex belongs to exactly one component; a vertex on no cycle forms a component of
/// its own.
///
/// # Returns
///
/// A vector of SCCs in **reverse topological order** of the condensation: if an edge leads
/// from component A to component B, then A appears after B.
///
/// # Errors
///
/// Returns [`Error::InvalidOperation`](crate::Error::InvalidOperation) for an undirected
/// graph, where strong and plain connectivity coincide.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{algorithms, AdjacencyGraph};
///
/// // Cycle A <-> B feeding into C
/// let graph = AdjacencyGraph::<char>::from_edges(true, [('A', 'B'), ('B', 'A'), ('B', 'C')]);
///
/// let sccs = algorithms::strongly_connected_components(&graph)?;
/// assert_eq!(sccs.len(), 2);
/// assert_eq!(sccs[0], vec!['C']);
/// assert_eq!(sccs[1].len(), 2);
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn strongly_connected_components<G: Graph>(graph: &G) -> Result<Vec<Vec<G::Vertex>>> {
    if !graph.is_directed() {
        return Err(invalid_operation!(
            "strongly connected components are only defined for directed graphs"
        ));
    }

    let mut state = Tarjan {
        vertices: Vec::new(),
        lowlink: Vec::new(),
        on_stack: Vec::new(),
        stack: Vec::new(),
        components: Vec::new(),
    };
    traverse_dfs_forest(graph, &mut state)?;

    log::debug!(
        "scc: {} components among {} vertices",
        state.components.len(),
        state.vertices.len()
    );
    Ok(state.components)
}
