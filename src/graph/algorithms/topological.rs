//! Topological sorting for directed acyclic graphs (DAGs).
//!
//! A topological ordering is a linear ordering of vertices such that for every directed
//! edge `(u, v)`, vertex `u` comes before `v`. The sorter runs the depth-first engine over the
//! whole forest, emits each vertex when it finishes and reverses the result.
//!
//! # Use Cases
//!
//! - Dependency resolution (build systems, package managers)
//! - Task scheduling with precedence constraints
//! - Evaluation order of derived values

use crate::{
    graph::{
        algorithms::dfs::{traverse_dfs_forest, DfsNode, DfsVisitor},
        Graph,
    },
    Result,
};

/// Collects finish order and stops at the first back edge.
struct PostOrder<V> {
    order: Vec<V>,
    cyclic: bool,
}

impl<V: Clone> DfsVisitor<V> for PostOrder<V> {
    fn back_edge(&mut self, _from: &DfsNode<V>, _to: &DfsNode<V>) -> bool {
        self.cyclic = true;
        false
    }

    fn finish(&mut self, node: &DfsNode<V>) -> bool {
        self.order.push(node.vertex().clone());
        true
    }
}

/// Computes a topological ordering of all vertices of a directed graph.
///
/// Roots are taken in [`Graph::vertices`] order, so the result is deterministic for a given
/// graph. Every vertex appears exactly once, isolated vertices included.
///
/// # Errors
///
/// Returns [`Error::InvalidOperation`](crate::Error::InvalidOperation) if the graph is
/// undirected, or if it contains a cycle (self-loops included). A cyclic graph never yields a
/// partial order.
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
/// // A simple DAG: A -> B -> D, A -> C -> D
/// let graph = AdjacencyGraph::<&str>::from_edges(
///     true,
///     [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
/// );
/// let order = algorithms::topological_sort(&graph)?;
/// assert_eq!(order.first(), Some(&"A"));
/// assert_eq!(order.last(), Some(&"D"));
///
/// // A cycle cannot be ordered
/// let cyclic = AdjacencyGraph::<&str>::from_edges(true, [("A", "B"), ("B", "A")]);
/// assert!(algorithms::topological_sort(&cyclic).is_err());
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn topological_sort<G: Graph>(graph: &G) -> Result<Vec<G::Vertex>> {
    if !graph.is_directed() {
        return Err(invalid_operation!(
            "topological order is only defined for directed graphs"
        ));
    }

    let mut visitor = PostOrder {
        order: Vec::with_capacity(graph.vertex_count()),
        cyclic: false,
    };
    traverse_dfs_forest(graph, &mut visitor)?;

    if visitor.cyclic {
        log::debug!(
            "topological sort: cycle found after {} vertices",
            visitor.order.len()
        );
        return Err(invalid_operation!("graph contains a cycle"));
    }

    let mut order = visitor.order;
    order.reverse();
    log::debug!("topological sort: ordered {} vertices", order.len());
    Ok(order)
}
