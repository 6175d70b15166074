//! Cycle detection.
//!
//! Both functions search the whole DFS forest and stop at the first back edge. Cycle
//! semantics follow the depth-first engine: on an undirected graph the edge leading back to
//! the DFS parent does not count, while self-loops and parallel edges do.

use crate::{
    graph::{
        algorithms::dfs::{traverse_dfs_forest, DfsNode, DfsVisitor},
        Graph, NodeId,
    },
    Result,
};

/// Remembers the first back edge and aborts the traversal.
#[derive(Default)]
struct FirstBackEdge {
    found: Option<(NodeId, NodeId)>,
}

impl<V> DfsVisitor<V> for FirstBackEdge {
    fn back_edge(&mut self, from: &DfsNode<V>, to: &DfsNode<V>) -> bool {
        self.found = Some((from.id(), to.id()));
        false
    }
}

/// Checks whether the graph contains any cycle.
///
/// # Errors
///
/// Propagates edge-enumeration failures of the graph.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{algorithms, AdjacencyGraph};
///
/// let dag = AdjacencyGraph::<u32>::from_edges(true, [(0, 1), (1, 2)]);
/// assert!(!algorithms::has_cycle(&dag)?);
///
/// let cyclic = AdjacencyGraph::<u32>::from_edges(true, [(0, 1), (1, 2), (2, 0)]);
/// assert!(algorithms::has_cycle(&cyclic)?);
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn has_cycle<G: Graph>(graph: &G) -> Result<bool> {
    Ok(find_cycle(graph)?.is_some())
}

/// Finds a cycle in the graph, if one exists.
///
/// The returned path starts and ends with the same vertex and follows edge direction, for
/// example `[B, C, D, B]`. A self-loop yields `[A, A]`.
///
/// # Errors
///
/// Propagates edge-enumeration failures of the graph.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{algorithms, AdjacencyGraph};
///
/// let graph = AdjacencyGraph::<&str>::from_edges(true, [("A", "B"), ("B", "C"), ("C", "B")]);
/// let cycle = algorithms::find_cycle(&graph)?.unwrap();
/// assert_eq!(cycle, vec!["B", "C", "B"]);
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn find_cycle<G: Graph>(graph: &G) -> Result<Option<Vec<G::Vertex>>> {
    let mut visitor = FirstBackEdge::default();
    let tree = traverse_dfs_forest(graph, &mut visitor)?;

    let Some((from, to)) = visitor.found else {
        log::debug!("cycles: none among {} vertices", tree.len());
        return Ok(None);
    };

    // The target of a back edge is an ancestor of its source.
    let mut chain = Vec::new();
    let mut current = from;
    while current != to {
        let node = tree.node(current);
        chain.push(node.vertex().clone());
        match node.parent() {
            Some(parent) => current = parent,
            None => break,
        }
    }
    chain.reverse();

    let anchor = tree.node(to).vertex().clone();
    let mut path = Vec::with_capacity(chain.len() + 2);
    path.push(anchor.clone());
    path.extend(chain);
    path.push(anchor);

    log::debug!("cycles: found cycle of length {}", path.len() - 1);
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::AdjacencyGraph,
        test::{directed, undirected},
    };

    /// Checks that consecutive cycle vertices are joined by an edge.
    fn assert_is_cycle(graph: &AdjacencyGraph<&'static str>, cycle: &[&'static str]) {
        assert!(cycle.len() >= 2);
        assert_eq!(cycle.first(), cycle.last());
        for pair in cycle.windows(2) {
            let connected = graph
                .edges_from(&pair[0])
                .unwrap()
                .any(|edge| edge.to == pair[1]);
            assert!(connected, "{} -> {} is not an edge", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_acyclic() {
        let graph = directed(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
        assert!(!has_cycle(&graph).unwrap());
        assert_eq!(find_cycle(&graph).unwrap(), None);
    }

    #[test]
    fn test_simple_cycle() {
        let graph = directed(&[("A", "B"), ("B", "C"), ("C", "A")]);
        let cycle = find_cycle(&graph).unwrap().unwrap();
        assert_eq!(cycle, vec!["A", "B", "C", "A"]);
        assert_is_cycle(&graph, &cycle);
    }

    #[test]
    fn test_cycle_not_through_root() {
        let graph = directed(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "B")]);
        let cycle = find_cycle(&graph).unwrap().unwrap();
        assert_eq!(cycle, vec!["B", "C", "D", "B"]);
        assert_is_cycle(&graph, &cycle);
    }

    #[test]
    fn test_self_loop() {
        let graph = directed(&[("A", "B"), ("B", "B")]);
        assert_eq!(find_cycle(&graph).unwrap(), Some(vec!["B", "B"]));
    }

    #[test]
    fn test_cycle_in_second_component() {
        let graph = directed(&[("A", "B"), ("X", "Y"), ("Y", "X")]);
        let cycle = find_cycle(&graph).unwrap().unwrap();
        assert_eq!(cycle, vec!["X", "Y", "X"]);
    }

    #[test]
    fn test_undirected_tree_is_acyclic() {
        let graph = undirected(&[("A", "B"), ("B", "C"), ("B", "D")]);
        assert!(!has_cycle(&graph).unwrap());
    }

    #[test]
    fn test_undirected_triangle() {
        let graph = undirected(&[("A", "B"), ("B", "C"), ("C", "A")]);
        let cycle = find_cycle(&graph).unwrap().unwrap();
        assert_eq!(cycle.len(), 4);
        assert_is_cycle(&graph, &cycle);
    }
}
