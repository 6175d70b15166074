//! Arena index for traversal records.
//!
//! Traversals store the nodes they produce ([`DfsNode`](crate::graph::algorithms::DfsNode),
//! [`BfsNode`](crate::graph::algorithms::BfsNode)) in a flat arena. [`NodeId`] is the
//! strongly-typed position of a node in that arena, and parent links are expressed as
//! `Option<NodeId>`, so a traversal tree never holds owning references to its own nodes.

use std::fmt;

/// A strongly-typed index of a node within one traversal's node arena.
///
/// Node ids are assigned sequentially from 0 in the order a traversal first reaches
/// vertices, so for a depth-first traversal a smaller id means an earlier discovery.
/// An id is only meaningful together with the tree that produced it.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{algorithms, AdjacencyGraph};
///
/// let graph = AdjacencyGraph::<&str>::from_edges(true, [("A", "B")]);
/// let tree = algorithms::traverse_dfs(&graph, &"A", |_| true, |_| true, |_, _| true)?;
///
/// let b = tree.get(&"B").unwrap();
/// let parent = b.parent().unwrap();
/// assert_eq!(parent.index(), 0);
/// assert_eq!(tree.node(parent).vertex(), &"A");
/// # Ok::<(), graphkit::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw arena position.
    ///
    /// Normal usage obtains ids from traversal records; this constructor exists for
    /// tests and for callers keeping side tables indexed by node.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw arena position, usable to index per-node side tables.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_roundtrip() {
        let node = NodeId::new(42);
        assert_eq!(node.index(), 42);
        let raw: usize = node.into();
        assert_eq!(raw, 42);
        assert_eq!(NodeId::from(42), node);
    }

    #[test]
    fn test_node_id_ordering_follows_arena_position() {
        let mut nodes = vec![NodeId::new(3), NodeId::new(1), NodeId::new(2)];
        nodes.sort();
        assert_eq!(nodes, vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
    }

    #[test]
    fn test_node_id_formatting() {
        let node = NodeId::new(7);
        assert_eq!(format!("{node:?}"), "NodeId(7)");
        assert_eq!(format!("{node}"), "n7");
    }

    #[test]
    fn test_node_id_side_table_indexing() {
        let low = vec![0usize, 0, 1, 3];
        assert_eq!(low[NodeId::new(3).index()], 3);
    }
}
