//! Edge value type for graph enumeration.
//!
//! This module provides the [`Edge`] type: the `(from, to, weight)` triple a graph yields
//! from [`Graph::edges_from`](crate::graph::Graph::edges_from). Edges are plain values; two
//! edges are equal iff all three fields match, and graphs may legally yield parallel
//! (duplicate) edges and self-loops.

use std::fmt;

use crate::graph::Measure;

/// A directed edge `(from, to)` carrying a weight.
///
/// Unweighted graphs build edges with [`Edge::new`], which assigns the unit weight
/// [`Measure::one`]. Undirected graphs report each stored edge once from every endpoint,
/// as `(u, v)` from `u` and `(v, u)` from `v`.
///
/// # Type Parameters
///
/// * `V` - Vertex type
/// * `W` - Weight type, `u32` unless stated otherwise
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::Edge;
///
/// let unit: Edge<&str> = Edge::new("A", "B");
/// assert_eq!(unit.weight, 1);
///
/// let weighted = Edge::weighted("A", "B", 2.5_f64);
/// assert_eq!(weighted.reversed(), Edge::weighted("B", "A", 2.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<V, W = u32> {
    /// Source vertex
    pub from: V,
    /// Target vertex
    pub to: V,
    /// Edge weight
    pub weight: W,
}

impl<V, W: Measure> Edge<V, W> {
    /// Creates an edge with the unit weight.
    #[must_use]
    pub fn new(from: V, to: V) -> Self {
        Edge {
            from,
            to,
            weight: W::one(),
        }
    }
}

impl<V, W> Edge<V, W> {
    /// Creates an edge with an explicit weight.
    #[must_use]
    pub fn weighted(from: V, to: V, weight: W) -> Self {
        Edge { from, to, weight }
    }

    /// Returns `true` if the edge starts and ends at the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.from == self.to
    }

    /// Returns the same edge travelled in the opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        Edge {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }
}

impl<V: fmt::Display, W: fmt::Display> fmt::Display for Edge<V, W> {
    /// Formats the edge as `from -(weight)-> to`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -({})-> {}", self.from, self.weight, self.to)
    }
}
