//! Trait definitions for graph abstractions.
//!
//! This module defines the contract that enables graph algorithms to work with
//! different graph implementations. By programming against [`Graph`], algorithms
//! can be reused across adjacency lists, generated grids, parsed literal graphs
//! or any other representation without modification.
//!
//! # Architecture
//!
//! - [`Graph`] - Vertex enumeration, edge enumeration, direction flag and the
//!   optional path-cost heuristic
//! - [`Measure`] - Arithmetic required from edge weights
//!
//! # Design Principles
//!
//! ## Iterator-Based Enumeration
//!
//! Vertex and edge queries return iterators rather than collections, enabling lazy
//! evaluation for generated graphs that never materialize their adjacency.
//!
//! ## Minimal Requirements
//!
//! Only `is_directed`, `vertices` and `edges_from` are required. The heuristic and
//! the membership/count helpers have defaults that concrete graphs may override.

use std::{fmt, hash::Hash, ops::Add};

use crate::{graph::Edge, Result};

/// Weight arithmetic used by edge weights and path costs.
///
/// A `Measure` is an ordered, copyable quantity with an additive identity
/// ([`zero`](Measure::zero)) and a unit value ([`one`](Measure::one)) that unweighted
/// edges carry. All primitive integer and float types implement it.
///
/// Path costs are accumulated with [`checked_add`](Measure::checked_add): integer sums that
/// leave the type's range yield `None` instead of wrapping, while float sums saturate to
/// infinity on their own.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::Measure;
///
/// assert_eq!(u32::zero(), 0);
/// assert_eq!(f64::one(), 1.0);
/// assert_eq!(Measure::checked_add(250u8, 5), Some(255));
/// assert_eq!(Measure::checked_add(250u8, 6), None);
/// ```
pub trait Measure: Copy + PartialOrd + Add<Output = Self> + Default + fmt::Debug {
    /// Returns the additive identity (the cost of an empty path).
    fn zero() -> Self {
        Self::default()
    }

    /// Returns the unit weight given to edges created without an explicit weight.
    fn one() -> Self;

    /// Adds two quantities, returning `None` if the sum is not representable.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_measure_int {
    ($($ty:ty),*) => {
        $(impl Measure for $ty {
            #[inline]
            fn one() -> Self {
                1
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_add(self, rhs)
            }
        })*
    };
}

macro_rules! impl_measure_float {
    ($($ty:ty),*) => {
        $(impl Measure for $ty {
            #[inline]
            fn one() -> Self {
                1.0
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }
        })*
    };
}

impl_measure_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_measure_float!(f32, f64);

/// The graph contract every algorithm in this crate depends on.
///
/// A graph is a finite, enumerable vertex collection plus the capability to enumerate
/// the edges leaving any of its vertices. Undirected graphs must report every stored
/// edge `{u, v}` from both endpoints: `(u, v)` from `u` and `(v, u)` from `v`.
///
/// # Required Methods
///
/// - [`is_directed`](Graph::is_directed) - Whether edges are one-way
/// - [`vertices`](Graph::vertices) - All vertices, in a stable order
/// - [`edges_from`](Graph::edges_from) - Edges leaving a vertex
///
/// # Optional Methods
///
/// - [`supports_heuristic`](Graph::supports_heuristic) /
///   [`heuristic_weight`](Graph::heuristic_weight) - Admissible remaining-cost estimate
///   used to turn cheapest-path search into A*
/// - [`contains_vertex`](Graph::contains_vertex) / [`vertex_count`](Graph::vertex_count) -
///   Membership and size, defaulting to a scan of [`vertices`](Graph::vertices)
///
/// # Stability
///
/// The vertex and edge sets must not change while an algorithm runs. Algorithms borrow
/// the graph immutably for the whole call, so the borrow checker enforces this for graphs
/// without interior mutability.
///
/// # Examples
///
/// ```rust
/// use graphkit::{graph::{Edge, Graph}, Result};
///
/// /// A ring of `n` vertices generated on demand.
/// struct Ring(u32);
///
/// impl Graph for Ring {
///     type Vertex = u32;
///     type Weight = u32;
///
///     fn is_directed(&self) -> bool {
///         true
///     }
///
///     fn vertices(&self) -> impl Iterator<Item = u32> {
///         0..self.0
///     }
///
///     fn edges_from(&self, vertex: &u32) -> Result<impl Iterator<Item = Edge<u32, u32>>> {
///         if *vertex >= self.0 {
///             return Err(graphkit::Error::InvalidArgument(format!("{vertex} is not in the ring")));
///         }
///         Ok(std::iter::once(Edge::new(*vertex, (*vertex + 1) % self.0)))
///     }
/// }
///
/// let ring = Ring(4);
/// let next: Vec<_> = ring.edges_from(&3)?.map(|e| e.to).collect();
/// assert_eq!(next, vec![0]);
/// # Ok::<(), graphkit::Error>(())
/// ```
pub trait Graph {
    /// The vertex type. Vertices are identified by equality alone.
    type Vertex: Clone + Eq + Hash;

    /// The edge weight type. Unweighted graphs use [`Measure::one`] for every edge.
    type Weight: Measure;

    /// Returns `true` if edges are one-way.
    ///
    /// The value must be constant for the lifetime of the graph.
    fn is_directed(&self) -> bool;

    /// Returns an iterator over all vertices of the graph.
    ///
    /// The sequence must be finite and its order must be stable across repeated calls
    /// within one algorithm invocation; algorithms that restart from "the next unvisited
    /// vertex" follow this order.
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex>;

    /// Returns an iterator over the edges leaving `vertex`.
    ///
    /// Every returned edge has `from == *vertex`.
    ///
    /// # Arguments
    ///
    /// * `vertex` - The vertex whose outgoing edges to enumerate
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `vertex` is not
    /// part of the graph.
    fn edges_from(
        &self,
        vertex: &Self::Vertex,
    ) -> Result<impl Iterator<Item = Edge<Self::Vertex, Self::Weight>>>;

    /// Returns `true` if `vertex` is part of the graph.
    ///
    /// The default implementation scans [`vertices`](Graph::vertices); graphs with an
    /// index should override it.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool {
        self.vertices().any(|v| v == *vertex)
    }

    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    /// Returns `true` if [`heuristic_weight`](Graph::heuristic_weight) is available.
    fn supports_heuristic(&self) -> bool {
        false
    }

    /// Returns a lower bound on the cost of travelling from `from` to `to`.
    ///
    /// The estimate must be admissible (never exceed the true cheapest cost) for
    /// cheapest-path search to remain exact.
    ///
    /// # Errors
    ///
    /// The default implementation returns [`Error::Unsupported`](crate::Error::Unsupported).
    fn heuristic_weight(
        &self,
        _from: &Self::Vertex,
        _to: &Self::Vertex,
    ) -> Result<Self::Weight> {
        Err(unsupported!("graph does not provide a heuristic weight"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    // A minimal test graph implementation for trait testing
    struct TestGraph {
        vertex_count: u32,
        edges: Vec<(u32, u32)>,
    }

    impl TestGraph {
        fn new(vertex_count: u32, edges: Vec<(u32, u32)>) -> Self {
            TestGraph {
                vertex_count,
                edges,
            }
        }
    }

    impl Graph for TestGraph {
        type Vertex = u32;
        type Weight = u32;

        fn is_directed(&self) -> bool {
            true
        }

        fn vertices(&self) -> impl Iterator<Item = u32> {
            0..self.vertex_count
        }

        fn edges_from(&self, vertex: &u32) -> Result<impl Iterator<Item = Edge<u32, u32>>> {
            if *vertex >= self.vertex_count {
                return Err(invalid_argument!("vertex {} is out of range", vertex));
            }
            let vertex = *vertex;
            Ok(self
                .edges
                .iter()
                .filter(move |(src, _)| *src == vertex)
                .map(|&(src, dst)| Edge::new(src, dst)))
        }
    }

    #[test]
    fn test_default_membership_and_count() {
        let graph = TestGraph::new(5, vec![]);
        assert_eq!(graph.vertex_count(), 5);
        assert!(graph.contains_vertex(&0));
        assert!(graph.contains_vertex(&4));
        assert!(!graph.contains_vertex(&5));
    }

    #[test]
    fn test_edges_from() {
        let graph = TestGraph::new(4, vec![(0, 1), (0, 2), (1, 3)]);

        let succ: Vec<u32> = graph.edges_from(&0).unwrap().map(|e| e.to).collect();
        assert_eq!(succ, vec![1, 2]);

        let edges: Vec<Edge<u32, u32>> = graph.edges_from(&1).unwrap().collect();
        assert_eq!(edges, vec![Edge::weighted(1, 3, 1)]);

        assert_eq!(graph.edges_from(&3).unwrap().count(), 0);
    }

    #[test]
    fn test_edges_from_unknown_vertex() {
        let graph = TestGraph::new(2, vec![]);
        let err = graph.edges_from(&7).err().unwrap();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_heuristic_unsupported_by_default() {
        let graph = TestGraph::new(2, vec![]);
        assert!(!graph.supports_heuristic());
        assert!(matches!(
            graph.heuristic_weight(&0, &1),
            Err(Error::Unsupported(_))
        ));
    }

    #[test]
    fn test_measure_identities() {
        assert_eq!(u8::zero(), 0);
        assert_eq!(i64::one(), 1);
        assert_eq!(f32::zero(), 0.0);
        assert_eq!(f64::one() + f64::one(), 2.0);
    }

    #[test]
    fn test_measure_checked_add_at_type_bounds() {
        assert_eq!(Measure::checked_add(u8::MAX - 1, 1), Some(u8::MAX));
        assert_eq!(Measure::checked_add(u8::MAX, 1), None);
        assert_eq!(Measure::checked_add(u32::MAX, u32::MAX), None);
        assert_eq!(Measure::checked_add(i64::MAX, 1), None);
        assert_eq!(Measure::checked_add(usize::MAX, 0), Some(usize::MAX));
        assert_eq!(Measure::checked_add(f64::MAX, f64::MAX), Some(f64::INFINITY));
        assert_eq!(Measure::checked_add(f32::INFINITY, 1.0), Some(f32::INFINITY));
    }
}
