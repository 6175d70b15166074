use thiserror::Error;

macro_rules! invalid_argument {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidArgument($msg.to_string())
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidArgument(format!($fmt, $($arg)*))
    };
}

macro_rules! invalid_operation {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidOperation($msg.to_string())
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidOperation(format!($fmt, $($arg)*))
    };
}

macro_rules! unsupported {
    // Single string version
    ($msg:expr) => {
        crate::Error::Unsupported($msg.to_string())
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Unsupported(format!($fmt, $($arg)*))
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// The variants separate *bad input* from *not applicable*: a caller handing in a vertex
/// that is not part of the graph gets [`Error::InvalidArgument`], while a caller running an
/// algorithm on a graph of the wrong shape (a topological sort of a cyclic graph, say) gets
/// [`Error::InvalidOperation`]. Stopping a traversal early from a callback is never an error.
///
/// # Error Categories
///
/// ## Input Errors
/// - [`Error::InvalidArgument`] - Unknown vertex, negative edge weight
///
/// ## Precondition Errors
/// - [`Error::InvalidOperation`] - Graph shape does not fit the algorithm
/// - [`Error::Unsupported`] - Optional graph capability is missing
///
/// # Examples
///
/// ```rust
/// use graphkit::{graph::{algorithms, AdjacencyGraph}, Error};
///
/// let mut graph = AdjacencyGraph::<&str>::new_directed();
/// graph.add_vertex("A");
/// graph.add_vertex("B");
/// graph.add_edge("A", "B")?;
/// graph.add_edge("B", "A")?;
///
/// match algorithms::topological_sort(&graph) {
///     Ok(order) => println!("order: {order:?}"),
///     Err(Error::InvalidOperation(reason)) => println!("not sortable: {reason}"),
///     Err(e) => println!("bad input: {e}"),
/// }
/// # Ok::<(), graphkit::Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument handed to an operation is not acceptable.
    ///
    /// Raised at the call boundary when a named vertex is not part of the graph, or when
    /// a weighted search meets a negative edge weight.
    #[error("Invalid argument - {0}")]
    InvalidArgument(String),

    /// The graph does not satisfy the preconditions of the requested algorithm.
    ///
    /// Examples are articulation-vertex search on a directed graph, topological sorting
    /// of an undirected graph, or topological sorting of a graph that contains a cycle.
    #[error("Invalid operation - {0}")]
    InvalidOperation(String),

    /// The graph does not provide an optional capability.
    ///
    /// Returned by [`Graph::heuristic_weight`](crate::graph::Graph::heuristic_weight)
    /// on graphs that report no heuristic support.
    #[error("Unsupported operation - {0}")]
    Unsupported(String),
}

impl Error {
    /// Returns `true` for errors caused by bad input rather than by graph shape.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Returns `true` for errors caused by an algorithm not applying to the graph.
    #[must_use]
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Error::InvalidOperation(_))
    }
}
