//! Path finding.
//!
//! - [`find_shortest_path`] - Fewest edges, driven by the breadth-first engine
//! - [`find_cheapest_path`] - Lowest total weight: Dijkstra, or A* when the graph supplies
//!   an admissible [`heuristic_weight`](crate::graph::Graph::heuristic_weight)
//!
//! All finders return `[from]` when `from == to` and an empty path when `to` cannot be
//! reached (including when `to` is not a vertex at all). An unknown `from` is an error.

use std::{cmp::Ordering, collections::BinaryHeap, collections::HashMap};

use crate::{
    graph::{algorithms::bfs::traverse_bfs, Graph, Measure},
    Result,
};

/// Finds a path with the fewest edges from `from` to `to`.
///
/// The breadth-first walk stops as soon as `to` is dequeued; the path is rebuilt from the
/// parent links of the walk.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `from` is not part of
/// the graph.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{algorithms, AdjacencyGraph};
///
/// let graph = AdjacencyGraph::<u32>::from_edges(false, [(1, 2), (2, 3), (1, 4), (4, 5), (5, 3)]);
/// assert_eq!(algorithms::find_shortest_path(&graph, &1, &3)?, vec![1, 2, 3]);
/// assert_eq!(algorithms::find_shortest_path(&graph, &1, &1)?, vec![1]);
/// assert!(algorithms::find_shortest_path(&graph, &1, &99)?.is_empty());
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn find_shortest_path<G: Graph>(
    graph: &G,
    from: &G::Vertex,
    to: &G::Vertex,
) -> Result<Vec<G::Vertex>> {
    let tree = traverse_bfs(graph, from, |_, node| node.vertex() != to)?;
    let path = tree.path_to(to).unwrap_or_default();
    log::debug!("shortest path: {} vertices", path.len());
    Ok(path)
}

/// Cheapest-path search configuration.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::algorithms::PathOptions;
///
/// let options = PathOptions::default();
/// assert!(options.use_heuristic);
/// assert_eq!(options.max_expansions, None);
///
/// let bounded = PathOptions::dijkstra().with_max_expansions(1_000);
/// assert!(!bounded.use_heuristic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathOptions {
    /// Use the graph's heuristic (A*) when it supports one. `false` forces plain Dijkstra.
    pub use_heuristic: bool,
    /// Stop after expanding this many vertices and report "no path".
    pub max_expansions: Option<usize>,
}

impl Default for PathOptions {
    fn default() -> Self {
        PathOptions {
            use_heuristic: true,
            max_expansions: None,
        }
    }
}

impl PathOptions {
    /// Options for plain Dijkstra search, ignoring any heuristic.
    #[must_use]
    pub fn dijkstra() -> Self {
        PathOptions {
            use_heuristic: false,
            ..Self::default()
        }
    }

    /// Returns these options with an expansion budget.
    #[must_use]
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}

/// A cheapest path together with its total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct CheapestPath<V, W> {
    /// Vertices from source to target, both included
    pub vertices: Vec<V>,
    /// Sum of the edge weights along the path
    pub cost: W,
}

/// Open-set entry, ordered so that `BinaryHeap` pops the lowest priority first.
struct Frontier<V, W> {
    priority: W,
    cost: W,
    vertex: V,
    seq: usize,
}

impl<V, W: PartialOrd> PartialEq for Frontier<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, W: PartialOrd> Eq for Frontier<V, W> {}

impl<V, W: PartialOrd> PartialOrd for Frontier<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, W: PartialOrd> Ord for Frontier<V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behaviour. Equal priorities prefer the costlier entry (the one
        // closer to the target under A*), then the older one.
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.cost.partial_cmp(&other.cost).unwrap_or(Ordering::Equal))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Finds a path of lowest total weight from `from` to `to`.
///
/// Uses Dijkstra's algorithm, or A* when [`Graph::supports_heuristic`] is `true`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `from` is not part of
/// the graph, or if the search meets an edge whose weight is negative or NaN.
///
/// Routes whose total cost does not fit the weight type are ignored, so a path is only
/// returned when its cost is representable.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{algorithms, AdjacencyGraph};
///
/// let graph = AdjacencyGraph::<&str, u32>::from_weighted_edges(
///     false,
///     [("A", "B", 3), ("A", "C", 1), ("C", "B", 1)],
/// );
/// assert_eq!(algorithms::find_cheapest_path(&graph, &"A", &"B")?, vec!["A", "C", "B"]);
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn find_cheapest_path<G: Graph>(
    graph: &G,
    from: &G::Vertex,
    to: &G::Vertex,
) -> Result<Vec<G::Vertex>> {
    Ok(find_cheapest_path_with_cost(graph, from, to)?
        .map(|path| path.vertices)
        .unwrap_or_default())
}

/// Finds a path of lowest total weight and reports its cost.
///
/// Returns `Ok(None)` when `to` cannot be reached.
///
/// # Errors
///
/// Same as [`find_cheapest_path`].
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{algorithms, AdjacencyGraph};
///
/// let graph = AdjacencyGraph::<char, f64>::from_weighted_edges(
///     true,
///     [('a', 'b', 0.5), ('b', 'c', 0.25), ('a', 'c', 1.0)],
/// );
/// let path = algorithms::find_cheapest_path_with_cost(&graph, &'a', &'c')?.unwrap();
/// assert_eq!(path.vertices, vec!['a', 'b', 'c']);
/// assert_eq!(path.cost, 0.75);
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn find_cheapest_path_with_cost<G: Graph>(
    graph: &G,
    from: &G::Vertex,
    to: &G::Vertex,
) -> Result<Option<CheapestPath<G::Vertex, G::Weight>>> {
    find_cheapest_path_with(graph, from, to, &PathOptions::default())
}

/// Finds a path of lowest total weight under explicit [`PathOptions`].
///
/// When `options.max_expansions` is reached before `to` is settled, the search stops and
/// returns `Ok(None)`, as for an unreachable target.
///
/// # Errors
///
/// Same as [`find_cheapest_path`]. With `use_heuristic` enabled, errors from
/// [`Graph::heuristic_weight`] are propagated.
pub fn find_cheapest_path_with<G: Graph>(
    graph: &G,
    from: &G::Vertex,
    to: &G::Vertex,
    options: &PathOptions,
) -> Result<Option<CheapestPath<G::Vertex, G::Weight>>> {
    if !graph.contains_vertex(from) {
        return Err(invalid_argument!("source vertex is not part of the graph"));
    }

    let zero = G::Weight::zero();
    if from == to {
        return Ok(Some(CheapestPath {
            vertices: vec![from.clone()],
            cost: zero,
        }));
    }

    let use_heuristic = options.use_heuristic && graph.supports_heuristic();
    let estimate = |vertex: &G::Vertex| -> Result<G::Weight> {
        if use_heuristic {
            graph.heuristic_weight(vertex, to)
        } else {
            Ok(zero)
        }
    };

    let mut visit_next = BinaryHeap::new();
    let mut best: HashMap<G::Vertex, G::Weight> = HashMap::new();
    let mut came_from: HashMap<G::Vertex, G::Vertex> = HashMap::new();
    let mut seq = 0usize;
    let mut expansions = 0usize;

    best.insert(from.clone(), zero);
    visit_next.push(Frontier {
        priority: estimate(from)?,
        cost: zero,
        vertex: from.clone(),
        seq,
    });

    while let Some(Frontier { cost, vertex, .. }) = visit_next.pop() {
        // A cheaper route to this vertex was queued after this entry
        if best.get(&vertex).is_some_and(|known| cost > *known) {
            continue;
        }

        if vertex == *to {
            let vertices = reconstruct_path(&came_from, vertex);
            log::debug!(
                "cheapest path: {} vertices, cost {:?}, {} expansions (heuristic: {})",
                vertices.len(),
                cost,
                expansions,
                use_heuristic
            );
            return Ok(Some(CheapestPath { vertices, cost }));
        }

        if options.max_expansions.is_some_and(|limit| expansions >= limit) {
            log::debug!("cheapest path: expansion budget of {} exhausted", expansions);
            return Ok(None);
        }
        expansions += 1;

        for edge in graph.edges_from(&vertex)? {
            // NaN compares as neither less nor greater, so it is rejected here as well
            if !matches!(
                edge.weight.partial_cmp(&zero),
                Some(Ordering::Greater | Ordering::Equal)
            ) {
                return Err(invalid_argument!(
                    "edge weight {:?} is negative or not a number",
                    edge.weight
                ));
            }

            // A cost that does not fit the weight type can never be the cheapest
            let Some(next) = cost.checked_add(edge.weight) else {
                log::trace!("cheapest path: cost overflow past {:?}", cost);
                continue;
            };
            let improves = best.get(&edge.to).map_or(true, |known| next < *known);
            if improves {
                // An estimate that overflows counts as zero
                let priority = next.checked_add(estimate(&edge.to)?).unwrap_or(next);
                best.insert(edge.to.clone(), next);
                came_from.insert(edge.to.clone(), vertex.clone());
                seq += 1;
                visit_next.push(Frontier {
                    priority,
                    cost: next,
                    vertex: edge.to,
                    seq,
                });
            }
        }
    }

    log::debug!("cheapest path: target unreachable after {} expansions", expansions);
    Ok(None)
}

fn reconstruct_path<V>(came_from: &HashMap<V, V>, last: V) -> Vec<V>
where
    V: Clone + Eq + std::hash::Hash,
{
    let mut path = vec![last];
    while let Some(previous) = path.last().and_then(|current| came_from.get(current)) {
        path.push(previous.clone());
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{
        graph::{AdjacencyGraph, Edge},
        test::{directed, undirected, weighted},
        Error,
    };

    /// A `width × height` 4-connected grid with unit steps and a Manhattan heuristic.
    struct Grid {
        width: i32,
        height: i32,
        walls: Vec<(i32, i32)>,
        expanded: Cell<usize>,
        heuristic: bool,
    }

    impl Grid {
        fn new(width: i32, height: i32, walls: Vec<(i32, i32)>, heuristic: bool) -> Self {
            Grid {
                width,
                height,
                walls,
                expanded: Cell::new(0),
                heuristic,
            }
        }

        fn open(&self, (x, y): (i32, i32)) -> bool {
            x >= 0 && y >= 0 && x < self.width && y < self.height && !self.walls.contains(&(x, y))
        }
    }

    impl Graph for Grid {
        type Vertex = (i32, i32);
        type Weight = i32;

        fn is_directed(&self) -> bool {
            false
        }

        fn vertices(&self) -> impl Iterator<Item = (i32, i32)> {
            let width = self.width;
            (0..self.height)
                .flat_map(move |y| (0..width).map(move |x| (x, y)))
                .filter(move |&cell| self.open(cell))
        }

        fn edges_from(
            &self,
            vertex: &(i32, i32),
        ) -> Result<impl Iterator<Item = Edge<(i32, i32), i32>>> {
            if !self.open(*vertex) {
                return Err(invalid_argument!("cell is blocked or outside the grid"));
            }
            self.expanded.set(self.expanded.get() + 1);
            let (x, y) = *vertex;
            let here = *vertex;
            Ok([(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
                .into_iter()
                .filter(move |&cell| self.open(cell))
                .map(move |cell| Edge::new(here, cell)))
        }

        fn contains_vertex(&self, vertex: &(i32, i32)) -> bool {
            self.open(*vertex)
        }

        fn supports_heuristic(&self) -> bool {
            self.heuristic
        }

        fn heuristic_weight(&self, from: &(i32, i32), to: &(i32, i32)) -> Result<i32> {
            Ok((from.0 - to.0).abs() + (from.1 - to.1).abs())
        }
    }

    #[test]
    fn test_shortest_path_fewest_edges() {
        let graph = undirected(&[("A", "B"), ("B", "C"), ("C", "D"), ("A", "D")]);
        assert_eq!(find_shortest_path(&graph, &"A", &"D").unwrap(), vec!["A", "D"]);
        assert_eq!(find_shortest_path(&graph, &"B", &"D").unwrap().len(), 3);
    }

    #[test]
    fn test_shortest_path_directed_unreachable() {
        let graph = directed(&[("A", "B"), ("C", "B")]);
        assert!(find_shortest_path(&graph, &"A", &"C").unwrap().is_empty());
        assert!(find_shortest_path(&graph, &"A", &"nowhere").unwrap().is_empty());
    }

    #[test]
    fn test_shortest_path_same_vertex() {
        let graph = directed(&[("A", "B")]);
        assert_eq!(find_shortest_path(&graph, &"B", &"B").unwrap(), vec!["B"]);
    }

    #[test]
    fn test_shortest_path_unknown_source() {
        let graph = directed(&[("A", "B")]);
        let err = find_shortest_path(&graph, &"Z", &"A").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_cheapest_path_prefers_lower_weight() {
        let graph = weighted(false, &[("A", "B", 3), ("A", "C", 1), ("C", "B", 1)]);
        let path = find_cheapest_path_with_cost(&graph, &"A", &"B").unwrap().unwrap();
        assert_eq!(path.vertices, vec!["A", "C", "B"]);
        assert_eq!(path.cost, 2);
    }

    #[test]
    fn test_cheapest_path_same_vertex_and_unreachable() {
        let mut graph = weighted(true, &[("A", "B", 4)]);
        graph.add_vertex("Z");

        let same = find_cheapest_path_with_cost(&graph, &"A", &"A").unwrap().unwrap();
        assert_eq!(same, CheapestPath { vertices: vec!["A"], cost: 0 });
        assert!(find_cheapest_path(&graph, &"A", &"Z").unwrap().is_empty());
        assert!(find_cheapest_path(&graph, &"B", &"A").unwrap().is_empty());
    }

    #[test]
    fn test_cheapest_path_unknown_source() {
        let graph = weighted(true, &[("A", "B", 4)]);
        assert!(find_cheapest_path(&graph, &"Q", &"A").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_cheapest_path_negative_weight_rejected() {
        let graph = AdjacencyGraph::<&str, i32>::from_weighted_edges(
            true,
            [("A", "B", 2), ("B", "C", -1)],
        );
        let err = find_cheapest_path(&graph, &"A", &"C").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_cheapest_path_nan_weight_rejected() {
        let graph = AdjacencyGraph::<&str, f64>::from_weighted_edges(
            true,
            [("A", "B", 1.0), ("A", "D", 1.0), ("D", "C", 1.0), ("B", "C", f64::NAN)],
        );
        let err = find_cheapest_path_with_cost(&graph, &"A", &"C").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_cheapest_path_infinite_weight() {
        let graph = AdjacencyGraph::<&str, f64>::from_weighted_edges(
            true,
            [("A", "B", f64::INFINITY), ("A", "C", 1.0), ("C", "B", 1.0), ("B", "D", 1.0)],
        );
        let path = find_cheapest_path_with_cost(&graph, &"A", &"B").unwrap().unwrap();
        assert_eq!(path.vertices, vec!["A", "C", "B"]);
        assert_eq!(path.cost, 2.0);

        let only = AdjacencyGraph::<&str, f64>::from_weighted_edges(
            true,
            [("A", "B", f64::INFINITY)],
        );
        let path = find_cheapest_path_with_cost(&only, &"A", &"B").unwrap().unwrap();
        assert_eq!(path.vertices, vec!["A", "B"]);
        assert_eq!(path.cost, f64::INFINITY);
    }

    /// `A -> B` costs one, `B -> C` costs `max`, `A -> C` costs two.
    fn detour_past_max<W: Measure>(max: W) -> Option<CheapestPath<&'static str, W>> {
        let one = W::one();
        let graph = AdjacencyGraph::<&str, W>::from_weighted_edges(
            true,
            [("A", "B", one), ("B", "C", max), ("A", "C", one + one)],
        );
        find_cheapest_path_with_cost(&graph, &"A", &"C").unwrap()
    }

    #[test]
    fn test_cheapest_path_skips_overflowing_routes() {
        fn check<W: Measure + PartialEq>(max: W) {
            let path = detour_past_max(max).unwrap();
            assert_eq!(path.vertices, vec!["A", "C"], "{max:?}");
            assert!(path.cost == W::one() + W::one(), "{max:?}");
        }

        check(u8::MAX);
        check(u16::MAX);
        check(u32::MAX);
        check(u64::MAX);
        check(u128::MAX);
        check(usize::MAX);
        check(i8::MAX);
        check(i16::MAX);
        check(i32::MAX);
        check(i64::MAX);
        check(i128::MAX);
        check(isize::MAX);
    }

    #[test]
    fn test_cheapest_path_overflow_only_route_is_unreachable() {
        let graph = AdjacencyGraph::<&str, u8>::from_weighted_edges(
            true,
            [("A", "B", 200), ("B", "C", 100)],
        );
        assert!(find_cheapest_path_with_cost(&graph, &"A", &"C").unwrap().is_none());
        assert!(find_cheapest_path(&graph, &"A", &"C").unwrap().is_empty());

        // Exactly at the bound is still representable
        let graph = AdjacencyGraph::<&str, u8>::from_weighted_edges(
            true,
            [("A", "B", 200), ("B", "C", 55)],
        );
        let path = find_cheapest_path_with_cost(&graph, &"A", &"C").unwrap().unwrap();
        assert_eq!(path.cost, u8::MAX);
    }

    #[test]
    fn test_cheapest_path_overflowing_detour_loses_to_direct_edge() {
        let graph = AdjacencyGraph::<&str, u32>::from_weighted_edges(
            true,
            [("A", "B", 1), ("B", "C", u32::MAX), ("A", "C", 10)],
        );
        let path = find_cheapest_path_with_cost(&graph, &"A", &"C").unwrap().unwrap();
        assert_eq!(path.vertices, vec!["A", "C"]);
        assert_eq!(path.cost, 10);
    }

    #[test]
    fn test_astar_tolerates_overflowing_estimate() {
        /// Chain `0 -> 1 -> 2` whose estimate is the largest `u8` everywhere but the target.
        struct Beacon(AdjacencyGraph<u8, u8>);

        impl Graph for Beacon {
            type Vertex = u8;
            type Weight = u8;

            fn is_directed(&self) -> bool {
                true
            }

            fn vertices(&self) -> impl Iterator<Item = u8> {
                self.0.vertices()
            }

            fn edges_from(&self, vertex: &u8) -> Result<impl Iterator<Item = Edge<u8, u8>>> {
                self.0.edges_from(vertex)
            }

            fn supports_heuristic(&self) -> bool {
                true
            }

            fn heuristic_weight(&self, from: &u8, to: &u8) -> Result<u8> {
                Ok(if from == to { 0 } else { u8::MAX })
            }
        }

        let graph = Beacon(AdjacencyGraph::from_edges(true, [(0, 1), (1, 2)]));
        let path = find_cheapest_path_with_cost(&graph, &0, &2).unwrap().unwrap();
        assert_eq!(path.vertices, vec![0, 1, 2]);
        assert_eq!(path.cost, 2);
    }

    #[test]
    fn test_cheapest_path_zero_weight_edges() {
        let graph = weighted(true, &[("A", "B", 0), ("B", "C", 0), ("A", "C", 1)]);
        let path = find_cheapest_path_with_cost(&graph, &"A", &"C").unwrap().unwrap();
        assert_eq!(path.cost, 0);
        assert_eq!(path.vertices, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_cheapest_path_parallel_edges_use_lightest() {
        let graph = weighted(true, &[("A", "B", 9), ("A", "B", 2)]);
        let path = find_cheapest_path_with_cost(&graph, &"A", &"B").unwrap().unwrap();
        assert_eq!(path.cost, 2);
    }

    #[test]
    fn test_astar_matches_dijkstra_and_expands_less() {
        let walls = vec![(3, 0), (3, 1), (3, 2), (3, 3), (3, 4), (3, 5)];
        let astar = Grid::new(10, 10, walls.clone(), true);
        let dijkstra = Grid::new(10, 10, walls, false);

        let a = find_cheapest_path_with_cost(&astar, &(0, 0), &(9, 0)).unwrap().unwrap();
        let d = find_cheapest_path_with_cost(&dijkstra, &(0, 0), &(9, 0)).unwrap().unwrap();

        assert_eq!(a.cost, d.cost);
        assert_eq!(a.vertices.len() as i32, a.cost + 1);
        assert!(astar.expanded.get() < dijkstra.expanded.get());
    }

    #[test]
    fn test_heuristic_can_be_disabled() {
        let with = Grid::new(8, 8, Vec::new(), true);
        let without = Grid::new(8, 8, Vec::new(), true);

        find_cheapest_path_with(&with, &(0, 0), &(7, 7), &PathOptions::default()).unwrap();
        let plain =
            find_cheapest_path_with(&without, &(0, 0), &(7, 7), &PathOptions::dijkstra()).unwrap();

        assert_eq!(plain.unwrap().cost, 14);
        assert!(with.expanded.get() < without.expanded.get());
    }

    #[test]
    fn test_expansion_budget_reports_no_path() {
        let grid = Grid::new(8, 8, Vec::new(), false);
        let options = PathOptions::dijkstra().with_max_expansions(3);
        let result = find_cheapest_path_with(&grid, &(0, 0), &(7, 7), &options).unwrap();
        assert!(result.is_none());
        assert_eq!(grid.expanded.get(), 3);
    }

    #[test]
    fn test_frontier_orders_lowest_priority_first() {
        let mut heap = BinaryHeap::new();
        for (seq, priority) in [5.0, 1.0, 3.0, 1.0].into_iter().enumerate() {
            heap.push(Frontier {
                priority,
                cost: priority,
                vertex: seq,
                seq,
            });
        }
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|f| f.vertex)).collect();
        assert_eq!(order, vec![1, 3, 2, 0]);
    }
}
