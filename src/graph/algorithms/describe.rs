//! Per-vertex component and degree description.
//!
//! [`describe_vertices`] reports, for every vertex, the index of its connected component and
//! its in- and out-degree. Components are taken in the undirected sense: on a directed graph
//! two vertices share a component when they are joined by edges in either direction.

use std::{collections::HashMap, hash::Hash};

use crate::{
    graph::{algorithms::bfs::traverse_bfs, Edge, Graph},
    Result,
};

/// Component membership and degrees of one vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexDescriptor<V> {
    /// The described vertex
    pub vertex: V,
    /// 0-based component index, assigned in [`Graph::vertices`] order of first appearance
    pub component_index: usize,
    /// Number of enumerated edges ending at this vertex
    pub in_degree: usize,
    /// Number of enumerated edges leaving this vertex
    pub out_degree: usize,
}

/// Undirected view of a graph's adjacency, built from one scan of its edges.
struct Connectivity<'a, V> {
    vertices: &'a [V],
    neighbours: HashMap<V, Vec<V>>,
}

impl<V: Clone + Eq + Hash> Graph for Connectivity<'_, V> {
    type Vertex = V;
    type Weight = u32;

    fn is_directed(&self) -> bool {
        false
    }

    fn vertices(&self) -> impl Iterator<Item = V> {
        self.vertices.iter().cloned()
    }

    fn edges_from(&self, vertex: &V) -> Result<impl Iterator<Item = Edge<V, u32>>> {
        let Some(targets) = self.neighbours.get(vertex) else {
            return Err(invalid_argument!("vertex is not part of the graph"));
        };
        let from = vertex.clone();
        Ok(targets
            .iter()
            .map(move |to| Edge::new(from.clone(), to.clone())))
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.neighbours.contains_key(vertex)
    }
}

/// Describes every vertex of the graph.
///
/// All edges are scanned once to count degrees and build an undirected adjacency view; the
/// breadth-first engine then labels components over that view, starting from each vertex
/// that has no component yet, in [`Graph::vertices`] order.
///
/// The output follows [`Graph::vertices`] order. For undirected graphs each stored edge is
/// enumerated from both endpoints, so `in_degree == out_degree` for every vertex; a self-loop
/// contributes one to each.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if an edge leads to a
/// vertex that [`Graph::vertices`] does not report.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{algorithms, AdjacencyGraph};
///
/// let mut graph = AdjacencyGraph::<&str>::from_edges(true, [("A", "B"), ("C", "B")]);
/// graph.add_vertex("D");
///
/// let described = algorithms::describe_vertices(&graph)?;
/// let components: Vec<usize> = described.iter().map(|d| d.component_index).collect();
/// assert_eq!(components, vec![0, 0, 0, 1]);
///
/// let b = &described[1];
/// assert_eq!((b.vertex, b.in_degree, b.out_degree), ("B", 2, 0));
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn describe_vertices<G: Graph>(graph: &G) -> Result<Vec<VertexDescriptor<G::Vertex>>> {
    let vertices: Vec<G::Vertex> = graph.vertices().collect();
    let position: HashMap<G::Vertex, usize> = vertices
        .iter()
        .enumerate()
        .map(|(i, v)| (v.clone(), i))
        .collect();

    let directed = graph.is_directed();
    let mut in_degree = vec![0usize; vertices.len()];
    let mut out_degree = vec![0usize; vertices.len()];
    let mut neighbours: HashMap<G::Vertex, Vec<G::Vertex>> = vertices
        .iter()
        .map(|v| (v.clone(), Vec::new()))
        .collect();

    for (source, vertex) in vertices.iter().enumerate() {
        for edge in graph.edges_from(vertex)? {
            let Some(&target) = position.get(&edge.to) else {
                return Err(invalid_argument!(
                    "edge target is not a vertex of the graph"
                ));
            };
            out_degree[source] += 1;
            in_degree[target] += 1;

            if directed && source != target {
                if let Some(back) = neighbours.get_mut(&edge.to) {
                    back.push(vertex.clone());
                }
            }
            if let Some(forward) = neighbours.get_mut(vertex) {
                forward.push(edge.to);
            }
        }
    }

    let view = Connectivity {
        vertices: &vertices,
        neighbours,
    };

    let mut component: Vec<Option<usize>> = vec![None; vertices.len()];
    let mut components = 0usize;
    for (i, vertex) in vertices.iter().enumerate() {
        if component[i].is_some() {
            continue;
        }
        let tree = traverse_bfs(&view, vertex, |_, _| true)?;
        for node in tree.nodes() {
            if let Some(&member) = position.get(node.vertex()) {
                component[member] = Some(components);
            }
        }
        components += 1;
    }

    log::debug!(
        "describe: {} vertices in {} components",
        vertices.len(),
        components
    );

    Ok(vertices
        .iter()
        .enumerate()
        .map(|(i, vertex)| VertexDescriptor {
            vertex: vertex.clone(),
            component_index: component[i].unwrap_or(components),
            in_degree: in_degree[i],
            out_degree: out_degree[i],
        })
        .collect())
}
