use crate::algo::components::count_connected_components;
use crate::algo::cycles::has_undirected_cycle;
use crate::algo::traversal::{PreOrderBfs, PreOrderDfs};
use crate::interface::{GraphBase, ImmutableGraphContainer, Mark, NavigableGraph};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::iter::Cloned;
use std::slice;

/// An unweighted undirected graph with string labels, stored as adjacency lists.
///
/// Each vertex has a list of its neighbors in insertion order, and each edge is stored in the lists of both its endpoints.
/// The vertices are kept in a sorted map, so they are always listed in ascending lexicographic order.
/// The graph has no self loops and no parallel edges.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct UndirectedGraph {
    adjacency: BTreeMap<String, Vec<String>>,
}

impl UndirectedGraph {
    /// Creates a graph without vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from a list of edges, adding their endpoints as vertices.
    pub fn from_edges<Label: AsRef<str>, Edges: IntoIterator<Item = (Label, Label)>>(
        edges: Edges,
    ) -> Self {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u.as_ref(), v.as_ref());
        }
        graph
    }

    /// Adds a vertex without neighbors.
    /// Does nothing if the vertex exists already.
    pub fn add_vertex(&mut self, vertex: &str) {
        if !self.adjacency.contains_key(vertex) {
            self.adjacency.insert(vertex.to_owned(), Vec::new());
        }
    }

    /// Adds the edge `{u, v}`, adding its endpoints as vertices if they do not exist.
    /// Does nothing if `u == v` or if the edge exists already.
    pub fn add_edge(&mut self, u: &str, v: &str) {
        if u == v {
            trace!("Ignoring self loop at {}", u);
            return;
        }

        self.add_vertex(u);
        self.add_vertex(v);
        if self.contains_edge(u, v) {
            return;
        }

        if let Some(neighbors) = self.adjacency.get_mut(u) {
            neighbors.push(v.to_owned());
        }
        if let Some(neighbors) = self.adjacency.get_mut(v) {
            neighbors.push(u.to_owned());
        }
    }

    /// Removes the edge `{u, v}`.
    /// Does nothing if one of the vertices or the edge does not exist.
    pub fn remove_edge(&mut self, u: &str, v: &str) {
        if !self.contains_edge(u, v) {
            trace!("Not removing edge {{{}, {}}}, it does not exist", u, v);
            return;
        }

        if let Some(neighbors) = self.adjacency.get_mut(u) {
            neighbors.retain(|neighbor| neighbor != v);
        }
        if let Some(neighbors) = self.adjacency.get_mut(v) {
            neighbors.retain(|neighbor| neighbor != u);
        }
    }

    /// Removes the vertex and all its incident edges.
    /// Does nothing if the vertex does not exist.
    pub fn remove_vertex(&mut self, vertex: &str) {
        let neighbors = match self.adjacency.remove(vertex) {
            Some(neighbors) => neighbors,
            None => {
                trace!("Not removing vertex {}, it does not exist", vertex);
                return;
            }
        };

        for neighbor in neighbors {
            if let Some(neighbor_neighbors) = self.adjacency.get_mut(&neighbor) {
                neighbor_neighbors.retain(|other| other != vertex);
            }
        }
    }

    /// Returns the vertices in ascending order.
    pub fn get_vertices(&self) -> Vec<String> {
        self.adjacency.keys().cloned().collect()
    }

    /// Returns each edge once as `(u, v)` with `u < v`, ordered by `u` first and the neighbor list order of `u` second.
    pub fn get_edges(&self) -> Vec<(String, String)> {
        self.adjacency
            .iter()
            .flat_map(|(u, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |v| u < *v)
                    .map(move |v| (u.clone(), v.clone()))
            })
            .collect()
    }

    /// Returns the neighbors of the given vertex in insertion order, or `None` if the vertex does not exist.
    pub fn neighbors(&self, vertex: &str) -> Option<&[String]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Returns true if the graph contains the given vertex.
    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns true if the graph contains the edge `{u, v}`.
    pub fn contains_edge(&self, u: &str, v: &str) -> bool {
        self.adjacency
            .get(u)
            .map(|neighbors| neighbors.iter().any(|neighbor| neighbor == v))
            .unwrap_or(false)
    }

    /// Returns true if each pair of consecutive vertices in the path is connected by an edge.
    /// The empty path is valid, and a path of a single vertex is valid if the vertex exists.
    pub fn is_valid_path<Label: AsRef<str>>(&self, path: &[Label]) -> bool {
        match path {
            [] => true,
            [vertex] => self.contains_vertex(vertex.as_ref()),
            _ => path
                .windows(2)
                .all(|pair| self.contains_edge(pair[0].as_ref(), pair[1].as_ref())),
        }
    }

    /// Returns the vertices reachable from `start` in depth first order, where the neighbors of a vertex are visited in ascending order.
    /// If `end` is given, the search stops after visiting `end`.
    /// Returns an empty vector if `start` does not exist, and treats a missing `end` as if no end was given.
    pub fn dfs(&self, start: &str, end: Option<&str>) -> Vec<String> {
        let end = end.map(str::to_owned);
        PreOrderDfs::new(self, start.to_owned()).collect_until(end.as_ref())
    }

    /// Returns the vertices reachable from `start` in breadth first order, where the neighbors of a vertex are enqueued in ascending order.
    /// If `end` is given, the search stops after visiting `end`.
    /// Returns an empty vector if `start` does not exist, and treats a missing `end` as if no end was given.
    pub fn bfs(&self, start: &str, end: Option<&str>) -> Vec<String> {
        let end = end.map(str::to_owned);
        PreOrderBfs::new(self, start.to_owned()).collect_until(end.as_ref())
    }

    /// Returns the amount of connected components of the graph.
    pub fn count_connected_components(&self) -> usize {
        count_connected_components(self)
    }

    /// Returns true if the graph contains a cycle.
    pub fn has_cycle(&self) -> bool {
        has_undirected_cycle(self)
    }
}

impl GraphBase for UndirectedGraph {
    type Vertex = String;
    type VisitedSet = HashSet<String>;
    type MarkMap = HashMap<String, Mark>;
}

impl ImmutableGraphContainer for UndirectedGraph {
    fn vertices(&self) -> Vec<String> {
        self.get_vertices()
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    fn contains_vertex(&self, vertex: &String) -> bool {
        UndirectedGraph::contains_vertex(self, vertex)
    }

    fn contains_edge_between(&self, from: &String, to: &String) -> bool {
        self.contains_edge(from, to)
    }

    fn new_visited_set(&self) -> HashSet<String> {
        HashSet::with_capacity(self.adjacency.len())
    }

    fn new_mark_map(&self) -> HashMap<String, Mark> {
        HashMap::with_capacity(self.adjacency.len())
    }
}

impl<'a> NavigableGraph<'a> for UndirectedGraph {
    type OutNeighbors = Cloned<slice::Iter<'a, String>>;

    fn out_neighbors(&'a self, vertex: &String) -> Self::OutNeighbors {
        self.neighbors(vertex).unwrap_or(&[]).iter().cloned()
    }
}

impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<_> = self
            .adjacency
            .iter()
            .map(|(vertex, neighbors)| format!("{}: [{}]", vertex, neighbors.join(", ")))
            .collect();

        let single_line = lines.join(", ");
        if single_line.len() < 70 {
            write!(f, "GRAPH: {{{}}}", single_line)
        } else {
            write!(f, "GRAPH: {{\n  {}}}", lines.join("\n  "))
        }
    }
}
