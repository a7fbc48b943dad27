use crate::algo::cycles::has_directed_cycle;
use crate::algo::dijkstra::{Dijkstra, DijkstraWeight};
use crate::algo::traversal::{PreOrderBfs, PreOrderDfs};
use crate::error::{ErrorKind, Result};
use crate::interface::{
    GraphBase, ImmutableGraphContainer, Mark, NavigableGraph, WeightedGraph, WeightedNeighbor,
};
use bitvector::BitVector;
use std::fmt;
use std::iter::{Enumerate, FilterMap};
use std::slice;

/// A weighted directed graph stored as an adjacency matrix.
///
/// Vertices are the dense indices `0..vertex_count()`, and are only ever appended.
/// The entry `(from, to)` of the matrix is the weight of the edge from `from` to `to`, where zero means that there is no edge.
/// Only strictly positive weights are stored, and there are no self loops.
///
/// Invalid arguments to the mutating methods are ignored and logged on the trace level.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DirectedGraph<WeightType = u32> {
    adjacency: Vec<Vec<WeightType>>,
}

impl<WeightType: DijkstraWeight> Default for DirectedGraph<WeightType> {
    fn default() -> Self {
        Self::new()
    }
}

impl<WeightType: DijkstraWeight> DirectedGraph<WeightType> {
    /// Creates a graph without vertices.
    pub fn new() -> Self {
        Self {
            adjacency: Vec::new(),
        }
    }

    /// Creates a graph from a list of weighted edges `(from, to, weight)`.
    /// The graph has `max + 1` vertices, where `max` is the largest vertex index in the edges, or no vertices if there are no edges.
    /// Edges are inserted with [add_edge](DirectedGraph::add_edge), so self loops and non-positive weights are ignored.
    pub fn from_edges<Edges: IntoIterator<Item = (usize, usize, WeightType)>>(edges: Edges) -> Self {
        let edges: Vec<_> = edges.into_iter().collect();
        let mut graph = Self::new();
        if let Some(max_vertex) = edges.iter().map(|&(from, to, _)| from.max(to)).max() {
            for _ in 0..=max_vertex {
                graph.add_vertex();
            }
        }

        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Appends a new vertex without edges and returns the new amount of vertices.
    /// The index of the new vertex is the old amount of vertices.
    pub fn add_vertex(&mut self) -> usize {
        for row in &mut self.adjacency {
            row.push(WeightType::zero());
        }
        let vertex_count = self.adjacency.len() + 1;
        self.adjacency.push(vec![WeightType::zero(); vertex_count]);
        vertex_count
    }

    /// Inserts the edge `(from, to)` with the given weight, or overwrites its weight if it exists.
    /// Ignored if one of the vertices does not exist, `from == to` or the weight is not strictly positive.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: WeightType) {
        if !self.is_vertex(from) || !self.is_vertex(to) {
            trace!(
                "Ignoring edge ({}, {}), the graph has {} vertices",
                from,
                to,
                self.vertex_count()
            );
        } else if from == to {
            trace!("Ignoring self loop at {}", from);
        } else if weight <= WeightType::zero() {
            trace!(
                "Ignoring edge ({}, {}) with non-positive weight {}",
                from,
                to,
                weight
            );
        } else {
            self.adjacency[from][to] = weight;
        }
    }

    /// Inserts the edge `(from, to)` with weight one.
    pub fn add_unweighted_edge(&mut self, from: usize, to: usize) {
        self.add_edge(from, to, WeightType::one());
    }

    /// Removes the edge `(from, to)`.
    /// Ignored if one of the vertices does not exist or there is no such edge.
    pub fn remove_edge(&mut self, from: usize, to: usize) {
        if self.edge_weight(from, to).is_some() {
            self.adjacency[from][to] = WeightType::zero();
        } else {
            trace!("Not removing edge ({}, {}), it does not exist", from, to);
        }
    }

    /// Returns the amount of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the amount of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .flatten()
            .filter(|weight| **weight > WeightType::zero())
            .count()
    }

    /// Returns the weight of the edge `(from, to)`, or `None` if there is no such edge.
    pub fn edge_weight(&self, from: usize, to: usize) -> Option<WeightType> {
        self.adjacency
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .filter(|weight| *weight > WeightType::zero())
    }

    /// Returns the vertices of the graph in ascending order.
    pub fn get_vertices(&self) -> Vec<usize> {
        (0..self.vertex_count()).collect()
    }

    /// Returns all edges as `(from, to, weight)`, ordered by `from` first and `to` second.
    pub fn get_edges(&self) -> Vec<(usize, usize, WeightType)> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, weight)| **weight > WeightType::zero())
                    .map(move |(to, weight)| (from, to, *weight))
            })
            .collect()
    }

    /// Returns true if each pair of consecutive vertices in the path is connected by an edge in forward direction.
    /// The empty path is valid, and a path of a single vertex is valid if the vertex exists.
    pub fn is_valid_path(&self, path: &[usize]) -> bool {
        self.is_valid_walk(path)
    }

    /// Returns the vertices reachable from `start` in depth first order, where the neighbors of a vertex are visited in ascending order.
    /// If `end` is given, the search stops after visiting `end`.
    /// Returns an empty vector if `start` does not exist.
    pub fn dfs(&self, start: usize, end: Option<usize>) -> Vec<usize> {
        PreOrderDfs::new(self, start).collect_until(end.as_ref())
    }

    /// Returns the vertices reachable from `start` in breadth first order, where the neighbors of a vertex are enqueued in ascending order.
    /// If `end` is given, the search stops after visiting `end`.
    /// Returns an empty vector if `start` does not exist.
    pub fn bfs(&self, start: usize, end: Option<usize>) -> Vec<usize> {
        PreOrderBfs::new(self, start).collect_until(end.as_ref())
    }

    /// Returns true if the graph contains a directed cycle.
    pub fn has_cycle(&self) -> bool {
        has_directed_cycle(self)
    }

    /// Returns the lengths of the shortest paths from `source` to each vertex, indexed by vertex.
    /// Unreachable vertices have distance `None`.
    /// Returns an error if `source` is not a vertex of the graph.
    pub fn dijkstra(&self, source: usize) -> Result<Vec<Option<WeightType>>> {
        if !self.is_vertex(source) {
            return Err(ErrorKind::VertexNotFound(source, self.vertex_count()).into());
        }

        let mut distances = Vec::new();
        Dijkstra::new(self.vertex_count()).shortest_path_lens(self, source, &mut distances);
        Ok(distances)
    }

    fn is_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns the matrix row of the given vertex, or an empty row if the vertex does not exist.
    fn row(&self, vertex: usize) -> &[WeightType] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn edge_target<WeightType: DijkstraWeight>(
    (to, weight): (usize, &WeightType),
) -> Option<usize> {
    if *weight > WeightType::zero() {
        Some(to)
    } else {
        None
    }
}

fn weighted_edge_target<WeightType: DijkstraWeight>(
    (to, weight): (usize, &WeightType),
) -> Option<WeightedNeighbor<usize, WeightType>> {
    if *weight > WeightType::zero() {
        Some(WeightedNeighbor {
            vertex: to,
            weight: *weight,
        })
    } else {
        None
    }
}

impl<WeightType: DijkstraWeight> GraphBase for DirectedGraph<WeightType> {
    type Vertex = usize;
    type VisitedSet = BitVector;
    type MarkMap = Vec<Mark>;
}

impl<WeightType: DijkstraWeight> ImmutableGraphContainer for DirectedGraph<WeightType> {
    fn vertices(&self) -> Vec<usize> {
        self.get_vertices()
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        DirectedGraph::edge_count(self)
    }

    fn contains_vertex(&self, vertex: &usize) -> bool {
        self.is_vertex(*vertex)
    }

    fn contains_edge_between(&self, from: &usize, to: &usize) -> bool {
        self.edge_weight(*from, *to).is_some()
    }

    fn new_visited_set(&self) -> BitVector {
        BitVector::new(self.vertex_count())
    }

    fn new_mark_map(&self) -> Vec<Mark> {
        vec![Mark::Unvisited; self.vertex_count()]
    }
}

type EdgeFilter<'a, WeightType, Item> =
    FilterMap<Enumerate<slice::Iter<'a, WeightType>>, fn((usize, &'a WeightType)) -> Option<Item>>;

impl<'a, WeightType: DijkstraWeight + 'a> NavigableGraph<'a> for DirectedGraph<WeightType> {
    type OutNeighbors = EdgeFilter<'a, WeightType, usize>;

    fn out_neighbors(&'a self, vertex: &usize) -> Self::OutNeighbors {
        self.row(*vertex)
            .iter()
            .enumerate()
            .filter_map(edge_target::<WeightType> as fn((usize, &'a WeightType)) -> Option<usize>)
    }

    /// The matrix rows are sorted already.
    fn sorted_out_neighbors(&'a self, vertex: &usize) -> Vec<usize> {
        self.out_neighbors(vertex).collect()
    }
}

impl<'a, WeightType: DijkstraWeight + 'a> WeightedGraph<'a> for DirectedGraph<WeightType> {
    type Weight = WeightType;
    type OutEdges = EdgeFilter<'a, WeightType, WeightedNeighbor<usize, WeightType>>;

    fn out_edges(&'a self, vertex: &usize) -> Self::OutEdges {
        self.row(*vertex).iter().enumerate().filter_map(
            weighted_edge_target::<WeightType>
                as fn((usize, &'a WeightType)) -> Option<WeightedNeighbor<usize, WeightType>>,
        )
    }
}

impl<WeightType: DijkstraWeight> fmt::Display for DirectedGraph<WeightType> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.adjacency.is_empty() {
            return writeln!(f, "EMPTY GRAPH");
        }

        writeln!(f, "GRAPH ({} vertices):", self.vertex_count())?;
        write!(f, "   |")?;
        for vertex in 0..self.vertex_count() {
            if vertex > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:2}", vertex)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(self.vertex_count() * 3 + 3))?;

        for (from, row) in self.adjacency.iter().enumerate() {
            write!(f, "{:2} |", from)?;
            for (to, weight) in row.iter().enumerate() {
                if to > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:2}", weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::implementation::directed_graph::DirectedGraph;
    use crate::interface::{NavigableGraph, WeightedGraph};

    #[test]
    fn test_add_vertex_and_edges() {
        let mut graph = DirectedGraph::new();
        assert_eq!(graph.add_vertex(), 1);
        assert_eq!(graph.add_vertex(), 2);
        assert_eq!(graph.add_vertex(), 3);

        graph.add_edge(0, 1, 10u32);
        graph.add_edge(1, 2, 5);
        graph.add_edge(0, 1, 7);
        assert_eq!(graph.edge_weight(0, 1), Some(7));
        assert_eq!(graph.edge_weight(1, 0), None);
        assert_eq!(graph.edge_count(), 2);

        // All of these are ignored
        graph.add_edge(0, 3, 1);
        graph.add_edge(2, 2, 1);
        graph.add_edge(2, 0, 0);
        assert_eq!(graph.get_edges(), vec![(0, 1, 7), (1, 2, 5)]);

        graph.add_unweighted_edge(2, 0);
        assert_eq!(graph.edge_weight(2, 0), Some(1));
    }

    #[test]
    fn test_negative_weights_are_ignored() {
        let mut graph = DirectedGraph::from_edges(vec![(0, 1, 3i32)]);
        graph.add_edge(1, 0, -2);
        assert_eq!(graph.get_edges(), vec![(0, 1, 3)]);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = DirectedGraph::from_edges(vec![(0, 1, 1u32), (1, 2, 1)]);
        graph.remove_edge(0, 1);
        graph.remove_edge(0, 1);
        graph.remove_edge(5, 1);
        graph.remove_edge(2, 1);
        assert_eq!(graph.get_edges(), vec![(1, 2, 1)]);
    }

    #[test]
    fn test_from_edges() {
        let graph = DirectedGraph::from_edges(vec![(4, 1, 2u32)]);
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.get_vertices(), vec![0, 1, 2, 3, 4]);

        let graph = DirectedGraph::<u32>::from_edges(vec![]);
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph, DirectedGraph::default());
    }

    #[test]
    fn test_is_valid_path() {
        let graph = DirectedGraph::from_edges(vec![(0, 1, 1u32), (1, 2, 1), (2, 3, 1)]);
        assert!(graph.is_valid_path(&[]));
        assert!(graph.is_valid_path(&[3]));
        assert!(!graph.is_valid_path(&[4]));
        assert!(graph.is_valid_path(&[0, 1, 2, 3]));
        assert!(!graph.is_valid_path(&[3, 2]));
        assert!(!graph.is_valid_path(&[0, 2]));
    }

    #[test]
    fn test_dfs_and_bfs() {
        let graph = DirectedGraph::from_edges(vec![(0, 2, 1u32), (0, 1, 1), (1, 3, 1)]);
        assert_eq!(graph.dfs(0, None), vec![0, 1, 3, 2]);
        assert_eq!(graph.dfs(0, Some(3)), vec![0, 1, 3]);
        assert_eq!(graph.dfs(0, Some(9)), vec![0, 1, 3, 2]);
        assert_eq!(graph.bfs(0, None), vec![0, 1, 2, 3]);
        assert_eq!(graph.bfs(0, Some(2)), vec![0, 1, 2]);
        assert_eq!(graph.bfs(3, None), vec![3]);
        assert!(graph.dfs(7, None).is_empty());
        assert!(graph.bfs(7, Some(0)).is_empty());
    }

    #[test]
    fn test_has_cycle() {
        let mut graph = DirectedGraph::from_edges(vec![(0, 1, 1u32), (1, 2, 1), (2, 0, 1)]);
        assert!(graph.has_cycle());
        graph.remove_edge(2, 0);
        assert!(!graph.has_cycle());
    }

    #[test]
    fn test_dijkstra() {
        let graph = DirectedGraph::from_edges(vec![
            (0, 1, 4u32),
            (0, 2, 1),
            (2, 1, 2),
            (1, 3, 1),
            (2, 3, 5),
        ]);
        assert_eq!(
            graph.dijkstra(0).unwrap(),
            vec![Some(0), Some(3), Some(1), Some(4)]
        );
        assert_eq!(graph.dijkstra(3).unwrap(), vec![None, None, None, Some(0)]);

        let graph = DirectedGraph::from_edges(vec![(0, 1, u32::MAX), (0, 2, 1)]);
        assert_eq!(
            graph.dijkstra(0).unwrap(),
            vec![Some(0), Some(u32::MAX), Some(1)]
        );

        match graph.dijkstra(4) {
            Err(error) => match error.kind() {
                ErrorKind::VertexNotFound(vertex, vertex_count) => {
                    assert_eq!((*vertex, *vertex_count), (4, 4))
                }
                other => panic!("unexpected error {:?}", other),
            },
            Ok(distances) => panic!("expected an error, got {:?}", distances),
        }
    }

    #[test]
    fn test_out_neighbors_of_missing_vertex() {
        let graph = DirectedGraph::from_edges(vec![(0, 1, 1u32)]);
        assert_eq!(graph.out_neighbors(&1).count(), 0);
        assert_eq!(graph.out_neighbors(&5).count(), 0);
        assert_eq!(graph.out_edges(&5).count(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(DirectedGraph::<u32>::new().to_string(), "EMPTY GRAPH\n");
        let graph = DirectedGraph::from_edges(vec![(0, 1, 12u32)]);
        assert_eq!(
            graph.to_string(),
            "GRAPH (2 vertices):\n   | 0  1\n---------\n 0 | 0 12\n 1 | 0  0\n"
        );
    }
}
