//! The graph traits.
//!
//! The traits are roughly split up by different access types:
//!  - the associated types of a graph (`GraphBase`)
//!  - queries for vertices and edges (`ImmutableGraphContainer`)
//!  - immutable reference that must outlive the returned iterators (`NavigableGraph`, `WeightedGraph`)
//!
//! The algorithms in [algo](crate::algo) are written against these traits,
//! such that both the adjacency-matrix and the adjacency-list graphs share one implementation of each algorithm.

use crate::algo::dijkstra::DijkstraWeight;
use std::fmt::Debug;
use std::hash::Hash;

pub use marks::{Mark, VertexMarkMap, VertexSet};

/// Visited sets and three-state mark maps used by the traversal algorithms.
pub mod marks;

/// Contains the associated types of a graph.
pub trait GraphBase {
    /// The type used to identify vertices.
    type Vertex: Clone + Eq + Ord + Hash + Debug;
    /// A set of vertices, used to remember which vertices a traversal has visited.
    type VisitedSet: VertexSet<Self::Vertex>;
    /// A map from vertices to their [Mark](Mark), used by algorithms that need more than two states per vertex.
    type MarkMap: VertexMarkMap<Self::Vertex>;
}

/// A container that contains a set of vertices and edges.
pub trait ImmutableGraphContainer: GraphBase {
    /// Returns the vertices of this graph.
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// Returns the amount of vertices in this graph.
    fn vertex_count(&self) -> usize;

    /// Returns the amount of edges in this graph.
    /// Undirected edges are counted once.
    fn edge_count(&self) -> usize;

    /// Returns true if this graph contains the given vertex.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Returns true if the graph contains an edge `(from, to)`.
    fn contains_edge_between(&self, from: &Self::Vertex, to: &Self::Vertex) -> bool;

    /// Creates a visited set in which no vertex of this graph is contained.
    fn new_visited_set(&self) -> Self::VisitedSet;

    /// Creates a mark map in which every vertex of this graph is [Unvisited](Mark::Unvisited).
    fn new_mark_map(&self) -> Self::MarkMap;

    /// Returns true if each pair of consecutive vertices in `walk` is connected by an edge.
    /// The empty walk is valid, and a walk made up of a single vertex is valid if the vertex is part of the graph.
    fn is_valid_walk(&self, walk: &[Self::Vertex]) -> bool {
        match walk {
            [] => true,
            [vertex] => self.contains_vertex(vertex),
            _ => walk
                .windows(2)
                .all(|pair| self.contains_edge_between(&pair[0], &pair[1])),
        }
    }
}

/// A graph that can be navigated, i.e. that can iterate the neighbors of its vertices.
pub trait NavigableGraph<'a>: ImmutableGraphContainer + Sized {
    /// The iterator type used to iterate over the outgoing neighbors of a vertex.
    type OutNeighbors: Iterator<Item = Self::Vertex>;

    /// Returns an iterator over the outgoing neighbors of the given vertex, in storage order.
    /// A vertex that is not part of the graph has no neighbors.
    fn out_neighbors(&'a self, vertex: &Self::Vertex) -> Self::OutNeighbors;

    /// Returns the outgoing neighbors of the given vertex in ascending order.
    fn sorted_out_neighbors(&'a self, vertex: &Self::Vertex) -> Vec<Self::Vertex> {
        let mut neighbors: Vec<_> = self.out_neighbors(vertex).collect();
        neighbors.sort_unstable();
        neighbors
    }
}

/// A graph whose edges carry weights usable for shortest path computation.
pub trait WeightedGraph<'a>: NavigableGraph<'a> {
    /// The weight type of the edges.
    type Weight: DijkstraWeight;
    /// The iterator type used to iterate over the outgoing edges of a vertex.
    type OutEdges: Iterator<Item = WeightedNeighbor<Self::Vertex, Self::Weight>>;

    /// Returns an iterator over the outgoing edges of the given vertex.
    fn out_edges(&'a self, vertex: &Self::Vertex) -> Self::OutEdges;
}

/// The neighbor of a vertex, given as the neighbor itself as well as the weight of the edge used to reach it.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct WeightedNeighbor<Vertex, Weight> {
    /// The neighboring vertex.
    pub vertex: Vertex,
    /// The weight of the edge used to reach the neighboring vertex.
    pub weight: Weight,
}
