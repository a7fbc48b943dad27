use bitvector::BitVector;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// A set of vertices that remembers which vertices were visited.
pub trait VertexSet<Vertex> {
    /// Inserts the given vertex and returns true if it was not contained before.
    fn insert(&mut self, vertex: &Vertex) -> bool;

    /// Returns true if the given vertex is contained in the set.
    fn contains(&self, vertex: &Vertex) -> bool;
}

/// The state of a vertex in an algorithm that distinguishes between vertices that are in progress and vertices that are done.
/// In the literature, these are often called white, gray and black.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum Mark {
    /// The vertex was not reached yet.
    Unvisited,
    /// The vertex was reached, but its neighbors are not processed completely, i.e. it is on the current path or in the queue.
    InProgress,
    /// The vertex and all its neighbors were processed.
    Done,
}

impl Default for Mark {
    fn default() -> Self {
        Mark::Unvisited
    }
}

/// A map that stores a [Mark](Mark) for each vertex.
pub trait VertexMarkMap<Vertex> {
    /// Returns the mark of the given vertex.
    fn mark(&self, vertex: &Vertex) -> Mark;

    /// Sets the mark of the given vertex.
    fn set_mark(&mut self, vertex: &Vertex, mark: Mark);
}

/// Dense vertex indices are stored as bits.
/// The bitvector must be created with a capacity of at least the amount of vertices.
impl VertexSet<usize> for BitVector {
    #[inline]
    fn insert(&mut self, vertex: &usize) -> bool {
        BitVector::insert(self, *vertex)
    }

    #[inline]
    fn contains(&self, vertex: &usize) -> bool {
        BitVector::contains(self, *vertex)
    }
}

impl<Vertex: Hash + Eq + Clone> VertexSet<Vertex> for HashSet<Vertex> {
    fn insert(&mut self, vertex: &Vertex) -> bool {
        if HashSet::contains(self, vertex) {
            false
        } else {
            HashSet::insert(self, vertex.clone())
        }
    }

    fn contains(&self, vertex: &Vertex) -> bool {
        HashSet::contains(self, vertex)
    }
}

impl VertexMarkMap<usize> for Vec<Mark> {
    #[inline]
    fn mark(&self, vertex: &usize) -> Mark {
        self[*vertex]
    }

    #[inline]
    fn set_mark(&mut self, vertex: &usize, mark: Mark) {
        self[*vertex] = mark;
    }
}

/// Vertices without an entry are unvisited.
impl<Vertex: Hash + Eq + Clone> VertexMarkMap<Vertex> for HashMap<Vertex, Mark> {
    fn mark(&self, vertex: &Vertex) -> Mark {
        self.get(vertex).copied().unwrap_or_default()
    }

    fn set_mark(&mut self, vertex: &Vertex, mark: Mark) {
        if let Some(entry) = self.get_mut(vertex) {
            *entry = mark;
        } else {
            self.insert(vertex.clone(), mark);
        }
    }
}
