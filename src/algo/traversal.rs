use crate::algo::queue::BidirectedQueue;
use crate::interface::{GraphBase, ImmutableGraphContainer, NavigableGraph, VertexSet};
use std::collections::VecDeque;
use std::marker::PhantomData;

/// A depth first search visiting the neighbors of each vertex in ascending order.
pub type PreOrderDfs<'a, Graph> = PreOrderTraversal<
    'a,
    Graph,
    DfsQueueStrategy,
    VecDeque<<Graph as GraphBase>::Vertex>,
>;

/// A breadth first search enqueueing the neighbors of each vertex in ascending order.
pub type PreOrderBfs<'a, Graph> = PreOrderTraversal<
    'a,
    Graph,
    BfsQueueStrategy,
    VecDeque<<Graph as GraphBase>::Vertex>,
>;

/// A generic preorder graph traversal.
/// The traversal is generic over the graph implementation,
/// the order of processing (`QueueStrategy`) and the queue implementation itself (`Queue`).
///
/// The neighbors of each vertex are handed to the queue strategy in ascending order,
/// which makes the order of the returned vertices deterministic.
/// With the [DfsQueueStrategy](DfsQueueStrategy), the vertices are returned in the same order as a recursive
/// depth first search that descends into the smallest unvisited neighbor first.
/// With the [BfsQueueStrategy](BfsQueueStrategy), the vertices are returned in breadth first order,
/// where the neighbors of a vertex are enqueued from smallest to largest.
///
/// Vertices are marked as visited when they are returned, not when they are inserted into the queue.
/// A vertex may hence be in the queue multiple times, but it is returned only once.
/// For both strategies, the first copy of a vertex that leaves the queue is the one an eagerly marking search would return,
/// so the order is the same.
pub struct PreOrderTraversal<'a, Graph: GraphBase, QueueStrategy, Queue: BidirectedQueue<Graph::Vertex>>
{
    graph: &'a Graph,
    queue: Queue,
    visited: Graph::VisitedSet,
    queue_strategy: PhantomData<QueueStrategy>,
}

impl<
        'a,
        Graph: NavigableGraph<'a>,
        QueueStrategy: TraversalQueueStrategy<Graph::Vertex, Queue>,
        Queue: BidirectedQueue<Graph::Vertex>,
    > PreOrderTraversal<'a, Graph, QueueStrategy, Queue>
{
    /// Creates a new traversal that operates on the given graph starting from the given vertex.
    /// If the vertex is not part of the graph, the traversal is empty.
    pub fn new(graph: &'a Graph, start: Graph::Vertex) -> Self {
        let mut traversal = Self::new_without_start(graph);
        traversal.continue_traversal_from(start);
        traversal
    }

    /// Creates a new traversal that operates on the given graph.
    /// Does not start the traversal.
    pub fn new_without_start(graph: &'a Graph) -> Self {
        Self {
            graph,
            queue: Queue::default(),
            visited: graph.new_visited_set(),
            queue_strategy: Default::default(),
        }
    }

    /// Resets the traversal to start from the given vertex.
    pub fn reset(&mut self, start: Graph::Vertex) {
        self.queue.clear();
        self.visited = self.graph.new_visited_set();
        self.continue_traversal_from(start);
    }

    /// Resets the traversal to start from the given vertex without resetting the visited vertices.
    /// Does nothing if the vertex is not part of the graph.
    pub fn continue_traversal_from(&mut self, start: Graph::Vertex) {
        debug_assert!(self.queue.is_empty());
        if self.graph.contains_vertex(&start) {
            QueueStrategy::push_sorted(&mut self.queue, vec![start]);
        } else {
            trace!("Not starting traversal from {:?}, it is not a vertex", start);
        }
    }

    /// Returns true if the given vertex was returned by the traversal already.
    pub fn is_visited(&self, vertex: &Graph::Vertex) -> bool {
        self.visited.contains(vertex)
    }

    /// Runs the traversal until `end` is returned, or until it is exhausted if `end` is `None` or never reached.
    /// Returns the visited vertices in order, including `end`.
    pub fn collect_until(self, end: Option<&Graph::Vertex>) -> Vec<Graph::Vertex> {
        let mut result = Vec::new();
        for vertex in self {
            let reached_end = Some(&vertex) == end;
            result.push(vertex);
            if reached_end {
                break;
            }
        }
        result
    }
}

impl<
        'a,
        Graph: NavigableGraph<'a>,
        QueueStrategy: TraversalQueueStrategy<Graph::Vertex, Queue>,
        Queue: BidirectedQueue<Graph::Vertex>,
    > Iterator for PreOrderTraversal<'a, Graph, QueueStrategy, Queue>
{
    type Item = Graph::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(vertex) = QueueStrategy::pop(&mut self.queue) {
            if !self.visited.insert(&vertex) {
                continue;
            }

            let visited = &self.visited;
            let unvisited_neighbors: Vec<_> = self
                .graph
                .sorted_out_neighbors(&vertex)
                .into_iter()
                .filter(|neighbor| !visited.contains(neighbor))
                .collect();
            QueueStrategy::push_sorted(&mut self.queue, unvisited_neighbors);

            return Some(vertex);
        }

        None
    }
}

/// A type that defines the order of vertex processing in a traversal, i.e. queue-based or stack-based.
pub trait TraversalQueueStrategy<Vertex, Queue: BidirectedQueue<Vertex>> {
    /// Insert vertices into the queue.
    /// The vertices are given in ascending order.
    fn push_sorted(queue: &mut Queue, vertices: Vec<Vertex>);
    /// Remove and return a vertex from the queue.
    fn pop(queue: &mut Queue) -> Option<Vertex>;
}

/// A queue strategy that works by the first-in first-out principle.
pub struct BfsQueueStrategy;

impl<Vertex, Queue: BidirectedQueue<Vertex>> TraversalQueueStrategy<Vertex, Queue>
    for BfsQueueStrategy
{
    fn push_sorted(queue: &mut Queue, vertices: Vec<Vertex>) {
        for vertex in vertices {
            queue.push_back(vertex);
        }
    }

    fn pop(queue: &mut Queue) -> Option<Vertex> {
        queue.pop_front()
    }
}

/// A queue strategy that works by the last-in first-out principle.
/// The smallest of a batch of pushed vertices ends up on top of the stack.
pub struct DfsQueueStrategy;

impl<Vertex, Queue: BidirectedQueue<Vertex>> TraversalQueueStrategy<Vertex, Queue>
    for DfsQueueStrategy
{
    fn push_sorted(queue: &mut Queue, vertices: Vec<Vertex>) {
        for vertex in vertices.into_iter().rev() {
            queue.push_back(vertex);
        }
    }

    fn pop(queue: &mut Queue) -> Option<Vertex> {
        queue.pop_back()
    }
}
