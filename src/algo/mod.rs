/// Connected component counting.
pub mod components;
/// Cycle detection in directed and undirected graphs.
pub mod cycles;
/// Dijkstra's shortest path algorithm.
pub mod dijkstra;
/// Algorithms to create certain parameterisable graph classes, like paths and random graphs.
pub mod predefined_graphs;
/// A trait for bidirected queues to abstract over the different implementations in the standard library.
pub mod queue;
/// Algorithms for graph traversals, i.e. preorder breadth or depth first search.
pub mod traversal;
