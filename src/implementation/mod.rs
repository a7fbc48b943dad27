/// A self-balancing AVL tree stored in an arena.
pub mod avl;
/// An unbalanced binary search tree with owned child links.
pub mod bst;
/// A weighted directed graph based on an adjacency matrix.
pub mod directed_graph;
/// Conversions of the graphs in this module into graphs of the `petgraph` crate.
pub mod petgraph_impl;
/// An unweighted undirected graph based on adjacency lists.
pub mod undirected_graph;
