//! Classic abstract data types and the algorithms that operate on them.
//!
//! The crate offers an AVL tree, an unbalanced binary search tree, a weighted directed graph
//! backed by an adjacency matrix and an unweighted undirected graph backed by adjacency lists.
//! The graph algorithms (traversals, cycle detection, connected components and Dijkstra's algorithm)
//! are implemented generically over the traits in [interface](crate::interface),
//! and the concrete graph types expose them as convenience methods.
#![warn(missing_docs)]
#![recursion_limit = "1024"]
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

/// Graph algorithms that work on any graph implementing the traits in [interface](crate::interface).
pub mod algo;
/// The comparator capability used to order the values of search trees.
pub mod compare;
/// Contains the error types used by this crate.
pub mod error;
/// The concrete tree and graph types.
pub mod implementation;
/// The graph traits.
pub mod interface;

pub use compare::{Comparator, NaturalOrder};
pub use implementation::avl::AvlTree;
pub use implementation::bst::BinarySearchTree;
pub use implementation::directed_graph::DirectedGraph;
pub use implementation::undirected_graph::UndirectedGraph;
