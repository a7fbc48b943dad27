use crate::interface::{ImmutableGraphContainer, Mark, NavigableGraph, VertexMarkMap};
use std::collections::VecDeque;

/// Returns true if the given directed graph contains a cycle.
///
/// Runs a depth first search from each vertex that is not done yet.
/// Vertices on the current search path are marked as [InProgress](Mark::InProgress),
/// and reaching such a vertex again via an edge closes a cycle.
/// The search uses an explicit stack of neighbor iterators, so its depth is not limited by the call stack.
pub fn has_directed_cycle<'a, Graph: NavigableGraph<'a>>(graph: &'a Graph) -> bool {
    let mut marks = graph.new_mark_map();

    for root in graph.vertices() {
        if marks.mark(&root) != Mark::Unvisited {
            continue;
        }

        marks.set_mark(&root, Mark::InProgress);
        let neighbors = graph.out_neighbors(&root);
        let mut stack = vec![(root, neighbors)];

        loop {
            let next_neighbor = match stack.last_mut() {
                Some((_, neighbors)) => neighbors.next(),
                None => break,
            };

            match next_neighbor {
                Some(neighbor) => match marks.mark(&neighbor) {
                    Mark::InProgress => {
                        debug!("Found a directed cycle through {:?}", neighbor);
                        return true;
                    }
                    Mark::Unvisited => {
                        marks.set_mark(&neighbor, Mark::InProgress);
                        let neighbors = graph.out_neighbors(&neighbor);
                        stack.push((neighbor, neighbors));
                    }
                    Mark::Done => {}
                },
                None => {
                    if let Some((vertex, _)) = stack.pop() {
                        marks.set_mark(&vertex, Mark::Done);
                    }
                }
            }
        }
    }

    false
}

/// Returns true if the given undirected graph contains a cycle.
/// The graph is expected to be symmetric, i.e. each edge is reported as neighbor in both directions, and to contain no self loops.
///
/// Runs a breadth first search from each vertex that was not reached yet.
/// Vertices in the queue are marked as [InProgress](Mark::InProgress), and dequeued vertices become [Done](Mark::Done) after their neighbors are processed.
/// The vertex a queued vertex was discovered from is done before the queued vertex is processed,
/// so finding a neighbor that is still in the queue means that it was discovered on two different paths.
pub fn has_undirected_cycle<'a, Graph: NavigableGraph<'a>>(graph: &'a Graph) -> bool {
    let mut marks = graph.new_mark_map();
    let mut queue = VecDeque::new();

    for root in graph.vertices() {
        if marks.mark(&root) != Mark::Unvisited {
            continue;
        }

        marks.set_mark(&root, Mark::InProgress);
        queue.push_back(root);

        while let Some(current) = queue.pop_front() {
            for neighbor in graph.out_neighbors(&current) {
                match marks.mark(&neighbor) {
                    Mark::InProgress => {
                        debug!(
                            "Found an undirected cycle closed by edge {{{:?}, {:?}}}",
                            current, neighbor
                        );
                        return true;
                    }
                    Mark::Unvisited => {
                        marks.set_mark(&neighbor, Mark::InProgress);
                        queue.push_back(neighbor);
                    }
                    Mark::Done => {}
                }
            }
            marks.set_mark(&current, Mark::Done);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use crate::algo::cycles::{has_directed_cycle, has_undirected_cycle};
    use crate::algo::predefined_graphs::{
        create_random_directed_graph, create_random_undirected_graph,
    };
    use crate::implementation::directed_graph::DirectedGraph;
    use crate::implementation::undirected_graph::UndirectedGraph;
    use petgraph::algo::{is_cyclic_directed, is_cyclic_undirected};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_directed_triangle() {
        let mut graph = DirectedGraph::from_edges(vec![(0, 1, 1u32), (1, 2, 1), (2, 0, 1)]);
        assert!(has_directed_cycle(&graph));
        graph.remove_edge(2, 0);
        assert!(!has_directed_cycle(&graph));
    }

    #[test]
    fn test_directed_diamond_is_acyclic() {
        // Reaching a done vertex a second time is not a cycle.
        let graph = DirectedGraph::from_edges(vec![(0, 1, 1u32), (0, 2, 1), (1, 3, 1), (2, 3, 1)]);
        assert!(!has_directed_cycle(&graph));
    }

    #[test]
    fn test_directed_cycle_not_reachable_from_zero() {
        let graph = DirectedGraph::from_edges(vec![(0, 1, 1u32), (2, 3, 1), (3, 4, 1), (4, 2, 1)]);
        assert!(has_directed_cycle(&graph));
    }

    #[test]
    fn test_undirected_cycles() {
        let mut graph = UndirectedGraph::from_edges(vec![("A", "B"), ("B", "C"), ("C", "D")]);
        assert!(!has_undirected_cycle(&graph));
        graph.add_edge("D", "B");
        assert!(has_undirected_cycle(&graph));
        graph.remove_edge("B", "C");
        assert!(!has_undirected_cycle(&graph));
    }

    #[test]
    fn test_empty_graphs_are_acyclic() {
        assert!(!has_directed_cycle(&DirectedGraph::<u32>::new()));
        assert!(!has_undirected_cycle(&UndirectedGraph::new()));
    }

    #[test]
    fn test_random_graphs_against_petgraph() {
        let mut random = StdRng::seed_from_u64(7);
        for round in 0..50 {
            let directed = create_random_directed_graph(12, round % 20, 9, &mut random);
            assert_eq!(
                has_directed_cycle(&directed),
                is_cyclic_directed(&directed.to_petgraph()),
                "{}",
                directed
            );

            let undirected = create_random_undirected_graph(12, round % 15, &mut random);
            assert_eq!(
                has_undirected_cycle(&undirected),
                is_cyclic_undirected(&undirected.to_petgraph()),
                "{}",
                undirected
            );
        }
    }
}
