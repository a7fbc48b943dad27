use crate::interface::{ImmutableGraphContainer, NavigableGraph, VertexSet};

/// Counts the connected components of an undirected graph.
/// For a directed graph, the result is the amount of depth first search trees obtained by starting a search from each unvisited vertex in the order returned by `vertices()`.
///
/// The vertices of each component are marked with an explicit-stack depth first search.
pub fn count_connected_components<'a, Graph: NavigableGraph<'a>>(graph: &'a Graph) -> usize {
    let mut visited = graph.new_visited_set();
    let mut stack = Vec::new();
    let mut count = 0;

    for root in graph.vertices() {
        if visited.contains(&root) {
            continue;
        }

        count += 1;
        visited.insert(&root);
        stack.push(root);

        while let Some(vertex) = stack.pop() {
            for neighbor in graph.out_neighbors(&vertex) {
                if visited.insert(&neighbor) {
                    stack.push(neighbor);
                }
            }
        }
    }

    debug!(
        "Counted {} connected components in a graph with {} vertices",
        count,
        graph.vertex_count()
    );
    count
}
