use crate::implementation::directed_graph::DirectedGraph;
use crate::implementation::undirected_graph::UndirectedGraph;
use rand::seq::SliceRandom;
use rand::Rng;

/// Returns the label of the vertex with the given index in the undirected graphs created by this module.
/// The index is zero-padded, such that labels compare in the same order as their indices.
pub fn vertex_label(index: usize) -> String {
    format!("v{:08}", index)
}

/// Creates an undirected path `v0 - v1 - ... - v(n-1)` with the given amount of vertices, labelled by [vertex_label](vertex_label).
pub fn create_path_graph(vertex_count: usize) -> UndirectedGraph {
    let mut graph = UndirectedGraph::new();
    if vertex_count == 1 {
        graph.add_vertex(&vertex_label(0));
    }

    for index in 1..vertex_count {
        graph.add_edge(&vertex_label(index - 1), &vertex_label(index));
    }
    graph
}

/// Creates a random directed graph with the given amount of vertices.
/// Tries to insert `edge_attempts` edges between uniformly chosen vertices, with weights uniformly chosen from `1..=max_weight`.
/// Self loops are skipped, and an edge chosen twice keeps its last weight, so the graph may contain less than `edge_attempts` edges.
pub fn create_random_directed_graph<Random: Rng>(
    vertex_count: usize,
    edge_attempts: usize,
    max_weight: u32,
    random: &mut Random,
) -> DirectedGraph<u32> {
    let mut graph = DirectedGraph::new();
    for _ in 0..vertex_count {
        graph.add_vertex();
    }

    if vertex_count < 2 || max_weight == 0 {
        return graph;
    }

    for _ in 0..edge_attempts {
        let from = random.gen_range(0..vertex_count);
        let to = random.gen_range(0..vertex_count);
        let weight = random.gen_range(1..=max_weight);
        if from != to {
            graph.add_edge(from, to, weight);
        }
    }
    graph
}

/// Creates a random undirected graph with the given amount of vertices, labelled by [vertex_label](vertex_label).
/// Tries to insert `edge_attempts` edges between uniformly chosen vertices.
/// Self loops and duplicate edges are skipped.
pub fn create_random_undirected_graph<Random: Rng>(
    vertex_count: usize,
    edge_attempts: usize,
    random: &mut Random,
) -> UndirectedGraph {
    let mut graph = UndirectedGraph::new();
    for index in 0..vertex_count {
        graph.add_vertex(&vertex_label(index));
    }

    if vertex_count < 2 {
        return graph;
    }

    for _ in 0..edge_attempts {
        let u = random.gen_range(0..vertex_count);
        let v = random.gen_range(0..vertex_count);
        graph.add_edge(&vertex_label(u), &vertex_label(v));
    }
    graph
}

/// Returns the numbers `0..len` in random order.
pub fn create_shuffled_sequence<Random: Rng>(len: usize, random: &mut Random) -> Vec<usize> {
    let mut sequence: Vec<_> = (0..len).collect();
    sequence.shuffle(random);
    sequence
}

#[cfg(test)]
mod tests {
    use crate::algo::predefined_graphs::{
        create_path_graph, create_random_directed_graph, create_random_undirected_graph,
        create_shuffled_sequence, vertex_label,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_labels_are_ordered() {
        assert!(vertex_label(9) < vertex_label(10));
        assert!(vertex_label(99_999) < vertex_label(100_000));
    }

    #[test]
    fn test_create_path_graph() {
        assert!(create_path_graph(0).get_vertices().is_empty());
        assert_eq!(create_path_graph(1).get_vertices(), vec![vertex_label(0)]);

        let graph = create_path_graph(4);
        assert_eq!(graph.get_edges().len(), 3);
        assert!(graph.contains_edge(&vertex_label(1), &vertex_label(2)));
        assert!(!graph.contains_edge(&vertex_label(0), &vertex_label(2)));
    }

    #[test]
    fn test_random_graphs_are_well_formed() {
        let mut random = StdRng::seed_from_u64(0);
        let graph = create_random_directed_graph(10, 50, 5, &mut random);
        assert_eq!(graph.vertex_count(), 10);
        assert!(graph.edge_count() <= 50);
        for (from, to, weight) in graph.get_edges() {
            assert_ne!(from, to);
            assert!((1..=5).contains(&weight));
        }

        let graph = create_random_undirected_graph(10, 50, &mut random);
        assert_eq!(graph.get_vertices().len(), 10);
        for (u, v) in graph.get_edges() {
            assert!(graph.contains_edge(&v, &u));
        }
    }

    #[test]
    fn test_shuffled_sequence_is_permutation() {
        let mut random = StdRng::seed_from_u64(0);
        let mut sequence = create_shuffled_sequence(100, &mut random);
        sequence.sort_unstable();
        assert_eq!(sequence, (0..100).collect::<Vec<_>>());
    }
}
