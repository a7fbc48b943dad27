use crate::interface::{ImmutableGraphContainer, WeightedGraph};
use bitvector::BitVector;
use num_traits::PrimInt;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::{Debug, Display};

/// A weight-type usable in Dijkstra's algorithm.
/// Any primitive integer is a weight, where only strictly positive values are stored as edge weights.
pub trait DijkstraWeight: PrimInt + Debug + Display {}

impl<WeightType: PrimInt + Debug + Display> DijkstraWeight for WeightType {}

/// Data structure for Dijkstra's shortest path algorithm on graphs with dense vertex indices.
///
/// This variant of Dijkstra's algorithm supports only computing the length of a shortest path, and not the shortest path itself.
/// The queue entries are ordered by weight first and vertex index second,
/// so of all vertices with the same tentative distance, the one with the smallest index is settled first.
/// Outdated queue entries are not removed when a vertex gets a smaller distance, but skipped when they are popped.
pub struct Dijkstra<WeightType: DijkstraWeight> {
    queue: BinaryHeap<Reverse<(WeightType, usize)>>,
    node_weights: Vec<Option<WeightType>>,
    settled: BitVector,
}

impl<WeightType: DijkstraWeight> Dijkstra<WeightType> {
    /// Create the data structures for a graph with the given amount of vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            queue: BinaryHeap::new(),
            node_weights: vec![None; vertex_count],
            settled: BitVector::new(vertex_count),
        }
    }

    /// Computes the lengths of the shortest paths from `source` to all vertices of the graph.
    /// After the call, `distances` contains one entry per vertex, which is `None` for unreachable vertices.
    ///
    /// The search stops once all vertices are settled or the queue runs empty.
    /// Path lengths saturate at the maximum value of the weight type instead of overflowing,
    /// so a saturated distance still marks its vertex as reachable.
    /// If `source` is not a vertex of the graph, all distances are `None`.
    pub fn shortest_path_lens<'a, Graph: WeightedGraph<'a, Vertex = usize, Weight = WeightType>>(
        &mut self,
        graph: &'a Graph,
        source: usize,
        distances: &mut Vec<Option<WeightType>>,
    ) {
        let vertex_count = graph.vertex_count();
        self.reset(vertex_count);

        if source < vertex_count {
            self.node_weights[source] = Some(WeightType::zero());
            self.queue.push(Reverse((WeightType::zero(), source)));
        }

        let mut settled_count = 0;
        while let Some(Reverse((weight, vertex))) = self.queue.pop() {
            // Skip outdated entries
            if !self.settled.insert(vertex) {
                continue;
            }
            debug_assert_eq!(self.node_weights[vertex], Some(weight));

            settled_count += 1;
            if settled_count == vertex_count {
                break;
            }

            for out_edge in graph.out_edges(&vertex) {
                if self.settled.contains(out_edge.vertex) {
                    continue;
                }

                let new_neighbor_weight = weight.saturating_add(out_edge.weight);
                let neighbor_weight = &mut self.node_weights[out_edge.vertex];
                if neighbor_weight.map_or(true, |old_weight| new_neighbor_weight < old_weight) {
                    *neighbor_weight = Some(new_neighbor_weight);
                    self.queue
                        .push(Reverse((new_neighbor_weight, out_edge.vertex)));
                }
            }
        }

        debug!(
            "Dijkstra from {} settled {}/{} vertices",
            source, settled_count, vertex_count
        );

        distances.clear();
        distances.extend_from_slice(&self.node_weights);
    }

    fn reset(&mut self, vertex_count: usize) {
        self.queue.clear();
        self.node_weights.clear();
        self.node_weights.resize(vertex_count, None);
        self.settled = BitVector::new(vertex_count);
    }
}

#[cfg(test)]
mod tests {
    use crate::algo::dijkstra::Dijkstra;
    use crate::algo::predefined_graphs::create_random_directed_graph;
    use crate::implementation::directed_graph::DirectedGraph;
    use petgraph::graph::NodeIndex;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_dijkstra_simple() {
        let graph = DirectedGraph::from_edges(vec![
            (0, 1, 4u32),
            (0, 2, 1),
            (2, 1, 2),
            (1, 3, 1),
            (2, 3, 5),
        ]);

        let mut dijkstra = Dijkstra::new(graph.vertex_count());
        let mut distances = Vec::new();
        dijkstra.shortest_path_lens(&graph, 0, &mut distances);
        assert_eq!(distances, vec![Some(0), Some(3), Some(1), Some(4)]);

        dijkstra.shortest_path_lens(&graph, 2, &mut distances);
        assert_eq!(distances, vec![None, Some(2), Some(0), Some(3)]);
    }

    #[test]
    fn test_dijkstra_cycle() {
        let graph = DirectedGraph::from_edges(vec![(0, 1, 2u64), (1, 2, 2), (2, 0, 5)]);
        let mut dijkstra = Dijkstra::new(0);
        let mut distances = Vec::new();
        dijkstra.shortest_path_lens(&graph, 1, &mut distances);
        assert_eq!(distances, vec![Some(7), Some(0), Some(2)]);
    }

    #[test]
    fn test_dijkstra_saturates() {
        let graph = DirectedGraph::from_edges(vec![(0, 1, 200u8), (1, 2, 200)]);
        let mut dijkstra = Dijkstra::new(3);
        let mut distances = Vec::new();
        dijkstra.shortest_path_lens(&graph, 0, &mut distances);
        assert_eq!(distances, vec![Some(0), Some(200), Some(u8::MAX)]);
    }

    #[test]
    fn test_dijkstra_maximum_weight_is_reachable() {
        let graph = DirectedGraph::from_edges(vec![(0, 1, u32::MAX), (0, 2, 1), (3, 0, 1)]);
        let mut dijkstra = Dijkstra::new(4);
        let mut distances = Vec::new();
        dijkstra.shortest_path_lens(&graph, 0, &mut distances);
        assert_eq!(distances, vec![Some(0), Some(u32::MAX), Some(1), None]);
    }

    #[test]
    fn test_dijkstra_missing_source() {
        let graph = DirectedGraph::from_edges(vec![(0, 1, 1u32)]);
        let mut dijkstra = Dijkstra::new(2);
        let mut distances = vec![Some(5)];
        dijkstra.shortest_path_lens(&graph, 2, &mut distances);
        assert_eq!(distances, vec![None, None]);
    }

    #[test]
    fn test_dijkstra_random_against_petgraph() {
        let mut random = StdRng::seed_from_u64(1234);
        let mut distances = Vec::new();
        for round in 0..30 {
            let graph = create_random_directed_graph(25, 10 + round * 3, 20, &mut random);
            let reference = graph.to_petgraph();
            let mut dijkstra = Dijkstra::new(graph.vertex_count());

            for source in 0..graph.vertex_count() {
                dijkstra.shortest_path_lens(&graph, source, &mut distances);
                let expected =
                    petgraph::algo::dijkstra(&reference, NodeIndex::new(source), None, |edge| {
                        *edge.weight()
                    });

                for (vertex, distance) in distances.iter().enumerate() {
                    assert_eq!(expected.get(&NodeIndex::new(vertex)).copied(), *distance);
                }
            }
        }
    }
}
