use crate::algo::dijkstra::DijkstraWeight;
use crate::implementation::directed_graph::DirectedGraph;
use crate::implementation::undirected_graph::UndirectedGraph;
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use std::collections::HashMap;

pub use petgraph;

impl<WeightType: DijkstraWeight> DirectedGraph<WeightType> {
    /// Converts this graph into a `petgraph` graph.
    /// The node with index `i` represents vertex `i` and carries `i` as node weight.
    pub fn to_petgraph(&self) -> DiGraph<usize, WeightType> {
        let mut graph = DiGraph::with_capacity(self.vertex_count(), self.edge_count());
        for vertex in self.get_vertices() {
            graph.add_node(vertex);
        }
        for (from, to, weight) in self.get_edges() {
            graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), weight);
        }
        graph
    }
}

impl UndirectedGraph {
    /// Converts this graph into a `petgraph` graph.
    /// The nodes carry the vertex labels and are added in ascending order of their labels.
    pub fn to_petgraph(&self) -> UnGraph<String, ()> {
        let vertices = self.get_vertices();
        let edges = self.get_edges();
        let mut graph = UnGraph::with_capacity(vertices.len(), edges.len());
        let mut indices = HashMap::new();

        for vertex in vertices {
            let index = graph.add_node(vertex.clone());
            indices.insert(vertex, index);
        }
        for (u, v) in edges {
            graph.add_edge(indices[&u], indices[&v], ());
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use crate::implementation::directed_graph::DirectedGraph;
    use crate::implementation::undirected_graph::UndirectedGraph;
    use petgraph::graph::NodeIndex;

    #[test]
    fn test_directed_to_petgraph() {
        let graph = DirectedGraph::from_edges(vec![(0, 1, 4u32), (2, 1, 2)]);
        let petgraph = graph.to_petgraph();
        assert_eq!(petgraph.node_count(), 3);
        assert_eq!(petgraph.edge_count(), 2);

        let edge = petgraph
            .find_edge(NodeIndex::new(2), NodeIndex::new(1))
            .unwrap();
        assert_eq!(petgraph[edge], 2);
        assert!(petgraph
            .find_edge(NodeIndex::new(1), NodeIndex::new(2))
            .is_none());
    }

    #[test]
    fn test_undirected_to_petgraph() {
        let mut graph = UndirectedGraph::from_edges(vec![("B", "C"), ("A", "B")]);
        graph.add_vertex("D");
        let petgraph = graph.to_petgraph();
        assert_eq!(petgraph.node_count(), 4);
        assert_eq!(petgraph.edge_count(), 2);
        assert_eq!(petgraph[NodeIndex::new(0)], "A");
        assert!(petgraph
            .find_edge(NodeIndex::new(2), NodeIndex::new(1))
            .is_some());
    }
}
