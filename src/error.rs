error_chain! {
    errors {
        // Returned when an operation needs a value from a tree without nodes.
        EmptyTree {
            description("the tree is empty")
            display("the operation requires a non-empty tree")
        }

        // Returned when an algorithm is started from a vertex that is not part of the graph.
        VertexNotFound(vertex: usize, vertex_count: usize) {
            description("vertex not found")
            display("vertex {} does not exist in a graph with {} vertices", vertex, vertex_count)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{Error, ErrorKind};

    #[test]
    fn test_error_display() {
        let error: Error = ErrorKind::EmptyTree.into();
        assert_eq!(error.to_string(), "the operation requires a non-empty tree");

        let error: Error = ErrorKind::VertexNotFound(7, 3).into();
        assert_eq!(
            error.to_string(),
            "vertex 7 does not exist in a graph with 3 vertices"
        );
    }
}
