//! Trait definitions for graph abstractions.
//!
//! The traversal algorithms are written against these traits instead of a concrete
//! type, so they run unchanged over a [`Digraph`](crate::graph::Digraph) and over
//! an undirected [`Graph`](crate::graph::Graph).
//!
//! - [`GraphBase`] - Core properties: order and vertex iteration
//! - [`Successors`] - Validated access to a vertex's outgoing arcs

use crate::{
    graph::{ArcIter, VertexId, VertexIter},
    Error, Result,
};

/// Base trait providing the vertex set of a graph.
pub trait GraphBase {
    /// Returns the number of vertices, also called the order of the graph.
    fn order(&self) -> usize;

    /// Returns `true` if `vertex` lies in `[0, order)`.
    fn has_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.order()
    }

    /// Returns an iterator over all vertex ids in ascending order.
    fn vertices(&self) -> VertexIter {
        VertexIter::new(self.order())
    }

    /// Fails with [`Error::VertexOutOfBounds`] unless `vertex` exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfBounds`] carrying the offending id and the order.
    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::VertexOutOfBounds {
                vertex,
                order: self.order(),
            })
        }
    }
}

/// Trait for graphs that support forward traversal along their arcs.
///
/// Implementors expose each vertex's adjacency as a slice in arc-insertion order.
/// That order is what makes every traversal in this crate deterministic.
pub trait Successors: GraphBase {
    /// Returns the destinations of the arcs leaving `vertex`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfBounds`] if `vertex` is not part of the graph.
    fn adjacency(&self, vertex: VertexId) -> Result<&[VertexId]>;

    /// Returns an iterator over the arcs leaving `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfBounds`] if `vertex` is not part of the graph.
    fn arcs(&self, vertex: VertexId) -> Result<ArcIter<'_>> {
        self.adjacency(vertex).map(ArcIter::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A minimal adjacency-slice graph used to exercise the default methods
    struct TestGraph {
        adjs: Vec<Vec<VertexId>>,
    }

    impl GraphBase for TestGraph {
        fn order(&self) -> usize {
            self.adjs.len()
        }
    }

    impl Successors for TestGraph {
        fn adjacency(&self, vertex: VertexId) -> Result<&[VertexId]> {
            self.check_vertex(vertex)?;
            Ok(&self.adjs[vertex.index()])
        }
    }

    #[test]
    fn test_default_vertex_iteration() {
        let graph = TestGraph {
            adjs: vec![Vec::new(); 4],
        };
        let ids: Vec<usize> = graph.vertices().map(VertexId::index).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_default_bounds_check() {
        let graph = TestGraph {
            adjs: vec![Vec::new(); 2],
        };
        assert!(graph.has_vertex(VertexId::new(1)));
        assert!(!graph.has_vertex(VertexId::new(2)));
        assert!(matches!(
            graph.check_vertex(VertexId::new(2)),
            Err(Error::VertexOutOfBounds { order: 2, .. })
        ));
    }

    #[test]
    fn test_default_arcs() {
        let graph = TestGraph {
            adjs: vec![vec![VertexId::new(1), VertexId::new(0)], Vec::new()],
        };
        let arcs: Vec<VertexId> = graph.arcs(VertexId::new(0)).unwrap().collect();
        assert_eq!(arcs, vec![VertexId::new(1), VertexId::new(0)]);
        assert!(graph.arcs(VertexId::new(5)).is_err());
    }
}
