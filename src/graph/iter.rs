//! Cursors over the vertices of a graph and over the arcs of one vertex.
//!
//! Both iterators are finite and restartable by constructing a new one. The arc
//! iterator borrows the adjacency slice that exists when it is created, so arcs
//! cannot be appended to that vertex while the iterator is alive.

use std::{iter::FusedIterator, ops::Range, slice};

use crate::graph::VertexId;

/// Iterator over the vertex ids `0, 1, …, N-1` of a graph.
///
/// [`ExactSizeIterator::len`] reports how many vertices remain, and after the
/// last vertex the iterator keeps returning `None`.
///
/// # Examples
///
/// ```rust
/// use digraphs::graph::{Digraph, GraphBase, VertexId};
///
/// let digraph = Digraph::new(3);
/// let mut vertices = digraph.vertices();
///
/// assert_eq!(vertices.len(), 3);
/// assert_eq!(vertices.next(), Some(VertexId::new(0)));
/// assert_eq!(vertices.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct VertexIter {
    range: Range<usize>,
}

impl VertexIter {
    pub(crate) fn new(order: usize) -> Self {
        VertexIter { range: 0..order }
    }
}

impl Iterator for VertexIter {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(VertexId::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for VertexIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(VertexId::new)
    }
}

impl ExactSizeIterator for VertexIter {}

impl FusedIterator for VertexIter {}

/// Iterator over the destinations of the arcs leaving a single vertex.
///
/// Arcs are yielded in insertion order, which includes self-loops and parallel
/// arcs exactly as often as they were added.
///
/// # Examples
///
/// ```rust
/// use digraphs::graph::{Digraph, Successors, VertexId};
///
/// let mut digraph = Digraph::new(3);
/// let (a, b, c) = (VertexId::new(0), VertexId::new(1), VertexId::new(2));
/// digraph.add_arc(a, b)?;
/// digraph.add_arc(a, c)?;
/// digraph.add_arc(a, a)?;
///
/// let arcs: Vec<VertexId> = digraph.arcs(a)?.collect();
/// assert_eq!(arcs, vec![b, c, a]);
/// # Ok::<(), digraphs::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ArcIter<'a> {
    inner: slice::Iter<'a, VertexId>,
}

impl<'a> ArcIter<'a> {
    pub(crate) fn new(adjacency: &'a [VertexId]) -> Self {
        ArcIter {
            inner: adjacency.iter(),
        }
    }
}

impl Iterator for ArcIter<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ArcIter<'_> {}

impl FusedIterator for ArcIter<'_> {}
