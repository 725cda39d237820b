//! Vertex identifier for digraphs.
//!
//! This module provides the [`VertexId`] type, a strongly-typed index of a vertex
//! inside a [`Digraph`](crate::graph::Digraph). The newtype keeps vertex indices
//! from being confused with arc counts, degrees or component numbers.

use std::fmt;

/// A strongly-typed identifier for a vertex within a digraph.
///
/// `VertexId` wraps a `usize` index in the half-open range `[0, N)`, where `N` is
/// the vertex count the graph was created with. Since the index is unsigned, the
/// lower bound holds by construction and only the upper bound has to be checked
/// by the graph operations that accept a `VertexId`.
///
/// Vertex ids are never reassigned: a graph of order `N` always addresses its
/// vertices as `VertexId::new(0)` through `VertexId::new(N - 1)`.
///
/// # Examples
///
/// ```rust
/// use digraphs::graph::{Digraph, VertexId};
///
/// let mut digraph = Digraph::new(2);
/// let v = VertexId::new(0);
/// let w = VertexId::new(1);
/// digraph.add_arc(v, w)?;
///
/// assert_eq!(digraph.vertex_degree(v)?, 1);
/// # Ok::<(), digraphs::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw 0-based index.
    ///
    /// No bounds check happens here; the id is validated by the graph operation
    /// it is passed to.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw 0-based index of this vertex.
    ///
    /// The index can be used directly to address per-vertex storage such as
    /// visited flags or component labels.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    /// Formats the id the same way unnamed vertices are labeled.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}
