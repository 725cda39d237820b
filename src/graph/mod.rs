//! Directed and undirected graphs over a fixed vertex set.
//!
//! This module provides a compact adjacency-list digraph together with the
//! iteration protocol and the traversal algorithms built on it. Graphs are created
//! with their final number of vertices; afterwards only arcs are added.
//!
//! # Architecture
//!
//! - **Core Types**: [`VertexId`], [`Digraph`] and the undirected [`Graph`]
//! - **Iterators**: [`VertexIter`] over all vertices and [`ArcIter`] over the arcs
//!   of one vertex
//! - **Traits**: [`GraphBase`] and [`Successors`], which the algorithms are
//!   written against
//! - **Algorithms**: depth-first orderings and Kosaraju-Sharir strong components
//!   in [`algorithms`]
//!
//! # Design Principles
//!
//! ## Insertion Order Is Meaningful
//!
//! Each vertex keeps its arcs in the order they were added. Every traversal
//! follows that order, which makes preorder, postorder and component numbering a
//! deterministic function of how the graph was built.
//!
//! ## Validated Indices
//!
//! Every operation taking a [`VertexId`] checks it against the order of the graph
//! and reports [`Error::VertexOutOfBounds`](crate::Error::VertexOutOfBounds)
//! instead of panicking. Failed mutations leave the graph unchanged.
//!
//! ## Borrow-Checked Snapshots
//!
//! Iterators and pending computations borrow the graph, so it cannot be mutated
//! while they are alive. Computed results own their data and outlive the borrow.
//!
//! # Usage Examples
//!
//! ```rust
//! use digraphs::graph::{algorithms::KosarajuSharirScc, Digraph, VertexId};
//!
//! let mut digraph = Digraph::new(4);
//! for (v, w) in [(0, 1), (1, 2), (2, 0), (2, 3)] {
//!     digraph.add_arc(VertexId::new(v), VertexId::new(w))?;
//! }
//! digraph.name_vertex(VertexId::new(3), "sink");
//!
//! let scc = KosarajuSharirScc::new(&digraph).compute();
//! assert_eq!(scc.count(), 2);
//! assert_eq!(scc.component_of(digraph.vertex_index("sink")?)?, 0);
//! # Ok::<(), digraphs::Error>(())
//! ```

mod digraph;
mod iter;
mod traits;
mod undirected;
mod vertex;

pub mod algorithms;

pub use digraph::{reverse, DegreeStats, Digraph, DEFAULT_DIGRAPH_ID, REVERSED_SUFFIX};
pub use iter::{ArcIter, VertexIter};
pub use traits::{GraphBase, Successors};
pub use undirected::{Graph, DEFAULT_GRAPH_ID};
pub use vertex::VertexId;
