//! Traversal and connectivity algorithms.
//!
//! Both algorithms are two-step: a pending value built from a graph reference,
//! and the result returned by its consuming `compute`. Only the result type has
//! accessors, so a computation can never be queried before it ran.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`DepthFirstOrder`] / [`depth_first_order`] - Preorder, postorder and
//!   reverse postorder over the whole graph
//!
//! ## Strongly Connected Components
//!
//! - [`KosarajuSharirScc`] / [`strong_components`] - Kosaraju-Sharir two-pass
//!   labeling
//!
//! | Algorithm | Time Complexity | Works on |
//! |-----------|-----------------|----------|
//! | Depth-first order | O(V + E) | any [`Successors`](crate::graph::Successors) graph |
//! | Kosaraju-Sharir | O(V + E) | [`Digraph`](crate::graph::Digraph) |
//!
//! # Examples
//!
//! ```rust
//! use digraphs::graph::{
//!     algorithms::{depth_first_order, strong_components},
//!     Digraph, VertexId,
//! };
//!
//! let digraph = Digraph::from_arcs(3, [(0, 1), (1, 0), (2, 0)])?;
//!
//! let ordering = depth_first_order(&digraph);
//! assert_eq!(ordering.pre().len(), 3);
//!
//! let scc = strong_components(&digraph);
//! assert_eq!(scc.count(), 2);
//! assert_eq!(scc.largest_component_size(), 2);
//! # Ok::<(), digraphs::Error>(())
//! ```

mod depth_first;
mod kosaraju;

pub use depth_first::{depth_first_order, DepthFirstOrder, DepthFirstOrdering};
pub use kosaraju::{strong_components, KosarajuSharirScc, StrongComponents};
