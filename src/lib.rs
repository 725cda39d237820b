// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # digraphs
//!
//! A compact directed-graph library with deterministic traversals and strongly
//! connected components.
//!
//! Graphs are created with a fixed number of vertices and grown arc by arc. Every
//! vertex keeps its arcs in insertion order, and every algorithm follows that
//! order, so two graphs built the same way always produce the same orderings and
//! the same component numbering.
//!
//! ## Features
//!
//! - **Adjacency-list digraphs** - Self-loops and parallel arcs, optional vertex labels
//! - **Undirected graphs** - Edges stored as mirrored arc pairs
//! - **Depth-first orderings** - Preorder, postorder and reverse postorder without recursion
//! - **Strong components** - Kosaraju-Sharir labeling in linear time
//! - **Degree statistics** - Mean and standard deviation of out-degrees in one pass
//! - **Import/Export** - Pajek networks and Stanford GraphBase records
//!
//! ## Quick Start
//!
//! ```rust
//! use digraphs::prelude::*;
//!
//! let mut digraph = Digraph::new(5);
//! for (v, w) in [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 3)] {
//!     digraph.add_arc(VertexId::new(v), VertexId::new(w))?;
//! }
//!
//! let scc = KosarajuSharirScc::new(&digraph).compute();
//! assert_eq!(scc.count(), 2);
//! assert_eq!(scc.largest_component_size(), 3);
//!
//! let stats = digraph.average_degree()?;
//! assert!((stats.mean - 1.2).abs() < 1e-12);
//! # Ok::<(), digraphs::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`graph`] - Graph types, iterators, traits and [`graph::algorithms`]
//! - [`io`] - Pajek and GraphBase readers and writers
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result). Bad vertex
//! references are reported, never clamped:
//!
//! ```rust
//! use digraphs::{graph::{Digraph, VertexId}, Error};
//!
//! let digraph = Digraph::new(2);
//! match digraph.vertex_degree(VertexId::new(5)) {
//!     Err(Error::VertexOutOfBounds { vertex, order }) => {
//!         println!("{vertex} does not exist in a graph of order {order}")
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade. Traversals and
//! readers emit `debug` summaries; readers emit a `warn` when a vertex label is
//! dropped because another vertex already carries it. No logger is installed by
//! the library.

#[macro_use]
pub(crate) mod error;

pub mod graph;
pub mod io;
pub mod prelude;

/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use digraphs::{graph::Digraph, Result};
///
/// fn triangle() -> Result<Digraph> {
///     Digraph::from_arcs(3, [(0, 1), (1, 2), (2, 0)])
/// }
/// assert_eq!(triangle().unwrap().size(), 3);
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `digraphs` Error type
///
/// The error type for all operations in this crate; see the variants for the
/// individual failure cases.
pub use error::Error;
