//! # digraphs Prelude
//!
//! This module re-exports the types and traits most programs need. Import it with
//! `use digraphs::prelude::*;`.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all digraphs operations
pub use crate::Error;

/// The result type used throughout digraphs
pub use crate::Result;

// ================================================================================================
// Graphs
// ================================================================================================

/// Graph types and their identifiers
pub use crate::graph::{DegreeStats, Digraph, Graph, VertexId};

/// Iterators over vertices and arcs
pub use crate::graph::{ArcIter, VertexIter};

/// Traits the algorithms are written against
pub use crate::graph::{GraphBase, Successors};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Depth-first orderings
pub use crate::graph::algorithms::{DepthFirstOrder, DepthFirstOrdering};

/// Strongly connected components
pub use crate::graph::algorithms::{KosarajuSharirScc, StrongComponents};

// ================================================================================================
// Import/Export
// ================================================================================================

/// File format selection and path-level helpers
pub use crate::io::{read_path, write_path, GraphFormat};
