use thiserror::Error;

use crate::{graph::VertexId, io::GraphFormat};

macro_rules! malformed_error {
    // Single string version
    ($line:expr, $msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            line: $line,
        }
    };

    // Format string with arguments version
    ($line:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            line: $line,
        }
    };
}

/// The generic Error type, which covers every failure this library can report.
///
/// Index and name errors are returned to the immediate caller as explicit values;
/// no operation of the core silently truncates or clamps a bad vertex reference.
///
/// # Error Categories
///
/// ## Graph Errors
/// - [`Error::VertexOutOfBounds`] - A vertex id outside `[0, N)` was passed in
/// - [`Error::NameNotFound`] - A label lookup found no vertex
/// - [`Error::EmptyGraph`] - Degree statistics were requested for a graph without vertices
///
/// ## Import/Export Errors
/// - [`Error::Malformed`] - The input text does not follow the expected format
/// - [`Error::UnencodableLabel`] - A label has no faithful encoding in the output format
/// - [`Error::Io`] - Reading or writing the underlying stream failed
///
/// # Examples
///
/// ```rust
/// use digraphs::{graph::{Digraph, VertexId}, Error};
///
/// let mut digraph = Digraph::new(3);
/// match digraph.add_arc(VertexId::new(0), VertexId::new(7)) {
///     Err(Error::VertexOutOfBounds { vertex, order }) => {
///         assert_eq!(vertex, VertexId::new(7));
///         assert_eq!(order, 3);
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A vertex id does not address an existing vertex.
    ///
    /// Every operation accepting a [`VertexId`] validates it against the order of
    /// the graph; mutating operations leave the graph untouched when this occurs.
    #[error("vertex index {} is out of bounds for a graph of order {order}", .vertex.index())]
    VertexOutOfBounds {
        /// The offending vertex id
        vertex: VertexId,
        /// The number of vertices of the graph
        order: usize,
    },

    /// No vertex carries the requested label.
    #[error("vertex named \"{0}\" not found")]
    NameNotFound(String),

    /// Degree statistics are undefined for a graph without vertices.
    #[error("degree statistics are undefined for a graph without vertices")]
    EmptyGraph,

    /// The graph description could not be parsed.
    ///
    /// # Fields
    ///
    /// * `message` - Description of what was malformed
    /// * `line` - 1-based line number of the input where the problem was detected
    #[error("Malformed - line {line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The input line at which the error was detected
        line: usize,
    },

    /// A label or graph identifier cannot be written so that it reads back unchanged.
    ///
    /// Writers check every label before emitting anything, so no partial output
    /// is produced for a graph that fails this check.
    #[error("label \"{label}\" cannot be written in {format} format")]
    UnencodableLabel {
        /// The offending vertex label or graph identifier
        label: String,
        /// The format that was being written
        format: GraphFormat,
    },

    /// File or stream I/O error.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
