//! Undirected graphs built on top of [`Digraph`].

use std::{fmt, ops::Deref};

use crate::{
    graph::{
        digraph::Digraph,
        traits::{GraphBase, Successors},
        vertex::VertexId,
    },
    Result,
};

/// Identifier given to a freshly created [`Graph`].
pub const DEFAULT_GRAPH_ID: &str = "graph";

/// An undirected graph stored as a digraph with mirrored arcs.
///
/// Every edge `{v, w}` is kept as the arc pair `v -> w` and `w -> v`, except a
/// self-loop which is a single arc. The underlying digraph therefore counts arcs
/// while [`edge_count`](Self::edge_count) counts logical edges.
///
/// Read access to the underlying [`Digraph`] goes through `Deref`; mutation is
/// only possible through [`add_edge`](Self::add_edge), so the arc pairs can never
/// get out of step.
///
/// # Examples
///
/// ```rust
/// use digraphs::graph::{Graph, VertexId};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(VertexId::new(0), VertexId::new(1))?;
/// graph.add_edge(VertexId::new(2), VertexId::new(2))?;
///
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.as_digraph().size(), 3);
/// assert_eq!(graph.vertex_degree(VertexId::new(1))?, 1);
/// # Ok::<(), digraphs::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    digraph: Digraph,
    edge_count: usize,
}

impl Graph {
    /// Creates an undirected graph with exactly `order` vertices and no edges.
    #[must_use]
    pub fn new(order: usize) -> Self {
        let mut digraph = Digraph::new(order);
        digraph.set_id(DEFAULT_GRAPH_ID);
        Graph {
            digraph,
            edge_count: 0,
        }
    }

    /// Adds the edge `{v, w}`.
    ///
    /// Inserts `v -> w` and, unless `v == w`, also `w -> v`. The edge counter grows
    /// by one either way.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfBounds`](crate::Error::VertexOutOfBounds) if
    /// either endpoint does not exist; no arc is inserted in that case.
    pub fn add_edge(&mut self, v: VertexId, w: VertexId) -> Result<()> {
        self.digraph.check_vertex(v)?;
        self.digraph.check_vertex(w)?;

        self.digraph.add_arc(v, w)?;
        if v != w {
            self.digraph.add_arc(w, v)?;
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Assigns the label `name` to `vertex`; see [`Digraph::name_vertex`].
    pub fn name_vertex(&mut self, vertex: VertexId, name: impl Into<String>) -> bool {
        self.digraph.name_vertex(vertex, name)
    }

    /// Replaces the identifier of the graph.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.digraph.set_id(id);
    }

    /// Returns the number of logical edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the number of edges, which is the size of an undirected graph.
    ///
    /// Use [`as_digraph`](Self::as_digraph) to get at the number of stored arcs.
    #[must_use]
    pub fn size(&self) -> usize {
        self.edge_count
    }

    /// Returns the underlying digraph with its mirrored arcs.
    #[must_use]
    pub fn as_digraph(&self) -> &Digraph {
        &self.digraph
    }

    /// Consumes the graph and returns the underlying digraph.
    #[must_use]
    pub fn into_digraph(self) -> Digraph {
        self.digraph
    }
}

impl Deref for Graph {
    type Target = Digraph;

    fn deref(&self) -> &Digraph {
        &self.digraph
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.digraph, f)
    }
}

impl GraphBase for Graph {
    fn order(&self) -> usize {
        self.digraph.order()
    }
}

impl Successors for Graph {
    fn adjacency(&self, vertex: VertexId) -> Result<&[VertexId]> {
        self.digraph.adjacency(vertex)
    }
}
