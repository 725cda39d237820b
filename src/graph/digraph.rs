//! Core directed graph implementation.
//!
//! This module provides [`Digraph`], the adjacency-list graph every other part of
//! the crate is built on. Vertices live in one contiguous arena addressed by
//! [`VertexId`]; each vertex owns an append-only sequence of arc destinations kept
//! in insertion order.

use std::{borrow::Cow, collections::HashMap, fmt};

use crate::{
    graph::{
        iter::{ArcIter, VertexIter},
        traits::{GraphBase, Successors},
        vertex::VertexId,
    },
    Error, Result,
};

/// Identifier given to a freshly created [`Digraph`].
pub const DEFAULT_DIGRAPH_ID: &str = "digraph";

/// Suffix appended to the identifier of a reversed digraph.
pub const REVERSED_SUFFIX: &str = "Reversed";

/// Mean and standard deviation of the out-degrees of a digraph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeStats {
    /// Average out-degree over all vertices
    pub mean: f64,
    /// Standard deviation of the out-degree, with `N - 1` as denominator
    pub std_dev: f64,
}

/// A directed graph with a fixed number of vertices and a growing set of arcs.
///
/// `Digraph` is created with its final order `N`; afterwards only arcs are added
/// and vertices may be named. It supports:
///
/// - Arc insertion by index pair with full bounds validation
/// - Self-loops and parallel arcs, each counted distinctly
/// - Optional vertex labels with first-assignment-wins reverse lookup
/// - Out-degree statistics and graph reversal
///
/// # Invariants
///
/// - Every stored [`VertexId`] is smaller than [`order`](Self::order).
/// - [`size`](Self::size) equals the total length of all adjacency sequences.
/// - Adjacency sequences never shrink.
/// - The label tables are exact inverses of each other: a label is bound to at
///   most one vertex and a vertex carries at most one label.
///
/// # Examples
///
/// ```rust
/// use digraphs::graph::{Digraph, VertexId};
///
/// let mut digraph = Digraph::new(3);
/// digraph.name_vertex(VertexId::new(0), "feel");
/// digraph.name_vertex(VertexId::new(1), "look");
/// digraph.name_vertex(VertexId::new(2), "smell");
///
/// digraph.add_arc(VertexId::new(0), VertexId::new(1))?;
/// digraph.add_arc(VertexId::new(0), VertexId::new(2))?;
/// digraph.add_arc(VertexId::new(2), VertexId::new(1))?;
///
/// assert_eq!(digraph.order(), 3);
/// assert_eq!(digraph.size(), 3);
/// assert_eq!(digraph.vertex_index("look")?, VertexId::new(1));
/// # Ok::<(), digraphs::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Digraph {
    /// Identification of the graph, used for display and serialization only
    id: String,
    /// Arc destinations per vertex, in insertion order
    adjs: Vec<Vec<VertexId>>,
    /// Number of arcs over all adjacency sequences
    arc_count: usize,
    /// Label per vertex, if one was assigned
    names: Vec<Option<String>>,
    /// Reverse lookup from label to vertex
    name_to_vertex: HashMap<String, VertexId>,
}

impl Digraph {
    /// Creates a digraph with exactly `order` vertices and no arcs.
    ///
    /// An order of zero yields a valid, empty graph.
    #[must_use]
    pub fn new(order: usize) -> Self {
        Digraph {
            id: DEFAULT_DIGRAPH_ID.to_string(),
            adjs: vec![Vec::new(); order],
            arc_count: 0,
            names: vec![None; order],
            name_to_vertex: HashMap::new(),
        }
    }

    /// Creates a digraph with `order` vertices, or `None` if the per-vertex
    /// storage cannot be allocated.
    ///
    /// Readers use this for vertex counts taken from untrusted input.
    pub(crate) fn try_new(order: usize) -> Option<Self> {
        let mut adjs = Vec::new();
        adjs.try_reserve_exact(order).ok()?;
        adjs.resize_with(order, Vec::new);

        let mut names = Vec::new();
        names.try_reserve_exact(order).ok()?;
        names.resize(order, None);

        Some(Digraph {
            id: DEFAULT_DIGRAPH_ID.to_string(),
            adjs,
            arc_count: 0,
            names,
            name_to_vertex: HashMap::new(),
        })
    }

    /// Creates a digraph of the given order and inserts `arcs` in sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfBounds`] for the first arc with an endpoint
    /// outside `[0, order)`.
    pub fn from_arcs<I>(order: usize, arcs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut digraph = Digraph::new(order);
        for (v, w) in arcs {
            digraph.add_arc(VertexId::new(v), VertexId::new(w))?;
        }
        Ok(digraph)
    }

    /// Returns the identifier of the graph.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replaces the identifier of the graph.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Returns the number of vertices, also called the order of the graph.
    #[must_use]
    pub fn order(&self) -> usize {
        self.adjs.len()
    }

    /// Returns the number of arcs, also called the size of the graph.
    #[must_use]
    pub fn size(&self) -> usize {
        self.arc_count
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjs.is_empty()
    }

    /// Returns `true` if `vertex` lies in `[0, order)`.
    #[must_use]
    pub fn has_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.adjs.len()
    }

    /// Appends the arc `v -> w` to the adjacency of `v`.
    ///
    /// Self-loops and parallel arcs are accepted; no deduplication happens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfBounds`] if either endpoint does not exist. Both
    /// endpoints are validated before anything is mutated, so a failed call leaves
    /// the graph exactly as it was.
    pub fn add_arc(&mut self, v: VertexId, w: VertexId) -> Result<()> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;

        self.adjs[v.index()].push(w);
        self.arc_count += 1;
        Ok(())
    }

    /// Assigns the label `name` to `vertex`.
    ///
    /// The call is a silent no-op if `vertex` is out of bounds or if `name` is
    /// already bound to a different vertex: the first assignment of a label wins,
    /// so [`vertex_index`](Self::vertex_index) never becomes ambiguous. When the
    /// vertex already had another label, that label is released.
    ///
    /// Returns whether the label is bound to `vertex` after the call.
    pub fn name_vertex(&mut self, vertex: VertexId, name: impl Into<String>) -> bool {
        if !self.has_vertex(vertex) {
            return false;
        }

        let name = name.into();
        if let Some(&bound) = self.name_to_vertex.get(&name) {
            return bound == vertex;
        }

        if let Some(previous) = self.names[vertex.index()].take() {
            self.name_to_vertex.remove(&previous);
        }
        self.name_to_vertex.insert(name.clone(), vertex);
        self.names[vertex.index()] = Some(name);
        true
    }

    /// Returns the vertex carrying the label `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NameNotFound`] if no vertex carries that label.
    pub fn vertex_index(&self, name: &str) -> Result<VertexId> {
        self.name_to_vertex
            .get(name)
            .copied()
            .ok_or_else(|| Error::NameNotFound(name.to_string()))
    }

    /// Returns the label of `vertex`, or `v<index>` if none was assigned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfBounds`] if `vertex` does not exist.
    pub fn vertex_name(&self, vertex: VertexId) -> Result<Cow<'_, str>> {
        self.check_vertex(vertex)?;
        Ok(match &self.names[vertex.index()] {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(vertex.to_string()),
        })
    }

    /// Returns `true` if `vertex` carries an explicitly assigned label.
    #[must_use]
    pub fn is_named(&self, vertex: VertexId) -> bool {
        self.names
            .get(vertex.index())
            .is_some_and(|name| name.is_some())
    }

    /// Returns the out-degree of `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfBounds`] if `vertex` does not exist.
    pub fn vertex_degree(&self, vertex: VertexId) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.adjs[vertex.index()].len())
    }

    /// Returns the destinations of the arcs leaving `vertex`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfBounds`] if `vertex` does not exist.
    pub fn adjacency(&self, vertex: VertexId) -> Result<&[VertexId]> {
        self.check_vertex(vertex)?;
        Ok(&self.adjs[vertex.index()])
    }

    /// Returns an iterator over the arcs leaving `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfBounds`] if `vertex` does not exist.
    pub fn arcs(&self, vertex: VertexId) -> Result<ArcIter<'_>> {
        self.adjacency(vertex).map(ArcIter::new)
    }

    /// Returns an iterator over all vertex ids in ascending order.
    #[must_use]
    pub fn vertices(&self) -> VertexIter {
        VertexIter::new(self.order())
    }

    /// Computes the mean and standard deviation of the out-degrees in one pass.
    ///
    /// Uses the method of provisional means (Knuth, TAOCP Vol. 2, 4.2.2), which
    /// keeps a running mean and a running sum of squared deviations instead of a
    /// raw sum of squares.
    ///
    /// The deviation uses `N - 1` as denominator, so a single vertex has a
    /// deviation of `0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGraph`] if the graph has no vertices.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use digraphs::graph::Digraph;
    ///
    /// let digraph = Digraph::from_arcs(3, [(0, 1), (0, 2), (0, 0), (1, 0), (1, 2), (2, 1)])?;
    /// let stats = digraph.average_degree()?;
    ///
    /// assert_eq!(stats.mean, 2.0);
    /// assert_eq!(stats.std_dev, 1.0);
    /// # Ok::<(), digraphs::Error>(())
    /// ```
    pub fn average_degree(&self) -> Result<DegreeStats> {
        if self.adjs.is_empty() {
            return Err(Error::EmptyGraph);
        }

        let mut mean = 0.0_f64;
        let mut squares = 0.0_f64;
        for (k, adj) in self.adjs.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let (degree, count) = (adj.len() as f64, (k + 1) as f64);
            let previous = mean;
            mean += (degree - previous) / count;
            squares += (degree - previous) * (degree - mean);
        }

        #[allow(clippy::cast_precision_loss)]
        let std_dev = match self.adjs.len() {
            1 => 0.0,
            n => (squares / (n - 1) as f64).sqrt(),
        };

        Ok(DegreeStats { mean, std_dev })
    }

    /// Builds a new digraph in which every arc `v -> w` becomes `w -> v`.
    ///
    /// The result has the same order and size, the same vertex labels, and an
    /// identifier carrying the `Reversed` suffix. `self` is not modified. Arcs are
    /// inserted while scanning the source in ascending vertex order, so the
    /// adjacency of every reversed vertex lists its sources in that order.
    #[must_use]
    pub fn reverse(&self) -> Digraph {
        let mut reversed = Digraph::new(self.order());
        reversed.id = format!("{}{}", self.id, REVERSED_SUFFIX);

        for (v, adj) in self.adjs.iter().enumerate() {
            for &w in adj {
                reversed.adjs[w.index()].push(VertexId::new(v));
            }
        }
        reversed.arc_count = self.arc_count;
        reversed.names.clone_from(&self.names);
        reversed.name_to_vertex.clone_from(&self.name_to_vertex);

        reversed
    }
}

/// Builds the reversal of `digraph`; see [`Digraph::reverse`].
#[must_use]
pub fn reverse(digraph: &Digraph) -> Digraph {
    digraph.reverse()
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl GraphBase for Digraph {
    fn order(&self) -> usize {
        self.adjs.len()
    }
}

impl Successors for Digraph {
    fn adjacency(&self, vertex: VertexId) -> Result<&[VertexId]> {
        Digraph::adjacency(self, vertex)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::{digraph::Digraph, vertex::VertexId},
        Error,
    };

    fn v(index: usize) -> VertexId {
        VertexId::new(index)
    }

    /// 0 -> 1, 0 -> 2, 0 -> 0, 1 -> 0, 1 -> 2, 2 -> 1
    fn create_triangle_with_loop() -> Digraph {
        Digraph::from_arcs(3, [(0, 1), (0, 2), (0, 0), (1, 0), (1, 2), (2, 1)]).unwrap()
    }

    #[test]
    fn test_new_digraph_is_empty_of_arcs() {
        for n in [0, 1, 13] {
            let digraph = Digraph::new(n);
            assert_eq!(digraph.order(), n);
            assert_eq!(digraph.size(), 0);
            assert_eq!(digraph.id(), "digraph");
        }
    }

    #[test]
    fn test_try_new_refuses_unallocatable_order() {
        assert!(Digraph::try_new(usize::MAX).is_none());

        let digraph = Digraph::try_new(4).unwrap();
        assert_eq!(digraph.order(), 4);
        assert_eq!(digraph.size(), 0);
        assert_eq!(digraph.vertex_name(v(3)).unwrap(), "v3");
    }

    #[test]
    fn test_empty_digraph() {
        let digraph = Digraph::new(0);
        assert!(digraph.is_empty());
        assert!(!digraph.has_vertex(v(0)));
        assert_eq!(digraph.vertices().count(), 0);
    }

    #[test]
    fn test_add_arc_appends_in_order() {
        let mut digraph = Digraph::new(3);
        digraph.add_arc(v(0), v(2)).unwrap();
        assert_eq!(digraph.size(), 1);
        digraph.add_arc(v(0), v(1)).unwrap();
        assert_eq!(digraph.size(), 2);

        assert_eq!(digraph.adjacency(v(0)).unwrap(), &[v(2), v(1)]);
        assert_eq!(digraph.adjacency(v(0)).unwrap().last(), Some(&v(1)));
    }

    #[test]
    fn test_add_arc_self_loop_and_parallel() {
        let mut digraph = Digraph::new(2);
        digraph.add_arc(v(1), v(1)).unwrap();
        digraph.add_arc(v(0), v(1)).unwrap();
        digraph.add_arc(v(0), v(1)).unwrap();

        assert_eq!(digraph.size(), 3);
        assert_eq!(digraph.vertex_degree(v(0)).unwrap(), 2);
        assert_eq!(digraph.vertex_degree(v(1)).unwrap(), 1);
    }

    #[test]
    fn test_add_arc_out_of_bounds_is_atomic() {
        let mut digraph = create_triangle_with_loop();
        let before: Vec<Vec<VertexId>> = digraph
            .vertices()
            .map(|u| digraph.adjacency(u).unwrap().to_vec())
            .collect();

        let source_err = digraph.add_arc(v(3), v(0)).unwrap_err();
        assert!(matches!(
            source_err,
            Error::VertexOutOfBounds { vertex, order: 3 } if vertex == v(3)
        ));

        let target_err = digraph.add_arc(v(0), v(99)).unwrap_err();
        assert!(matches!(
            target_err,
            Error::VertexOutOfBounds { vertex, order: 3 } if vertex == v(99)
        ));

        assert_eq!(digraph.size(), 6);
        for u in digraph.vertices() {
            assert_eq!(digraph.adjacency(u).unwrap(), before[u.index()].as_slice());
        }
    }

    #[test]
    fn test_degrees() {
        let digraph = create_triangle_with_loop();
        assert_eq!(digraph.order(), 3);
        assert_eq!(digraph.size(), 6);

        let degrees: Vec<usize> = digraph
            .vertices()
            .map(|u| digraph.vertex_degree(u).unwrap())
            .collect();
        assert_eq!(degrees, vec![3, 2, 1]);

        assert!(matches!(
            digraph.vertex_degree(v(3)),
            Err(Error::VertexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_average_degree() {
        let stats = create_triangle_with_loop().average_degree().unwrap();
        assert_eq!(stats.mean, 2.0);
        assert_eq!(stats.std_dev, 1.0);
    }

    #[test]
    fn test_average_degree_single_vertex() {
        let digraph = Digraph::from_arcs(1, [(0, 0), (0, 0)]).unwrap();
        let stats = digraph.average_degree().unwrap();
        assert_eq!(stats.mean, 2.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_average_degree_empty_graph() {
        assert!(matches!(
            Digraph::new(0).average_degree(),
            Err(Error::EmptyGraph)
        ));
    }

    #[test]
    fn test_average_degree_matches_two_pass() {
        let digraph = Digraph::from_arcs(
            5,
            [(0, 1), (0, 2), (0, 3), (0, 4), (1, 2), (3, 1), (3, 2), (4, 4)],
        )
        .unwrap();
        let stats = digraph.average_degree().unwrap();

        let degrees = [4.0_f64, 1.0, 0.0, 2.0, 1.0];
        let mean = degrees.iter().sum::<f64>() / 5.0;
        let var = degrees.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / 4.0;

        assert!((stats.mean - mean).abs() < 1e-12);
        assert!((stats.std_dev - var.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_name_vertex_first_assignment_wins() {
        let mut digraph = Digraph::new(3);
        assert!(digraph.name_vertex(v(0), "feel"));
        assert!(!digraph.name_vertex(v(1), "feel"));

        assert_eq!(digraph.vertex_index("feel").unwrap(), v(0));
        assert_eq!(digraph.vertex_name(v(1)).unwrap(), "v1");
        assert!(!digraph.is_named(v(1)));
    }

    #[test]
    fn test_name_vertex_out_of_bounds_is_ignored() {
        let mut digraph = Digraph::new(1);
        assert!(!digraph.name_vertex(v(1), "ghost"));
        assert!(matches!(
            digraph.vertex_index("ghost"),
            Err(Error::NameNotFound(name)) if name == "ghost"
        ));
    }

    #[test]
    fn test_rename_releases_previous_label() {
        let mut digraph = Digraph::new(2);
        digraph.name_vertex(v(0), "look");
        assert!(digraph.name_vertex(v(0), "feel"));

        assert_eq!(digraph.vertex_name(v(0)).unwrap(), "feel");
        assert!(digraph.vertex_index("look").is_err());
        assert!(digraph.name_vertex(v(1), "look"));
        assert_eq!(digraph.vertex_index("look").unwrap(), v(1));
    }

    #[test]
    fn test_vertex_name_default_and_bounds() {
        let mut digraph = Digraph::new(2);
        digraph.name_vertex(v(1), "smell");

        assert_eq!(digraph.vertex_name(v(0)).unwrap(), "v0");
        assert_eq!(digraph.vertex_name(v(1)).unwrap(), "smell");
        assert!(matches!(
            digraph.vertex_name(v(2)),
            Err(Error::VertexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_reverse() {
        let mut digraph = create_triangle_with_loop();
        digraph.name_vertex(v(2), "smell");
        let reversed = digraph.reverse();

        assert_eq!(reversed.id(), "digraphReversed");
        assert_eq!(reversed.order(), 3);
        assert_eq!(reversed.size(), 6);
        assert_eq!(reversed.adjacency(v(0)).unwrap(), &[v(0), v(1)]);
        assert_eq!(reversed.adjacency(v(1)).unwrap(), &[v(0), v(2)]);
        assert_eq!(reversed.adjacency(v(2)).unwrap(), &[v(0), v(1)]);
        assert_eq!(reversed.vertex_index("smell").unwrap(), v(2));

        // The source is untouched
        assert_eq!(digraph.adjacency(v(0)).unwrap(), &[v(1), v(2), v(0)]);
    }

    #[test]
    fn test_reverse_is_involutive_on_arc_multisets() {
        let digraph =
            Digraph::from_arcs(4, [(0, 1), (0, 1), (2, 0), (3, 3), (1, 3), (2, 1)]).unwrap();
        let twice = digraph.reverse().reverse();

        assert_eq!(twice.size(), digraph.size());
        for u in digraph.vertices() {
            let mut expected = digraph.adjacency(u).unwrap().to_vec();
            let mut actual = twice.adjacency(u).unwrap().to_vec();
            expected.sort();
            actual.sort();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_display_shows_identifier() {
        let mut digraph = Digraph::new(1);
        assert_eq!(digraph.to_string(), "digraph");
        digraph.set_id("words");
        assert_eq!(digraph.to_string(), "words");
    }
}
