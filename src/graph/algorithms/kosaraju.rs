//! Strongly connected components using the Kosaraju-Sharir algorithm.
//!
//! A strongly connected component is a maximal set of vertices such that every
//! vertex of the set reaches every other one along directed paths. The algorithm
//! takes two depth-first passes:
//!
//! 1. compute the reverse postorder of the reversed digraph
//! 2. walk that sequence over the original digraph, and label everything an
//!    unlabeled seed reaches as one component
//!
//! Components are numbered from `0` in the order they are discovered by the second
//! pass, which makes the numbering a deterministic function of the arc insertion
//! order.

use log::debug;

use crate::{
    graph::{
        algorithms::depth_first::DepthFirstOrder, digraph::Digraph, traits::GraphBase,
        vertex::VertexId,
    },
    Result,
};

/// A pending strongly-connected-components computation over a digraph.
///
/// Like [`DepthFirstOrder`], the only operation is [`compute`](Self::compute),
/// which returns the queryable [`StrongComponents`].
///
/// # Examples
///
/// ```rust
/// use digraphs::graph::{algorithms::KosarajuSharirScc, Digraph, VertexId};
///
/// // 0 <-> 1 -> 2
/// let digraph = Digraph::from_arcs(3, [(0, 1), (1, 0), (1, 2)])?;
/// let scc = KosarajuSharirScc::new(&digraph).compute();
///
/// assert_eq!(scc.count(), 2);
/// assert_eq!(scc.largest_component_size(), 2);
/// assert!(scc.strongly_connected(VertexId::new(0), VertexId::new(1))?);
/// assert!(!scc.strongly_connected(VertexId::new(1), VertexId::new(2))?);
/// # Ok::<(), digraphs::Error>(())
/// ```
#[derive(Debug)]
pub struct KosarajuSharirScc<'g> {
    digraph: &'g Digraph,
}

impl<'g> KosarajuSharirScc<'g> {
    /// Prepares the computation over `digraph`.
    #[must_use]
    pub fn new(digraph: &'g Digraph) -> Self {
        KosarajuSharirScc { digraph }
    }

    /// Labels every vertex with its component.
    ///
    /// The reversed digraph used for the first pass is private to this call and
    /// dropped before it returns; the source digraph is only read.
    ///
    /// # Complexity
    ///
    /// - Time: O(V + E)
    /// - Space: O(V + E) for the reversed copy
    #[must_use]
    pub fn compute(self) -> StrongComponents {
        let digraph = self.digraph;
        let order = digraph.order();

        let seeds = DepthFirstOrder::new(&digraph.reverse())
            .compute()
            .into_reverse_post();

        let mut marked = vec![false; order];
        let mut ids = vec![0usize; order];
        let mut sizes = Vec::new();
        let mut stack = Vec::new();

        for seed in seeds {
            if marked[seed.index()] {
                continue;
            }
            let component = sizes.len();
            let mut size = 0usize;

            marked[seed.index()] = true;
            stack.push(seed);
            while let Some(vertex) = stack.pop() {
                ids[vertex.index()] = component;
                size += 1;
                for &next in digraph.adjacency(vertex).unwrap_or_default() {
                    if !marked[next.index()] {
                        marked[next.index()] = true;
                        stack.push(next);
                    }
                }
            }
            sizes.push(size);
        }

        debug!(
            "strong components of '{}': {} vertices in {} components",
            digraph,
            order,
            sizes.len()
        );

        StrongComponents { ids, sizes }
    }
}

/// Component labels produced by [`KosarajuSharirScc::compute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrongComponents {
    /// Component number per vertex
    ids: Vec<usize>,
    /// Member count per component number
    sizes: Vec<usize>,
}

impl StrongComponents {
    /// Returns the number of strongly connected components.
    #[must_use]
    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    /// Returns the number of vertices in the largest component, or `0` for a
    /// graph without vertices.
    #[must_use]
    pub fn largest_component_size(&self) -> usize {
        self.sizes.iter().copied().max().unwrap_or(0)
    }

    /// Returns the component number of `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfBounds`](crate::Error::VertexOutOfBounds) if
    /// `vertex` does not exist.
    pub fn component_of(&self, vertex: VertexId) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.ids[vertex.index()])
    }

    /// Returns `true` if `v` and `w` belong to the same component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfBounds`](crate::Error::VertexOutOfBounds) if
    /// either vertex does not exist.
    pub fn strongly_connected(&self, v: VertexId, w: VertexId) -> Result<bool> {
        Ok(self.component_of(v)? == self.component_of(w)?)
    }

    /// Returns the size of every component, indexed by component number.
    #[must_use]
    pub fn component_sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Returns the members of every component, indexed by component number.
    ///
    /// Members are listed in ascending vertex order.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<VertexId>> {
        let mut components: Vec<Vec<VertexId>> = self
            .sizes
            .iter()
            .map(|&size| Vec::with_capacity(size))
            .collect();
        for (index, &component) in self.ids.iter().enumerate() {
            components[component].push(VertexId::new(index));
        }
        components
    }
}

impl GraphBase for StrongComponents {
    fn order(&self) -> usize {
        self.ids.len()
    }
}

/// Computes the strongly connected components of `digraph`.
///
/// Shorthand for `KosarajuSharirScc::new(digraph).compute()`.
#[must_use]
pub fn strong_components(digraph: &Digraph) -> StrongComponents {
    KosarajuSharirScc::new(digraph).compute()
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::{
            algorithms::kosaraju::{strong_components, KosarajuSharirScc},
            Digraph, VertexId,
        },
        Error,
    };

    fn v(index: usize) -> VertexId {
        VertexId::new(index)
    }

    #[test]
    fn test_empty_graph() {
        let digraph = Digraph::new(0);
        let scc = KosarajuSharirScc::new(&digraph).compute();
        assert_eq!(scc.count(), 0);
        assert_eq!(scc.largest_component_size(), 0);
        assert!(scc.components().is_empty());
    }

    #[test]
    fn test_single_vertex() {
        let digraph = Digraph::new(1);
        let scc = strong_components(&digraph);
        assert_eq!(scc.count(), 1);
        assert_eq!(scc.largest_component_size(), 1);
        assert_eq!(scc.component_of(v(0)).unwrap(), 0);
    }

    #[test]
    fn test_self_loop_is_trivial_component() {
        let digraph = Digraph::from_arcs(2, [(0, 0), (0, 1)]).unwrap();
        let scc = strong_components(&digraph);
        assert_eq!(scc.count(), 2);
        assert!(!scc.strongly_connected(v(0), v(1)).unwrap());
    }

    #[test]
    fn test_chain_has_singleton_components() {
        let digraph = Digraph::from_arcs(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        let scc = strong_components(&digraph);

        assert_eq!(scc.count(), 4);
        assert_eq!(scc.component_sizes(), &[1, 1, 1, 1]);
        // Sinks are discovered first
        assert_eq!(scc.component_of(v(3)).unwrap(), 0);
        assert_eq!(scc.component_of(v(0)).unwrap(), 3);
    }

    #[test]
    fn test_cycle_is_one_component() {
        let digraph = Digraph::from_arcs(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let scc = strong_components(&digraph);

        assert_eq!(scc.count(), 1);
        assert_eq!(scc.largest_component_size(), 3);
        assert_eq!(scc.components(), vec![vec![v(0), v(1), v(2)]]);
    }

    #[test]
    fn test_two_cycles_joined_by_arc() {
        // {0, 1} -> {2, 3}
        let digraph = Digraph::from_arcs(4, [(0, 1), (1, 0), (1, 2), (2, 3), (3, 2)]).unwrap();
        let scc = strong_components(&digraph);

        assert_eq!(scc.count(), 2);
        assert!(scc.strongly_connected(v(0), v(1)).unwrap());
        assert!(scc.strongly_connected(v(2), v(3)).unwrap());
        assert!(!scc.strongly_connected(v(1), v(2)).unwrap());
        assert_eq!(scc.components(), vec![vec![v(2), v(3)], vec![v(0), v(1)]]);
    }

    #[test]
    fn test_source_is_untouched() {
        let digraph = Digraph::from_arcs(3, [(0, 1), (1, 0), (2, 1)]).unwrap();
        let _ = strong_components(&digraph);

        assert_eq!(digraph.id(), "digraph");
        assert_eq!(digraph.size(), 3);
        assert_eq!(digraph.adjacency(v(2)).unwrap(), &[v(1)]);
    }

    #[test]
    fn test_component_of_out_of_bounds() {
        let digraph = Digraph::new(2);
        let scc = strong_components(&digraph);
        assert!(matches!(
            scc.component_of(v(2)),
            Err(Error::VertexOutOfBounds { order: 2, .. })
        ));
        assert!(scc.strongly_connected(v(0), v(9)).is_err());
    }
}
