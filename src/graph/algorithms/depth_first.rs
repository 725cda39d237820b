//! Depth-first vertex orderings.
//!
//! A single depth-first search over the whole graph records three sequences:
//!
//! - **preorder**: vertices in the order the search first enters them
//! - **postorder**: vertices in the order the search finishes them
//! - **reverse postorder**: postorder read backwards, which for a DAG is a
//!   topological order and for any digraph is the seed order of Kosaraju-Sharir
//!
//! The search starts from every still unvisited vertex in ascending id order and
//! follows arcs in insertion order, so the sequences are fully determined by the
//! order in which arcs were added.
//!
//! The search is iterative. Each frame on the explicit stack holds a vertex
//! together with its partially consumed [`ArcIter`], which reproduces the visit
//! order of the textbook recursive formulation without bounding the search depth
//! by the thread's call stack.

use log::debug;

use crate::graph::{iter::ArcIter, traits::Successors, vertex::VertexId};

/// A pending depth-first search over a graph.
///
/// The only thing a `DepthFirstOrder` can do is [`compute`](Self::compute); the
/// orderings live on the returned [`DepthFirstOrdering`]. Reading an ordering
/// before the search ran is therefore not expressible:
///
/// ```rust,compile_fail
/// use digraphs::graph::{algorithms::DepthFirstOrder, Digraph};
///
/// let digraph = Digraph::new(2);
/// let order = DepthFirstOrder::new(&digraph);
/// let _ = order.pre();
/// ```
///
/// # Examples
///
/// ```rust
/// use digraphs::graph::{algorithms::DepthFirstOrder, Digraph, VertexId};
///
/// let digraph = Digraph::from_arcs(4, [(0, 1), (1, 2), (0, 3)])?;
/// let ordering = DepthFirstOrder::new(&digraph).compute();
///
/// let ids = |vs: &[VertexId]| vs.iter().map(|v| v.index()).collect::<Vec<_>>();
/// assert_eq!(ids(ordering.pre()), vec![0, 1, 2, 3]);
/// assert_eq!(ids(ordering.post()), vec![2, 1, 3, 0]);
/// assert_eq!(
///     ordering.reverse_post().map(VertexId::index).collect::<Vec<_>>(),
///     vec![0, 3, 1, 2]
/// );
/// # Ok::<(), digraphs::Error>(())
/// ```
#[derive(Debug)]
pub struct DepthFirstOrder<'g, G: Successors> {
    graph: &'g G,
}

impl<'g, G: Successors> DepthFirstOrder<'g, G> {
    /// Prepares a depth-first search over `graph`.
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        DepthFirstOrder { graph }
    }

    /// Runs the search over every vertex of the graph.
    ///
    /// Consumes the pending search, so it runs exactly once. The graph is only
    /// read; the result is a snapshot of its arcs at this point.
    ///
    /// # Complexity
    ///
    /// - Time: O(V + E)
    /// - Space: O(V)
    #[must_use]
    pub fn compute(self) -> DepthFirstOrdering {
        let graph = self.graph;
        let order = graph.order();

        let mut marked = vec![false; order];
        let mut pre = Vec::with_capacity(order);
        let mut post = Vec::with_capacity(order);
        let mut stack: Vec<(VertexId, ArcIter<'g>)> = Vec::new();
        let mut roots = 0usize;

        for root in graph.vertices() {
            if marked[root.index()] {
                continue;
            }
            roots += 1;

            marked[root.index()] = true;
            pre.push(root);
            stack.push((root, arcs_of(graph, root)));

            while let Some((vertex, arcs)) = stack.last_mut() {
                let vertex = *vertex;
                match arcs.find(|w| !marked[w.index()]) {
                    Some(next) => {
                        marked[next.index()] = true;
                        pre.push(next);
                        stack.push((next, arcs_of(graph, next)));
                    }
                    None => {
                        post.push(vertex);
                        stack.pop();
                    }
                }
            }
        }

        debug!(
            "depth-first order: {} vertices from {} search roots",
            order, roots
        );

        DepthFirstOrdering { pre, post }
    }
}

/// Arcs of a vertex that was reached through the graph itself.
fn arcs_of<G: Successors>(graph: &G, vertex: VertexId) -> ArcIter<'_> {
    ArcIter::new(graph.adjacency(vertex).unwrap_or_default())
}

/// Vertex orderings produced by [`DepthFirstOrder::compute`].
///
/// Each sequence contains every vertex of the graph exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthFirstOrdering {
    pre: Vec<VertexId>,
    post: Vec<VertexId>,
}

impl DepthFirstOrdering {
    /// Vertices in the order the search entered them.
    #[must_use]
    pub fn pre(&self) -> &[VertexId] {
        &self.pre
    }

    /// Vertices in the order the search finished them.
    #[must_use]
    pub fn post(&self) -> &[VertexId] {
        &self.post
    }

    /// Vertices in reverse postorder, the last finished vertex first.
    pub fn reverse_post(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        self.post.iter().rev().copied()
    }

    /// Consumes the ordering and returns the reverse postorder as a vector.
    #[must_use]
    pub fn into_reverse_post(self) -> Vec<VertexId> {
        let mut reverse_post = self.post;
        reverse_post.reverse();
        reverse_post
    }
}

/// Runs a depth-first search over `graph` and returns its orderings.
///
/// Shorthand for `DepthFirstOrder::new(graph).compute()`.
#[must_use]
pub fn depth_first_order<G: Successors>(graph: &G) -> DepthFirstOrdering {
    DepthFirstOrder::new(graph).compute()
}

#[cfg(test)]
mod tests {
    use crate::graph::{
        algorithms::depth_first::{depth_first_order, DepthFirstOrder},
        Digraph, Graph, VertexId,
    };

    fn ids(vertices: &[VertexId]) -> Vec<usize> {
        vertices.iter().map(|v| v.index()).collect()
    }

    #[test]
    fn test_empty_graph() {
        let digraph = Digraph::new(0);
        let ordering = DepthFirstOrder::new(&digraph).compute();
        assert!(ordering.pre().is_empty());
        assert!(ordering.post().is_empty());
        assert_eq!(ordering.reverse_post().len(), 0);
    }

    #[test]
    fn test_isolated_vertices() {
        let digraph = Digraph::new(3);
        let ordering = depth_first_order(&digraph);
        assert_eq!(ids(ordering.pre()), vec![0, 1, 2]);
        assert_eq!(ids(ordering.post()), vec![0, 1, 2]);
        assert_eq!(ids(&ordering.into_reverse_post()), vec![2, 1, 0]);
    }

    #[test]
    fn test_follows_arc_insertion_order() {
        // Same arcs, different insertion order
        let first = Digraph::from_arcs(3, [(0, 1), (0, 2)]).unwrap();
        let second = Digraph::from_arcs(3, [(0, 2), (0, 1)]).unwrap();

        assert_eq!(ids(depth_first_order(&first).pre()), vec![0, 1, 2]);
        assert_eq!(ids(depth_first_order(&second).pre()), vec![0, 2, 1]);
    }

    #[test]
    fn test_cycle_and_self_loop() {
        let digraph = Digraph::from_arcs(3, [(0, 0), (0, 1), (1, 2), (2, 0), (2, 1)]).unwrap();
        let ordering = depth_first_order(&digraph);

        assert_eq!(ids(ordering.pre()), vec![0, 1, 2]);
        assert_eq!(ids(ordering.post()), vec![2, 1, 0]);
    }

    #[test]
    fn test_restarts_from_lowest_unvisited() {
        // 2 -> 0 is only discovered when the search restarts at 2
        let digraph = Digraph::from_arcs(4, [(0, 1), (2, 0), (2, 3)]).unwrap();
        let ordering = depth_first_order(&digraph);

        assert_eq!(ids(ordering.pre()), vec![0, 1, 2, 3]);
        assert_eq!(ids(ordering.post()), vec![1, 0, 3, 2]);
        assert_eq!(ids(&ordering.into_reverse_post()), vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_matches_recursive_search() {
        fn visit(digraph: &Digraph, v: VertexId, marked: &mut [bool], post: &mut Vec<VertexId>) {
            marked[v.index()] = true;
            for w in digraph.arcs(v).unwrap() {
                if !marked[w.index()] {
                    visit(digraph, w, marked, post);
                }
            }
            post.push(v);
        }

        let digraph = Digraph::from_arcs(
            8,
            [
                (0, 5),
                (0, 1),
                (1, 7),
                (5, 1),
                (5, 6),
                (6, 0),
                (3, 2),
                (3, 4),
                (4, 2),
                (7, 6),
                (2, 7),
            ],
        )
        .unwrap();

        let mut marked = vec![false; digraph.order()];
        let mut expected = Vec::new();
        for v in digraph.vertices() {
            if !marked[v.index()] {
                visit(&digraph, v, &mut marked, &mut expected);
            }
        }

        assert_eq!(depth_first_order(&digraph).post(), expected.as_slice());
    }

    #[test]
    fn test_undirected_graph() {
        let mut graph = Graph::new(3);
        graph.add_edge(VertexId::new(2), VertexId::new(0)).unwrap();
        graph.add_edge(VertexId::new(1), VertexId::new(2)).unwrap();

        let ordering = depth_first_order(&graph);
        assert_eq!(ids(ordering.pre()), vec![0, 2, 1]);
        assert_eq!(ids(ordering.post()), vec![1, 2, 0]);
    }
}
