//! The undirected graph ADT: vertex/edge storage, adjacency access, mutation.
//!
//! Vertices are `usize` ids in `[0, vertex_count())`, fixed at construction.
//! Edges are added one at a time with [`Graph::add_edge`]; each call appends
//! one entry to each endpoint's adjacency list, so adjacency order is exactly
//! edge-insertion order and traversal order is deterministic.
//!
//! Parallel edges and self-loops are allowed and never merged. A self-loop
//! `(v, v)` appends `v` to its own adjacency list twice — once per endpoint
//! role — but counts as a single edge. Deduplication, if ever wanted, is a
//! higher-layer policy, not the ADT's.

use std::fmt;

// ---------------------------------------------------------------------------
// GraphError
// ---------------------------------------------------------------------------

/// Errors produced by vertex-taking graph operations.
///
/// An out-of-range vertex id is a precondition violation at the call site.
/// It is surfaced as a typed error rather than a panic so that callers (and
/// tests) can observe it without the process terminating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex id supplied to an operation is not in `[0, vertex_count())`.
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// The graph's vertex count; valid ids are `0..vertices`.
        vertices: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::VertexOutOfRange { vertex, vertices } => {
                write!(
                    f,
                    "vertex id must be within 0 and {}, invalid vertex {vertex}",
                    vertices.saturating_sub(1)
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An undirected graph over `usize` vertex ids with insertion-ordered
/// adjacency lists.
///
/// The vertex count is fixed at construction; the only mutation is
/// [`Graph::add_edge`], which never removes or reorders existing adjacency
/// entries. Once no further insertions occur the graph is effectively
/// immutable, and any number of path finders may read it concurrently.
///
/// The graph also keeps an insertion-order log of the edges themselves
/// (as `(v, w)` pairs in the order the endpoints were supplied). The log is
/// what [`Graph::edge_count`] counts — a self-loop contributes two adjacency
/// entries but one logged edge — and it is what edge-list serialization
/// iterates, so a written graph re-reads with identical adjacency order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertices: usize,
    adj: Vec<Vec<usize>>,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Creates a graph with `vertices` vertices and no edges.
    pub fn new(vertices: usize) -> Self {
        Self {
            vertices,
            adj: vec![Vec::new(); vertices],
            edges: Vec::new(),
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    /// Returns the number of edges added so far.
    ///
    /// This is the number of successful [`Graph::add_edge`] calls, not half
    /// the sum of adjacency lengths — the two differ when self-loops are
    /// present.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `Ok(())` if `v` is a valid vertex id for this graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] when `v >= vertex_count()`.
    pub fn validate_vertex(&self, v: usize) -> Result<(), GraphError> {
        if v >= self.vertices {
            return Err(GraphError::VertexOutOfRange {
                vertex: v,
                vertices: self.vertices,
            });
        }
        Ok(())
    }

    /// Adds the undirected edge `(v, w)`.
    ///
    /// Appends `w` to `v`'s adjacency list and `v` to `w`'s, in that order,
    /// and increments the edge count by exactly one. This holds even when
    /// `v == w` (the vertex appears twice in its own list, once per endpoint
    /// role) and when the edge duplicates an existing one (parallel edges
    /// are kept, not merged).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is out
    /// of range. The graph is unchanged on error.
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<(), GraphError> {
        self.validate_vertex(v)?;
        self.validate_vertex(w)?;
        self.adj[v].push(w);
        self.adj[w].push(v);
        self.edges.push((v, w));
        Ok(())
    }

    /// Returns the vertices adjacent to `v`, in edge-insertion order.
    ///
    /// The slice is a read-only view into the graph's own storage; it is
    /// valid as long as the graph is not mutated.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] when `v` is out of range.
    pub fn neighbors(&self, v: usize) -> Result<&[usize], GraphError> {
        self.validate_vertex(v)?;
        Ok(&self.adj[v])
    }

    /// Returns the edges in insertion order, as `(v, w)` endpoint pairs in
    /// the order they were supplied to [`Graph::add_edge`].
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }

    /// Adjacency access for traversal-internal use.
    ///
    /// Callers must hold `v < self.vertices`; every id stored in an
    /// adjacency list satisfies this by construction.
    pub(crate) fn adjacency(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// Human-readable rendering for diagnostics.
///
/// One header line with the vertex and edge counts, then one line per vertex
/// in increasing id order listing its neighbors in adjacency order. Every
/// vertex line carries a trailing space before the newline, including when
/// the neighbor list is empty:
///
/// ```text
/// 2 vertices, 1 edges
/// 0: 1
/// 1: 0
/// ```
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.vertices, self.edges.len())?;
        for v in 0..self.vertices {
            write!(f, "{v}: ")?;
            for w in &self.adj[v] {
                write!(f, "{w} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn new_graph_has_no_edges() {
        let g = Graph::new(4);
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 0);
        for v in 0..4 {
            assert!(g.neighbors(v).expect("vertex in range").is_empty());
        }
    }

    #[test]
    fn zero_vertex_graph_is_valid() {
        let g = Graph::new(0);
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(
            g.neighbors(0),
            Err(GraphError::VertexOutOfRange {
                vertex: 0,
                vertices: 0
            })
        );
    }

    #[test]
    fn add_edge_appends_to_both_endpoints() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1).expect("edge in range");
        g.add_edge(0, 2).expect("edge in range");

        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(0).expect("in range"), &[1, 2]);
        assert_eq!(g.neighbors(1).expect("in range"), &[0]);
        assert_eq!(g.neighbors(2).expect("in range"), &[0]);
    }

    #[test]
    fn self_loop_appears_twice_but_counts_once() {
        let mut g = Graph::new(2);
        g.add_edge(0, 0).expect("edge in range");

        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.neighbors(0).expect("in range"), &[0, 0]);
        assert!(g.neighbors(1).expect("in range").is_empty());
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut g = Graph::new(2);
        g.add_edge(0, 1).expect("edge in range");
        g.add_edge(1, 0).expect("edge in range");

        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(0).expect("in range"), &[1, 1]);
        assert_eq!(g.neighbors(1).expect("in range"), &[0, 0]);
    }

    #[test]
    fn add_edge_rejects_out_of_range_and_leaves_graph_unchanged() {
        let mut g = Graph::new(2);
        assert_eq!(
            g.add_edge(0, 2),
            Err(GraphError::VertexOutOfRange {
                vertex: 2,
                vertices: 2
            })
        );
        assert_eq!(
            g.add_edge(5, 0),
            Err(GraphError::VertexOutOfRange {
                vertex: 5,
                vertices: 2
            })
        );
        assert_eq!(g.edge_count(), 0);
        assert!(g.neighbors(0).expect("in range").is_empty());
    }

    #[test]
    fn edges_iterates_in_insertion_order() {
        let mut g = Graph::new(4);
        g.add_edge(0, 1).expect("edge in range");
        g.add_edge(2, 3).expect("edge in range");
        g.add_edge(1, 1).expect("edge in range");

        let edges: Vec<(usize, usize)> = g.edges().collect();
        assert_eq!(edges, vec![(0, 1), (2, 3), (1, 1)]);
    }

    #[test]
    fn display_without_edges() {
        let g = Graph::new(8);
        assert_eq!(
            g.to_string(),
            "8 vertices, 0 edges\n0: \n1: \n2: \n3: \n4: \n5: \n6: \n7: \n"
        );
    }

    #[test]
    fn display_with_edges() {
        let mut g = Graph::new(8);
        for (v, w) in [(0, 1), (0, 6), (0, 7), (1, 6), (1, 2), (1, 4)] {
            g.add_edge(v, w).expect("edge in range");
        }
        assert_eq!(
            g.to_string(),
            "8 vertices, 6 edges\n0: 1 6 7 \n1: 0 6 2 4 \n2: 1 \n3: \n4: 1 \n5: \n6: 0 1 \n7: 0 \n"
        );
    }

    #[test]
    fn display_of_empty_graph_is_header_only() {
        let g = Graph::new(0);
        assert_eq!(g.to_string(), "0 vertices, 0 edges\n");
    }

    #[test]
    fn error_message_names_the_valid_range() {
        let g = Graph::new(3);
        let err = g.neighbors(7).expect_err("out of range");
        assert_eq!(
            err.to_string(),
            "vertex id must be within 0 and 2, invalid vertex 7"
        );
    }
}
