//! Single-source depth-first path finders.
//!
//! Two formulations of the same traversal are provided: [`DepthFirstPaths`]
//! recurses on the call stack, [`IterativeDepthFirstPaths`] drives an
//! explicit stack of `(vertex, next-neighbor-index)` frames. For every graph
//! and source the two mark vertices in the same order and record the same
//! predecessor for each marked vertex, so `has_path_to` and `path_to` agree
//! exactly between them. The iterative form is the one to reach for on
//! graphs deep enough to threaten the call stack.
//!
//! Both finders compute the full reachability set eagerly at construction;
//! queries never traverse the graph again.

use std::fmt;

use crate::graph::{Graph, GraphError};

// ---------------------------------------------------------------------------
// PathsError
// ---------------------------------------------------------------------------

/// Errors that can occur when constructing a path finder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathsError {
    /// The source vertex is not a vertex of the graph.
    SourceOutOfRange {
        /// The offending source vertex id.
        source: usize,
        /// The graph's vertex count; valid sources are `0..vertices`.
        vertices: usize,
    },
}

impl fmt::Display for PathsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathsError::SourceOutOfRange { source, vertices } => {
                write!(
                    f,
                    "source vertex must be within range [0,{vertices}), invalid vertex {source}"
                )
            }
        }
    }
}

impl std::error::Error for PathsError {}

// ---------------------------------------------------------------------------
// Shared traversal state
// ---------------------------------------------------------------------------

/// Reachability data computed by a depth-first traversal from a fixed source.
///
/// `marked[v]` records whether `v` was reached; `edge_to[v]` records the
/// vertex from which `v` was first discovered. The predecessor chain from
/// any marked vertex terminates at the source — the traversal only ever
/// records a predecessor for a vertex at the moment it is first marked, so
/// the recorded structure is a tree rooted at the source even when the
/// graph itself has cycles.
#[derive(Debug, Clone)]
struct Discovery {
    source: usize,
    marked: Vec<bool>,
    edge_to: Vec<usize>,
}

impl Discovery {
    /// Validates `source` against `graph` and seeds the state with the
    /// source marked. No traversal happens here.
    fn new(graph: &Graph, source: usize) -> Result<Self, PathsError> {
        if source >= graph.vertex_count() {
            return Err(PathsError::SourceOutOfRange {
                source,
                vertices: graph.vertex_count(),
            });
        }
        let mut marked = vec![false; graph.vertex_count()];
        marked[source] = true;
        Ok(Self {
            source,
            marked,
            edge_to: vec![0; graph.vertex_count()],
        })
    }

    fn has_path_to(&self, graph: &Graph, v: usize) -> Result<bool, GraphError> {
        graph.validate_vertex(v)?;
        Ok(self.marked[v])
    }

    /// Reconstructs the path from the source to `v` by walking `edge_to`
    /// backward and reversing. Returns `None` when `v` was not reached.
    fn path_to(&self, graph: &Graph, v: usize) -> Result<Option<Vec<usize>>, GraphError> {
        if !self.has_path_to(graph, v)? {
            return Ok(None);
        }
        let mut path = Vec::new();
        let mut current = v;
        loop {
            path.push(current);
            if current == self.source {
                break;
            }
            current = self.edge_to[current];
        }
        path.reverse();
        Ok(Some(path))
    }
}

// ---------------------------------------------------------------------------
// DepthFirstPaths (recursive)
// ---------------------------------------------------------------------------

/// Finds paths from a source vertex to every vertex reachable from it in an
/// undirected graph, using recursive depth-first search.
///
/// The traversal is pre-order: at each vertex the neighbors are examined in
/// adjacency (edge-insertion) order, and each unmarked neighbor's entire
/// reachable subtree is explored before the next sibling neighbor is
/// considered. Self-loops and parallel edges are absorbed by the marking —
/// an already-marked neighbor is simply skipped.
///
/// The graph must outlive the finder; results are computed once at
/// construction and never refreshed, so mutating the graph afterwards
/// leaves the finder describing the graph as it was.
#[derive(Debug)]
pub struct DepthFirstPaths<'g> {
    graph: &'g Graph,
    discovery: Discovery,
}

impl<'g> DepthFirstPaths<'g> {
    /// Builds the reachability data for `source` by depth-first recursion.
    ///
    /// # Errors
    ///
    /// Returns [`PathsError::SourceOutOfRange`] when `source` is not in
    /// `[0, graph.vertex_count())`.
    pub fn new(graph: &'g Graph, source: usize) -> Result<Self, PathsError> {
        let mut discovery = Discovery::new(graph, source)?;
        dfs(graph, &mut discovery, source);
        Ok(Self { graph, discovery })
    }

    /// Returns the source vertex this finder was built against.
    pub fn source(&self) -> usize {
        self.discovery.source
    }

    /// Returns `true` if the traversal reached `v` from the source.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] when `v` is out of range.
    pub fn has_path_to(&self, v: usize) -> Result<bool, GraphError> {
        self.discovery.has_path_to(self.graph, v)
    }

    /// Returns the discovered path from the source to `v`, in order from
    /// source to target, or `None` if `v` is unreachable from the source.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] when `v` is out of range.
    pub fn path_to(&self, v: usize) -> Result<Option<Vec<usize>>, GraphError> {
        self.discovery.path_to(self.graph, v)
    }
}

/// Recursive DFS step: visit each unmarked neighbor of `v` in adjacency
/// order, recording `v` as its predecessor before descending.
fn dfs(graph: &Graph, discovery: &mut Discovery, v: usize) {
    for &w in graph.adjacency(v) {
        if !discovery.marked[w] {
            discovery.edge_to[w] = v;
            discovery.marked[w] = true;
            dfs(graph, discovery, w);
        }
    }
}

// ---------------------------------------------------------------------------
// IterativeDepthFirstPaths
// ---------------------------------------------------------------------------

/// A stack frame of the explicit-stack traversal: a vertex and the index of
/// the next adjacency entry to examine when control is at (or returns to)
/// that vertex.
#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: usize,
    next: usize,
}

/// Finds paths from a source vertex to every vertex reachable from it,
/// producing results identical to [`DepthFirstPaths`] for every input.
///
/// The call stack of the recursive formulation is replaced by an explicit
/// stack of [`Frame`]s, one per vertex on the current traversal path. The
/// top frame's `next` index remembers where iteration over that vertex's
/// neighbors resumes after a descent returns, which is exactly the state
/// the recursive version keeps in its suspended loop — so vertices are
/// marked in the same order and `edge_to` comes out identical.
#[derive(Debug)]
pub struct IterativeDepthFirstPaths<'g> {
    graph: &'g Graph,
    discovery: Discovery,
}

impl<'g> IterativeDepthFirstPaths<'g> {
    /// Builds the reachability data for `source` with an explicit stack.
    ///
    /// # Errors
    ///
    /// Returns [`PathsError::SourceOutOfRange`] when `source` is not in
    /// `[0, graph.vertex_count())`.
    pub fn new(graph: &'g Graph, source: usize) -> Result<Self, PathsError> {
        let mut discovery = Discovery::new(graph, source)?;

        let mut stack = vec![Frame {
            vertex: source,
            next: 0,
        }];
        while let Some(frame) = stack.last_mut() {
            let adjacency = graph.adjacency(frame.vertex);
            if frame.next >= adjacency.len() {
                stack.pop();
                continue;
            }
            let w = adjacency[frame.next];
            frame.next += 1;
            if !discovery.marked[w] {
                discovery.edge_to[w] = frame.vertex;
                discovery.marked[w] = true;
                stack.push(Frame { vertex: w, next: 0 });
            }
        }

        Ok(Self { graph, discovery })
    }

    /// Returns the source vertex this finder was built against.
    pub fn source(&self) -> usize {
        self.discovery.source
    }

    /// Returns `true` if the traversal reached `v` from the source.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] when `v` is out of range.
    pub fn has_path_to(&self, v: usize) -> Result<bool, GraphError> {
        self.discovery.has_path_to(self.graph, v)
    }

    /// Returns the discovered path from the source to `v`, in order from
    /// source to target, or `None` if `v` is unreachable from the source.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] when `v` is out of range.
    pub fn path_to(&self, v: usize) -> Result<Option<Vec<usize>>, GraphError> {
        self.discovery.path_to(self.graph, v)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    /// Builds a graph from an edge list, panicking on out-of-range input.
    fn graph(vertices: usize, edges: &[(usize, usize)]) -> Graph {
        let mut g = Graph::new(vertices);
        for &(v, w) in edges {
            g.add_edge(v, w).expect("edge in range");
        }
        g
    }

    /// Asserts the same expectations against both finder variants.
    fn check_both(
        g: &Graph,
        source: usize,
        reached: &[usize],
        unreached: &[usize],
        paths: &[(usize, &[usize])],
    ) {
        let recursive = DepthFirstPaths::new(g, source).expect("valid source");
        let iterative = IterativeDepthFirstPaths::new(g, source).expect("valid source");

        for &v in reached {
            assert!(
                recursive.has_path_to(v).expect("in range"),
                "recursive: expected path to {v}"
            );
            assert!(
                iterative.has_path_to(v).expect("in range"),
                "iterative: expected path to {v}"
            );
        }
        for &v in unreached {
            assert!(
                !recursive.has_path_to(v).expect("in range"),
                "recursive: expected no path to {v}"
            );
            assert!(
                !iterative.has_path_to(v).expect("in range"),
                "iterative: expected no path to {v}"
            );
        }
        for &(v, want) in paths {
            assert_eq!(
                recursive.path_to(v).expect("in range").as_deref(),
                Some(want),
                "recursive path to {v}"
            );
            assert_eq!(
                iterative.path_to(v).expect("in range").as_deref(),
                Some(want),
                "iterative path to {v}"
            );
        }
    }

    #[test]
    fn source_out_of_range_is_an_error() {
        let g = graph(2, &[]);
        assert_eq!(
            DepthFirstPaths::new(&g, 2).expect_err("out of range"),
            PathsError::SourceOutOfRange {
                source: 2,
                vertices: 2
            }
        );
        assert_eq!(
            IterativeDepthFirstPaths::new(&g, 5).expect_err("out of range"),
            PathsError::SourceOutOfRange {
                source: 5,
                vertices: 2
            }
        );
    }

    #[test]
    fn path_to_source_is_the_source_alone() {
        let g = graph(3, &[(0, 1), (1, 2)]);
        let finder = DepthFirstPaths::new(&g, 1).expect("valid source");
        assert_eq!(finder.source(), 1);
        assert!(finder.has_path_to(1).expect("in range"));
        assert_eq!(finder.path_to(1).expect("in range"), Some(vec![1]));
    }

    #[test]
    fn unreached_vertex_has_no_path() {
        let g = graph(4, &[(0, 1), (2, 3)]);
        check_both(&g, 0, &[0, 1], &[2, 3], &[(0, &[0]), (1, &[0, 1])]);

        let finder = IterativeDepthFirstPaths::new(&g, 0).expect("valid source");
        assert_eq!(finder.path_to(3).expect("in range"), None);
    }

    #[test]
    fn self_loop_does_not_diverge() {
        let g = graph(2, &[(0, 1), (0, 0)]);
        check_both(&g, 0, &[0, 1], &[], &[(0, &[0]), (1, &[0, 1])]);
    }

    #[test]
    fn parallel_edge_is_skipped() {
        let g = graph(2, &[(0, 1), (1, 0)]);
        check_both(&g, 0, &[0, 1], &[], &[(0, &[0]), (1, &[0, 1])]);
    }

    #[test]
    fn cyclic_graph_paths_follow_adjacency_order() {
        let g = graph(
            8,
            &[
                (0, 1),
                (0, 6),
                (0, 7),
                (1, 6),
                (1, 2),
                (1, 4),
                (2, 3),
                (2, 4),
                (3, 4),
                (4, 5),
            ],
        );
        check_both(
            &g,
            0,
            &[0, 1, 2, 3, 4, 5, 6, 7],
            &[],
            &[
                (0, &[0]),
                (1, &[0, 1]),
                (2, &[0, 1, 2]),
                (3, &[0, 1, 2, 3]),
                (4, &[0, 1, 2, 3, 4]),
                (5, &[0, 1, 2, 3, 4, 5]),
                (6, &[0, 1, 6]),
                (7, &[0, 7]),
            ],
        );
    }

    #[test]
    fn isolated_source_reaches_only_itself() {
        let g = graph(3, &[(1, 2)]);
        check_both(&g, 0, &[0], &[1, 2], &[(0, &[0])]);
    }

    #[test]
    fn query_with_out_of_range_vertex_is_an_error() {
        let g = graph(2, &[(0, 1)]);
        let finder = DepthFirstPaths::new(&g, 0).expect("valid source");
        assert_eq!(
            finder.has_path_to(2),
            Err(GraphError::VertexOutOfRange {
                vertex: 2,
                vertices: 2
            })
        );
        assert_eq!(
            finder.path_to(9),
            Err(GraphError::VertexOutOfRange {
                vertex: 9,
                vertices: 2
            })
        );
    }

    #[test]
    fn paths_never_repeat_a_vertex() {
        // Dense cycles plus loops and duplicates; any revisit would show up
        // as a repeated id in some reconstructed path.
        let g = graph(
            5,
            &[(0, 1), (1, 2), (2, 0), (2, 2), (1, 2), (3, 4), (0, 3)],
        );
        let finder = DepthFirstPaths::new(&g, 0).expect("valid source");
        for v in 0..5 {
            if let Some(path) = finder.path_to(v).expect("in range") {
                let mut seen = vec![false; 5];
                for &u in &path {
                    assert!(!seen[u], "vertex {u} repeated in path to {v}: {path:?}");
                    seen[u] = true;
                }
                assert_eq!(path.first(), Some(&0));
                assert_eq!(path.last(), Some(&v));
            }
        }
    }
}
