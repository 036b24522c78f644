//! Line-oriented text format for graph construction.
//!
//! The format is: vertex count on line 1, edge count on line 2, then one
//! line per edge with the two endpoints separated by whitespace. For
//! example, a 4-vertex graph with edges (0,1) and (2,3):
//!
//! ```text
//! 4
//! 2
//! 0 1
//! 2 3
//! ```
//!
//! [`read_graph`] builds a [`Graph`] purely through the ADT's public
//! constructor and [`Graph::add_edge`]; [`write_graph`] serializes one back
//! using the graph's insertion-order edge log, so reading what was written
//! reproduces the vertex count, edge count, and per-vertex adjacency order
//! exactly.
//!
//! Every malformed input is surfaced as a [`ReadError`]; a failed read never
//! hands back a partially built graph.

use std::fmt;
use std::io::{BufRead, Write};

use crate::graph::{Graph, GraphError};

// ---------------------------------------------------------------------------
// ReadError
// ---------------------------------------------------------------------------

/// Errors produced while reading a graph from the text format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The input ended before the vertex-count line.
    MissingVertexCount,
    /// The vertex-count line is not an integer.
    InvalidVertexCount {
        /// The offending line content.
        token: String,
    },
    /// The vertex-count line is a negative integer.
    NegativeVertexCount {
        /// The parsed negative value.
        value: i64,
    },
    /// The input ended before the edge-count line.
    MissingEdgeCount,
    /// The edge-count line is not an integer.
    InvalidEdgeCount {
        /// The offending line content.
        token: String,
    },
    /// The edge-count line is a negative integer.
    NegativeEdgeCount {
        /// The parsed negative value.
        value: i64,
    },
    /// An edge line does not consist of exactly two whitespace-separated
    /// tokens.
    MalformedEdgeLine {
        /// The offending line content.
        line: String,
    },
    /// An edge endpoint token is not a non-negative integer.
    InvalidVertexToken {
        /// The offending token.
        token: String,
        /// The line the token appeared on.
        line: String,
    },
    /// An edge endpoint is not a vertex of the declared graph.
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// The declared vertex count; valid ids are `0..vertices`.
        vertices: usize,
        /// The line the vertex appeared on.
        line: String,
    },
    /// The number of edge lines read does not match the declared edge count.
    EdgeCountMismatch {
        /// The edge count declared on line 2.
        declared: usize,
        /// The number of edge lines actually read.
        actual: usize,
    },
    /// The underlying reader failed.
    Io {
        /// The I/O error message.
        detail: String,
    },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::MissingVertexCount => {
                write!(f, "first line missing, must contain number of vertices")
            }
            ReadError::InvalidVertexCount { token } => {
                write!(f, "failed to parse number of vertices, invalid token {token:?}")
            }
            ReadError::NegativeVertexCount { value } => {
                write!(f, "number of vertices must be non-negative, V={value}")
            }
            ReadError::MissingEdgeCount => {
                write!(f, "second line missing, must contain number of edges")
            }
            ReadError::InvalidEdgeCount { token } => {
                write!(f, "failed to parse number of edges, invalid token {token:?}")
            }
            ReadError::NegativeEdgeCount { value } => {
                write!(f, "number of edges must be non-negative, E={value}")
            }
            ReadError::MalformedEdgeLine { line } => {
                write!(f, "edge must have two vertices, invalid line {line:?}")
            }
            ReadError::InvalidVertexToken { token, line } => {
                write!(f, "failed to parse vertex {token:?}, invalid line {line:?}")
            }
            ReadError::VertexOutOfRange {
                vertex,
                vertices,
                line,
            } => {
                write!(
                    f,
                    "vertex id must be within 0 and {}, invalid vertex {vertex} on line {line:?}",
                    vertices.saturating_sub(1)
                )
            }
            ReadError::EdgeCountMismatch { declared, actual } => {
                write!(
                    f,
                    "number of edges {declared} is not equal to edges in list {actual}"
                )
            }
            ReadError::Io { detail } => write!(f, "failed to read input: {detail}"),
        }
    }
}

impl std::error::Error for ReadError {}

// ---------------------------------------------------------------------------
// read_graph
// ---------------------------------------------------------------------------

/// Reads a graph from the line-oriented text format.
///
/// The graph is constructed exclusively through [`Graph::new`] and
/// [`Graph::add_edge`]; edges take effect in input order, so the resulting
/// adjacency lists are ordered exactly as the edge list dictates.
///
/// # Errors
///
/// Returns a [`ReadError`] describing the first problem encountered:
/// a missing, non-numeric, or negative count line; an edge line without
/// exactly two tokens; a non-numeric or out-of-range endpoint; an edge-line
/// count that differs from the declared edge count; or an I/O failure.
pub fn read_graph<R: BufRead>(reader: R) -> Result<Graph, ReadError> {
    let mut lines = reader.lines();

    let first = next_line(&mut lines)?.ok_or(ReadError::MissingVertexCount)?;
    let vertices = parse_count(
        &first,
        |token| ReadError::InvalidVertexCount { token },
        |value| ReadError::NegativeVertexCount { value },
    )?;

    let second = next_line(&mut lines)?.ok_or(ReadError::MissingEdgeCount)?;
    let declared = parse_count(
        &second,
        |token| ReadError::InvalidEdgeCount { token },
        |value| ReadError::NegativeEdgeCount { value },
    )?;

    let mut graph = Graph::new(vertices);
    let mut actual = 0;
    while let Some(line) = next_line(&mut lines)? {
        let (v, w) = parse_edge(&graph, &line)?;
        // Endpoints were range-checked against the declared vertex count, so
        // the ADT cannot refuse them.
        graph.add_edge(v, w).map_err(|e| match e {
            GraphError::VertexOutOfRange { vertex, vertices } => ReadError::VertexOutOfRange {
                vertex,
                vertices,
                line: line.clone(),
            },
        })?;
        actual += 1;
    }

    if actual != declared {
        return Err(ReadError::EdgeCountMismatch { declared, actual });
    }
    Ok(graph)
}

/// Pulls the next line from the reader, converting I/O errors.
fn next_line<R: BufRead>(lines: &mut std::io::Lines<R>) -> Result<Option<String>, ReadError> {
    match lines.next() {
        None => Ok(None),
        Some(Ok(line)) => Ok(Some(line)),
        Some(Err(e)) => Err(ReadError::Io {
            detail: e.to_string(),
        }),
    }
}

/// Parses a count line (vertex or edge count) as a non-negative integer.
///
/// Parsing goes through `i64` first so that a negative count is reported as
/// negative rather than merely non-numeric.
fn parse_count(
    line: &str,
    invalid: impl FnOnce(String) -> ReadError,
    negative: impl FnOnce(i64) -> ReadError,
) -> Result<usize, ReadError> {
    let value: i64 = line
        .trim()
        .parse()
        .map_err(|_| invalid(line.to_owned()))?;
    usize::try_from(value).map_err(|_| negative(value))
}

/// Parses an edge line into its two endpoints, validating both against the
/// graph's vertex count.
fn parse_edge(graph: &Graph, line: &str) -> Result<(usize, usize), ReadError> {
    let mut tokens = line.split_whitespace();
    let (Some(v), Some(w), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(ReadError::MalformedEdgeLine {
            line: line.to_owned(),
        });
    };
    Ok((parse_vertex(graph, v, line)?, parse_vertex(graph, w, line)?))
}

/// Parses a single endpoint token and range-checks it.
fn parse_vertex(graph: &Graph, token: &str, line: &str) -> Result<usize, ReadError> {
    let vertex: usize = token.parse().map_err(|_| ReadError::InvalidVertexToken {
        token: token.to_owned(),
        line: line.to_owned(),
    })?;
    graph
        .validate_vertex(vertex)
        .map_err(|_| ReadError::VertexOutOfRange {
            vertex,
            vertices: graph.vertex_count(),
            line: line.to_owned(),
        })?;
    Ok(vertex)
}

// ---------------------------------------------------------------------------
// write_graph
// ---------------------------------------------------------------------------

/// Writes a graph in the line-oriented text format.
///
/// Edges are emitted from the graph's insertion-order edge log, so
/// `read_graph` applied to the output reproduces the original's vertex
/// count, edge count, and per-vertex adjacency order.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn write_graph<W: Write>(mut writer: W, graph: &Graph) -> std::io::Result<()> {
    writeln!(writer, "{}", graph.vertex_count())?;
    writeln!(writer, "{}", graph.edge_count())?;
    for (v, w) in graph.edges() {
        writeln!(writer, "{v} {w}")?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
