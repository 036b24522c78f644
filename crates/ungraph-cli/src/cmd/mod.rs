//! Command modules for the `ungraph` CLI.
//!
//! Each submodule implements one subcommand. The `run` function in each
//! module takes the input content and parsed arguments and returns `Ok(())`
//! on success or a [`crate::error::CliError`] on failure.

use ungraph_core::{DepthFirstPaths, Graph, GraphError, IterativeDepthFirstPaths, PathsError};

use crate::error::CliError;

pub mod path;
pub mod print;
pub mod reach;

// ---------------------------------------------------------------------------
// Shared plumbing
// ---------------------------------------------------------------------------

/// Parses `content` as a graph in the line-oriented format.
///
/// # Errors
///
/// Returns [`CliError::FormatError`] (exit code 2) on any malformed input.
pub(crate) fn parse_graph(content: &str) -> Result<Graph, CliError> {
    ungraph_core::read_graph(content.as_bytes()).map_err(|e| CliError::FormatError {
        detail: e.to_string(),
    })
}

/// A path finder of either variant, selected by the `--iterative` flag.
///
/// Both variants have the same contract and produce identical results; this
/// wrapper only exists so the subcommands can hold whichever one the user
/// asked for.
pub(crate) enum Finder<'g> {
    Recursive(DepthFirstPaths<'g>),
    Iterative(IterativeDepthFirstPaths<'g>),
}

impl<'g> Finder<'g> {
    /// Builds the requested finder variant against `graph` and `source`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::VertexNotFound`] (exit code 1) when `source` is
    /// not a vertex of the graph.
    pub(crate) fn new(graph: &'g Graph, source: usize, iterative: bool) -> Result<Self, CliError> {
        if iterative {
            Ok(Self::Iterative(
                IterativeDepthFirstPaths::new(graph, source).map_err(paths_error_to_cli)?,
            ))
        } else {
            Ok(Self::Recursive(
                DepthFirstPaths::new(graph, source).map_err(paths_error_to_cli)?,
            ))
        }
    }

    pub(crate) fn has_path_to(&self, v: usize) -> Result<bool, CliError> {
        match self {
            Self::Recursive(f) => f.has_path_to(v),
            Self::Iterative(f) => f.has_path_to(v),
        }
        .map_err(graph_error_to_cli)
    }

    pub(crate) fn path_to(&self, v: usize) -> Result<Option<Vec<usize>>, CliError> {
        match self {
            Self::Recursive(f) => f.path_to(v),
            Self::Iterative(f) => f.path_to(v),
        }
        .map_err(graph_error_to_cli)
    }
}

/// Maps a finder construction error to its CLI equivalent.
fn paths_error_to_cli(e: PathsError) -> CliError {
    match e {
        PathsError::SourceOutOfRange { source, vertices } => CliError::VertexNotFound {
            vertex: source,
            vertices,
        },
    }
}

/// Maps a graph precondition error to its CLI equivalent.
fn graph_error_to_cli(e: GraphError) -> CliError {
    match e {
        GraphError::VertexOutOfRange { vertex, vertices } => {
            CliError::VertexNotFound { vertex, vertices }
        }
    }
}

/// Wraps a stdout write failure into a [`CliError`].
pub(crate) fn stdout_error(e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}
