//! CLI error types with associated exit codes.
//!
//! [`CliError`] is the top-level error type for the `ungraph` binary. Every
//! variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
//!
//! - Exit code **2** — input failure: the tool could not read or parse the
//!   graph file at all. These errors terminate early before any traversal
//!   runs.
//! - Exit code **1** — logical failure: the tool ran to completion but the
//!   result is a well-defined failure (vertex not in the graph, no path).

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `ungraph` CLI can produce.
///
/// Use [`CliError::exit_code`] to obtain the exit code associated with each
/// variant. [`CliError::message`] returns the human-readable error string
/// that should be printed to stderr before exiting.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source (`"-"` for stdin, or the
        /// filesystem path, or `"stdout"`).
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not a well-formed graph in the line-oriented format.
    FormatError {
        /// The reader's description of the problem.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// A vertex id given on the command line is not a vertex of the graph.
    VertexNotFound {
        /// The offending vertex id.
        vertex: usize,
        /// The graph's vertex count.
        vertices: usize,
    },

    /// No path exists between the requested vertices.
    NoPath {
        /// The source vertex.
        source: usize,
        /// The unreachable target vertex.
        target: usize,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2` — input failure (file not found, format error, etc.).
    /// - `1` — logical failure (vertex not found, no path).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::FormatError { .. } => 2,

            Self::VertexNotFound { .. } | Self::NoPath { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::FormatError { detail } => {
                format!("error: invalid graph file: {detail}")
            }
            Self::VertexNotFound { vertex, vertices } => {
                format!("error: vertex {vertex} is not in the graph (vertices: 0..{vertices})")
            }
            Self::NoPath { source, target } => {
                format!("error: no path from {source} to {target}")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
