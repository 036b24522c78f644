//! Clap CLI definition: root struct, subcommands, and shared argument types.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[cfg(test)]
mod tests;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`]. This avoids stringly-typed handling of the stdin
/// sentinel throughout the codebase.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text (default).
    Human,
    /// A single structured JSON object.
    Json,
}

/// The `ungraph` command line: inspect undirected graphs in the line-oriented
/// edge-list format and find depth-first paths in them.
#[derive(Parser)]
#[command(name = "ungraph", about = "Undirected graph inspection and DFS path finding")]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, default_value = "human", value_enum)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// All top-level subcommands exposed by the `ungraph` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Print a graph: vertex and edge counts, then each vertex's neighbors.
    Print {
        /// Path to a graph file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// List all vertices reachable from a source vertex.
    Reach {
        /// Path to a graph file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// The source vertex id.
        #[arg(value_name = "SOURCE")]
        source: usize,
        /// Use the explicit-stack traversal instead of the recursive one.
        ///
        /// The results are identical; the iterative form is safe on graphs
        /// deep enough to overflow the call stack.
        #[arg(long)]
        iterative: bool,
    },

    /// Find the depth-first path between two vertices.
    Path {
        /// Path to a graph file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// The source vertex id.
        #[arg(value_name = "SOURCE")]
        source: usize,
        /// The target vertex id.
        #[arg(value_name = "TARGET")]
        target: usize,
        /// Use the explicit-stack traversal instead of the recursive one.
        ///
        /// The results are identical; the iterative form is safe on graphs
        /// deep enough to overflow the call stack.
        #[arg(long)]
        iterative: bool,
    },

    /// Print the ungraph-core library version.
    Version,
}
