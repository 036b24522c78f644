#![deny(clippy::print_stdout, clippy::print_stderr)]

//! An undirected graph ADT with recursive and iterative depth-first path
//! finders, plus a line-oriented text format for building graphs.
//!
//! The API follows the shape of the classic Sedgewick/Wayne graph course
//! material: a [`Graph`] holds insertion-ordered adjacency lists, and a path
//! finder built against a fixed source vertex answers reachability and
//! path-reconstruction queries. The two finder variants —
//! [`DepthFirstPaths`] (recursive) and [`IterativeDepthFirstPaths`]
//! (explicit stack) — produce identical results for every input.

pub mod graph;
pub mod paths;
pub mod reader;

pub use graph::{Graph, GraphError};
pub use paths::{DepthFirstPaths, IterativeDepthFirstPaths, PathsError};
pub use reader::{ReadError, read_graph, write_graph};

/// Returns the current version of the ungraph-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
