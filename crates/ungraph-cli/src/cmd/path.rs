//! Implementation of `ungraph path <file> <source> <target>`.
//!
//! Parses a graph file, builds a path finder from `source`, and writes the
//! discovered path to `target` to stdout.
//!
//! Flags:
//! - `--iterative`: use the explicit-stack traversal. The path is identical
//!   either way.
//!
//! Output (human mode): the path on one line with vertex ids separated by
//! ` -> `.
//! Output (JSON mode): `{"path": [...]}`.
//!
//! Exit codes: 0 = path found, 1 = no path / vertex not in the graph,
//! 2 = read/parse failure.

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Runs the `path` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if `content` is not a well-formed graph file.
/// - [`CliError`] exit code 1 if either vertex is not in the graph, or no
///   path exists from `source` to `target`.
pub fn run(
    content: &str,
    source: usize,
    target: usize,
    iterative: bool,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let graph = super::parse_graph(content)?;
    let finder = super::Finder::new(&graph, source, iterative)?;

    let path = finder
        .path_to(target)?
        .ok_or(CliError::NoPath { source, target })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &path),
        OutputFormat::Json => print_json(&mut out, &path),
    }
    .map_err(|e| super::stdout_error(&e))
}

/// Writes the path on one line, vertex ids separated by ` -> `.
fn print_human<W: std::io::Write>(w: &mut W, path: &[usize]) -> std::io::Result<()> {
    let rendered: Vec<String> = path.iter().map(ToString::to_string).collect();
    writeln!(w, "{}", rendered.join(" -> "))
}

/// Writes `{"path": [...]}`.
fn print_json<W: std::io::Write>(w: &mut W, path: &[usize]) -> std::io::Result<()> {
    let obj = serde_json::json!({ "path": path });
    writeln!(w, "{obj}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
