//! Implementation of `ungraph reach <file> <source>`.
//!
//! Parses a graph file, builds a path finder from the given source vertex,
//! and writes the vertices reachable from it (the source included) to
//! stdout in increasing id order.
//!
//! Flags:
//! - `--iterative`: use the explicit-stack traversal. The reachable set is
//!   identical either way.
//!
//! Output (human mode): one vertex id per line.
//! Output (JSON mode): `{"vertices": [...], "count": N}`.
//!
//! Exit codes: 0 = success, 1 = source vertex not in the graph,
//! 2 = read/parse failure.

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Runs the `reach` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if `content` is not a well-formed graph file.
/// - [`CliError`] exit code 1 if `source` is not a vertex of the graph.
pub fn run(
    content: &str,
    source: usize,
    iterative: bool,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let graph = super::parse_graph(content)?;
    let finder = super::Finder::new(&graph, source, iterative)?;

    let mut reachable = Vec::new();
    for v in 0..graph.vertex_count() {
        if finder.has_path_to(v)? {
            reachable.push(v);
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &reachable),
        OutputFormat::Json => print_json(&mut out, &reachable),
    }
    .map_err(|e| super::stdout_error(&e))
}

/// Writes one vertex id per line.
fn print_human<W: std::io::Write>(w: &mut W, vertices: &[usize]) -> std::io::Result<()> {
    for v in vertices {
        writeln!(w, "{v}")?;
    }
    Ok(())
}

/// Writes `{"vertices": [...], "count": N}`.
fn print_json<W: std::io::Write>(w: &mut W, vertices: &[usize]) -> std::io::Result<()> {
    let obj = serde_json::json!({
        "vertices": vertices,
        "count": vertices.len(),
    });
    writeln!(w, "{obj}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
