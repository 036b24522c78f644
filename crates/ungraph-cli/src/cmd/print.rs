//! Implementation of `ungraph print <file>`.
//!
//! Parses a graph file and writes its diagnostic rendering to stdout.
//!
//! Output (human mode): the graph's `Display` form — a header line with the
//! vertex and edge counts, then one line per vertex listing its neighbors in
//! adjacency order.
//! Output (JSON mode): `{"vertices": V, "edges": E, "adjacency": [[...], ...]}`.
//!
//! Exit codes: 0 = success, 2 = read/parse failure.

use ungraph_core::Graph;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Runs the `print` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if `content` is not a well-formed graph file
///   or stdout cannot be written.
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    let graph = super::parse_graph(content)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &graph),
        OutputFormat::Json => print_json(&mut out, &graph),
    }
    .map_err(|e| super::stdout_error(&e))
}

/// Writes the graph's `Display` rendering.
fn print_human<W: std::io::Write>(w: &mut W, graph: &Graph) -> std::io::Result<()> {
    write!(w, "{graph}")
}

/// Writes `{"vertices": V, "edges": E, "adjacency": [[...], ...]}`.
fn print_json<W: std::io::Write>(w: &mut W, graph: &Graph) -> std::io::Result<()> {
    let adjacency: Vec<serde_json::Value> = (0..graph.vertex_count())
        .map(|v| {
            // In range by construction of the loop bound.
            let neighbors = graph.neighbors(v).unwrap_or(&[]);
            serde_json::Value::Array(
                neighbors
                    .iter()
                    .map(|&w| serde_json::Value::Number(w.into()))
                    .collect(),
            )
        })
        .collect();

    let obj = serde_json::json!({
        "vertices": graph.vertex_count(),
        "edges": graph.edge_count(),
        "adjacency": adjacency,
    });
    writeln!(w, "{obj}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
