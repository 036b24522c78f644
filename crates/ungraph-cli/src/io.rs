//! File and stdin reading for the `ungraph` binary.
//!
//! This module is the single entry point for all input I/O; `ungraph-core`
//! never touches the filesystem. I/O errors are converted to [`CliError`]
//! variants with exit code 2.

use std::io::Read as _;
use std::path::Path;

use crate::cli::PathOrStdin;
use crate::error::CliError;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reads the entire contents of `source` into a `String`.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) for:
/// - file not found
/// - permission denied
/// - any other I/O error, including invalid UTF-8
pub fn read_input(source: &PathOrStdin) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path),
        PathOrStdin::Stdin => read_stdin(),
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Reads a disk file, classifying not-found and permission errors.
fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| io_error_to_cli(&e, path))
}

/// Reads all of stdin.
fn read_stdin() -> Result<String, CliError> {
    let mut content = String::new();
    std::io::stdin()
        .lock()
        .read_to_string(&mut content)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;
    Ok(content)
}

/// Maps a `std::io::Error` for `path` to the matching [`CliError`] variant.
fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    if e.kind() == std::io::ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if e.kind() == std::io::ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
