//! CLI output: error mapping from domain errors to the CLI surface.

use crate::error::CliError;

/// Map domain errors to a string for CLI output.
///
/// A materialization failure includes the partial progress, since everything
/// already written stays on disk and a re-run resumes from there.
pub fn map_error(e: &CliError) -> String {
    match e {
        CliError::Materialize(err) => format!(
            "{}\nPartial progress: {} directories, {} files created, {} skipped. Re-run to resume.",
            err, err.partial.dirs_created, err.partial.files_created, err.partial.files_skipped
        ),
        other => other.to_string(),
    }
}
