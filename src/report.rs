//! Read-only reporting over materialized output

use crate::error::ReportError;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Count regular files under `root` whose name ends with `suffix`.
///
/// Walks the on-disk tree, not the specification, so it reflects whatever a
/// run (or the user) actually produced. Any traversal error aborts the count
/// rather than silently under-reporting.
pub fn count_by_suffix(root: &Path, suffix: &str) -> Result<u64, ReportError> {
    let mut count = 0u64;

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| ReportError::new(root, e))?;
        if entry.file_type().is_file() && entry.file_name().to_string_lossy().ends_with(suffix) {
            count += 1;
        }
    }

    debug!(root = %root.display(), suffix, count, "Counted files by suffix");
    Ok(count)
}
