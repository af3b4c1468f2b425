//! CLI presentation: text formatters for summaries and reports.

use crate::materialize::Summary;
use std::path::Path;

pub fn format_summary(summary: &Summary, dry_run: bool) -> String {
    let mut output = if dry_run {
        String::from("Dry run (nothing written):\n")
    } else {
        String::from("Materialization complete:\n")
    };
    output.push_str(&format!("  directories created: {}\n", summary.dirs_created));
    output.push_str(&format!("  files created:       {}\n", summary.files_created));
    output.push_str(&format!("  files skipped:       {}\n", summary.files_skipped));
    output
}

pub fn format_report(root: &Path, suffix: &str, count: u64) -> String {
    format!("{} file(s) matching '{}' under {}", count, suffix, root.display())
}

pub fn format_validation(groups: u64, leaves: u64) -> String {
    format!("Layout is valid: {} group(s), {} file(s)", groups, leaves)
}
