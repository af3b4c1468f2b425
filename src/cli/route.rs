//! CLI route: single route table dispatching to domain services and presentation.

use crate::cli::parse::Commands;
use crate::cli::presentation;
use crate::error::CliError;
use crate::materialize::Materializer;
use crate::report;
use crate::spec::manifest;
use crate::spec::Group;
use serde_json::json;
use std::path::Path;

/// Execute a parsed command and render its output.
pub fn execute(command: &Commands) -> Result<String, CliError> {
    match command {
        Commands::Materialize {
            root,
            layout,
            dry_run,
            format,
        } => {
            let spec = load_layout(layout.as_deref())?;
            let summary = Materializer::new(root.clone())
                .dry_run(*dry_run)
                .materialize(&spec)?;

            if format == "json" {
                Ok(serde_json::to_string_pretty(&summary)?)
            } else {
                Ok(presentation::format_summary(&summary, *dry_run))
            }
        }
        Commands::Report {
            root,
            suffix,
            format,
        } => {
            let count = report::count_by_suffix(root, suffix)?;

            if format == "json" {
                let value = json!({
                    "root": root.display().to_string(),
                    "suffix": suffix,
                    "count": count,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            } else {
                Ok(presentation::format_report(root, suffix, count))
            }
        }
        Commands::Validate { layout } => {
            let spec = load_layout(layout.as_deref())?;
            let (groups, leaves) = spec.node_counts();
            Ok(presentation::format_validation(groups, leaves))
        }
    }
}

fn load_layout(layout: Option<&Path>) -> Result<Group, CliError> {
    let spec = match layout {
        Some(path) => manifest::load_manifest(path)?,
        None => manifest::default_layout()?,
    };
    Ok(spec)
}
