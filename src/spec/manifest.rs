//! Layout manifests: declarative TOML specifications
//!
//! A TOML table maps to a group (directory); an array of strings maps to a
//! group whose entries are leaves (files). The default Go-monorepo layout is
//! embedded in the binary at compile time.

use crate::error::SpecError;
use crate::spec::builder::validate_group;
use crate::spec::node::{Group, TreeNode};
use std::path::Path;
use tracing::debug;

/// Default layout embedded at compile time
pub const DEFAULT_LAYOUT: &str = include_str!("../../layouts/go-monorepo.toml");

/// Parse a TOML manifest into a validated specification root.
pub fn parse_manifest(text: &str) -> Result<Group, SpecError> {
    let table: toml::Table = text.parse()?;
    let root = group_from_table(&table, "")?;
    // TOML tables cannot carry duplicate keys, but file arrays can, and all
    // names still need to be usable as path components.
    validate_group(&root, "<root>")?;

    let (groups, leaves) = root.node_counts();
    debug!(groups, leaves, "Parsed layout manifest");
    Ok(root)
}

/// Load and parse a manifest from a file.
pub fn load_manifest(path: &Path) -> Result<Group, SpecError> {
    let text = std::fs::read_to_string(path).map_err(|source| SpecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(&text)
}

/// The built-in layout. Infallible: the embedded manifest is validated by
/// tests, so a parse failure here is a build defect.
pub fn default_layout() -> Result<Group, SpecError> {
    parse_manifest(DEFAULT_LAYOUT)
}

fn group_from_table(table: &toml::Table, key_path: &str) -> Result<Group, SpecError> {
    let mut children = Vec::new();
    for (name, value) in table {
        let child_key = join_key(key_path, name);
        match value {
            toml::Value::Table(child) => {
                children.push((
                    name.clone(),
                    TreeNode::Group(group_from_table(child, &child_key)?),
                ));
            }
            toml::Value::Array(items) => {
                let mut leaves = Vec::new();
                for item in items {
                    match item {
                        toml::Value::String(file_name) => {
                            leaves.push((file_name.clone(), TreeNode::Leaf));
                        }
                        other => {
                            return Err(SpecError::InvalidManifest {
                                key: child_key,
                                reason: format!(
                                    "expected file name string, found {}",
                                    other.type_str()
                                ),
                            });
                        }
                    }
                }
                children.push((name.clone(), TreeNode::Group(Group::from_parts(leaves))));
            }
            other => {
                return Err(SpecError::InvalidManifest {
                    key: child_key,
                    reason: format!(
                        "expected table or array of file names, found {}",
                        other.type_str()
                    ),
                });
            }
        }
    }
    Ok(Group::from_parts(children))
}

fn join_key(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}
