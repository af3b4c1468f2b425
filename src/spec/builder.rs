//! Fluent construction and validation of tree specifications

use crate::error::SpecError;
use crate::spec::node::{Group, TreeNode};
use std::collections::HashSet;

/// Builder for specification groups.
///
/// Children keep insertion order; validation happens once at `build`, before
/// any filesystem mutation (validate-then-execute, never partial validation).
#[derive(Debug, Default)]
pub struct GroupBuilder {
    children: Vec<(String, TreeNode)>,
}

impl GroupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a leaf child: a file to be created with templated content.
    pub fn file(mut self, name: impl Into<String>) -> Self {
        self.children.push((name.into(), TreeNode::Leaf));
        self
    }

    /// Add leaf children in order.
    pub fn files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.children.push((name.into(), TreeNode::Leaf));
        }
        self
    }

    /// Add a group child: a directory with its own children.
    pub fn group(mut self, name: impl Into<String>, child: GroupBuilder) -> Self {
        self.children
            .push((name.into(), TreeNode::Group(Group::from_parts(child.children))));
        self
    }

    /// Validate the whole tree and produce the root group.
    pub fn build(self) -> Result<Group, SpecError> {
        let root = Group::from_parts(self.children);
        validate_group(&root, "<root>")?;
        Ok(root)
    }
}

/// Validate a group subtree: child names must be non-empty, unique within
/// their group, and usable as a single path component.
pub(crate) fn validate_group(group: &Group, parent: &str) -> Result<(), SpecError> {
    let mut seen = HashSet::new();
    for (name, node) in group.children() {
        if name.is_empty() {
            return Err(SpecError::EmptyName {
                parent: parent.to_string(),
            });
        }
        if !is_safe_component(name) {
            return Err(SpecError::UnsafeName {
                parent: parent.to_string(),
                name: name.to_string(),
            });
        }
        if !seen.insert(name) {
            return Err(SpecError::DuplicateName {
                parent: parent.to_string(),
                name: name.to_string(),
            });
        }
        if let TreeNode::Group(child) = node {
            validate_group(child, name)?;
        }
    }
    Ok(())
}

/// A name is safe when joining it to a directory path cannot escape that
/// directory or span multiple components.
fn is_safe_component(name: &str) -> bool {
    name != "." && name != ".." && !name.chars().any(|c| matches!(c, '/' | '\\' | '\0'))
}
