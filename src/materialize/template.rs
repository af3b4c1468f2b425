//! Stub template derivation and rendering
//!
//! Template inputs are pure derivations from a leaf name and its enclosing
//! group; nothing here is persisted. The stub text itself is incidental data,
//! kept in one place so the walk logic stays format-agnostic.

use std::path::Path;

/// Inputs for rendering a placeholder stub
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTemplate {
    /// Name of the enclosing group (the "package" context)
    pub unit: String,
    /// Leaf file stem with underscores replaced by spaces
    pub description: String,
}

impl FileTemplate {
    /// Derive template inputs from a leaf and its enclosing group name.
    ///
    /// The description is the leaf's file name with its extension stripped
    /// and `_` replaced by a space: `elder_loss_functions.go` under `elder`
    /// derives the description `elder loss functions`.
    pub fn derive(unit: &str, leaf_name: &str) -> Self {
        let stem = Path::new(leaf_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| leaf_name.to_string());

        Self {
            unit: unit.to_string(),
            description: stem.replace('_', " "),
        }
    }

    /// Render the placeholder stub. Deterministic in (unit, description).
    pub fn render(&self) -> String {
        format!(
            r#"// Package {unit} implements {description}
package {unit}

// Placeholder implementation for {description}
// This file contains the basic structure for the {unit} package
type Placeholder struct {{
    ID string
}}

// NewPlaceholder creates a new placeholder instance
func NewPlaceholder(id string) *Placeholder {{
    return &Placeholder{{
        ID: id,
    }}
}}
"#,
            unit = self.unit,
            description = self.description,
        )
    }
}
