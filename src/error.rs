//! Error types for the trellis scaffolding system.

use crate::materialize::Summary;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Specification validation and manifest parsing errors.
///
/// All variants are detected before any filesystem mutation begins.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("Duplicate child name {name:?} under {parent:?}")]
    DuplicateName { parent: String, name: String },

    #[error("Empty node name under {parent:?}")]
    EmptyName { parent: String },

    #[error("Node name {name:?} under {parent:?} is not a valid path component")]
    UnsafeName { parent: String, name: String },

    #[error("Invalid manifest value at {key:?}: {reason}")]
    InvalidManifest { key: String, reason: String },

    #[error("Manifest is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The filesystem operation that was being attempted when a walk failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterializeOp {
    CreateDir,
    WriteFile,
}

impl std::fmt::Display for MaterializeOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterializeOp::CreateDir => write!(f, "create directory"),
            MaterializeOp::WriteFile => write!(f, "write file"),
        }
    }
}

/// Underlying cause of a materialization failure at a specific path
#[derive(Debug, Error)]
pub enum MaterializeErrorKind {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("path exists but is not a {expected}")]
    TypeMismatch { expected: &'static str },
}

/// A directory or file operation failed and the walk aborted at `path`.
///
/// Entries created before the failure remain on disk and are reflected in
/// `partial`; re-invocation skips everything already written, so retry is the
/// intended recovery path.
#[derive(Debug, Error)]
#[error("Failed to {op} at {}: {kind}", path.display())]
pub struct MaterializeError {
    pub path: PathBuf,
    pub op: MaterializeOp,
    /// Summary accumulated before the failing node.
    pub partial: Summary,
    #[source]
    pub kind: MaterializeErrorKind,
}

impl MaterializeError {
    pub(crate) fn new(path: &Path, op: MaterializeOp, kind: MaterializeErrorKind) -> Self {
        Self {
            path: path.to_path_buf(),
            op,
            partial: Summary::default(),
            kind,
        }
    }
}

/// A traversal failure during the suffix-counting report pass
#[derive(Debug, Error)]
#[error("Report traversal failed at {}: {source}", path.display())]
pub struct ReportError {
    pub path: PathBuf,
    #[source]
    pub source: walkdir::Error,
}

impl ReportError {
    pub(crate) fn new(root: &Path, source: walkdir::Error) -> Self {
        let path = source
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());
        Self { path, source }
    }
}

/// Errors surfaced by the CLI layer
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Materialize(#[from] MaterializeError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}
