//! Idempotent tree materializer
//!
//! Walks a tree specification depth-first and reconciles it against on-disk
//! state: missing directories are created, missing files are populated with
//! templated stubs, and anything already present is left untouched. Repeated
//! runs over an unchanged specification perform no writes after the first.

pub mod template;

use crate::error::{MaterializeError, MaterializeErrorKind, MaterializeOp};
use crate::spec::{Group, TreeNode};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use template::FileTemplate;
use tracing::{debug, info, instrument, trace};

/// Counts of filesystem mutations performed by one materialization run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub dirs_created: u64,
    pub files_created: u64,
    pub files_skipped: u64,
}

/// Walks a specification and creates whatever is missing under a root path.
///
/// Never deletes, renames, or overwrites. A failed run leaves everything
/// written so far in place; re-invocation skips it and completes the rest.
/// Concurrent invocations against the same root are out of contract.
pub struct Materializer {
    root: PathBuf,
    dry_run: bool,
}

impl Materializer {
    /// Create a materializer for the given target root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
        }
    }

    /// Walk without mutating; the summary reports what a real run would do.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Materialize the specification under the root path.
    ///
    /// Depth-first, pre-order. On failure the walk aborts at the first
    /// failing node and the error carries the partial summary accumulated
    /// up to that point.
    #[instrument(skip(self, spec), fields(root = %self.root.display(), dry_run = self.dry_run))]
    pub fn materialize(&self, spec: &Group) -> Result<Summary, MaterializeError> {
        let start = Instant::now();
        info!("Starting materialization");

        let mut summary = Summary::default();
        let unit = root_unit_name(&self.root);

        let result = (|| {
            self.ensure_dir(&self.root, &mut summary)?;
            self.walk_group(&self.root, &unit, spec, &mut summary)
        })();

        match result {
            Ok(()) => {
                info!(
                    dirs_created = summary.dirs_created,
                    files_created = summary.files_created,
                    files_skipped = summary.files_skipped,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Materialization completed"
                );
                Ok(summary)
            }
            Err(mut error) => {
                error.partial = summary;
                Err(error)
            }
        }
    }

    fn walk_group(
        &self,
        dir: &Path,
        unit: &str,
        group: &Group,
        summary: &mut Summary,
    ) -> Result<(), MaterializeError> {
        for (name, node) in group.children() {
            let path = dir.join(name);
            match node {
                TreeNode::Group(child) => {
                    // A pre-existing directory does not short-circuit its
                    // children: resuming a partial run depends on this.
                    self.ensure_dir(&path, summary)?;
                    self.walk_group(&path, name, child, summary)?;
                }
                TreeNode::Leaf => self.ensure_file(&path, unit, name, summary)?,
            }
        }
        Ok(())
    }

    fn ensure_dir(&self, path: &Path, summary: &mut Summary) -> Result<(), MaterializeError> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => {
                trace!(path = %path.display(), "Directory already present");
                Ok(())
            }
            Ok(_) => Err(MaterializeError::new(
                path,
                MaterializeOp::CreateDir,
                MaterializeErrorKind::TypeMismatch {
                    expected: "directory",
                },
            )),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if !self.dry_run {
                    fs::create_dir_all(path).map_err(|e| {
                        MaterializeError::new(path, MaterializeOp::CreateDir, e.into())
                    })?;
                }
                debug!(path = %path.display(), "Created directory");
                summary.dirs_created += 1;
                Ok(())
            }
            Err(e) => Err(MaterializeError::new(
                path,
                MaterializeOp::CreateDir,
                e.into(),
            )),
        }
    }

    fn ensure_file(
        &self,
        path: &Path,
        unit: &str,
        leaf_name: &str,
        summary: &mut Summary,
    ) -> Result<(), MaterializeError> {
        match fs::symlink_metadata(path) {
            Ok(meta) if meta.is_dir() => Err(MaterializeError::new(
                path,
                MaterializeOp::WriteFile,
                MaterializeErrorKind::TypeMismatch { expected: "file" },
            )),
            Ok(_) => {
                // No read, no comparison: an existing entry is the user's.
                trace!(path = %path.display(), "File already present, skipping");
                summary.files_skipped += 1;
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.write_stub(path, unit, leaf_name, summary)
            }
            Err(e) => Err(MaterializeError::new(
                path,
                MaterializeOp::WriteFile,
                e.into(),
            )),
        }
    }

    fn write_stub(
        &self,
        path: &Path,
        unit: &str,
        leaf_name: &str,
        summary: &mut Summary,
    ) -> Result<(), MaterializeError> {
        let template = FileTemplate::derive(unit, leaf_name);

        if self.dry_run {
            debug!(path = %path.display(), unit = %template.unit, "Would create stub file");
            summary.files_created += 1;
            return Ok(());
        }

        // create_new keeps the no-overwrite contract even when a file appears
        // between the existence check and the open.
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                trace!(path = %path.display(), "File appeared during walk, skipping");
                summary.files_skipped += 1;
                return Ok(());
            }
            Err(e) => {
                return Err(MaterializeError::new(
                    path,
                    MaterializeOp::WriteFile,
                    e.into(),
                ))
            }
        };

        file.write_all(template.render().as_bytes())
            .map_err(|e| MaterializeError::new(path, MaterializeOp::WriteFile, e.into()))?;

        debug!(path = %path.display(), unit = %template.unit, "Created stub file");
        summary.files_created += 1;
        Ok(())
    }
}

/// Unit name for leaves directly under the spec root: the root directory's
/// base name, falling back to `root` when the path has none (e.g. `/` or `.`).
fn root_unit_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "root".to_string())
}
