//! Trellis: Declarative Project Scaffolding
//!
//! Materializes a declarative tree specification onto the filesystem,
//! creating missing directories and populating missing files with templated
//! placeholder content. Existing files are never overwritten; repeated runs
//! over an unchanged specification perform no writes after the first.

pub mod cli;
pub mod error;
pub mod logging;
pub mod materialize;
pub mod report;
pub mod spec;
