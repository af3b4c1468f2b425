//! Tree Specification
//!
//! An immutable, purely in-memory description of the desired output tree.
//! Each node is either a named sub-tree (directory) or a named leaf (file).
//! Constructed once, validated before any filesystem contact, and borrowed
//! read-only by the materializer.

pub mod builder;
pub mod manifest;
pub mod node;

pub use builder::GroupBuilder;
pub use node::{Group, TreeNode};
