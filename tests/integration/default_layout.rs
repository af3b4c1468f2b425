//! End-to-end materialization of the embedded Go-monorepo layout

use std::fs;
use tempfile::TempDir;
use trellis::materialize::{Materializer, Summary};
use trellis::report::count_by_suffix;
use trellis::spec::manifest;

#[test]
fn test_default_layout_materializes_completely() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("go-elder");

    let spec = manifest::default_layout().unwrap();
    let (groups, leaves) = spec.node_counts();
    let summary = Materializer::new(&root).materialize(&spec).unwrap();

    // Every group and the root become directories, every leaf a file.
    assert_eq!(summary.dirs_created, groups + 1);
    assert_eq!(summary.files_created, leaves);
    assert_eq!(summary.files_skipped, 0);

    // Spot-check derived stub content deep in the tree.
    let loss = root.join("pkg/go-loss/elder/elder_loss_functions.go");
    let content = fs::read_to_string(&loss).unwrap();
    assert!(content.contains("// Package elder implements elder loss functions"));
    assert!(content.contains("package elder"));

    let kernel = root.join("pkg/go-kernel/heliomorphic/complex_analysis.go");
    let content = fs::read_to_string(&kernel).unwrap();
    assert!(content.contains("package heliomorphic"));
    assert!(content.contains("complex analysis"));
}

#[test]
fn test_default_layout_rerun_is_all_skips() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("go-elder");

    let spec = manifest::default_layout().unwrap();
    let (_, leaves) = spec.node_counts();
    let materializer = Materializer::new(&root);

    materializer.materialize(&spec).unwrap();
    let second = materializer.materialize(&spec).unwrap();

    assert_eq!(
        second,
        Summary {
            dirs_created: 0,
            files_created: 0,
            files_skipped: leaves,
        }
    );
}

#[test]
fn test_report_counts_generated_go_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("go-elder");

    let spec = manifest::default_layout().unwrap();
    let (_, leaves) = spec.node_counts();
    Materializer::new(&root).materialize(&spec).unwrap();

    assert_eq!(count_by_suffix(&root, ".go").unwrap(), leaves);
    assert_eq!(count_by_suffix(&root, ".md").unwrap(), 0);
}
