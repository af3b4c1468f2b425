//! Property-based tests: idempotence, completeness, derivation determinism

use proptest::prelude::*;
use std::path::Path;
use tempfile::TempDir;
use trellis::materialize::template::FileTemplate;
use trellis::materialize::{Materializer, Summary};
use trellis::spec::{Group, GroupBuilder, TreeNode};

/// Two-level specifications: a handful of groups, each holding a handful of
/// leaves. Index suffixes keep names unique within their group.
fn arb_spec() -> impl Strategy<Value = Group> {
    let group = ("[a-z]{1,8}", prop::collection::vec("[a-z]{1,8}", 0..4));
    prop::collection::vec(group, 0..4).prop_map(|groups| {
        let mut root = GroupBuilder::new();
        for (i, (group_base, leaves)) in groups.into_iter().enumerate() {
            let mut child = GroupBuilder::new();
            for (j, leaf_base) in leaves.into_iter().enumerate() {
                child = child.file(format!("{leaf_base}_{j}.go"));
            }
            root = root.group(format!("{group_base}_{i}"), child);
        }
        root.build().unwrap()
    })
}

fn assert_tree_on_disk(dir: &Path, group: &Group) {
    for (name, node) in group.children() {
        let path = dir.join(name);
        match node {
            TreeNode::Group(child) => {
                assert!(path.is_dir(), "missing directory {path:?}");
                assert_tree_on_disk(&path, child);
            }
            TreeNode::Leaf => assert!(path.is_file(), "missing file {path:?}"),
        }
    }
}

proptest! {
    /// First run creates everything; second run creates nothing.
    #[test]
    fn prop_second_run_writes_nothing(spec in arb_spec()) {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("out");
        let materializer = Materializer::new(&root);

        let first = materializer.materialize(&spec).unwrap();
        let second = materializer.materialize(&spec).unwrap();

        let (groups, leaves) = spec.node_counts();
        prop_assert_eq!(first.dirs_created, groups + 1);
        prop_assert_eq!(first.files_created, leaves);
        prop_assert_eq!(first.files_skipped, 0);
        prop_assert_eq!(
            second,
            Summary {
                dirs_created: 0,
                files_created: 0,
                files_skipped: leaves,
            }
        );
    }

    /// After one successful run, every group is a directory and every leaf a
    /// file at its expected relative path.
    #[test]
    fn prop_every_node_materialized(spec in arb_spec()) {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("out");

        Materializer::new(&root).materialize(&spec).unwrap();

        assert_tree_on_disk(&root, &spec);
    }

    /// Template derivation is a pure function of (unit, leaf name).
    #[test]
    fn prop_derivation_deterministic(unit in "[a-z]{1,8}", stem in "[a-z][a-z_]{0,11}") {
        let leaf_name = format!("{stem}.go");
        let first = FileTemplate::derive(&unit, &leaf_name);
        let second = FileTemplate::derive(&unit, &leaf_name);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.unit, unit);
        prop_assert_eq!(first.description, stem.replace('_', " "));
        prop_assert!(!second.render().is_empty());
    }
}
