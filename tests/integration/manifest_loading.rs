//! Integration tests for loading layout manifests from files

use std::fs;
use tempfile::TempDir;
use trellis::error::SpecError;
use trellis::materialize::Materializer;
use trellis::spec::manifest;

#[test]
fn test_load_manifest_from_file_and_materialize() {
    let temp_dir = TempDir::new().unwrap();
    let layout_path = temp_dir.path().join("layout.toml");
    fs::write(
        &layout_path,
        r#"
        [services.auth]
        handlers = ["login_handler.go", "logout_handler.go"]

        [services.billing]
        handlers = ["invoice_handler.go"]
        "#,
    )
    .unwrap();

    let spec = manifest::load_manifest(&layout_path).unwrap();
    let root = temp_dir.path().join("out");
    let summary = Materializer::new(&root).materialize(&spec).unwrap();

    assert_eq!(summary.files_created, 3);
    assert!(root.join("services/auth/handlers/login_handler.go").is_file());
    assert!(root.join("services/billing/handlers/invoice_handler.go").is_file());

    let content = fs::read_to_string(root.join("services/auth/handlers/login_handler.go")).unwrap();
    assert!(content.contains("package handlers"));
    assert!(content.contains("login handler"));
}

#[test]
fn test_missing_manifest_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");

    let result = manifest::load_manifest(&missing);
    assert!(matches!(
        result,
        Err(SpecError::Io { ref path, .. }) if path == &missing
    ));
}

#[test]
fn test_invalid_manifest_fails_before_any_mutation() {
    let temp_dir = TempDir::new().unwrap();
    let layout_path = temp_dir.path().join("layout.toml");
    fs::write(&layout_path, "pkg = [\"ok.go\", \"../escape.go\"]").unwrap();

    let result = manifest::load_manifest(&layout_path);
    assert!(matches!(result, Err(SpecError::UnsafeName { .. })));

    // Validation failed up front, so nothing exists to materialize into.
    let out = temp_dir.path().join("out");
    assert!(!out.exists());
}
