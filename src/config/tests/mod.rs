//! Unit tests for config module
//!
//! Tests the fixed path layout and repository root discovery.

#![allow(clippy::unwrap_used)]

use std::{fs, path::Path};

use tempfile::TempDir;

use crate::config::DocPaths;

#[test]
fn layout_below_repo_root() {
    let paths = DocPaths::from_repo_root("/srv/chart-repo");

    assert_eq!(
        paths.values,
        Path::new("/srv/chart-repo/charts/bunkerweb/values.yaml")
    );
    assert_eq!(
        paths.reference_output,
        Path::new("/srv/chart-repo/docs/values-reference.md")
    );
    assert_eq!(paths.guide_output, Path::new("/srv/chart-repo/docs/values.md"));
}

#[test]
fn outputs_share_a_directory() {
    let paths = DocPaths::from_repo_root("repo");

    assert_eq!(paths.reference_output.parent(), paths.guide_output.parent());
}

#[test]
fn discover_layout_follows_repo_root() {
    let paths = DocPaths::discover();

    assert!(paths.values.starts_with(DocPaths::repo_root()));
    assert!(paths.values.ends_with("charts/bunkerweb/values.yaml"));
}

#[test]
fn finds_nearest_ancestor_with_values_file() {
    let temp_dir = TempDir::new().unwrap();
    let values = DocPaths::from_repo_root(temp_dir.path()).values;
    fs::create_dir_all(values.parent().unwrap()).unwrap();
    fs::write(&values, "replicas: 1\n").unwrap();

    let exe = temp_dir.path().join("target").join("release").join("generate-docs");

    assert_eq!(
        DocPaths::find_repo_root(&exe).as_deref(),
        Some(temp_dir.path())
    );
}

#[test]
fn no_ancestor_with_values_file() {
    let temp_dir = TempDir::new().unwrap();

    assert_eq!(
        DocPaths::find_repo_root(&temp_dir.path().join("bin").join("generate-docs")),
        None
    );
}
