//! Integration tests for the public loading API.
//!
//! These tests drive each `ConfigLocation` strategy through the crate root
//! exports the way a consumer would.

use std::fs;
use std::path::PathBuf;

use project_config::{
    ConfigLocation, ErrorKind, PROJECT_CONFIG_FILE, PathResolver, decode, find_root,
    load_from_path, load_from_project_root,
};
use serde::Deserialize;
use tempfile::TempDir;

#[derive(Debug, Default, Deserialize, PartialEq)]
struct Paths {
    #[serde(default)]
    input_dir: String,
    #[serde(default)]
    output_dir: String,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
struct AppConfig {
    #[serde(default)]
    paths: Paths,
    #[serde(default)]
    tags: Vec<String>,
}

const APP_CONFIG: &str = r#"
tags = ["alpha", "beta"]

[paths]
input_dir = "data/in"
output_dir = "data/out"
"#;

/// The same project loaded by path and by discovery yields the same value.
#[test]
fn test_explicit_and_discovered_loads_agree() {
    let temp_dir = TempDir::new().unwrap();
    let marker = temp_dir.path().join(PROJECT_CONFIG_FILE);
    fs::write(&marker, APP_CONFIG).unwrap();
    let nested = temp_dir.path().join("src").join("bin");
    fs::create_dir_all(&nested).unwrap();

    let by_path: AppConfig = load_from_path(&marker).unwrap();
    let (root, by_discovery): (PathBuf, AppConfig) = load_from_project_root(&nested).unwrap();

    assert_eq!(root, temp_dir.path());
    assert_eq!(by_path, by_discovery);
    assert_eq!(by_path.tags, vec!["alpha", "beta"]);
    assert_eq!(by_path.paths.input_dir, "data/in");
}

/// `resolve` exposes the raw bytes without decoding them.
#[test]
fn test_resolve_returns_raw_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let marker = temp_dir.path().join(PROJECT_CONFIG_FILE);
    fs::write(&marker, "not = [valid").unwrap();

    let source = ConfigLocation::ExplicitPath(marker).resolve().unwrap();
    assert_eq!(source.bytes, b"not = [valid");

    let err = decode::<AppConfig>(&source.bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

/// A generic table works as a schema-less target.
#[test]
fn test_schema_less_table_target() {
    let temp_dir = TempDir::new().unwrap();
    let marker = temp_dir.path().join(PROJECT_CONFIG_FILE);
    fs::write(&marker, APP_CONFIG).unwrap();

    let table: toml::Table = load_from_path(&marker).unwrap();
    assert_eq!(table["paths"]["output_dir"].as_str(), Some("data/out"));
}

/// The resolver and the locator compose for relative inputs.
#[test]
fn test_resolver_anchors_relative_start_dir() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "").unwrap();
    fs::create_dir_all(temp_dir.path().join("a").join("b")).unwrap();

    let resolver = PathResolver::new(temp_dir.path());
    let start = resolver.resolve("a/./b/").unwrap();
    let found = find_root(&start).unwrap();

    assert_eq!(found.root, temp_dir.path());
    assert_eq!(
        resolver.resolve("../elsewhere").unwrap_err().kind(),
        ErrorKind::PathTraversal
    );
}
