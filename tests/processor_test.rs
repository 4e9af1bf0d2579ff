use std::fs;
use std::path::PathBuf;

use scaffolder::config::Template;
use scaffolder::error::Error;
use scaffolder::processor::{ensure_output_dir, generate, materialize, write_blueprint};
use scaffolder::renderer::MiniJinjaRenderer;
use scaffolder::templates::{Blueprint, FileSpec, TemplateContext};
use tempfile::TempDir;

fn file(path: &str, content: &str) -> FileSpec {
    FileSpec { path: PathBuf::from(path), content: content.to_string() }
}

#[test]
fn test_ensure_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    assert!(ensure_output_dir(path.join("new_dir")).is_ok());
    assert!(matches!(ensure_output_dir(path), Err(Error::DirectoryExists { .. })));
}

#[test]
fn test_write_blueprint_creates_parents() {
    let temp_dir = TempDir::new().unwrap();
    let blueprint = Blueprint {
        directories: vec![PathBuf::from("empty/nested")],
        files: vec![file("deep/inside/file.txt", "content")],
    };

    write_blueprint(temp_dir.path(), &blueprint).unwrap();

    assert!(temp_dir.path().join("empty/nested").is_dir());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("deep/inside/file.txt")).unwrap(),
        "content"
    );
}

#[test]
fn test_failed_generation_leaves_nothing_behind() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("demo");
    // the second write targets a path that is already a directory
    let blueprint = Blueprint {
        directories: vec![PathBuf::from("taken")],
        files: vec![file("first.txt", "ok"), file("taken", "boom")],
    };

    assert!(matches!(materialize(&root, &blueprint), Err(Error::IoError(_))));
    assert!(!root.exists());
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_escaping_blueprint_is_rejected_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("demo");
    let blueprint = Blueprint { directories: vec![], files: vec![file("../evil.txt", "")] };

    assert!(matches!(materialize(&root, &blueprint), Err(Error::InvalidPath { .. })));
    assert!(!root.exists());
    assert!(!temp_dir.path().join("evil.txt").exists());
}

#[test]
fn test_second_generation_keeps_first_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("demo");
    let renderer = MiniJinjaRenderer::new();
    let first = TemplateContext::new("demo", "First", "2024-01-15");
    let second = TemplateContext::new("demo", "Second", "2024-01-16");

    generate(&root, Template::Basic, &first, &renderer).unwrap();
    let readme = fs::read_to_string(root.join("README.md")).unwrap();

    assert!(matches!(
        generate(&root, Template::Web, &second, &renderer),
        Err(Error::DirectoryExists { .. })
    ));
    assert_eq!(fs::read_to_string(root.join("README.md")).unwrap(), readme);
    assert!(!root.join("src/index.html").exists());
}
