//! Common test utilities for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory and its canonical path.
///
/// The directory is removed when the returned `TempDir` is dropped.
#[allow(dead_code)]
pub fn workspace() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = temp.path().canonicalize().unwrap();
    (temp, root)
}

/// Write `contents` to `root/relative`, creating parent directories.
#[allow(dead_code)]
pub fn write_file(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

/// A small project tree:
///
/// ```text
/// project/
///   .git/config
///   docs/guide.md
///   docs/old/notes.txt
///   src/main.rs
///   README.md
/// ```
#[allow(dead_code)]
pub fn project_tree(root: &Path) -> PathBuf {
    let project = root.join("project");
    write_file(&project, ".git/config", "[core]");
    write_file(&project, "docs/guide.md", "# Guide");
    write_file(&project, "docs/old/notes.txt", "notes");
    write_file(&project, "src/main.rs", "fn main() {}");
    write_file(&project, "README.md", "# Project");
    project
}
