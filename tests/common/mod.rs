//! Common test utilities

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use timesheet_gen::commands::GenerateOptions;

/// Create an empty project directory
pub fn create_test_project() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let project_root = temp_dir.path().to_path_buf();
    (temp_dir, project_root)
}

/// Write a timesheet.toml into the project root
pub fn write_config(project_root: &Path, contents: &str) {
    fs::write(project_root.join("timesheet.toml"), contents).expect("Failed to write config");
}

/// Options with explicit start and end dates
pub fn range_options(start: &str, end: &str) -> GenerateOptions {
    GenerateOptions {
        start: Some(start.to_string()),
        end: Some(end.to_string()),
        ..GenerateOptions::default()
    }
}

/// Names of all files in a directory
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read dir")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
