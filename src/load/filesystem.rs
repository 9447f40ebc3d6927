use crate::error::{Result, ScorecardError};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(ScorecardError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| ScorecardError::DataParse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// `*.json` files below `dir`, sorted by path. A missing directory yields no files.
pub fn list_json_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn list_json_files_is_sorted_and_filtered() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("nested")).expect("nested dir should create");
        fs::write(dir.path().join("b.json"), "{}").expect("file should write");
        fs::write(dir.path().join("a.json"), "{}").expect("file should write");
        fs::write(dir.path().join("nested/c.json"), "{}").expect("file should write");
        fs::write(dir.path().join("notes.md"), "#").expect("file should write");

        let names: Vec<String> = list_json_files(dir.path())
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json", "c.json"]);
    }

    #[test]
    fn list_json_files_tolerates_missing_dir() {
        let dir = TempDir::new().expect("temp dir should be created");
        assert!(list_json_files(&dir.path().join("absent")).is_empty());
    }

    #[test]
    fn read_json_reports_path_on_parse_failure() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").expect("file should write");
        let err = read_json::<serde_json::Value>(&path).expect_err("parse should fail");
        assert!(err.to_string().contains("broken.json"));
    }
}
