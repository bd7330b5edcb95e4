//! Filesystem adapter for `ProjectFiles`.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectFiles;

/// Filesystem-backed project rooted at a directory.
///
/// Path operations are validated against the root to prevent directory traversal.
#[derive(Debug, Clone)]
pub struct ProjectFilesystem {
    root: PathBuf,
}

impl ProjectFilesystem {
    /// Create a project rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a project rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, AppError> {
        let full_path = self.root.join(path);
        if !normalize_path(&full_path).starts_with(normalize_path(&self.root)) {
            return Err(AppError::InvalidPath(format!("'{}' escapes the project root", path)));
        }
        Ok(full_path)
    }
}

impl ProjectFiles for ProjectFilesystem {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.resolve(path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn file_exists(&self, path: &str) -> bool {
        self.resolve(path).map(|full_path| full_path.is_file()).unwrap_or(false)
    }
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use assert_fs::prelude::*;

    use super::*;

    #[test]
    fn reads_and_writes_relative_to_root() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("README.md").write_str("# Old\n").unwrap();
        let files = ProjectFilesystem::new(temp.path().to_path_buf());

        assert_eq!(files.read_file("README.md").unwrap(), "# Old\n");
        files.write_file(".workspace/setup.json", "{}\n").unwrap();
        temp.child(".workspace/setup.json").assert("{}\n");
        assert!(files.file_exists(".workspace/setup.json"));
        assert!(!files.file_exists(".workspace"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp = assert_fs::TempDir::new().unwrap();
        let files = ProjectFilesystem::new(temp.path().to_path_buf());
        let err = files.read_file(".env").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn rejects_traversal_outside_root() {
        let temp = assert_fs::TempDir::new().unwrap();
        let files = ProjectFilesystem::new(temp.path().join("project"));

        assert!(matches!(files.write_file("../outside.txt", "x"), Err(AppError::InvalidPath(_))));
        assert!(matches!(
            files.read_file("nonexistent/../../outside.txt"),
            Err(AppError::InvalidPath(_))
        ));
        assert!(!files.file_exists("../project/../outside.txt"));
        temp.child("outside.txt").assert(predicates::path::missing());
    }

    #[test]
    fn allows_parent_components_that_stay_inside() {
        let temp = assert_fs::TempDir::new().unwrap();
        let files = ProjectFilesystem::new(temp.path().to_path_buf());
        files.write_file("docs/../notes.txt", "ok").unwrap();
        temp.child("notes.txt").assert("ok");
    }
}
