//! Project-level filesystem operations.

use crate::domain::AppError;

/// Port for text file I/O scoped to the project root.
///
/// All `path` arguments are relative to the project root.
/// Implementations must reject paths that escape the root boundary.
pub trait ProjectFiles {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Check whether a file exists.
    fn file_exists(&self, path: &str) -> bool;
}
