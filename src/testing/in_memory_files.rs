//! In-memory project tree for port-level tests.

use std::collections::BTreeMap;
use std::io;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ProjectFiles;

/// In-memory `ProjectFiles` whose clones share one backing map.
///
/// Tests keep a clone to inspect what production code wrote.
#[derive(Clone, Debug, Default)]
pub struct InMemoryFiles {
    files: Arc<Mutex<BTreeMap<String, String>>>,
}

impl InMemoryFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
        self
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    /// Copy of every file, for before/after comparisons.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.files.lock().unwrap().clone()
    }
}

impl ProjectFiles for InMemoryFiles {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.content(path).ok_or_else(|| {
            AppError::from(io::Error::new(io::ErrorKind::NotFound, format!("{path} not found")))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}
