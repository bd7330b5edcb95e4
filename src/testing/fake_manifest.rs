use std::sync::Mutex;

use crate::domain::{AppError, ManifestValues};
use crate::ports::ManifestTool;

/// Records manifest reads and writes instead of running `npm`.
#[derive(Default)]
pub struct FakeManifest {
    values: ManifestValues,
    fail_read: bool,
    fail_write: bool,
    reads: Mutex<usize>,
    writes: Mutex<Vec<Vec<(String, String)>>>,
}

impl FakeManifest {
    pub fn with_values(values: ManifestValues) -> Self {
        Self { values, ..Self::default() }
    }

    pub fn failing_read() -> Self {
        Self { fail_read: true, ..Self::default() }
    }

    pub fn failing_write() -> Self {
        Self { fail_write: true, ..Self::default() }
    }

    pub fn reads(&self) -> usize {
        *self.reads.lock().unwrap()
    }

    /// Field sets passed to each `write_fields` call, in order.
    pub fn writes(&self) -> Vec<Vec<(String, String)>> {
        self.writes.lock().unwrap().clone()
    }
}

impl ManifestTool for FakeManifest {
    fn read_values(&self) -> Result<ManifestValues, AppError> {
        *self.reads.lock().unwrap() += 1;
        if self.fail_read {
            return Err(AppError::ManifestCommand {
                command: "npm pkg get name description packageManager".to_string(),
                details: "npm not found".to_string(),
            });
        }
        Ok(self.values.clone())
    }

    fn write_fields(&self, fields: &[(&str, &str)]) -> Result<(), AppError> {
        if self.fail_write {
            return Err(AppError::ManifestCommand {
                command: "npm pkg set".to_string(),
                details: "EACCES: permission denied".to_string(),
            });
        }
        self.writes.lock().unwrap().push(
            fields.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect(),
        );
        Ok(())
    }
}
