use crate::domain::{AppError, ManifestValues};

/// Access to the project manifest through its own tooling.
///
/// Implementations never hand-parse the manifest structure.
pub trait ManifestTool {
    /// Read the stored name, description and package manager.
    fn read_values(&self) -> Result<ManifestValues, AppError>;

    /// Set scalar string fields.
    fn write_fields(&self, fields: &[(&str, &str)]) -> Result<(), AppError>;
}
