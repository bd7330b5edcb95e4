use std::io;

use thiserror::Error;

/// Library-wide error type for bootstrap operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Package manager value is not one of the supported managers.
    #[error("Invalid package manager '{value}': must be one of npm, pnpm, yarn")]
    InvalidPackageManager { value: String },

    /// The manifest command (`npm pkg ...`) failed.
    #[error("Manifest command '{command}' failed: {details}")]
    ManifestCommand { command: String, details: String },

    /// Reading an answer from the user failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Path escapes the project root or is otherwise unusable.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// README section template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Built-in text pattern failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Whether this error is an I/O "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Io(err) if err.kind() == io::ErrorKind::NotFound)
    }
}
