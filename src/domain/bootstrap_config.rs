//! Configuration values for a single bootstrap run.

use serde::Deserialize;

use super::PackageManager;

/// Resolved intent for the run. Built once, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub name: String,
    pub description: String,
    pub package_manager: PackageManager,
    pub interactive: bool,
}

/// Values supplied on the command line. `None` means "no override".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub name: Option<String>,
    pub description: Option<String>,
    pub package_manager: Option<PackageManager>,
    pub interactive: Option<bool>,
}

/// Values currently stored in the project manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestValues {
    pub name: Option<String>,
    pub description: Option<String>,
    pub package_manager: Option<PackageManager>,
}

/// Fallback values used when neither the CLI nor the manifest provides one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub name: String,
    pub description: String,
    pub package_manager: PackageManager,
    pub interactive: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            name: "react-starter".to_string(),
            description: "A React + Vite starter template".to_string(),
            package_manager: PackageManager::Npm,
            interactive: true,
        }
    }
}
