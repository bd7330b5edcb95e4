use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use super::AppError;

/// Supported JavaScript package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] =
        [PackageManager::Npm, PackageManager::Pnpm, PackageManager::Yarn];

    pub fn as_str(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Install command for a one-time local workspace setup.
    pub fn workspace_install_command(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm install",
            PackageManager::Pnpm => "pnpm install",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Install command for CI pipelines. Must honor the lockfile.
    pub fn ci_install_command(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm ci",
            PackageManager::Pnpm => "pnpm install",
            PackageManager::Yarn => "yarn install --frozen-lockfile",
        }
    }

    /// Command that starts the dev server.
    pub fn dev_command(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run dev",
            PackageManager::Pnpm => "pnpm dev",
            PackageManager::Yarn => "yarn dev",
        }
    }

    /// Interpret the `packageManager` field of `package.json` (e.g. `pnpm@9.1.0`).
    ///
    /// Unknown managers yield `None`; the field is advisory.
    pub fn from_manifest_field(field: &str) -> Option<Self> {
        let name = field.split('@').next().unwrap_or_default().trim();
        name.parse().ok()
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        PackageManager::ALL
            .into_iter()
            .find(|pm| pm.as_str() == value)
            .ok_or_else(|| AppError::InvalidPackageManager { value: value.to_string() })
    }
}

impl<'de> Deserialize<'de> for PackageManager {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_names_only() {
        assert_eq!("npm".parse::<PackageManager>().unwrap(), PackageManager::Npm);
        assert_eq!("pnpm".parse::<PackageManager>().unwrap(), PackageManager::Pnpm);
        assert_eq!("yarn".parse::<PackageManager>().unwrap(), PackageManager::Yarn);

        for invalid in ["Yarn", " npm", "bun", ""] {
            assert!(matches!(
                invalid.parse::<PackageManager>(),
                Err(AppError::InvalidPackageManager { .. })
            ));
        }
    }

    #[test]
    fn ci_commands_are_lockfile_strict() {
        assert_eq!(PackageManager::Npm.ci_install_command(), "npm ci");
        assert_eq!(PackageManager::Pnpm.ci_install_command(), "pnpm install");
        assert_eq!(PackageManager::Yarn.ci_install_command(), "yarn install --frozen-lockfile");
    }

    #[test]
    fn workspace_commands_use_plain_install() {
        assert_eq!(PackageManager::Npm.workspace_install_command(), "npm install");
        assert_eq!(PackageManager::Pnpm.workspace_install_command(), "pnpm install");
        assert_eq!(PackageManager::Yarn.workspace_install_command(), "yarn");
    }

    #[test]
    fn manifest_field_strips_version() {
        assert_eq!(PackageManager::from_manifest_field("pnpm@9.1.0"), Some(PackageManager::Pnpm));
        assert_eq!(PackageManager::from_manifest_field("yarn"), Some(PackageManager::Yarn));
        assert_eq!(PackageManager::from_manifest_field("bun@1.1.0"), None);
    }
}
