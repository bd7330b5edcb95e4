use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

use crate::domain::{AppError, ManifestValues, PackageManager};
use crate::ports::ManifestTool;

const NPM: &str = "npm";

/// `ManifestTool` backed by `npm pkg get` / `npm pkg set`.
#[derive(Debug, Clone)]
pub struct NpmManifest {
    root: PathBuf,
}

impl NpmManifest {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn run(&self, args: &[&str]) -> Result<String, AppError> {
        let command_line = format!("{} {}", NPM, args.join(" "));

        let output = Command::new(NPM)
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| AppError::ManifestCommand {
                command: command_line.clone(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::ManifestCommand {
                command: command_line,
                details: if stderr.is_empty() {
                    format!("exited with {}", output.status)
                } else {
                    stderr
                },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl ManifestTool for NpmManifest {
    fn read_values(&self) -> Result<ManifestValues, AppError> {
        let stdout = self.run(&["pkg", "get", "name", "description", "packageManager"])?;
        parse_pkg_get(&stdout)
    }

    fn write_fields(&self, fields: &[(&str, &str)]) -> Result<(), AppError> {
        let assignments: Vec<String> =
            fields.iter().map(|(key, value)| format!("{key}={value}")).collect();
        let mut args = vec!["pkg", "set"];
        args.extend(assignments.iter().map(String::as_str));
        self.run(&args).map(|_| ())
    }
}

/// Parse the JSON object printed by `npm pkg get <keys...>`.
///
/// Missing fields come back as `{}` or are omitted; both read as `None`.
fn parse_pkg_get(stdout: &str) -> Result<ManifestValues, AppError> {
    let value: Value = serde_json::from_str(stdout)?;
    let field = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);

    Ok(ManifestValues {
        name: field("name"),
        description: field("description"),
        package_manager: field("packageManager")
            .as_deref()
            .and_then(PackageManager::from_manifest_field),
    })
}
