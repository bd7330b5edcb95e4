use serde::{Deserialize, Serialize};

use crate::domain::{AppError, PackageManager};

/// Workspace setup file. The tool owns this file outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSetup {
    #[serde(rename = "setupCommands")]
    pub setup_commands: Vec<String>,
}

impl WorkspaceSetup {
    pub fn for_manager(package_manager: PackageManager) -> Self {
        Self { setup_commands: vec![package_manager.workspace_install_command().to_string()] }
    }
}

/// Pretty-printed setup file content with a trailing newline.
pub fn render_workspace_config(package_manager: PackageManager) -> Result<String, AppError> {
    let mut rendered = serde_json::to_string_pretty(&WorkspaceSetup::for_manager(package_manager))?;
    rendered.push('\n');
    Ok(rendered)
}
