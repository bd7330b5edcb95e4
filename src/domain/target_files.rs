use serde::Deserialize;

/// Paths of the text targets, relative to the project root.
///
/// The manifest is not listed here: it is always `package.json` and is
/// only ever touched through the manifest tool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetFiles {
    pub readme: String,
    pub env: String,
    pub workspace: String,
    pub workflow: String,
}

impl Default for TargetFiles {
    fn default() -> Self {
        Self {
            readme: "README.md".to_string(),
            env: ".env".to_string(),
            workspace: ".workspace/setup.json".to_string(),
            workflow: ".github/workflows/ci.yml".to_string(),
        }
    }
}

pub const MANIFEST_FILE: &str = "package.json";
