use crate::ports::{ManifestTool, ProjectFiles};

/// The project's text files and its `package.json` tool, as seen by one bootstrap run.
pub struct AppContext<F: ProjectFiles, M: ManifestTool> {
    files: F,
    manifest: M,
}

impl<F: ProjectFiles, M: ManifestTool> AppContext<F, M> {
    /// Create a new application context.
    pub fn new(files: F, manifest: M) -> Self {
        Self { files, manifest }
    }

    /// Get a reference to the project files.
    pub fn files(&self) -> &F {
        &self.files
    }

    /// Get a reference to the manifest tool.
    pub fn manifest(&self) -> &M {
        &self.manifest
    }
}
