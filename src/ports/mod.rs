mod console;
mod manifest_tool;
mod project_files;

pub use console::Console;
pub use manifest_tool::ManifestTool;
pub use project_files::ProjectFiles;
