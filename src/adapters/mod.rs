//! Concrete implementations of the ports.

mod line_console;
mod npm_manifest;
mod project_filesystem;
mod terminal_console;

pub use line_console::LineConsole;
pub use npm_manifest::NpmManifest;
pub use project_filesystem::ProjectFilesystem;
pub use terminal_console::TerminalConsole;
