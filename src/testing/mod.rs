mod fake_manifest;
mod in_memory_files;

use std::io::Cursor;

use crate::adapters::LineConsole;

pub use fake_manifest::FakeManifest;
pub use in_memory_files::InMemoryFiles;

/// Console that answers prompts from `input` and records everything it prints.
pub fn scripted_console(input: &str) -> LineConsole<Cursor<Vec<u8>>, Vec<u8>> {
    LineConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}
