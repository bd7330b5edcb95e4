pub mod args;
pub mod cli;
pub mod commands;
mod context;
pub mod patchers;
pub mod settings;

pub use context::AppContext;
