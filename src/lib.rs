//! starter-bootstrap: personalize a React starter template for a new project.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::{NpmManifest, ProjectFilesystem};
use app::AppContext;
use ports::Console;

pub use app::commands::bootstrap::BootstrapOutcome;
pub use app::settings::Settings;
pub use domain::{AppError, Configuration, PackageManager};

/// Bootstrap the project in the current directory.
///
/// `args` are the raw bootstrap flags (`--name`, `--description`,
/// `--packageManager`, `--interactive`, `--no-interactive`). Prompts,
/// the summary and progress lines go through `console`.
pub fn bootstrap<S: AsRef<str>>(
    args: &[S],
    console: &mut impl Console,
) -> Result<BootstrapOutcome, AppError> {
    let files = ProjectFilesystem::current()?;
    let manifest = NpmManifest::new(files.root().to_path_buf());
    let ctx = AppContext::new(files, manifest);

    app::commands::bootstrap::execute(&ctx, args, console)
}
