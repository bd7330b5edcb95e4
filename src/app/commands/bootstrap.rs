//! The bootstrap run: parse, resolve, preview, confirm, apply.

use crate::app::AppContext;
use crate::app::args::{parse_args, skip_interactive};
use crate::app::commands::resolve::resolve;
use crate::app::patchers::Plan;
use crate::app::settings::load_settings;
use crate::domain::{AppError, Configuration, MANIFEST_FILE, ManifestValues};
use crate::ports::{Console, ManifestTool, ProjectFiles};

const CONFIRM_QUESTION: &str = "Apply these changes?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Every target was processed; `written` lists the files that changed.
    Applied { config: Configuration, written: Vec<String> },
    /// The user declined at the confirmation prompt. Nothing was written.
    Cancelled,
}

pub fn execute<F, M, S>(
    ctx: &AppContext<F, M>,
    tokens: &[S],
    console: &mut impl Console,
) -> Result<BootstrapOutcome, AppError>
where
    F: ProjectFiles,
    M: ManifestTool,
    S: AsRef<str>,
{
    let overrides = parse_args(tokens)?;
    let skip = skip_interactive(&overrides, tokens);
    let settings = load_settings(ctx.files())?;

    let manifest = read_manifest(ctx.manifest(), console)?;
    let config = resolve(&overrides, skip, &manifest, &settings.defaults, console)?;
    let plan = Plan::read(ctx.files(), &settings.files, manifest)?;

    if config.interactive {
        console.info(plan.summary(&config).to_string().trim_end())?;
        if !console.confirm(CONFIRM_QUESTION)? {
            console.info("Cancelled. No files were changed.")?;
            return Ok(BootstrapOutcome::Cancelled);
        }
    }

    let written = plan.apply(ctx.files(), ctx.manifest(), &config, console)?;
    console.info(&format!("✅ Bootstrapped {} ({})", config.name, config.package_manager))?;

    Ok(BootstrapOutcome::Applied { config, written })
}

/// Current manifest values, or empty values with a warning when unreadable.
fn read_manifest(
    manifest: &impl ManifestTool,
    console: &mut impl Console,
) -> Result<ManifestValues, AppError> {
    match manifest.read_values() {
        Ok(values) => Ok(values),
        Err(err) => {
            console.warn(&format!("Could not read {MANIFEST_FILE}, using defaults: {err}"))?;
            Ok(ManifestValues::default())
        }
    }
}
