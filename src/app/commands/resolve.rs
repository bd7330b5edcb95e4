//! Configuration resolution: CLI > manifest > defaults, then optional prompts.

use crate::domain::{
    AppError, CliOverrides, Configuration, Defaults, ManifestValues, PackageManager,
};
use crate::ports::Console;

/// Merge the three sources by precedence. Pure; never prompts.
///
/// `skip_interactive` forces a non-interactive run regardless of other flags.
pub fn merge(
    overrides: &CliOverrides,
    skip_interactive: bool,
    manifest: &ManifestValues,
    defaults: &Defaults,
) -> Configuration {
    let name = overrides
        .name
        .clone()
        .or_else(|| manifest.name.clone().filter(|name| !name.trim().is_empty()))
        .unwrap_or_else(|| defaults.name.clone());

    let description = overrides
        .description
        .clone()
        .or_else(|| manifest.description.clone())
        .unwrap_or_else(|| defaults.description.clone());

    let package_manager = overrides
        .package_manager
        .or(manifest.package_manager)
        .unwrap_or(defaults.package_manager);

    let interactive = !skip_interactive && overrides.interactive.unwrap_or(defaults.interactive);

    Configuration { name, description, package_manager, interactive }
}

/// Ask for each value in turn, defaulting to the merged one.
pub fn prompt(merged: Configuration, console: &mut impl Console) -> Result<Configuration, AppError> {
    let name = console.ask("Project name", &merged.name)?;
    let description = console.ask("Description", &merged.description)?;

    let current = merged.package_manager;
    let answer = console.ask("Package manager (npm, pnpm, yarn)", current.as_str())?;
    let package_manager = match answer.parse::<PackageManager>() {
        Ok(package_manager) => package_manager,
        Err(_) => {
            console.warn(&format!("Unknown package manager '{answer}', keeping {current}"))?;
            current
        }
    };

    Ok(Configuration { name, description, package_manager, interactive: merged.interactive })
}

/// Merge, then prompt when the merged configuration is interactive.
pub fn resolve(
    overrides: &CliOverrides,
    skip_interactive: bool,
    manifest: &ManifestValues,
    defaults: &Defaults,
    console: &mut impl Console,
) -> Result<Configuration, AppError> {
    let merged = merge(overrides, skip_interactive, manifest, defaults);
    if merged.interactive { prompt(merged, console) } else { Ok(merged) }
}
