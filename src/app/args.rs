//! Bootstrap flag parsing.
//!
//! Flags take unquoted multi-word values: `--name my cool app` collects every
//! token up to the next one that starts with `--`. Unknown tokens are ignored.

use crate::domain::{AppError, CliOverrides, PackageManager};

const FLAG_PREFIX: &str = "--";

/// Parse bootstrap flags into partial overrides.
///
/// An invalid `--packageManager` value is an error; everything else is lenient.
pub fn parse_args<S: AsRef<str>>(tokens: &[S]) -> Result<CliOverrides, AppError> {
    let mut overrides = CliOverrides::default();
    let mut index = 0;

    while index < tokens.len() {
        match tokens[index].as_ref() {
            "--name" => {
                let (value, next) = collect_flag_value(tokens, index + 1);
                overrides.name = value;
                index = next;
            }
            "--description" => {
                let (value, next) = collect_flag_value(tokens, index + 1);
                overrides.description = value;
                index = next;
            }
            "--packageManager" => {
                let value = tokens.get(index + 1).map(|token| token.as_ref()).unwrap_or_default();
                overrides.package_manager = Some(value.parse::<PackageManager>()?);
                index += 2;
            }
            "--interactive" => {
                let disabled =
                    matches!(tokens.get(index + 1).map(|token| token.as_ref()), Some("false" | "0"));
                overrides.interactive = Some(!disabled);
                index += if disabled { 2 } else { 1 };
            }
            "--no-interactive" => {
                overrides.interactive = Some(false);
                index += 1;
            }
            _ => index += 1,
        }
    }

    Ok(overrides)
}

/// Join tokens from `start` up to the next flag.
///
/// Returns the joined value (`None` when nothing was collected) and the index
/// of the first unconsumed token.
fn collect_flag_value<S: AsRef<str>>(tokens: &[S], start: usize) -> (Option<String>, usize) {
    let end = tokens
        .iter()
        .skip(start)
        .position(|token| token.as_ref().starts_with(FLAG_PREFIX))
        .map_or(tokens.len(), |offset| start + offset);

    let words: Vec<&str> =
        tokens.get(start..end).unwrap_or_default().iter().map(|token| token.as_ref()).collect();
    let value = if words.is_empty() { None } else { Some(words.join(" ")) };
    (value, end)
}

/// Whether the run must skip prompting and confirmation.
///
/// Honors the parsed flag and the raw `--no-interactive` / `--interactive=false`
/// spellings.
pub fn skip_interactive<S: AsRef<str>>(overrides: &CliOverrides, raw_tokens: &[S]) -> bool {
    overrides.interactive == Some(false)
        || raw_tokens
            .iter()
            .any(|token| matches!(token.as_ref(), "--no-interactive" | "--interactive=false"))
}
