//! README heading and Getting Started section.

use minijinja::{Environment, context};

use crate::domain::{AppError, PackageManager};

pub const GETTING_STARTED_HEADER: &str = "## Getting Started";

const HEADING_MARKER: char = '#';

const GETTING_STARTED_TEMPLATE: &str = include_str!("../../assets/getting_started.md.j2");

/// Render the Getting Started block for the chosen package manager.
pub fn render_getting_started(package_manager: PackageManager) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.add_template("getting_started", GETTING_STARTED_TEMPLATE)?;
    let rendered = env.get_template("getting_started")?.render(context! {
        header => GETTING_STARTED_HEADER,
        install => package_manager.workspace_install_command(),
        dev => package_manager.dev_command(),
    })?;

    let mut section = rendered.trim_end().to_string();
    section.push('\n');
    Ok(section)
}

/// Whether a line equal to `header` appears anywhere in the document.
pub fn has_section(content: &str, header: &str) -> bool {
    content.lines().any(|line| line.trim_end() == header)
}

/// Set the title heading and append `section` once.
///
/// A first line that is already a heading is replaced; otherwise the new
/// heading is inserted above it. `section` is appended only when its first
/// line is not already present, separated by exactly one blank line.
pub fn patch_readme(content: &str, name: &str, section: &str) -> String {
    let heading = format!("{HEADING_MARKER} {name}");

    let mut document = match content.split_once('\n') {
        Some((first, rest)) if first.starts_with(HEADING_MARKER) => {
            let eol = if first.ends_with('\r') { "\r\n" } else { "\n" };
            format!("{heading}{eol}{rest}")
        }
        None if content.starts_with(HEADING_MARKER) => heading,
        _ if content.is_empty() => heading,
        _ => format!("{heading}\n{content}"),
    };

    let header = section.lines().next().unwrap_or_default().trim_end();
    if !header.is_empty() && !has_section(&document, header) {
        let body_len = document.trim_end_matches(['\n', '\r']).len();
        document.truncate(body_len);
        document.push_str("\n\n");
        document.push_str(section);
        if !document.ends_with('\n') {
            document.push('\n');
        }
    }

    document
}
