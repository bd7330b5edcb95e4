//! CI workflow install-step patcher.

use regex::Regex;
use serde_yaml::Value;

use crate::domain::AppError;

pub const INSTALL_STEP_NAME: &str = "Install dependencies";

const RUN_MARKER: &str = "run:";

/// A `name: Install dependencies` line immediately followed by its `run:` line.
const INSTALL_STEP_PATTERN: &str = r#"(?m)^(?P<step>[ \t]*(?:-[ \t]+)?name:[ \t]*["']?Install dependencies["']?[ \t]*\r?\n[ \t]*run:[ \t]+)(?P<command>[^\r\n]*)"#;

/// Which strategy located the install step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchStrategy {
    /// Two-line pattern match on the step name and its run line.
    Structural,
    /// Line scan for the step name followed by a run line.
    LineScan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowPatch {
    Patched { content: String, strategy: PatchStrategy },
    StepNotFound,
}

/// Replace the run command of the first install step with `command`.
///
/// A block scalar (`run: |` and its indented body) is replaced as a whole.
pub fn patch_workflow(content: &str, command: &str) -> Result<WorkflowPatch, AppError> {
    let pattern = Regex::new(INSTALL_STEP_PATTERN)?;

    if let Some(current) = pattern.captures(content).and_then(|captures| captures.name("command")) {
        let run_start = content[..current.start()].rfind('\n').map_or(0, |i| i + 1);
        let end = if is_block_indicator(current.as_str()) {
            block_body_end(content, current.end(), indentation(&content[run_start..current.start()]))
        } else {
            current.end()
        };

        let mut patched = String::with_capacity(content.len() + command.len());
        patched.push_str(&content[..current.start()]);
        patched.push_str(command);
        patched.push_str(&content[end..]);
        return Ok(WorkflowPatch::Patched { content: patched, strategy: PatchStrategy::Structural });
    }

    Ok(scan_lines(content, command)
        .map(|content| WorkflowPatch::Patched { content, strategy: PatchStrategy::LineScan })
        .unwrap_or(WorkflowPatch::StepNotFound))
}

fn scan_lines(content: &str, command: &str) -> Option<String> {
    let mut lines: Vec<String> = content.split_inclusive('\n').map(str::to_string).collect();

    let index = lines
        .windows(2)
        .position(|pair| pair[0].contains(INSTALL_STEP_NAME) && pair[1].contains(RUN_MARKER))?;

    let run_line = &lines[index + 1];
    let marker = run_line.find(RUN_MARKER)? + RUN_MARKER.len();
    let ending = if run_line.ends_with("\r\n") {
        "\r\n"
    } else if run_line.ends_with('\n') {
        "\n"
    } else {
        ""
    };
    let replacement = format!("{} {command}{ending}", &run_line[..marker]);
    let block_indent = is_block_indicator(&run_line[marker..]).then(|| indentation(run_line));

    if let Some(indent) = block_indent {
        let mut body_end = index + 2;
        for (position, line) in lines.iter().enumerate().skip(index + 2) {
            let text = line.trim_end_matches(['\r', '\n']);
            if text.trim().is_empty() {
                continue;
            }
            if indentation(text) <= indent {
                break;
            }
            body_end = position + 1;
        }
        lines.drain(index + 2..body_end);
    }
    lines[index + 1] = replacement;

    Some(lines.concat())
}

/// `|` or `>` with optional chomping and indentation marks, ignoring a comment.
fn is_block_indicator(value: &str) -> bool {
    let value = value.split('#').next().unwrap_or_default().trim();
    let mut chars = value.chars();
    matches!(chars.next(), Some('|' | '>'))
        && chars.all(|c| c == '+' || c == '-' || c.is_ascii_digit())
}

fn indentation(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

/// Offset just past the last body line of the block scalar whose header ends at `header_end`.
///
/// Body lines are the non-blank lines indented deeper than `indent`.
fn block_body_end(content: &str, header_end: usize, indent: usize) -> usize {
    let mut lines = content[header_end..].split_inclusive('\n');
    let mut offset = header_end + lines.next().map_or(0, str::len);
    let mut end = header_end;

    for line in lines {
        let text = line.trim_end_matches(['\r', '\n']);
        if !text.trim().is_empty() {
            if indentation(text) <= indent {
                break;
            }
            end = offset + text.len();
        }
        offset += line.len();
    }
    end
}

/// The run command of the first step whose name mentions the install step, read structurally.
///
/// Returns `None` when the document does not parse or has no such step.
pub fn current_install_command(content: &str) -> Option<String> {
    let document: Value = serde_yaml::from_str(content).ok()?;
    let jobs = document.get("jobs")?.as_mapping()?;

    jobs.values()
        .filter_map(|job| job.get("steps").and_then(Value::as_sequence))
        .flatten()
        .find(|step| {
            step.get("name").and_then(Value::as_str).is_some_and(|name| name.contains(INSTALL_STEP_NAME))
        })
        .and_then(|step| step.get("run"))
        .and_then(Value::as_str)
        .map(|run| run.trim().to_string())
}
