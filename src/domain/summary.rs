//! Preview of planned changes and the confirmation rule.

use std::fmt;

/// One line of the preview for a target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// A value moving from `before` (absent = to be added) to `after`.
    Value { label: String, before: Option<String>, after: String },
    /// Free-form remark about the target.
    Note(String),
}

impl Change {
    pub fn value(label: impl Into<String>, before: Option<&str>, after: impl Into<String>) -> Self {
        Change::Value { label: label.into(), before: before.map(str::to_string), after: after.into() }
    }

    pub fn note(text: impl Into<String>) -> Self {
        Change::Note(text.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub target: String,
    pub changes: Vec<Change>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub entries: Vec<SummaryEntry>,
}

impl Summary {
    pub fn push(&mut self, target: impl Into<String>, changes: Vec<Change>) {
        self.entries.push(SummaryEntry { target: target.into(), changes });
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Planned changes:")?;
        for entry in &self.entries {
            writeln!(f, "  {}", entry.target)?;
            for change in &entry.changes {
                match change {
                    Change::Value { label, before: Some(before), after } if before == after => {
                        writeln!(f, "    {label}: {after:?} (unchanged)")?
                    }
                    Change::Value { label, before: Some(before), after } => {
                        writeln!(f, "    {label}: {before:?} → {after:?}")?
                    }
                    Change::Value { label, before: None, after } => {
                        writeln!(f, "    {label}: (to be added) {after:?}")?
                    }
                    Change::Note(text) => writeln!(f, "    {text}")?,
                }
            }
        }
        Ok(())
    }
}

/// `n` / `no` in any case rejects; anything else, including empty, accepts.
pub fn is_rejection(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "n" || answer == "no"
}
