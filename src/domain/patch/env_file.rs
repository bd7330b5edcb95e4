//! Line-oriented `.env` reader and patcher.

pub const TITLE_KEY: &str = "VITE_APP_TITLE";
pub const DESCRIPTION_KEY: &str = "VITE_APP_DESCRIPTION";

const COMMENT_MARKER: char = '#';

#[derive(Debug, Clone, PartialEq, Eq)]
enum EnvLine {
    Blank(String),
    Comment(String),
    Entry { key: String, value: String, raw: String },
    Other(String),
}

impl EnvLine {
    fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return EnvLine::Blank(raw.to_string());
        }
        if trimmed.starts_with(COMMENT_MARKER) {
            return EnvLine::Comment(raw.to_string());
        }
        match raw.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => EnvLine::Entry {
                key: key.trim().to_string(),
                value: unquote(value.trim()),
                raw: raw.to_string(),
            },
            _ => EnvLine::Other(raw.to_string()),
        }
    }

    fn assignment(key: &str, value: &str) -> Self {
        EnvLine::Entry {
            key: key.to_string(),
            value: value.to_string(),
            raw: format!("{key}={}", quote(value)),
        }
    }

    fn raw(&self) -> &str {
        match self {
            EnvLine::Blank(raw) | EnvLine::Comment(raw) | EnvLine::Other(raw) => raw,
            EnvLine::Entry { raw, .. } => raw,
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, EnvLine::Blank(_))
    }
}

/// A parsed env file that remembers every line it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    lines: Vec<EnvLine>,
    /// Rendered with `\r\n` when the source used it.
    crlf: bool,
}

impl EnvFile {
    pub fn parse(content: &str) -> Self {
        Self { lines: content.lines().map(EnvLine::parse).collect(), crlf: content.contains("\r\n") }
    }

    /// Value of the first assignment to `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            EnvLine::Entry { key: k, value, .. } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// All assignments in file order.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                EnvLine::Entry { key, value, .. } => Some((key.as_str(), value.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Assign each key, in place when already present, appended otherwise.
    ///
    /// Appended keys keep the order of `assignments` and are separated from
    /// existing content by a single blank line.
    pub fn set_all(&mut self, assignments: &[(&str, &str)]) {
        let mut pending = Vec::new();

        for (key, value) in assignments {
            let existing = self.lines.iter().position(
                |line| matches!(line, EnvLine::Entry { key: k, .. } if k.as_str() == *key),
            );
            match existing {
                Some(index) => self.lines[index] = EnvLine::assignment(key, value),
                None => pending.push(EnvLine::assignment(key, value)),
            }
        }

        while self.lines.last().is_some_and(EnvLine::is_blank) {
            self.lines.pop();
        }

        if !pending.is_empty() {
            if !self.lines.is_empty() {
                self.lines.push(EnvLine::Blank(String::new()));
            }
            self.lines.extend(pending);
        }
    }

    /// Render with exactly one trailing newline.
    pub fn render(&self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let eol = if self.crlf { "\r\n" } else { "\n" };
        let mut out = self.lines.iter().map(EnvLine::raw).collect::<Vec<_>>().join(eol);
        out.push_str(eol);
        out
    }
}

/// Parse `content`, assign the given keys and render the result.
pub fn patch_env(content: &str, assignments: &[(&str, &str)]) -> String {
    let mut file = EnvFile::parse(content);
    file.set_all(assignments);
    file.render()
}

fn needs_quotes(value: &str) -> bool {
    value.chars().any(|c| c.is_whitespace() || matches!(c, '#' | '"' | '\'' | '\\' | '$' | '`'))
}

fn quote(value: &str) -> String {
    if !needs_quotes(value) {
        return value.to_string();
    }
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

fn unquote(value: &str) -> String {
    if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
        return value[1..value.len() - 1].to_string();
    }
    if !(value.len() >= 2 && value.starts_with('"') && value.ends_with('"')) {
        return value.to_string();
    }

    let inner = &value[1..value.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(escaped) => out.push(escaped),
            None => out.push('\\'),
        }
    }
    out
}
