use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::domain::{AppError, is_rejection};
use crate::ports::Console;

/// Line-oriented console over any reader/writer pair.
///
/// Each question writes a prompt, flushes, and blocks on one line of input.
/// End of input counts as an empty answer.
pub struct LineConsole<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl LineConsole<StdinLock<'static>, Stdout> {
    /// Console over the process's standard streams.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            // Keep the transcript on separate lines when input ends without a newline.
            writeln!(self.output)?;
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn info(&mut self, message: &str) -> Result<(), AppError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<(), AppError> {
        writeln!(self.output, "⚠️  {message}")?;
        Ok(())
    }

    fn ask(&mut self, question: &str, default: &str) -> Result<String, AppError> {
        let prompt = if default.is_empty() {
            format!("{question}: ")
        } else {
            format!("{question} ({default}): ")
        };
        let answer = self.read_answer(&prompt)?;
        Ok(if answer.is_empty() { default.to_string() } else { answer })
    }

    fn confirm(&mut self, question: &str) -> Result<bool, AppError> {
        let answer = self.read_answer(&format!("{question} (Y/n): "))?;
        Ok(!is_rejection(&answer))
    }
}

impl<R: BufRead, W: Write> Drop for LineConsole<R, W> {
    fn drop(&mut self) {
        let _ = self.output.flush();
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(input: &str) -> LineConsole<Cursor<Vec<u8>>, Vec<u8>> {
        LineConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(console: &LineConsole<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn empty_answer_keeps_default() {
        let mut console = console("\n   \n");
        assert_eq!(console.ask("Project name", "react-starter").unwrap(), "react-starter");
        assert_eq!(console.ask("Description", "keep").unwrap(), "keep");
        assert_eq!(transcript(&console), "Project name (react-starter): Description (keep): ");
    }

    #[test]
    fn answer_is_trimmed() {
        let mut console = console("  my app  \n");
        assert_eq!(console.ask("Project name", "react-starter").unwrap(), "my app");
    }

    #[test]
    fn questions_consume_lines_in_order() {
        let mut console = console("first\nsecond\n");
        assert_eq!(console.ask("A", "").unwrap(), "first");
        assert_eq!(console.ask("B", "").unwrap(), "second");
        assert_eq!(console.ask("C", "fallback").unwrap(), "fallback");
    }

    #[test]
    fn confirm_rejects_only_no() {
        let mut console = console("n\nNO\nyes\n\n");
        assert!(!console.confirm("Apply?").unwrap());
        assert!(!console.confirm("Apply?").unwrap());
        assert!(console.confirm("Apply?").unwrap());
        assert!(console.confirm("Apply?").unwrap());
    }

    #[test]
    fn confirm_at_end_of_input_accepts() {
        let mut console = console("");
        assert!(console.confirm("Apply?").unwrap());
    }

    #[test]
    fn info_and_warn_write_lines() {
        let mut console = console("");
        console.info("✅ Updated README.md").unwrap();
        console.warn("careful").unwrap();
        assert_eq!(transcript(&console), "✅ Updated README.md\n⚠️  careful\n");
    }
}
