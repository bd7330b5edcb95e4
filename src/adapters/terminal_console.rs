use std::io::{self, Write};

use dialoguer::Input;

use crate::domain::{AppError, is_rejection};
use crate::ports::Console;

/// Console for an attached terminal, backed by `dialoguer` prompts.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn info(&mut self, message: &str) -> Result<(), AppError> {
        println!("{message}");
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<(), AppError> {
        eprintln!("⚠️  {message}");
        Ok(())
    }

    fn ask(&mut self, question: &str, default: &str) -> Result<String, AppError> {
        let answer: String = Input::new()
            .with_prompt(question)
            .default(default.to_string())
            .show_default(!default.is_empty())
            .allow_empty(true)
            .interact_text()
            .map_err(|err| AppError::Prompt(format!("Failed to read '{}': {}", question, err)))?;

        let answer = answer.trim();
        Ok(if answer.is_empty() { default.to_string() } else { answer.to_string() })
    }

    fn confirm(&mut self, question: &str) -> Result<bool, AppError> {
        let answer: String = Input::new()
            .with_prompt(format!("{question} (Y/n)"))
            .allow_empty(true)
            .interact_text()
            .map_err(|err| AppError::Prompt(format!("Failed to read confirmation: {}", err)))?;

        Ok(!is_rejection(&answer))
    }
}

impl Drop for TerminalConsole {
    fn drop(&mut self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}
