use crate::domain::AppError;

/// The interactive stream: prompts, confirmations and progress output.
///
/// Acquired once per run. Implementations release their streams on drop.
pub trait Console {
    /// Print a progress or summary line.
    fn info(&mut self, message: &str) -> Result<(), AppError>;

    /// Print a warning line.
    fn warn(&mut self, message: &str) -> Result<(), AppError>;

    /// Ask a question showing `default`.
    ///
    /// Returns the trimmed answer, or `default` when the answer is empty.
    fn ask(&mut self, question: &str, default: &str) -> Result<String, AppError>;

    /// Ask a yes/no question that defaults to yes.
    fn confirm(&mut self, question: &str) -> Result<bool, AppError>;
}
