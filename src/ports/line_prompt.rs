use crate::domain::AppError;

/// Port for asking the user for one line of input.
pub trait LinePrompt {
    /// Show `prompt` and read one line.
    ///
    /// Returns `Ok(None)` when no more input is available (end of stream or an
    /// interrupted terminal read).
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError>;
}
