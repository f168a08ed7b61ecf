use std::io;

use thiserror::Error;

/// Library-wide error type for level-gen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying console I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Interactive terminal prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn prompt_error<S: Into<String>>(message: S) -> Self {
        AppError::Prompt(message.into())
    }
}
