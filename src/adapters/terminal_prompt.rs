use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::LinePrompt;

/// Interactive prompt rendered by dialoguer on the attached terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl LinePrompt for TerminalPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        map_result(Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text())
    }
}

/// Interrupted and end-of-input reads mean "no more input"; other failures are errors.
fn map_result(result: Result<String, DialoguerError>) -> Result<Option<String>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err))
            if matches!(err.kind(), ErrorKind::Interrupted | ErrorKind::UnexpectedEof) =>
        {
            Ok(None)
        }
        Err(err) => Err(AppError::prompt_error(format!("Failed to read input: {}", err))),
    }
}
