use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::LinePrompt;

/// Prompt double that replays a fixed list of answers and records every prompt shown.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
    fail_after: Option<usize>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { answers: answers.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    /// Fail with a prompt error once `reads` lines have been served.
    pub fn failing_after(mut self, reads: usize) -> Self {
        self.fail_after = Some(reads);
        self
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl LinePrompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        if self.fail_after == Some(self.prompts.len()) {
            return Err(AppError::prompt_error("Mock prompt error"));
        }
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}
