//! Library entry points that wire adapters to commands.

use std::io::{self, IsTerminal};

use crate::adapters::{StreamPrompt, TerminalPrompt};
use crate::app::commands::collect;
use crate::domain::{AppError, ImageNameRule, SessionOutcome};
use crate::ports::LinePrompt;

/// Run an interactive collection session on the process console.
///
/// Uses a dialoguer prompt when stdin is a terminal and plain line I/O otherwise.
pub fn collect_images() -> Result<SessionOutcome, AppError> {
    if io::stdin().is_terminal() {
        collect_images_with(&mut TerminalPrompt::new())
    } else {
        collect_images_with(&mut StreamPrompt::stdio())
    }
}

/// Run a collection session over any prompt implementation.
pub fn collect_images_with<P: LinePrompt>(prompt: &mut P) -> Result<SessionOutcome, AppError> {
    collect::run_session(prompt, &ImageNameRule::default())
}
