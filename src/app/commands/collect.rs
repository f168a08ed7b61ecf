use crate::app::prompts;
use crate::domain::{
    AppError, ImageNameRule, QUIT_KEYWORD, RequestOutcome, SessionExit, SessionOutcome,
    TopLevelInput,
};
use crate::ports::LinePrompt;

/// Ask for a valid image path, starting from `first`.
///
/// Re-prompts without limit until a candidate matches `rule` or the user types
/// the quit keyword.
pub fn request_valid_path<P: LinePrompt>(
    prompt: &mut P,
    rule: &ImageNameRule,
    first: String,
) -> Result<RequestOutcome, AppError> {
    let mut candidate = first;
    loop {
        if rule.matches(&candidate) {
            tracing::info!(path = %candidate, "accepted image path");
            return Ok(RequestOutcome::Accepted(candidate));
        }
        tracing::debug!(candidate = %candidate, "rejected image path");

        match prompt.read_line(prompts::VALID_NAME)? {
            Some(line) if line == QUIT_KEYWORD => return Ok(RequestOutcome::Cancelled),
            Some(line) => candidate = line,
            None => return Ok(RequestOutcome::InputClosed),
        }
    }
}

/// Run one interactive session, collecting every accepted path.
pub fn run_session<P: LinePrompt>(
    prompt: &mut P,
    rule: &ImageNameRule,
) -> Result<SessionOutcome, AppError> {
    tracing::debug!(prefix = rule.prefix(), extension = rule.extension(), "session started");

    let mut collected = Vec::new();
    let mut line = prompt.read_line(prompts::FIRST_IMAGE)?;

    let exit = loop {
        let Some(raw) = line else {
            break SessionExit::InputClosed;
        };

        match TopLevelInput::parse(raw) {
            TopLevelInput::Quit => break SessionExit::Quit,
            TopLevelInput::NextStep => break SessionExit::NextStep,
            TopLevelInput::Candidate(candidate) => {
                match request_valid_path(prompt, rule, candidate)? {
                    RequestOutcome::Accepted(path) => collected.push(path),
                    RequestOutcome::Cancelled => break SessionExit::Cancelled,
                    RequestOutcome::InputClosed => break SessionExit::InputClosed,
                }
            }
        }

        line = prompt.read_line(prompts::NEXT_IMAGE)?;
    };

    tracing::debug!(collected = collected.len(), exit = ?exit, "session finished");
    Ok(SessionOutcome { collected, exit })
}
