/// Top-level keyword that ends the session.
pub const QUIT_KEYWORD: &str = "q";

/// Top-level keyword that hands the collected paths to the next step.
pub const NEXT_STEP_KEYWORD: &str = "n";

/// A line entered at a top-level prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopLevelInput {
    Quit,
    NextStep,
    Candidate(String),
}

impl TopLevelInput {
    /// Classify a raw line. Keywords match exactly; anything else is a candidate path.
    pub fn parse(line: String) -> Self {
        match line.as_str() {
            QUIT_KEYWORD => TopLevelInput::Quit,
            NEXT_STEP_KEYWORD => TopLevelInput::NextStep,
            _ => TopLevelInput::Candidate(line),
        }
    }
}

/// Result of asking for a valid path until one is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A candidate passed the naming rule.
    Accepted(String),
    /// The user typed the quit keyword while being re-prompted.
    Cancelled,
    /// Input ended before a valid path was given.
    InputClosed,
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionExit {
    Quit,
    NextStep,
    Cancelled,
    InputClosed,
}

/// Everything a finished session produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Accepted paths, in the order they were accepted.
    pub collected: Vec<String>,
    pub exit: SessionExit,
}

impl SessionOutcome {
    /// Paths to hand to the next step. Empty unless the user asked to advance.
    pub fn handoff(&self) -> &[String] {
        match self.exit {
            SessionExit::NextStep => self.collected.as_slice(),
            _ => &[],
        }
    }
}
