//! Text shown to the user at each prompt.

/// First top-level prompt of a session.
pub const FIRST_IMAGE: &str = "Input image file, <q> to quit, <n> for next step";

/// Re-prompt after a candidate failed the naming rule.
pub const VALID_NAME: &str = "Input valid name, <q> to go back";

/// Top-level prompt after a path was accepted.
pub const NEXT_IMAGE: &str = "Next image, <q> to quit, <n> for next step";
