mod line_prompt;

pub use line_prompt::LinePrompt;
