mod stream_prompt;
mod terminal_prompt;

pub use stream_prompt::StreamPrompt;
pub use terminal_prompt::TerminalPrompt;
