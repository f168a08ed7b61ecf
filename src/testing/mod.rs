mod scripted_prompt;

pub use scripted_prompt::ScriptedPrompt;
