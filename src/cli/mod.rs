pub mod commands;
pub mod prompt;

pub use prompt::PromptSelector;
