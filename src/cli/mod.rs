pub mod commands;
pub mod prompt;

pub use commands::{Cli, Commands};
pub use prompt::FormPrompt;
