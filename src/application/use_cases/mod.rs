mod prompt_caller;
mod send_prompt;

pub use prompt_caller::*;
pub use send_prompt::*;
