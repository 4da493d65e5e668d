use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Send a prompt and print the trimmed reply
    Ask {
        /// Prompt text (defaults to "Say hi")
        #[arg(env = "CHATPROMPT_PROMPT")]
        prompt: Option<String>,
    },

    /// Show the resolved endpoint and model (API key redacted)
    Config,
}
