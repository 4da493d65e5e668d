use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{AskController, ConfigController};

pub struct Router<'a> {
    ask_controller: AskController<'a>,
    config_controller: ConfigController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            ask_controller: AskController::new(container),
            config_controller: ConfigController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Ask { prompt } => self.ask_controller.ask(prompt).await,
            Commands::Config => self.config_controller.show().await,
        }
    }
}
