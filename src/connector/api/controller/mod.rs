pub mod ask_controller;
pub mod config_controller;

pub use ask_controller::AskController;
pub use config_controller::ConfigController;
