//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod calc;
pub mod friends;
pub mod log;

pub use calc::{handle_calc_command, CalcArgs};
pub use friends::handle_sample_command;
pub use log::handle_log_command;
