//! Command implementations

mod config;
mod generate;

pub use config::config_cmd;
pub use generate::generate;
