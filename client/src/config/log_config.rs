use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::logger::LogLevel;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct LogConfig {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub use_prefix: bool,
}

impl LogConfig {
    pub fn level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
