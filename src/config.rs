// 7.0 config.rs: all session settings in one place.

use crate::engine::EngineConfig;
use crate::types::Quote;
use serde::{Deserialize, Serialize};

// Complete configuration for one engine run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub engine: EngineConfig,
    // capacity of both message channels
    pub channel_capacity: usize,
    // upper bound on one confirmation send. delivery is best-effort: on
    // timeout the confirmation is dropped and the loop keeps going.
    pub confirmation_timeout_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            channel_capacity: 64,
            confirmation_timeout_ms: 1_000,
        }
    }
}

impl SessionConfig {
    // Validate the configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.starting_cash.is_negative() {
            return Err(ConfigError::NegativeStartingCash(self.engine.starting_cash));
        }

        if self.channel_capacity == 0 {
            return Err(ConfigError::ZeroChannelCapacity);
        }

        if self.confirmation_timeout_ms == 0 {
            return Err(ConfigError::ZeroConfirmationTimeout);
        }

        Ok(())
    }
}

// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("starting cash must not be negative, got {0}")]
    NegativeStartingCash(Quote),

    #[error("channel capacity must be at least 1")]
    ZeroChannelCapacity,

    #[error("confirmation timeout must be at least 1 ms")]
    ZeroConfirmationTimeout,
}
