//! Engine configuration options.

use crate::types::Quote;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cash balance the ledger starts with.
    pub starting_cash: Quote,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_cash: Quote::new(dec!(100000)),
        }
    }
}
