// 2.0: inbound signals. one wire message per trade instruction:
//   { "action": "BUY"|"SELL", "price": <positive number>, "time": <RFC 3339> }
// parsing returns an explicit error per failure mode. a bad signal is the
// sender's problem, never the engine's: callers skip it and keep reading.

use crate::types::{Action, Price, Timestamp};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signal {
    pub action: Action,
    pub price: Price,
    pub time: Timestamp,
}

// raw wire form, before the price check
#[derive(Deserialize)]
struct WireSignal {
    action: Action,
    price: Decimal,
    time: Timestamp,
}

impl Signal {
    /// Parse and validate one wire payload.
    pub fn parse(payload: &str) -> Result<Self, SignalError> {
        let wire: WireSignal = serde_json::from_str(payload)?;
        let price = Price::new(wire.price).ok_or(SignalError::NonPositivePrice(wire.price))?;

        Ok(Self {
            action: wire.action,
            price,
            time: wire.time,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    #[error("malformed signal payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("signal price must be positive, got {0}")]
    NonPositivePrice(Decimal),
}
