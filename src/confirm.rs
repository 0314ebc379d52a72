// 4.0: outbound confirmations. exactly one per executed trade, never batched,
// never retried. wire form:
//   { "action", "price", "time", "position": 0|1, "total_pnl", "pnl" }
// "pnl" is present only on sells. "position" is the post-transition state.

use crate::ledger::Trade;
use crate::types::{Action, Position, Price, Quote, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Confirmation {
    pub action: Action,
    pub price: Price,
    pub time: Timestamp,
    // 0 = flat, 1 = long, after the trade was applied
    pub position: u8,
    pub total_pnl: Quote,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pnl: Option<Quote>,
}

impl Confirmation {
    // built from the recorded trade plus the post-transition ledger snapshot
    pub fn for_trade(trade: &Trade, position: Position, total_pnl: Quote) -> Self {
        Self {
            action: trade.action,
            price: trade.price,
            time: trade.time,
            position: position.flag(),
            total_pnl,
            pnl: trade.is_sell().then_some(trade.pnl),
        }
    }

    pub fn to_wire(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
