// 5.0.2: outcome types for signal processing. every signal resolves to exactly
// one of these; rejection is a defined path, not an error.

use crate::confirm::Confirmation;
use crate::ledger::Trade;
use crate::signal::Signal;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Executed(Execution),
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_executed(&self) -> bool {
        matches!(self, Outcome::Executed(_))
    }
}

// the recorded trade plus the confirmation built from the post-trade ledger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Execution {
    pub trade: Trade,
    pub confirmation: Confirmation,
}

// no ledger mutation happened and no confirmation will be sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    pub signal: Signal,
    pub reason: RejectReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    // BUY while already long
    AlreadyLong,
    // SELL with nothing held
    NothingToSell,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::AlreadyLong => write!(f, "already long"),
            RejectReason::NothingToSell => write!(f, "no open position"),
        }
    }
}
