// 5.1 engine/core.rs: the state machine itself. two states, one legal action
// per state, so the transition match is the entire validation layer.

use super::config::EngineConfig;
use super::results::{Execution, Outcome, RejectReason, Rejection};
use crate::confirm::Confirmation;
use crate::ledger::{Ledger, Trade};
use crate::signal::Signal;
use crate::types::{Action, Position};

/** 5.1.1: engine struct. owns the ledger for the life of the run */
#[derive(Debug)]
pub struct Engine {
    ledger: Ledger,
    executed: u64,
    rejected: u64,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            ledger: Ledger::new(config.starting_cash),
            executed: 0,
            rejected: 0,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn executed_count(&self) -> u64 {
        self.executed
    }

    pub fn rejected_count(&self) -> u64 {
        self.rejected
    }

    // 5.2: process one signal. mutates the ledger on execution, touches
    // nothing on rejection. the trade and its ledger mutation are one unit;
    // the confirmation is built afterwards from the committed state.
    pub fn process(&mut self, signal: &Signal) -> Outcome {
        match (signal.action, self.ledger.position()) {
            (Action::Buy, Position::Flat) => {
                let trade = self.ledger.open_long(signal.price, signal.time);
                self.record_execution(trade)
            }
            (Action::Sell, Position::Long { .. }) => {
                let trade = self.ledger.close_long(signal.price, signal.time);
                self.record_execution(trade)
            }
            (Action::Buy, Position::Long { .. }) => self.record_rejection(signal, RejectReason::AlreadyLong),
            (Action::Sell, Position::Flat) => self.record_rejection(signal, RejectReason::NothingToSell),
        }
    }

    fn record_execution(&mut self, trade: Trade) -> Outcome {
        self.executed += 1;

        let confirmation =
            Confirmation::for_trade(&trade, self.ledger.position(), self.ledger.total_pnl());

        Outcome::Executed(Execution {
            trade,
            confirmation,
        })
    }

    fn record_rejection(&mut self, signal: &Signal, reason: RejectReason) -> Outcome {
        self.rejected += 1;

        Outcome::Rejected(Rejection {
            signal: *signal,
            reason,
        })
    }
}
