// 3.0: the position ledger. single instrument, flat or long one unit, with an
// append-only trade history. this is the source of truth for the whole run:
// confirmations are derived from it, never the other way around.
//
// accounting follows the reference model exactly: opening a long records the
// entry price and moves no cash; cash changes only by realized pnl on close.

use crate::types::{Action, Position, Price, Quote, Timestamp};
use serde::Serialize;

// 3.1: one executed signal, recorded once and never touched again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trade {
    pub time: Timestamp,
    pub action: Action,
    pub price: Price,
    // zero for buys. exit minus entry for sells.
    pub pnl: Quote,
}

impl Trade {
    pub fn is_sell(&self) -> bool {
        self.action == Action::Sell
    }
}

#[derive(Debug, Clone)]
pub struct Ledger {
    position: Position,
    cash: Quote,
    total_pnl: Quote,
    trades: Vec<Trade>,
}

impl Ledger {
    pub fn new(starting_cash: Quote) -> Self {
        Self {
            position: Position::Flat,
            cash: starting_cash,
            total_pnl: Quote::zero(),
            trades: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_long(&self) -> bool {
        self.position.is_long()
    }

    pub fn entry_price(&self) -> Option<Price> {
        self.position.entry_price()
    }

    pub fn cash(&self) -> Quote {
        self.cash
    }

    pub fn total_pnl(&self) -> Quote {
        self.total_pnl
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    // 3.2: cash plus the one open unit, marked at the last price the ledger
    // knows. while long that is the entry price; while flat there is nothing
    // to mark.
    pub fn portfolio_value(&self) -> Quote {
        match self.position {
            Position::Flat => self.cash,
            Position::Long { entry_price } => self.cash.add(Quote::new(entry_price.value())),
        }
    }

    // 3.3: transitions. callers (the engine) prove legality before calling;
    // these never signal a recoverable error.

    pub(crate) fn open_long(&mut self, price: Price, time: Timestamp) -> Trade {
        debug_assert!(self.position.is_flat(), "open_long requires a flat book");

        self.position = Position::Long { entry_price: price };

        let trade = Trade {
            time,
            action: Action::Buy,
            price,
            pnl: Quote::zero(),
        };
        self.trades.push(trade);
        trade
    }

    pub(crate) fn close_long(&mut self, price: Price, time: Timestamp) -> Trade {
        let entry_price = match self.position {
            Position::Long { entry_price } => entry_price,
            Position::Flat => unreachable!("close_long requires an open long"),
        };

        let pnl = Quote::new(price.value() - entry_price.value());
        self.cash = self.cash.add(pnl);
        self.total_pnl = self.total_pnl.add(pnl);
        self.position = Position::Flat;

        let trade = Trade {
            time,
            action: Action::Sell,
            price,
            pnl,
        };
        self.trades.push(trade);

        debug_assert_eq!(
            self.total_pnl,
            self.trades.iter().filter(|t| t.is_sell()).map(|t| t.pnl).sum::<Quote>(),
            "total pnl must equal the sum of realized sell pnls"
        );

        trade
    }
}
