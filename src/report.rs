// 6.0: end-of-session reporting. a pure read over the finished ledger,
// produced exactly once after the signal channel closes.

use crate::ledger::{Ledger, Trade};
use crate::types::{Position, Quote};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PnlOutcome {
    Profit,
    Loss,
    Breakeven,
}

impl PnlOutcome {
    pub fn classify(pnl: Quote) -> Self {
        if pnl > Quote::zero() {
            PnlOutcome::Profit
        } else if pnl.is_negative() {
            PnlOutcome::Loss
        } else {
            PnlOutcome::Breakeven
        }
    }
}

impl fmt::Display for PnlOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PnlOutcome::Profit => write!(f, "profit"),
            PnlOutcome::Loss => write!(f, "loss"),
            PnlOutcome::Breakeven => write!(f, "breakeven"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionReport {
    pub trades: Vec<Trade>,
    pub total_pnl: Quote,
    pub outcome: PnlOutcome,
    // closed trades that made and lost money, respectively
    pub wins: usize,
    pub losses: usize,
    pub portfolio_value: Quote,
    pub final_position: Position,
}

impl SessionReport {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let sells = ledger.trades().iter().filter(|t| t.is_sell());
        let wins = sells.clone().filter(|t| t.pnl > Quote::zero()).count();
        let losses = sells.filter(|t| t.pnl.is_negative()).count();

        Self {
            trades: ledger.trades().to_vec(),
            total_pnl: ledger.total_pnl(),
            outcome: PnlOutcome::classify(ledger.total_pnl()),
            wins,
            losses,
            portfolio_value: ledger.portfolio_value(),
            final_position: ledger.position(),
        }
    }

    pub fn trade_count(&self) -> usize {
        self.trades.len()
    }
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trading Session Summary")?;

        if self.trades.is_empty() {
            writeln!(f, "No trades executed.")?;
        } else {
            writeln!(f, "Trade History:")?;
            for trade in &self.trades {
                write!(f, "  [{}] {:>4} | price {}", trade.time, trade.action, trade.price)?;
                if trade.is_sell() {
                    write!(f, " | pnl {}", trade.pnl)?;
                }
                writeln!(f)?;
            }
            writeln!(f, "Total Trades: {}", self.trade_count())?;
            writeln!(f, "Total PnL: {} ({})", self.total_pnl, self.outcome)?;
            writeln!(f, "Wins: {}, Losses: {}", self.wins, self.losses)?;
        }

        writeln!(f, "Final Portfolio Value: {}", self.portfolio_value)?;
        write!(f, "Final Position: {}", self.final_position)
    }
}
