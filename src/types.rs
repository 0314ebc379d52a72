// 1.0: all the primitives live here. nothing in the engine works without these types.
// actions, positions, prices, cash amounts, timestamps. each is its own type so the
// compiler catches mixups before the ledger does.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

// Buy opens the single long unit, Sell closes it. there is no short side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Sell,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Buy => write!(f, "BUY"),
            Action::Sell => write!(f, "SELL"),
        }
    }
}

// 1.1: the whole state machine. flat or long one unit, never short, and the
// entry price only exists while the position does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Flat,
    Long { entry_price: Price },
}

impl Position {
    pub fn is_long(&self) -> bool {
        matches!(self, Position::Long { .. })
    }

    pub fn is_flat(&self) -> bool {
        matches!(self, Position::Flat)
    }

    pub fn entry_price(&self) -> Option<Price> {
        match self {
            Position::Flat => None,
            Position::Long { entry_price } => Some(*entry_price),
        }
    }

    // wire form used in confirmations: 0 = flat, 1 = long
    pub fn flag(&self) -> u8 {
        match self {
            Position::Flat => 0,
            Position::Long { .. } => 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Flat => write!(f, "FLAT"),
            Position::Long { .. } => write!(f, "LONG"),
        }
    }
}

// 1.2: price in quote currency per unit. must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price(Decimal);

impl Price {
    #[must_use]
    pub fn new(value: Decimal) -> Option<Self> {
        if value > Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn new_unchecked(value: Decimal) -> Self {
        debug_assert!(value > Decimal::ZERO);
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// 1.3: quote currency amount. cash and pnl use this. can go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote(Decimal);

impl Quote {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn add(&self, other: Quote) -> Self {
        Self(self.0 + other.0)
    }

    pub fn sub(&self, other: Quote) -> Self {
        Self(self.0 - other.0)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialOrd for Quote {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quote {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl Sum for Quote {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, q| acc.add(q))
    }
}

impl<'a> Sum<&'a Quote> for Quote {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, q| acc.add(*q))
    }
}

// 1.4: signal timestamp. RFC 3339 on the wire, echoed back unchanged in
// confirmations. ordering follows the instant, not the string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    pub fn from_rfc3339(s: &str) -> Result<Self, chrono::ParseError> {
        Ok(Self(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc)))
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn price_rejects_non_positive() {
        assert!(Price::new(dec!(0)).is_none());
        assert!(Price::new(dec!(-5)).is_none());
        assert_eq!(Price::new(dec!(100)).unwrap().value(), dec!(100));
    }

    #[test]
    fn position_entry_price_only_while_long() {
        let flat = Position::Flat;
        assert!(flat.is_flat());
        assert_eq!(flat.entry_price(), None);
        assert_eq!(flat.flag(), 0);

        let long = Position::Long {
            entry_price: Price::new_unchecked(dec!(100)),
        };
        assert!(long.is_long());
        assert_eq!(long.entry_price().unwrap().value(), dec!(100));
        assert_eq!(long.flag(), 1);
    }

    #[test]
    fn quote_sums() {
        let total: Quote = [Quote::new(dec!(10)), Quote::new(dec!(-4))].iter().sum();
        assert_eq!(total.value(), dec!(6));
    }

    #[test]
    fn timestamp_round_trip() {
        let ts = Timestamp::from_rfc3339("2024-01-02T09:30:00Z").unwrap();
        assert_eq!(ts.to_string(), "2024-01-02T09:30:00Z");
        assert!(ts < Timestamp::from_rfc3339("2024-01-02T09:31:00Z").unwrap());
    }
}
