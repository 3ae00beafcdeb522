use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Price of one night for one occupant.
pub const NIGHTLY_RATE: Price = Price::new(dec!(50.0));

/// Represents the monetary price of a booking.
///
/// Wraps `rust_decimal::Decimal` so that amounts never go through floating point.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Price(Decimal);

impl Price {
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Multiplies the price by a whole quantity (nights, occupants).
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
