//! Penny rounding policies
//!
//! Two distinct operations are used by the amortization math and they are not
//! interchangeable: balances and interest use half-up rounding, while the level
//! payment is always rounded up so the loan retires within its term.

/// Cents per currency unit
const CENTS: f64 = 100.0;

/// Round to the nearest cent, ties toward positive infinity
pub fn round_penny(value: f64) -> f64 {
    let scaled = value * CENTS;
    let floor = scaled.floor();
    let cents = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    cents / CENTS
}

/// Round up to the next cent (ceiling at two decimals)
pub fn next_penny(value: f64) -> f64 {
    (value * CENTS).ceil() / CENTS
}
