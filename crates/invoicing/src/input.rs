//! Lenient coercion of raw form input.
//!
//! The ledger has no "invalid" representation: anything that does not parse
//! becomes zero (or no date) instead of an error.

use core::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use quickbill_core::Money;

/// Date format accepted from date inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest amount accepted from raw input, in whole currency units.
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000_000;

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// Parse a money amount. Empty, non-numeric, negative and out-of-range
/// (above [`MAX_AMOUNT_UNITS`]) input yield zero.
///
/// A leading `$` is tolerated so values copied from a rendered invoice parse.
pub fn coerce_amount(raw: &str) -> Money {
    let s = raw.trim();
    let s = s.strip_prefix('$').unwrap_or(s);
    parse_decimal(s)
        .filter(|d| *d <= Decimal::from(MAX_AMOUNT_UNITS))
        .map(Money::new)
        .map(Money::non_negative)
        .unwrap_or(Money::ZERO)
}

/// Parse an item count. Decimal input truncates toward zero (`"2.7"` is 2);
/// empty, non-numeric, negative or out-of-range input yields zero.
pub fn coerce_quantity(raw: &str) -> u32 {
    let s = raw.trim();
    if let Ok(n) = s.parse::<u32>() {
        return n;
    }
    parse_decimal(s)
        .filter(|d| !d.is_sign_negative())
        .and_then(|d| d.trunc().to_u32())
        .unwrap_or(0)
}

/// Parse an ISO `YYYY-MM-DD` date. Empty or malformed input clears the date.
pub fn coerce_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}
