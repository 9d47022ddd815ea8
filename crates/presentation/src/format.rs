//! Currency and date formatting.

use chrono::NaiveDate;
use quickbill_core::Money;

pub const CURRENCY_SYMBOL: &str = "$";

/// `$75.50`, `-$25.50`.
pub fn format_currency(amount: Money) -> String {
    let cents = amount.to_cents();
    if cents.is_negative() {
        format!("-{CURRENCY_SYMBOL}{}", Money::ZERO - cents)
    } else if cents.is_zero() {
        format!("{CURRENCY_SYMBOL}{}", Money::ZERO)
    } else {
        format!("{CURRENCY_SYMBOL}{cents}")
    }
}

/// ISO date, as it was entered on the form.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
