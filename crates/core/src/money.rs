//! # Money Module
//!
//! Display helpers for currency amounts. Balances are plain `Decimal`
//! values; this module only decides how they are shown to a person.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimals shown for every amount
pub const DISPLAY_DECIMALS: u32 = 2;

/// Format an amount with thousands separators and two decimals.
///
/// Rounds half away from zero.
///
/// # Examples
/// ```
/// use minibank_core::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(1_975_000, 0)), "1,975,000.00");
/// assert_eq!(format_amount(Decimal::new(-45, 1)), "-4.50");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.*}", DISPLAY_DECIMALS as usize, rounded.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, fraction)
}

/// Format an amount with a leading currency symbol, e.g. `$1,000.00`
pub fn format_money(amount: Decimal) -> String {
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-${}", format_amount(amount.abs()))
    } else {
        format!("${}", format_amount(amount))
    }
}
