//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use rust_decimal::Decimal;

/// Formats an amount as pesos with two decimal places.
///
/// Falls back to the raw value when it does not parse as a decimal.
///
/// Usage in templates: `{{ item.price|peso }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn peso(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_peso(&amount.to_string()))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

fn format_peso(raw: &str) -> String {
    raw.parse::<Decimal>().map_or_else(
        |_| format!("\u{20b1}{raw}"),
        |d| format!("\u{20b1}{:.2}", d.round_dp(2)),
    )
}
