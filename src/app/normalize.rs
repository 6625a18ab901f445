use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

use crate::{
    app::lookup::{
        DEFAULT_CURRENCY, currency_symbol, region_glyph_for_country, region_glyph_for_currency,
    },
    error::Result,
    models::{NormalizedQuote, RawQuote},
};

pub const NOT_AVAILABLE: &str = "N/A";

/// Turns a partially populated provider quote into a display-ready summary.
///
/// A price of exactly zero counts as missing for the daily change, so the label
/// reads `N/A` rather than dividing by zero or reporting a 100% move. The prices
/// themselves are passed through untouched.
pub fn normalize(raw: &RawQuote, ticker_symbol: &str) -> NormalizedQuote {
    let display_name = raw
        .long_name()
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(ticker_symbol)
        .to_string();

    let current_price = *raw.current_price();
    let previous_close = *raw.previous_close();

    let change = daily_change(current_price, previous_close);
    let daily_change_label = match change {
        Some((absolute, percent)) => change_label(absolute, percent),
        None => NOT_AVAILABLE.to_string(),
    };

    let currency_code = raw
        .currency()
        .clone()
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    let symbol = currency_symbol(&currency_code);
    let region_glyph = match raw.country() {
        Some(country) if !country.is_empty() => region_glyph_for_country(country),
        _ => region_glyph_for_currency(&currency_code),
    };

    NormalizedQuote::new(
        ticker_symbol.to_string(),
        display_name,
        current_price,
        previous_close,
        change.map(|(absolute, _)| absolute),
        change.map(|(_, percent)| percent),
        daily_change_label,
        *raw.week52_high(),
        *raw.week52_low(),
        currency_code,
        symbol,
        region_glyph.to_string(),
        raw.logo_url().clone(),
    )
}

/// Parses a loosely-typed provider object and normalizes it.
pub fn normalize_value(value: &Value, ticker_symbol: &str) -> Result<NormalizedQuote> {
    let raw = RawQuote::from_value(value)?;
    Ok(normalize(&raw, ticker_symbol))
}

/// `(absolute, percent)` change, only when both prices are present and non-zero.
/// A result outside the `Decimal` range is treated as unavailable.
pub fn daily_change(
    current_price: Option<Decimal>,
    previous_close: Option<Decimal>,
) -> Option<(Decimal, Decimal)> {
    let current = current_price.filter(|p| !p.is_zero())?;
    let previous = previous_close.filter(|p| !p.is_zero())?;

    let absolute = current.checked_sub(previous)?;
    let percent = absolute
        .checked_div(previous)?
        .checked_mul(Decimal::ONE_HUNDRED)?;

    Some((absolute, percent))
}

/// `"+1.23 (+0.45%)"`
pub fn change_label(absolute: Decimal, percent: Decimal) -> String {
    format!("{} ({}%)", signed(absolute), signed(percent))
}

fn signed(value: Decimal) -> String {
    let rounded = value
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let sign = if value < Decimal::ZERO { "-" } else { "+" };
    format!("{}{:.2}", sign, rounded)
}
