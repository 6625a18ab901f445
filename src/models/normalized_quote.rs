use derive_getters::Getters;
use derive_new::new;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Display-ready quote summary. Built once by the normalizer and never mutated.
#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize, new)]
pub struct NormalizedQuote {
    symbol: String,
    display_name: String,
    current_price: Option<Decimal>,
    previous_close: Option<Decimal>,
    daily_change_absolute: Option<Decimal>,
    daily_change_percent: Option<Decimal>,
    daily_change_label: String,
    week52_high: Option<Decimal>,
    week52_low: Option<Decimal>,
    currency_code: String,
    currency_symbol: String,
    region_glyph: String,
    logo_url: Option<String>,
}

impl NormalizedQuote {
    /// Current price prefixed with the currency symbol, or `N/A`.
    pub fn price_label(&self) -> String {
        format_money(&self.currency_symbol, self.current_price)
    }

    /// `low - high` with currency symbols, or `N/A` when either bound is missing.
    pub fn week52_range_label(&self) -> String {
        match (self.week52_low, self.week52_high) {
            (Some(low), Some(high)) => format!(
                "{} - {}",
                format_money(&self.currency_symbol, Some(low)),
                format_money(&self.currency_symbol, Some(high))
            ),
            _ => String::from("N/A"),
        }
    }

    pub fn is_gain(&self) -> Option<bool> {
        self.daily_change_absolute.map(|c| c >= Decimal::ZERO)
    }
}

fn format_money(symbol: &str, value: Option<Decimal>) -> String {
    match value {
        Some(v) => format!(
            "{}{:.2}",
            symbol,
            v.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
        ),
        None => String::from("N/A"),
    }
}
