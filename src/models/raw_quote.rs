use std::str::FromStr;

use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::error::{AnalyzerError, Result};

/// Partially populated quote as reported by a data provider.
///
/// Any field may be missing; missing is never an error.
#[derive(Clone, Debug, Default, Eq, Getters, PartialEq, new)]
pub struct RawQuote {
    long_name: Option<String>,
    current_price: Option<Decimal>,
    previous_close: Option<Decimal>,
    week52_high: Option<Decimal>,
    week52_low: Option<Decimal>,
    currency: Option<String>,
    country: Option<String>,
    logo_url: Option<String>,
}

impl RawQuote {
    /// Reads a quote out of a loosely-typed JSON object.
    ///
    /// Keys are looked up in order, so a provider that reports `regularMarketPrice`
    /// instead of `currentPrice` still fills `current_price`. `null` counts as absent.
    pub fn from_value(value: &Value) -> Result<Self> {
        let empty = Map::new();
        let obj = match value {
            Value::Object(obj) => obj,
            Value::Null => &empty,
            _ => return Err(AnalyzerError::data_format("quote")),
        };

        Ok(Self {
            long_name: get_string(obj, &["longName"])?,
            current_price: get_decimal(obj, &["currentPrice", "regularMarketPrice"])?,
            previous_close: get_decimal(obj, &["previousClose", "chartPreviousClose"])?,
            week52_high: get_decimal(obj, &["fiftyTwoWeekHigh"])?,
            week52_low: get_decimal(obj, &["fiftyTwoWeekLow"])?,
            currency: get_string(obj, &["currency"])?,
            country: get_string(obj, &["country"])?,
            logo_url: get_string(obj, &["logo_url", "logoUrl"])?,
        })
    }
}

fn lookup<'a>(obj: &'a Map<String, Value>, keys: &[&'a str]) -> Option<(&'a str, &'a Value)> {
    keys.iter()
        .filter_map(|key| obj.get(*key).map(|v| (*key, v)))
        .find(|(_, v)| !v.is_null())
}

fn get_decimal(obj: &Map<String, Value>, keys: &[&str]) -> Result<Option<Decimal>> {
    match lookup(obj, keys) {
        None => Ok(None),
        Some((key, Value::Number(n))) => {
            let text = n.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .map(Some)
                .map_err(|_| AnalyzerError::data_format(key))
        }
        Some((key, _)) => Err(AnalyzerError::data_format(key)),
    }
}

fn get_string(obj: &Map<String, Value>, keys: &[&str]) -> Result<Option<String>> {
    match lookup(obj, keys) {
        None => Ok(None),
        Some((_, Value::String(s))) => Ok(Some(s.clone())),
        Some((key, _)) => Err(AnalyzerError::data_format(key)),
    }
}
