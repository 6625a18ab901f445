use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{AnalyzerError, Result},
    models::{Period, PriceHistory, PricePoint, SearchMatch},
};

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooChartResponseDto {
    chart: YahooChartDto,
}

impl YahooChartResponseDto {
    /// Picks the first chart result. A provider `error` object or an empty result is a fetch error.
    pub fn into_result(self, symbol: &str) -> Result<YahooChartResultDto> {
        if let Some(error) = &self.chart.error {
            return Err(AnalyzerError::Fetch(format!(
                "{} ({}): {}",
                symbol, error.code, error.description
            )));
        }

        self.chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| AnalyzerError::Fetch(format!("No results for symbol {}", symbol)))
    }
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooChartDto {
    result: Option<Vec<YahooChartResultDto>>,
    error: Option<YahooErrorDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooErrorDto {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooChartResultDto {
    #[serde(default)]
    meta: Value,
    #[serde(default)]
    timestamp: Vec<i64>,
    #[serde(default)]
    indicators: YahooIndicatorsDto,
}

#[derive(Debug, Default, Deserialize, Getters, new)]
pub struct YahooIndicatorsDto {
    #[serde(default)]
    quote: Vec<YahooIndicatorQuoteDto>,
}

#[derive(Debug, Default, Deserialize, Getters, new)]
pub struct YahooIndicatorQuoteDto {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

impl YahooChartResultDto {
    /// Pairs timestamps with closes. Days the provider reports without a close are skipped.
    ///
    /// Timestamps are shifted by the exchange's `gmtoffset` so dates match the local session.
    pub fn to_price_history(&self, symbol: &str, period: Period) -> PriceHistory {
        let offset = self.meta["gmtoffset"].as_i64().unwrap_or(0);
        let closes = self
            .indicators
            .quote
            .first()
            .map(|q| q.close.as_slice())
            .unwrap_or(&[]);

        let points = self
            .timestamp
            .iter()
            .zip(closes.iter())
            .filter_map(|(ts, close)| {
                let date = DateTime::<Utc>::from_timestamp(ts + offset, 0)?.date_naive();
                let close = Decimal::from_f64((*close)?)?.round_dp(4);
                Some(PricePoint::new(date, close))
            })
            .collect();

        PriceHistory::new(symbol.to_string(), period, points)
    }
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooSearchResponseDto {
    #[serde(default)]
    quotes: Vec<YahooSearchQuoteDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooSearchQuoteDto {
    symbol: Option<String>,
    shortname: Option<String>,
    longname: Option<String>,
    #[serde(rename = "exchDisp")]
    exch_disp: Option<String>,
    exchange: Option<String>,
}

impl YahooSearchQuoteDto {
    pub fn to_search_match(&self) -> Option<SearchMatch> {
        let symbol = self.symbol.clone().filter(|s| !s.is_empty())?;
        let name = self
            .longname
            .clone()
            .or_else(|| self.shortname.clone())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| symbol.clone());
        let exchange = self.exch_disp.clone().or_else(|| self.exchange.clone());

        Some(SearchMatch::new(name, symbol, exchange))
    }
}
