pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

#[cfg(test)]
mod test;

pub use app::{
    lookup::{currency_symbol, region_glyph_for_country, region_glyph_for_currency},
    market::market_status,
    normalize::{normalize, normalize_value},
};
pub use error::{AnalyzerError, Result};
