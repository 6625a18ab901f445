use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use log::{info, warn};
use reqwest::Client;

use crate::{
    api::yahoo,
    app::{export::export_history, normalize::normalize, utils::parse_symbols},
    config::Config,
    error::AnalyzerError,
    models::{NormalizedQuote, Period, PriceHistory, RawQuote, SearchMatch},
};

/// State of one interaction round: the last selection and what it produced.
///
/// The UI owns this value and passes it back in for the next request.
#[derive(Clone, Debug)]
pub struct Dashboard {
    client: Client,
    export_dir: String,
    symbols: Vec<String>,
    period: Period,
    quotes: Vec<NormalizedQuote>,
    histories: Vec<PriceHistory>,
    search_results: Vec<SearchMatch>,
}

impl Dashboard {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .with_context(|| "Failed to build HTTP client")?;

        Ok(Self {
            client,
            export_dir: config.export_dir.clone(),
            symbols: Vec::new(),
            period: config.period,
            quotes: Vec::new(),
            histories: Vec::new(),
            search_results: Vec::new(),
        })
    }

    pub fn symbols(&self) -> &Vec<String> {
        &self.symbols
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn quotes(&self) -> &Vec<NormalizedQuote> {
        &self.quotes
    }

    pub fn histories(&self) -> &Vec<PriceHistory> {
        &self.histories
    }

    pub fn search_results(&self) -> &Vec<SearchMatch> {
        &self.search_results
    }

    pub fn is_comparison(&self) -> bool {
        self.symbols.len() > 1
    }

    pub fn set_symbols(&mut self, input: &str) -> Result<(), AnalyzerError> {
        self.symbols = parse_symbols(input)?;
        Ok(())
    }

    pub fn next_period(&mut self) {
        self.period = self.period.next();
    }

    pub fn previous_period(&mut self) {
        self.period = self.period.previous();
    }

    /// Fetches and normalizes every selected symbol.
    ///
    /// Symbols that fail are reported back as warnings. If nothing could be fetched the
    /// first error is returned and the previous results stay on screen.
    pub async fn refresh(&mut self) -> Result<Vec<String>, AnalyzerError> {
        if self.symbols.is_empty() {
            return Err(AnalyzerError::InvalidSymbol(
                "Please enter a stock symbol".to_string(),
            ));
        }

        let mut fetched = Vec::new();
        for symbol in &self.symbols {
            let result = yahoo::get_quote_with_history(symbol, self.period, &self.client).await;
            fetched.push((symbol.clone(), result));
        }

        self.apply_results(fetched)
    }

    pub fn apply_results(
        &mut self,
        fetched: Vec<(String, Result<(RawQuote, PriceHistory), AnalyzerError>)>,
    ) -> Result<Vec<String>, AnalyzerError> {
        let mut quotes = Vec::new();
        let mut histories = Vec::new();
        let mut warnings = Vec::new();
        let mut first_error = None;

        for (symbol, result) in fetched {
            match result {
                Ok((raw, history)) => {
                    quotes.push(normalize(&raw, &symbol));
                    histories.push(history);
                }
                Err(e) => {
                    warn!("Failed to load {}: {}", symbol, e);
                    warnings.push(format!("{}: {}", symbol, e));
                    first_error.get_or_insert(e);
                }
            }
        }

        if quotes.is_empty() {
            if let Some(e) = first_error {
                return Err(e);
            }
        }

        info!("Loaded {} of {} symbols", quotes.len(), self.symbols.len());
        self.quotes = quotes;
        self.histories = histories;

        Ok(warnings)
    }

    /// An empty result list means no match and is not an error.
    pub async fn search(&mut self, query: &str) -> Result<usize, AnalyzerError> {
        let query = query.trim();
        if query.is_empty() {
            self.search_results.clear();
            return Ok(0);
        }

        self.search_results = yahoo::search_symbol(query, &self.client).await?;
        info!("Search '{}' returned {} matches", query, self.search_results.len());

        Ok(self.search_results.len())
    }

    pub fn clear_search(&mut self) {
        self.search_results.clear();
    }

    pub fn primary_history(&self) -> Option<&PriceHistory> {
        self.histories.first()
    }

    /// Writes the first selected symbol's history to the export directory.
    pub fn export_selected(&self) -> Result<PathBuf, AnalyzerError> {
        let history = self.primary_history().ok_or_else(|| {
            AnalyzerError::InvalidSymbol("Nothing to export, fetch a symbol first".to_string())
        })?;
        export_history(history, &self.export_dir)
    }
}
