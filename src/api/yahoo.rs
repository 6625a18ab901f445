use log::{debug, warn};
use reqwest::Client;

use super::{
    utils::{make_request, parse_response_object},
    yahoo_dto::{YahooChartResponseDto, YahooChartResultDto, YahooSearchResponseDto},
};
use crate::{
    error::Result,
    models::{Period, PriceHistory, RawQuote, SearchMatch},
};

const CHART_BASE_URL: &str = "https://query2.finance.yahoo.com/v8/finance/chart";
const SEARCH_BASE_URL: &str = "https://query2.finance.yahoo.com/v1/finance";
const SEARCH_LIMIT: &str = "10";

async fn get_chart(symbol: &str, range: &str, client: &Client) -> Result<YahooChartResultDto> {
    let params = [("range", range), ("interval", "1d")];
    let res = make_request(client, CHART_BASE_URL, symbol, &params).await?;

    let response = parse_response_object::<YahooChartResponseDto>(
        res,
        &format!("Failed to parse chart for {}", symbol),
    )?;

    response.into_result(symbol)
}

/// Quote and history from a single chart request.
pub async fn get_quote_with_history(
    symbol: &str,
    period: Period,
    client: &Client,
) -> Result<(RawQuote, PriceHistory)> {
    let result = get_chart(symbol, period.to_str(), client).await?;
    let raw = RawQuote::from_value(result.meta())?;
    let history = result.to_price_history(symbol, period);
    if history.is_empty() {
        warn!("Empty {} history for {}", period, symbol);
    } else {
        debug!("{}: {} history points", symbol, history.points().len());
    }

    Ok((raw, history))
}

/// Free-text symbol search. No match is an empty list, not an error.
pub async fn search_symbol(query: &str, client: &Client) -> Result<Vec<SearchMatch>> {
    let params = [
        ("q", query),
        ("quotesCount", SEARCH_LIMIT),
        ("newsCount", "0"),
    ];
    let res = make_request(client, SEARCH_BASE_URL, "search", &params).await?;

    let response = parse_response_object::<YahooSearchResponseDto>(
        res,
        &format!("Failed to parse search results for '{}'", query),
    )?;

    Ok(response
        .quotes()
        .iter()
        .filter_map(|q| q.to_search_match())
        .collect())
}
