use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AnalyzerError, Result};

static SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9.\-^=]+$").expect("valid symbol regex"));

/// Splits free-text input into upper-cased, de-duplicated ticker symbols.
///
/// `"aapl, msft tcs.ns"` -> `["AAPL", "MSFT", "TCS.NS"]`
pub fn parse_symbols(input: &str) -> Result<Vec<String>> {
    let mut symbols: Vec<String> = Vec::new();

    for part in input.split(|c: char| c == ',' || c.is_whitespace()) {
        if part.is_empty() {
            continue;
        }
        let symbol = part.to_uppercase();
        if !SYMBOL_RE.is_match(&symbol) {
            return Err(AnalyzerError::InvalidSymbol(part.to_string()));
        }
        if !symbols.contains(&symbol) {
            symbols.push(symbol);
        }
    }

    if symbols.is_empty() {
        return Err(AnalyzerError::InvalidSymbol(
            "Please enter a stock symbol".to_string(),
        ));
    }

    Ok(symbols)
}

/// Next index in a list of `len` items, wrapping around.
pub fn next_index(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match selected {
        Some(i) if i + 1 < len => i + 1,
        _ => 0,
    })
}

pub fn previous_index(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match selected {
        Some(0) | None => len - 1,
        Some(i) => (i - 1).min(len - 1),
    })
}
