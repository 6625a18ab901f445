#[cfg(test)]
mod tests {
    use crate::{
        app::utils::{next_index, parse_symbols, previous_index},
        error::AnalyzerError,
        models::Period,
    };

    #[test]
    fn symbols_are_split_uppercased_and_deduplicated() {
        let symbols = parse_symbols(" aapl, msft  tcs.ns,AAPL ").unwrap();
        assert_eq!(symbols, vec!["AAPL", "MSFT", "TCS.NS"]);
    }

    #[test]
    fn index_and_currency_symbols_are_valid() {
        assert_eq!(parse_symbols("^NSEI").unwrap(), vec!["^NSEI"]);
        assert_eq!(parse_symbols("usdinr=x").unwrap(), vec!["USDINR=X"]);
        assert_eq!(parse_symbols("brk-b").unwrap(), vec!["BRK-B"]);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            parse_symbols("  , "),
            Err(AnalyzerError::InvalidSymbol(_))
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        match parse_symbols("AAPL, $$$") {
            Err(AnalyzerError::InvalidSymbol(s)) => assert_eq!(s, "$$$"),
            other => panic!("expected invalid symbol, got {other:?}"),
        }
    }

    #[test]
    fn index_helpers_wrap() {
        assert_eq!(next_index(None, 3), Some(0));
        assert_eq!(next_index(Some(2), 3), Some(0));
        assert_eq!(next_index(Some(0), 0), None);
        assert_eq!(previous_index(Some(0), 3), Some(2));
        assert_eq!(previous_index(Some(2), 3), Some(1));
        assert_eq!(previous_index(None, 0), None);
    }

    #[test]
    fn period_round_trips_its_selector_strings() {
        for (s, period) in [
            ("1mo", Period::OneMonth),
            ("3mo", Period::ThreeMonths),
            ("6mo", Period::SixMonths),
            ("1y", Period::OneYear),
            ("5y", Period::FiveYears),
        ] {
            assert_eq!(Period::parse(s).unwrap(), period);
            assert_eq!(period.to_str(), s);
        }
        assert!(matches!(
            Period::parse("2w"),
            Err(AnalyzerError::InvalidPeriod(_))
        ));
        assert_eq!(Period::default(), Period::OneMonth);
    }

    #[test]
    fn period_cycles() {
        assert_eq!(Period::OneMonth.next(), Period::ThreeMonths);
        assert_eq!(Period::FiveYears.next(), Period::OneMonth);
        assert_eq!(Period::OneMonth.previous(), Period::FiveYears);
        assert_eq!(Period::OneYear.previous(), Period::SixMonths);
    }
}
