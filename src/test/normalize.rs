#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{
        app::normalize::{change_label, daily_change, normalize, normalize_value},
        error::AnalyzerError,
        models::RawQuote,
    };

    fn quote_with_prices(
        current: Option<rust_decimal::Decimal>,
        previous: Option<rust_decimal::Decimal>,
    ) -> RawQuote {
        RawQuote::new(
            Some(String::from("Apple Inc.")),
            current,
            previous,
            None,
            None,
            Some(String::from("USD")),
            None,
            None,
        )
    }

    #[test]
    fn gain_is_formatted_with_explicit_plus() {
        let raw = quote_with_prices(Some(dec!(150.00)), Some(dec!(145.00)));
        let quote = normalize(&raw, "AAPL");

        assert_eq!(quote.daily_change_label(), "+5.00 (+3.45%)");
        assert_eq!(quote.daily_change_absolute().unwrap(), dec!(5.00));
        assert_eq!(
            quote.daily_change_percent().unwrap().round_dp(4),
            dec!(3.4483)
        );
        assert_eq!(quote.is_gain(), Some(true));
    }

    #[test]
    fn loss_is_formatted_with_minus() {
        let raw = quote_with_prices(Some(dec!(95)), Some(dec!(100)));
        let quote = normalize(&raw, "AAPL");

        assert_eq!(quote.daily_change_label(), "-5.00 (-5.00%)");
        assert_eq!(quote.is_gain(), Some(false));
    }

    #[test]
    fn unchanged_price_is_plus_zero() {
        let raw = quote_with_prices(Some(dec!(100)), Some(dec!(100)));
        assert_eq!(normalize(&raw, "X").daily_change_label(), "+0.00 (+0.00%)");
    }

    #[test]
    fn missing_price_gives_not_available() {
        for (current, previous) in [
            (None, Some(dec!(145))),
            (Some(dec!(150)), None),
            (None, None),
        ] {
            let quote = normalize(&quote_with_prices(current, previous), "AAPL");
            assert_eq!(quote.daily_change_label(), "N/A");
            assert!(quote.daily_change_absolute().is_none());
            assert!(quote.daily_change_percent().is_none());
        }
    }

    #[test]
    fn zero_previous_close_counts_as_missing() {
        let quote = normalize(&quote_with_prices(Some(dec!(100.00)), Some(dec!(0))), "AAPL");

        assert_eq!(quote.daily_change_label(), "N/A");
        assert!(quote.daily_change_percent().is_none());
        // The price itself is still shown.
        assert_eq!(*quote.previous_close(), Some(dec!(0)));
    }

    #[test]
    fn zero_current_price_counts_as_missing() {
        let quote = normalize(&quote_with_prices(Some(dec!(0)), Some(dec!(100))), "AAPL");
        assert_eq!(quote.daily_change_label(), "N/A");
        assert_eq!(*quote.current_price(), Some(dec!(0)));
    }

    #[test]
    fn negative_prices_pass_through() {
        let raw = quote_with_prices(Some(dec!(-10)), Some(dec!(-20)));
        let quote = normalize(&raw, "OIL");

        assert_eq!(*quote.current_price(), Some(dec!(-10)));
        assert_eq!(quote.daily_change_label(), "+10.00 (-50.00%)");
    }

    #[test]
    fn empty_quote_falls_back_everywhere() {
        let quote = normalize(&RawQuote::default(), "TCS.NS");

        assert_eq!(quote.display_name(), "TCS.NS");
        assert_eq!(quote.symbol(), "TCS.NS");
        assert_eq!(quote.currency_code(), "USD");
        assert_eq!(quote.currency_symbol(), "$");
        assert_eq!(quote.region_glyph(), "🇺🇸");
        assert_eq!(quote.daily_change_label(), "N/A");
        assert_eq!(quote.price_label(), "N/A");
        assert_eq!(quote.week52_range_label(), "N/A");
    }

    #[test]
    fn blank_long_name_uses_ticker() {
        let raw = RawQuote::new(Some(String::from("  ")), None, None, None, None, None, None, None);
        assert_eq!(normalize(&raw, "INFY.NS").display_name(), "INFY.NS");
    }

    #[test]
    fn country_takes_precedence_for_glyph() {
        let raw = RawQuote::new(
            Some(String::from("SAP SE")),
            None,
            None,
            None,
            None,
            Some(String::from("EUR")),
            Some(String::from("Germany")),
            None,
        );
        let quote = normalize(&raw, "SAP.DE");

        assert_eq!(quote.region_glyph(), "🇩🇪");
        assert_eq!(quote.currency_symbol(), "€");
    }

    #[test]
    fn unknown_currency_and_country() {
        let raw = RawQuote::new(
            None,
            Some(dec!(12.5)),
            None,
            Some(dec!(20)),
            Some(dec!(10)),
            Some(String::from("CHF")),
            Some(String::from("Switzerland")),
            None,
        );
        let quote = normalize(&raw, "NESN.SW");

        assert_eq!(quote.currency_symbol(), "CHF ");
        assert_eq!(quote.region_glyph(), "🌍");
        assert_eq!(quote.price_label(), "CHF 12.50");
        assert_eq!(quote.week52_range_label(), "CHF 10.00 - CHF 20.00");
    }

    #[test]
    fn normalize_value_reads_provider_json() {
        let value = serde_json::json!({
            "longName": "Tata Consultancy Services Limited",
            "regularMarketPrice": 4000.5,
            "chartPreviousClose": 3950.25,
            "fiftyTwoWeekHigh": 4592.25,
            "fiftyTwoWeekLow": 3311.8,
            "currency": "INR"
        });
        let quote = normalize_value(&value, "TCS.NS").unwrap();

        assert_eq!(quote.display_name(), "Tata Consultancy Services Limited");
        assert_eq!(quote.currency_symbol(), "₹");
        assert_eq!(quote.region_glyph(), "🇮🇳");
        assert_eq!(quote.daily_change_label(), "+50.25 (+1.27%)");
        assert_eq!(quote.price_label(), "₹4000.50");
    }

    #[test]
    fn normalize_value_names_bad_field() {
        let value = serde_json::json!({ "currentPrice": "150.00", "previousClose": 145.0 });
        let err = normalize_value(&value, "AAPL").unwrap_err();

        match err {
            AnalyzerError::DataFormat { field } => assert_eq!(field, "currentPrice"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn change_helpers() {
        assert_eq!(daily_change(Some(dec!(1)), Some(dec!(0))), None);
        assert_eq!(
            daily_change(Some(dec!(110)), Some(dec!(100))),
            Some((dec!(10), dec!(10)))
        );
        assert_eq!(change_label(dec!(1.234), dec!(0.455)), "+1.23 (+0.46%)");
        assert_eq!(change_label(dec!(-0.015), dec!(-0.001)), "-0.02 (-0.00%)");
    }

    #[test]
    fn ties_round_half_to_even() {
        let quote = normalize(&quote_with_prices(Some(dec!(100.125)), Some(dec!(100))), "AAPL");
        assert_eq!(quote.daily_change_label(), "+0.12 (+0.12%)");

        assert_eq!(change_label(dec!(0.135), dec!(-0.125)), "+0.14 (-0.12%)");
        assert_eq!(change_label(dec!(-0.005), dec!(0.005)), "-0.00 (+0.00%)");
    }

    #[test]
    fn out_of_range_change_is_not_available() {
        // difference overflows the Decimal range
        let quote = normalize_value(
            &serde_json::json!({ "currentPrice": 7e28, "previousClose": -7e28 }),
            "BIG",
        )
        .unwrap();
        assert_eq!(quote.daily_change_label(), "N/A");
        assert!(quote.daily_change_absolute().is_none());

        // division fits, scaling to percent does not
        let quote = normalize_value(
            &serde_json::json!({ "currentPrice": 1e27, "previousClose": 1 }),
            "BIG",
        )
        .unwrap();
        assert_eq!(quote.daily_change_label(), "N/A");
        assert!(quote.daily_change_percent().is_none());
        assert!(quote.current_price().is_some());
    }
}
