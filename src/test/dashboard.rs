#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::{
        app::Dashboard,
        config::Config,
        error::AnalyzerError,
        models::{Period, PriceHistory, PricePoint, RawQuote},
    };

    fn raw(name: &str, current: rust_decimal::Decimal, previous: rust_decimal::Decimal) -> RawQuote {
        RawQuote::new(
            Some(name.to_string()),
            Some(current),
            Some(previous),
            None,
            None,
            Some(String::from("USD")),
            None,
            None,
        )
    }

    fn history(symbol: &str) -> PriceHistory {
        PriceHistory::new(
            symbol.to_string(),
            Period::OneMonth,
            vec![
                PricePoint::new(NaiveDate::from_ymd_opt(2024, 3, 13).unwrap(), dec!(100)),
                PricePoint::new(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(), dec!(110)),
            ],
        )
    }

    fn dashboard(export_dir: &str) -> Dashboard {
        let config = Config {
            export_dir: export_dir.to_string(),
            ..Config::default()
        };
        Dashboard::new(&config).unwrap()
    }

    #[test]
    fn keeps_selection_and_period() {
        let mut dashboard = dashboard(".");
        dashboard.set_symbols("aapl, msft").unwrap();
        dashboard.next_period();

        assert_eq!(dashboard.symbols(), &vec!["AAPL", "MSFT"]);
        assert!(dashboard.is_comparison());
        assert_eq!(dashboard.period(), Period::ThreeMonths);

        dashboard.previous_period();
        dashboard.previous_period();
        assert_eq!(dashboard.period(), Period::FiveYears);
    }

    #[test]
    fn invalid_input_keeps_previous_selection() {
        let mut dashboard = dashboard(".");
        dashboard.set_symbols("AAPL").unwrap();

        assert!(dashboard.set_symbols("   ").is_err());
        assert_eq!(dashboard.symbols(), &vec!["AAPL"]);
    }

    #[test]
    fn partial_failure_reports_warnings() {
        let mut dashboard = dashboard(".");
        dashboard.set_symbols("AAPL, NOPE").unwrap();

        let warnings = dashboard
            .apply_results(vec![
                (
                    String::from("AAPL"),
                    Ok((raw("Apple Inc.", dec!(150), dec!(145)), history("AAPL"))),
                ),
                (
                    String::from("NOPE"),
                    Err(AnalyzerError::Fetch(String::from("No results for symbol NOPE"))),
                ),
            ])
            .unwrap();

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("NOPE"));
        assert_eq!(dashboard.quotes().len(), 1);
        assert_eq!(dashboard.quotes()[0].daily_change_label(), "+5.00 (+3.45%)");
        assert_eq!(dashboard.histories().len(), 1);
    }

    #[test]
    fn total_failure_keeps_previous_results() {
        let mut dashboard = dashboard(".");
        dashboard.set_symbols("AAPL").unwrap();
        dashboard
            .apply_results(vec![(
                String::from("AAPL"),
                Ok((raw("Apple Inc.", dec!(150), dec!(145)), history("AAPL"))),
            )])
            .unwrap();

        let err = dashboard
            .apply_results(vec![(
                String::from("AAPL"),
                Err(AnalyzerError::data_format("regularMarketPrice")),
            )])
            .unwrap_err();

        assert!(matches!(err, AnalyzerError::DataFormat { .. }));
        assert!(err.is_upstream());
        assert_eq!(dashboard.quotes()[0].display_name(), "Apple Inc.");
    }

    #[test]
    fn export_needs_fetched_history() {
        let dir = tempfile::tempdir().unwrap();
        let mut dashboard = dashboard(dir.path().to_str().unwrap());

        assert!(dashboard.export_selected().is_err());

        dashboard.set_symbols("AAPL").unwrap();
        dashboard
            .apply_results(vec![(
                String::from("AAPL"),
                Ok((raw("Apple Inc.", dec!(150), dec!(145)), history("AAPL"))),
            )])
            .unwrap();

        let path = dashboard.export_selected().unwrap();
        assert_eq!(path, dir.path().join("AAPL_history.csv"));
    }

    #[tokio::test]
    async fn refresh_without_symbols_is_rejected() {
        let mut dashboard = dashboard(".");
        assert!(matches!(
            dashboard.refresh().await,
            Err(AnalyzerError::InvalidSymbol(_))
        ));
    }

    #[tokio::test]
    async fn blank_search_clears_results_without_request() {
        let mut dashboard = dashboard(".");
        assert_eq!(dashboard.search("   ").await.unwrap(), 0);
        assert!(dashboard.search_results().is_empty());
    }
}
