use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use stock_analyzer_tui::{
    app::{
        App, Dashboard,
        market::{market_status, now_in_kolkata},
    },
    config::{Cli, Commands, Config},
    logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let config = cli.config;

    match cli.command {
        None => run_tui(&config, None).await,
        Some(Commands::Tui { symbols }) => run_tui(&config, symbols).await,
        Some(Commands::Quote { symbols }) => {
            logging::init_stderr();
            print_quotes(&config, &symbols.join(",")).await
        }
        Some(Commands::Search { query }) => {
            logging::init_stderr();
            print_search(&config, &query).await
        }
        Some(Commands::Export { symbol }) => {
            logging::init_stderr();
            export(&config, &symbol).await
        }
    }
}

async fn run_tui(config: &Config, symbols: Option<String>) -> Result<()> {
    logging::init_file(&config.log_file)?;
    info!("Starting dashboard, period {}", config.period);

    let mut dashboard = Dashboard::new(config)?;
    if let Some(symbols) = symbols {
        dashboard.set_symbols(&symbols)?;
    }

    let mut app = App::new(dashboard);
    app.run().await
}

async fn print_quotes(config: &Config, symbols: &str) -> Result<()> {
    let mut dashboard = Dashboard::new(config)?;
    dashboard.set_symbols(symbols)?;

    let warnings = dashboard
        .refresh()
        .await
        .with_context(|| format!("Failed to fetch {}", symbols))?;
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }

    for quote in dashboard.quotes() {
        println!("{} {} ({})", quote.region_glyph(), quote.display_name(), quote.symbol());
        println!("  Current Price: {}", quote.price_label());
        println!("  Daily Change:  {}", quote.daily_change_label());
        println!("  52 Week Range: {}", quote.week52_range_label());
        println!("  Currency:      {}", quote.currency_code());
    }
    println!("{}", market_status(&now_in_kolkata()));

    Ok(())
}

async fn print_search(config: &Config, query: &str) -> Result<()> {
    let mut dashboard = Dashboard::new(config)?;
    let found = dashboard
        .search(query)
        .await
        .with_context(|| format!("Search for '{}' failed", query))?;

    if found == 0 {
        println!("No matches for '{}'", query);
    }
    for m in dashboard.search_results() {
        println!("{}", m.label());
    }

    Ok(())
}

async fn export(config: &Config, symbol: &str) -> Result<()> {
    let mut dashboard = Dashboard::new(config)?;
    dashboard.set_symbols(symbol)?;
    dashboard
        .refresh()
        .await
        .with_context(|| format!("Failed to fetch {}", symbol))?;

    let path = dashboard.export_selected()?;
    if let Some(quote) = dashboard.quotes().first() {
        info!("{} closed at {}", quote.display_name(), quote.price_label());
    }
    println!("{}", path.display());

    Ok(())
}
