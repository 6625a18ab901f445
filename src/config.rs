use clap::{Args, Parser, Subcommand};

use crate::models::Period;

#[derive(Parser, Debug)]
#[command(name = "stock-analyzer", version, about = "Check live stock prices in the terminal", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Clone, Debug)]
pub struct Config {
    /// History range: 1mo, 3mo, 6mo, 1y or 5y.
    #[arg(long, global = true, env = "STOCK_ANALYZER_PERIOD", default_value = "1mo", value_parser = Period::parse)]
    pub period: Period,

    /// Directory CSV exports are written to.
    #[arg(long, global = true, env = "STOCK_ANALYZER_EXPORT_DIR", default_value = ".")]
    pub export_dir: String,

    /// HTTP timeout in seconds.
    #[arg(long, global = true, env = "STOCK_ANALYZER_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Log file used while the dashboard owns the terminal.
    #[arg(long, global = true, env = "STOCK_ANALYZER_LOG_FILE", default_value = "stock-analyzer.log")]
    pub log_file: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive dashboard (default).
    Tui {
        /// Symbols to load on start, e.g. "AAPL,TCS.NS".
        symbols: Option<String>,
    },

    /// Print normalized quotes.
    Quote {
        #[arg(required = true)]
        symbols: Vec<String>,
    },

    /// Search symbols by company name.
    Search { query: String },

    /// Write a symbol's price history as CSV.
    Export { symbol: String },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            period: Period::default(),
            export_dir: String::from("."),
            timeout_secs: 10,
            log_file: String::from("stock-analyzer.log"),
        }
    }
}
