use std::{fs, path::PathBuf};

use csv::Writer;
use log::info;

use crate::{error::Result, models::PriceHistory};

/// `TCS.NS` -> `TCS.NS_history.csv`, `^NSEI` -> `_NSEI_history.csv`
pub fn history_file_name(symbol: &str) -> String {
    let safe: String = symbol
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}_history.csv", safe)
}

/// Writes the history as `Date,Close` rows into `dir` and returns the file path.
pub fn export_history(history: &PriceHistory, dir: &str) -> Result<PathBuf> {
    let dir = PathBuf::from(shellexpand::tilde(dir).into_owned());
    fs::create_dir_all(&dir)?;

    let path = dir.join(history_file_name(history.symbol()));
    let mut writer = Writer::from_path(&path)?;

    writer.write_record(["Date", "Close"])?;
    for point in history.points() {
        writer.write_record([
            point.date().format("%Y-%m-%d").to_string(),
            point.close().to_string(),
        ])?;
    }
    writer.flush()?;

    info!(
        "Exported {} rows for {} to {}",
        history.points().len(),
        history.symbol(),
        path.display()
    );

    Ok(path)
}
