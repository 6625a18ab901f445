use chrono::{DateTime, Timelike, Utc};
use chrono_tz::{Asia::Kolkata, Tz};

use crate::models::MarketStatus;

pub const MARKET_OPEN_HOUR: u32 = 9;
pub const MARKET_CLOSE_HOUR: u32 = 15;

/// Open for local hours in `[9, 15)`. The caller converts into the exchange zone.
pub fn market_status<T: Timelike>(now_in_zone: &T) -> MarketStatus {
    if (MARKET_OPEN_HOUR..MARKET_CLOSE_HOUR).contains(&now_in_zone.hour()) {
        MarketStatus::Open
    } else {
        MarketStatus::Closed
    }
}

pub fn now_in_kolkata() -> DateTime<Tz> {
    Utc::now().with_timezone(&Kolkata)
}

/// `"Market Open · 10:42:07 IST"`
pub fn clock_label(now_in_zone: &DateTime<Tz>) -> String {
    format!(
        "{} · {}",
        market_status(now_in_zone),
        now_in_zone.format("%H:%M:%S %Z")
    )
}
