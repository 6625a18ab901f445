pub mod market_status;
pub mod normalized_quote;
pub mod period;
pub mod price_history;
pub mod raw_quote;
pub mod search_match;

pub use market_status::MarketStatus;
pub use normalized_quote::NormalizedQuote;
pub use period::Period;
pub use price_history::{PriceHistory, PricePoint};
pub use raw_quote::RawQuote;
pub use search_match::SearchMatch;
