use strum_macros::{AsRefStr, Display};

#[derive(AsRefStr, Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum MarketStatus {
    #[strum(serialize = "Market Open")]
    Open,
    #[default]
    #[strum(serialize = "Market Closed")]
    Closed,
}

impl MarketStatus {
    pub fn to_str(&self) -> &str {
        self.as_ref()
    }

    pub fn is_open(&self) -> bool {
        *self == MarketStatus::Open
    }
}
