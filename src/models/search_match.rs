use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;

/// One hit from the symbol search box.
#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize, new)]
pub struct SearchMatch {
    name: String,
    symbol: String,
    exchange: Option<String>,
}

impl SearchMatch {
    pub fn label(&self) -> String {
        match &self.exchange {
            Some(exchange) => format!("{} ({}) [{}]", self.name, self.symbol, exchange),
            None => format!("{} ({})", self.name, self.symbol),
        }
    }
}
