use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::AnalyzerError;

/// History range offered by the period selector.
#[derive(AsRefStr, Clone, Copy, Debug, Default, Display, EnumIter, EnumString, Eq, Hash, PartialEq)]
pub enum Period {
    #[default]
    #[strum(serialize = "1mo")]
    OneMonth,
    #[strum(serialize = "3mo")]
    ThreeMonths,
    #[strum(serialize = "6mo")]
    SixMonths,
    #[strum(serialize = "1y")]
    OneYear,
    #[strum(serialize = "5y")]
    FiveYears,
}

impl Period {
    pub fn to_str(&self) -> &str {
        self.as_ref()
    }

    pub fn parse(s: &str) -> Result<Period, AnalyzerError> {
        Period::from_str(s.trim()).map_err(|_| AnalyzerError::InvalidPeriod(s.to_string()))
    }

    pub fn next(&self) -> Period {
        let all: Vec<Period> = Period::iter().collect();
        let i = all.iter().position(|p| p == self).unwrap_or(0);
        all[(i + 1) % all.len()]
    }

    pub fn previous(&self) -> Period {
        let all: Vec<Period> = Period::iter().collect();
        let i = all.iter().position(|p| p == self).unwrap_or(0);
        if i == 0 { all[all.len() - 1] } else { all[i - 1] }
    }
}
