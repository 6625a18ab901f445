use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::Serialize;

use super::Period;

#[derive(Clone, Copy, Debug, Eq, Getters, PartialEq, Serialize, new)]
pub struct PricePoint {
    date: NaiveDate,
    close: Decimal,
}

/// Daily closes for one symbol over the selected period, oldest first.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct PriceHistory {
    symbol: String,
    period: Period,
    points: Vec<PricePoint>,
}

impl PriceHistory {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn high(&self) -> Option<Decimal> {
        self.points.iter().map(|p| p.close).max()
    }

    pub fn low(&self) -> Option<Decimal> {
        self.points.iter().map(|p| p.close).min()
    }

    /// Change over the whole period in percent, if the first close is non-zero.
    pub fn period_change_percent(&self) -> Option<Decimal> {
        let first = self.first()?.close;
        let last = self.last()?.close;
        if first.is_zero() {
            return None;
        }
        Some((last - first) / first * Decimal::ONE_HUNDRED)
    }

    /// `(index, close)` pairs for plotting.
    pub fn chart_data(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.close.to_f64().map(|c| (i as f64, c)))
            .collect()
    }
}
