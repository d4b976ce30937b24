//! Domain types shared between the client, the processor and the UI.

use chrono::{DateTime, Utc};

/// A single point-in-time exchange rate between two currencies.
///
/// Constructed from one upstream response and discarded on the next search.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeQuote {
    pub from_currency: String,
    pub to_currency: String,
    pub rate: f64,
    pub observed_at: Option<DateTime<Utc>>,
}

/// One day of OHLC data with the derived day-over-day close delta.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRate {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// `close - previous day's close`; 0 for the earliest record.
    pub close_delta: f64,
}

/// Chronologically ordered daily rates for one currency pair.
///
/// Invariant: records are sorted ascending by date and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSeries {
    pub records: Vec<DailyRate>,
}

impl RateSeries {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyRate> {
        self.records.iter()
    }
}
