//! Normalization of raw historical rate payloads into a clean series.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::RateError;
use crate::model::{DailyRate, RateSeries};

/// One daily record as the upstream sends it. Any field may be missing.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDailyRecord {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub close: Option<f64>,
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Cleans up a raw record set into a chronologically ordered [`RateSeries`].
///
/// Missing numeric fields become 0 and a missing date becomes an empty
/// string. Records are stably sorted ascending by parsed date (unparseable
/// dates first, equal dates keep input order), then each record's
/// `close_delta` is derived from the previous day's close; the earliest
/// record gets 0.
pub fn normalize(raw: Vec<RawDailyRecord>) -> Result<RateSeries, RateError> {
    let mut records: Vec<DailyRate> = raw
        .into_iter()
        .map(|r| DailyRate {
            date: r.date.unwrap_or_default(),
            open: r.open.unwrap_or(0.0),
            high: r.high.unwrap_or(0.0),
            low: r.low.unwrap_or(0.0),
            close: r.close.unwrap_or(0.0),
            close_delta: 0.0,
        })
        .collect();

    if records.is_empty() {
        return Err(RateError::NoData);
    }

    records.sort_by_key(|r| parse_date(&r.date));

    for i in 1..records.len() {
        records[i].close_delta = records[i].close - records[i - 1].close;
    }

    Ok(RateSeries { records })
}
