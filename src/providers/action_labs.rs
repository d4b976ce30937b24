//! Client for the ActionLabs BRL exchange API.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::RateError;
use crate::history::{self, RawDailyRecord};
use crate::model::{ExchangeQuote, RateSeries};
use crate::provider::ExchangeRateProvider;

pub struct ActionLabsClient {
    base_url: String,
    api_key: String,
    target_currency: String,
}

impl ActionLabsClient {
    pub fn new(base_url: &str, api_key: &str, target_currency: &str) -> Self {
        ActionLabsClient {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            target_currency: target_currency.to_string(),
        }
    }

    async fn get(&self, endpoint: &str, from_symbol: &str) -> Result<String, RateError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("Requesting {} for {}", url, from_symbol);

        let client = reqwest::Client::builder().user_agent("brlx/0.1").build()?;
        let response = client
            .get(&url)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("from_symbol", from_symbol),
                ("to_symbol", self.target_currency.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(RateError::RateLimitExceeded);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(RateError::NotFound(from_symbol.to_string()));
        }
        if !status.is_success() {
            return Err(RateError::Upstream(format!("unexpected status {status}")));
        }

        Ok(response.text().await?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrentRatePayload {
    success: Option<bool>,
    rate_limit_exceeded: Option<bool>,
    exchange_rate: Option<f64>,
    last_updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HistoryPayload {
    Wrapped(WrappedHistory),
    Bare(Vec<RawDailyRecord>),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WrappedHistory {
    success: Option<bool>,
    rate_limit_exceeded: Option<bool>,
    #[serde(default)]
    data: Vec<RawDailyRecord>,
}

/// The upstream timestamp format is not documented; accept RFC 3339 and the
/// plain `YYYY-MM-DD HH:MM:SS` form, otherwise drop the timestamp.
fn parse_observed_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

fn parse_payload<'a, T: Deserialize<'a>>(text: &'a str) -> Result<T, RateError> {
    serde_json::from_str(text)
        .map_err(|e| RateError::Upstream(format!("malformed response: {e}")))
}

#[async_trait]
impl ExchangeRateProvider for ActionLabsClient {
    #[instrument(name = "CurrentRateFetch", skip(self), fields(code = %code))]
    async fn fetch_current(&self, code: &str) -> Result<ExchangeQuote, RateError> {
        let from_symbol = code.trim().to_uppercase();
        let text = self.get("currentExchangeRate", &from_symbol).await?;
        let payload: CurrentRatePayload = parse_payload(&text)?;

        if payload.rate_limit_exceeded.unwrap_or(false) {
            return Err(RateError::RateLimitExceeded);
        }
        if !payload.success.unwrap_or(false) {
            return Err(RateError::Upstream("upstream reported failure".into()));
        }

        Ok(ExchangeQuote {
            from_currency: from_symbol,
            to_currency: self.target_currency.clone(),
            rate: payload.exchange_rate.unwrap_or(0.0),
            observed_at: payload
                .last_updated_at
                .as_deref()
                .and_then(parse_observed_at),
        })
    }

    #[instrument(name = "DailyRateFetch", skip(self), fields(code = %code))]
    async fn fetch_history(&self, code: &str, window_days: u32) -> Result<RateSeries, RateError> {
        let from_symbol = code.trim().to_uppercase();
        let text = self.get("dailyExchangeRate", &from_symbol).await?;

        // The upstream wraps the records in a response object but has been
        // seen returning a bare list; flags only exist on the wrapped form.
        let records = match parse_payload::<HistoryPayload>(&text)? {
            HistoryPayload::Wrapped(wrapped) => {
                if wrapped.rate_limit_exceeded.unwrap_or(false) {
                    return Err(RateError::RateLimitExceeded);
                }
                if !wrapped.success.unwrap_or(false) {
                    return Err(RateError::Upstream("upstream reported failure".into()));
                }
                wrapped.data
            }
            HistoryPayload::Bare(records) => records,
        };

        let mut series = history::normalize(records)?;

        // The endpoint takes no window parameter, so trim client-side to the
        // most recent records. The earliest kept record has no predecessor
        // left to diff against.
        let window = window_days as usize;
        let len = series.len();
        if window > 0 && len > window {
            series.records.drain(..len - window);
            series.records[0].close_delta = 0.0;
        }

        Ok(series)
    }
}
