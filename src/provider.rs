//! Provider seam for exchange rate lookups.

use async_trait::async_trait;

use crate::error::RateError;
use crate::model::{ExchangeQuote, RateSeries};

#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Fetches the current exchange rate for `code` against the fixed
    /// target currency. Issues at most one upstream request.
    async fn fetch_current(&self, code: &str) -> Result<ExchangeQuote, RateError>;

    /// Fetches and normalizes up to `window_days` of daily rates for
    /// `code`. Issues at most one upstream request.
    async fn fetch_history(&self, code: &str, window_days: u32) -> Result<RateSeries, RateError>;
}
