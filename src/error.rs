use thiserror::Error;

/// Everything that can go wrong while talking to the exchange API.
///
/// The presentation layer matches on this exhaustively; no variant is
/// retried and none is fatal to the process.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("currency not found: {0}")]
    NotFound(String),

    #[error("no historical data available")]
    NoData,

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl RateError {
    /// The message shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            RateError::RateLimitExceeded => {
                "Request limit exceeded. Please wait a few minutes and try again."
            }
            RateError::NotFound(_) => {
                "Currency not found. Check the currency code and try again."
            }
            RateError::NoData => "No historical data found for this currency.",
            RateError::Upstream(_) => "Failed to fetch exchange rate. Try again.",
            RateError::Transport(_) => {
                "Connection error. Check your internet connection and try again."
            }
        }
    }
}
