//! Session layer: holds the quote/series for the current display cycle and
//! translates client failures into user-facing messages.

use tracing::debug;

use crate::model::{ExchangeQuote, RateSeries};
use crate::provider::ExchangeRateProvider;

/// Presentation state for one lookup session.
///
/// The fetched quote and series are immutable once stored; every new search
/// replaces the whole state (last write wins).
#[derive(Debug, Default)]
pub struct ViewState {
    pub currency_code: String,
    pub quote: Option<ExchangeQuote>,
    pub history: Option<RateSeries>,
    pub show_history: bool,
    pub error: Option<String>,
}

pub struct RateApp<P> {
    provider: P,
    pub state: ViewState,
}

impl<P: ExchangeRateProvider> RateApp<P> {
    pub fn new(provider: P) -> Self {
        RateApp {
            provider,
            state: ViewState::default(),
        }
    }

    /// Fetches the current rate for `code`, replacing any previous result.
    /// Blank input is rejected without touching the network.
    pub async fn search_currency(&mut self, code: &str) {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            self.state.error =
                Some("Please enter a currency code (e.g. USD, EUR, GBP).".to_string());
            return;
        }

        self.state = ViewState {
            currency_code: code.clone(),
            ..ViewState::default()
        };

        match self.provider.fetch_current(&code).await {
            Ok(quote) => self.state.quote = Some(quote),
            Err(e) => {
                debug!(error = %e, "current rate lookup failed");
                self.state.error = Some(e.user_message().to_string());
            }
        }
    }

    /// Loads the daily history for the searched currency. Does nothing
    /// without a current quote; an already-loaded series is toggled in and
    /// out of view without a second request.
    pub async fn load_history(&mut self, window_days: u32) {
        if self.state.quote.is_none() {
            return;
        }

        if self.state.show_history {
            self.state.show_history = false;
            return;
        }

        if self.state.history.is_some() {
            self.state.show_history = true;
            return;
        }

        self.state.error = None;
        let code = self.state.currency_code.clone();
        match self.provider.fetch_history(&code, window_days).await {
            Ok(series) => {
                self.state.history = Some(series);
                self.state.show_history = true;
            }
            Err(e) => {
                debug!(error = %e, "history lookup failed");
                self.state.error = Some(e.user_message().to_string());
            }
        }
    }
}
