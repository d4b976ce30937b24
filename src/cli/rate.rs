use anyhow::Result;

use super::ui;
use crate::app::RateApp;
use crate::model::ExchangeQuote;
use crate::provider::ExchangeRateProvider;

/// Looks up the current exchange rate for `code` and prints it. Lookup
/// failures are rendered as messages, not process failures.
pub async fn run<P: ExchangeRateProvider>(provider: P, code: &str) -> Result<()> {
    let mut app = RateApp::new(provider);

    let spinner = ui::new_spinner("Fetching current rate...");
    app.search_currency(code).await;
    spinner.finish_and_clear();

    if let Some(message) = &app.state.error {
        println!("{}", ui::style_text(message, ui::StyleType::Error));
        return Ok(());
    }
    if let Some(quote) = &app.state.quote {
        print_quote(quote);
    }
    Ok(())
}

pub(super) fn print_quote(quote: &ExchangeQuote) {
    let pair = format!("{}/{}", quote.from_currency, quote.to_currency);
    println!("\n{}", ui::style_text(&pair, ui::StyleType::Title));
    println!(
        "1 {} = {} {}",
        quote.from_currency,
        ui::style_text(&ui::format_rate(quote.rate), ui::StyleType::Value),
        quote.to_currency
    );
    if let Some(observed_at) = quote.observed_at {
        let stamp = observed_at.format("%d/%m/%Y - %H:%M").to_string();
        println!(
            "{}",
            ui::style_text(&format!("Last updated at {stamp}"), ui::StyleType::Subtle)
        );
    }
}
