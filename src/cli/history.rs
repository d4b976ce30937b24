use anyhow::Result;

use super::{rate, ui};
use crate::app::RateApp;
use crate::model::RateSeries;
use crate::provider::ExchangeRateProvider;

/// Looks up the current rate for `code` and its last `days` of daily rates,
/// printing the series as a table. Failures become messages.
pub async fn run<P: ExchangeRateProvider>(provider: P, code: &str, days: u32) -> Result<()> {
    let mut app = RateApp::new(provider);

    let spinner = ui::new_spinner("Fetching current rate...");
    app.search_currency(code).await;
    spinner.finish_and_clear();

    if let Some(message) = &app.state.error {
        println!("{}", ui::style_text(message, ui::StyleType::Error));
        return Ok(());
    }
    if let Some(quote) = &app.state.quote {
        rate::print_quote(quote);
    }

    let spinner = ui::new_spinner("Fetching rate history...");
    app.load_history(days).await;
    spinner.finish_and_clear();

    if let Some(message) = &app.state.error {
        println!("{}", ui::style_text(message, ui::StyleType::Error));
        return Ok(());
    }
    if let Some(series) = &app.state.history {
        display_series(series);
    }
    Ok(())
}

fn display_series(series: &RateSeries) {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Date"),
        ui::header_cell("Open"),
        ui::header_cell("High"),
        ui::header_cell("Low"),
        ui::header_cell("Close"),
        ui::header_cell("Change"),
        ui::header_cell("Change %"),
    ]);

    for record in series.iter() {
        table.add_row(vec![
            comfy_table::Cell::new(ui::format_date(&record.date)),
            ui::value_cell(ui::format_rate(record.open)),
            ui::value_cell(ui::format_rate(record.high)),
            ui::value_cell(ui::format_rate(record.low)),
            ui::value_cell(ui::format_rate(record.close)),
            ui::delta_cell(record.close_delta),
            ui::optional_cell(ui::format_delta_percent(record.close_delta, record.close)),
        ]);
    }

    println!("\n{table}");
    println!(
        "{}",
        ui::style_text(
            &format!("{} day(s) of daily rates", series.len()),
            ui::StyleType::Subtle
        )
    );
}
