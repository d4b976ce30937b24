use std::time::Duration;

use chrono::NaiveDate;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Value,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Value => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Right-aligned numeric cell.
pub fn value_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Creates a cell for a close delta with color coding.
pub fn delta_cell(delta: f64) -> Cell {
    let cell = value_cell(format_close_delta(delta));
    if delta > 0.0 {
        cell.fg(Color::Green)
    } else if delta < 0.0 {
        cell.fg(Color::Red)
    } else {
        cell.fg(Color::DarkGrey)
    }
}

/// Formats an `Option<String>` into a cell. `None` is displayed as "N/A".
pub fn optional_cell(value: Option<String>) -> Cell {
    value.map_or(
        Cell::new("N/A")
            .fg(Color::DarkGrey)
            .set_alignment(CellAlignment::Right),
        value_cell,
    )
}

/// Creates a spinner shown while a request is in flight.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Formats an exchange rate with four decimal places.
pub fn format_rate(value: f64) -> String {
    format!("{value:.4}")
}

/// Formats a close delta with an explicit sign for positive values.
pub fn format_close_delta(value: f64) -> String {
    if value == 0.0 {
        return "0.0000".to_string();
    }
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{sign}{value:.4}")
}

/// Formats a close delta as a percentage of the day's close. Returns `None`
/// for a zero close, where the percentage is undefined.
pub fn format_delta_percent(delta: f64, close: f64) -> Option<String> {
    if delta == 0.0 {
        return Some("0.00%".to_string());
    }
    if close == 0.0 {
        return None;
    }
    let percent = (delta / close) * 100.0;
    let sign = if percent > 0.0 { "+" } else { "" };
    Some(format!("{sign}{percent:.2}%"))
}

/// Renders an ISO date as dd/mm/yyyy, leaving anything unparseable as-is.
pub fn format_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}
