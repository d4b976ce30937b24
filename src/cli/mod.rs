pub mod history;
pub mod rate;
pub mod ui;
