//! Display helpers for the weather card and the advice panel

mod markdown;
mod weather;

pub use markdown::format_markdown;
pub use weather::WeatherSummary;
