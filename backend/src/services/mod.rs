//! Request-level logic for the relay endpoints

pub mod advice;
pub mod weather;

pub use advice::AdviceService;
pub use weather::WeatherService;
