//! HTTP handlers

mod advice;
mod health;
mod not_found;
mod weather;

pub use advice::get_golf_advice;
pub use health::health_check;
pub use not_found::api_not_found;
pub use weather::{get_weather, WeatherQuery};
