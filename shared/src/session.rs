//! Per-page session state and the pure parts of sensor collection

use crate::models::{AdviceRequest, WeatherReport};
use crate::types::Coordinate;

/// Non-null orientation readings needed before the heading is frozen
pub const STABILIZATION_THRESHOLD: u32 = 5;

/// Geolocation timeout in milliseconds
pub const GEOLOCATION_TIMEOUT_MS: u32 = 10_000;

/// Everything collected on the page so far.
///
/// Created fresh on page load and dropped on reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub location: Option<Coordinate>,
    /// Frozen facing direction in degrees
    pub direction: Option<f64>,
    /// Selected photo as a data URI
    pub image: Option<String>,
    pub weather: Option<WeatherReport>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new location invalidates any weather fetched for the old one
    pub fn set_location(&mut self, location: Coordinate) {
        self.location = Some(location);
        self.weather = None;
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// Snapshot the session into a request; the distance may be missing
    pub fn advice_request(&self, distance: Option<i64>) -> AdviceRequest {
        AdviceRequest {
            distance,
            location: self.location,
            direction: self.direction,
            weather: self.weather.clone(),
            image: self.image.clone(),
        }
    }
}

/// Whole yards from the distance field, read the way `parseInt` reads it:
/// leading whitespace, an optional sign, then the digits that follow.
///
/// `"150.7"` is 150 and `"0.5"` is 0. Positivity is the relay's check.
pub fn parse_distance(input: &str) -> Option<i64> {
    let input = input.trim_start();
    let (negative, rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    let yards: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -yards } else { yards })
}

/// Whether the advice form may be submitted.
///
/// True iff the field holds a positive number. Depends only on the
/// distance field; every other input is optional.
pub fn can_submit(distance_input: &str) -> bool {
    distance_input
        .trim()
        .parse::<f64>()
        .map_or(false, |yards| yards.is_finite() && yards > 0.0)
}

/// Settles a stream of compass readings into a single heading.
///
/// Null readings are skipped. Once `threshold` readings have arrived the
/// latest one is frozen and every later reading is ignored.
#[derive(Debug, Clone)]
pub struct OrientationStabilizer {
    threshold: u32,
    count: u32,
    frozen: Option<f64>,
}

impl Default for OrientationStabilizer {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientationStabilizer {
    pub fn new() -> Self {
        Self::with_threshold(STABILIZATION_THRESHOLD)
    }

    pub fn with_threshold(threshold: u32) -> Self {
        Self {
            threshold: threshold.max(1),
            count: 0,
            frozen: None,
        }
    }

    /// Feed one reading; returns the heading exactly once, when it freezes
    pub fn push(&mut self, reading: Option<f64>) -> Option<f64> {
        if self.frozen.is_some() {
            return None;
        }

        let degrees = reading.filter(|d| d.is_finite())?;
        self.count += 1;

        if self.count >= self.threshold {
            self.frozen = Some(degrees);
            return self.frozen;
        }
        None
    }

    pub fn readings(&self) -> u32 {
        self.count
    }

    pub fn frozen(&self) -> Option<f64> {
        self.frozen
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen.is_some()
    }
}

/// Why a location request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationFailure {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unknown,
}

impl GeolocationFailure {
    pub const UNSUPPORTED_MESSAGE: &'static str = "Geolocation is not supported by your browser.";

    /// Map a `GeolocationPositionError.code`
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => GeolocationFailure::PermissionDenied,
            2 => GeolocationFailure::PositionUnavailable,
            3 => GeolocationFailure::Timeout,
            _ => GeolocationFailure::Unknown,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            GeolocationFailure::PermissionDenied => {
                "Permission denied. Please enable location access."
            }
            GeolocationFailure::PositionUnavailable => "Position unavailable.",
            GeolocationFailure::Timeout => "Request timeout.",
            GeolocationFailure::Unknown => "Unknown error.",
        }
    }

    /// Full status line shown under the location button
    pub fn status_text(&self) -> String {
        format!("Error getting location: {}", self.message())
    }
}
