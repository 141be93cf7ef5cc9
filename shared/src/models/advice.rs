//! Advice request and response models

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::WeatherReport;
use crate::types::Coordinate;

/// Everything the golfer has collected before asking for advice.
///
/// Only `distance` is required; `null` and a missing key mean the same
/// thing for every other field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdviceRequest {
    /// Distance to the hole in whole yards
    #[serde(default, deserialize_with = "whole_yards")]
    pub distance: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinate>,
    /// Facing direction in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherReport>,
    /// Photo of the target area as a data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl AdviceRequest {
    pub fn new(distance: i64) -> Self {
        Self {
            distance: Some(distance),
            ..Default::default()
        }
    }

    /// The attached photo, ignoring an empty string
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|uri| !uri.is_empty())
    }

    pub fn has_image(&self) -> bool {
        self.image().is_some()
    }
}

/// Any JSON number, truncated toward zero like the client's `parseInt`
fn whole_yards<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let yards = Option::<f64>::deserialize(deserializer)?;
    Ok(yards.filter(|y| y.is_finite()).map(|y| y.trunc() as i64))
}

/// Generated advice, Markdown formatted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdviceResponse {
    pub advice: String,
}
