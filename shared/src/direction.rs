//! Compass bearing naming
//!
//! Maps a bearing in degrees onto one of the eight 45°-wide compass
//! sectors. Both the prompt builder and the weather card call this, so a
//! bearing always gets the same label wherever it is shown.

use serde::{Deserialize, Serialize};

use crate::format::round_half_up;

/// One of the eight cardinal and intercardinal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardinalDirection {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "NE")]
    NorthEast,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "SE")]
    SouthEast,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "SW")]
    SouthWest,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "NW")]
    NorthWest,
}

impl CardinalDirection {
    /// All directions clockwise from north
    pub const ALL: [CardinalDirection; 8] = [
        CardinalDirection::North,
        CardinalDirection::NorthEast,
        CardinalDirection::East,
        CardinalDirection::SouthEast,
        CardinalDirection::South,
        CardinalDirection::SouthWest,
        CardinalDirection::West,
        CardinalDirection::NorthWest,
    ];

    /// Width of one compass sector in degrees
    pub const SECTOR_DEGREES: f64 = 45.0;

    /// Name the sector a bearing falls in.
    ///
    /// Bearings outside `[0, 360)` are wrapped first, so `-90` is `W` and
    /// `450` is `E`. Non-finite input is treated as north.
    pub fn from_degrees(degrees: f64) -> Self {
        if !degrees.is_finite() {
            return CardinalDirection::North;
        }

        let normalized = degrees.rem_euclid(360.0);
        let sector = round_half_up(normalized / Self::SECTOR_DEGREES) as usize % Self::ALL.len();
        Self::ALL[sector]
    }

    /// Short compass label, e.g. `"NE"`
    pub fn label(&self) -> &'static str {
        match self {
            CardinalDirection::North => "N",
            CardinalDirection::NorthEast => "NE",
            CardinalDirection::East => "E",
            CardinalDirection::SouthEast => "SE",
            CardinalDirection::South => "S",
            CardinalDirection::SouthWest => "SW",
            CardinalDirection::West => "W",
            CardinalDirection::NorthWest => "NW",
        }
    }
}

impl std::fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Compass label for a bearing in degrees
pub fn name_for(degrees: f64) -> &'static str {
    CardinalDirection::from_degrees(degrees).label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_boundaries() {
        assert_eq!(name_for(0.0), "N");
        assert_eq!(name_for(22.4), "N");
        assert_eq!(name_for(22.5), "NE");
        assert_eq!(name_for(44.0), "N");
        assert_eq!(name_for(46.0), "NE");
        assert_eq!(name_for(90.0), "E");
        assert_eq!(name_for(180.0), "S");
        assert_eq!(name_for(270.0), "W");
        assert_eq!(name_for(337.4), "NW");
        assert_eq!(name_for(337.5), "N");
        assert_eq!(name_for(359.9), "N");
    }

    #[test]
    fn test_out_of_range_bearings_wrap() {
        assert_eq!(name_for(360.0), "N");
        assert_eq!(name_for(450.0), "E");
        assert_eq!(name_for(-90.0), "W");
        assert_eq!(name_for(-45.0), "NW");
        assert_eq!(name_for(-0.1), "N");
        assert_eq!(name_for(-720.0), "N");
    }

    #[test]
    fn test_non_finite_is_north() {
        assert_eq!(name_for(f64::NAN), "N");
        assert_eq!(name_for(f64::INFINITY), "N");
    }

    #[test]
    fn test_display_and_serde_use_label() {
        assert_eq!(CardinalDirection::SouthWest.to_string(), "SW");
        assert_eq!(
            serde_json::to_string(&CardinalDirection::NorthEast).unwrap(),
            "\"NE\""
        );
    }
}
