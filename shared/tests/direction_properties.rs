//! Property tests for direction naming and submit gating

use proptest::prelude::*;
use shared::session::{can_submit, parse_distance};
use shared::{name_for, CardinalDirection};

const LABELS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

proptest! {
    /// Every bearing in range maps onto one of the eight labels
    #[test]
    fn prop_label_is_one_of_eight(degrees in 0.0f64..360.0) {
        prop_assert!(LABELS.contains(&name_for(degrees)));
    }

    /// Full turns never change the label
    #[test]
    fn prop_full_turns_are_equivalent(sector in 0usize..8, offset in -22.0f64..22.0, turns in -4i32..4) {
        let degrees = sector as f64 * 45.0 + offset;
        let shifted = degrees + 360.0 * f64::from(turns);
        prop_assert_eq!(name_for(shifted), name_for(degrees));
    }

    /// Bearings within 22° of a sector centre get that sector's label
    #[test]
    fn prop_sector_centres(sector in 0usize..8, offset in -22.0f64..22.0) {
        let degrees = sector as f64 * 45.0 + offset;
        prop_assert_eq!(name_for(degrees), LABELS[sector]);
    }

    /// The enum and the string helper always agree
    #[test]
    fn prop_enum_matches_label(degrees in -1000.0f64..1000.0) {
        prop_assert_eq!(CardinalDirection::from_degrees(degrees).label(), name_for(degrees));
    }

    /// Positive distances enable the form
    #[test]
    fn prop_positive_distance_enables_submit(yards in 1u32..700) {
        prop_assert!(can_submit(&yards.to_string()));
    }

    /// Zero and negative distances never enable it
    #[test]
    fn prop_non_positive_distance_disables_submit(yards in -700i32..=0) {
        prop_assert!(!can_submit(&yards.to_string()));
    }

    /// Fractional yards drop to the whole yard below
    #[test]
    fn prop_fraction_is_truncated(yards in 0u32..700, fraction in 0u32..1000) {
        let input = format!("{}.{:03}", yards, fraction);
        prop_assert_eq!(parse_distance(&input), Some(i64::from(yards)));
    }
}

#[test]
fn test_reference_bearings() {
    assert_eq!(name_for(0.0), "N");
    assert_eq!(name_for(44.0), "N");
    assert_eq!(name_for(46.0), "NE");
    assert_eq!(name_for(360.0), "N");
}
