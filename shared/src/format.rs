//! Numeric formatting with browser-compatible rounding
//!
//! The page and the prompt both print numbers the way a browser would:
//! integer rounding sends halves toward positive infinity, fixed-point
//! rounding sends halves away from zero.

/// Round to the nearest integer, halves toward positive infinity.
///
/// Compares the exact fractional part with one half; adding 0.5 first
/// would round up values just below a half.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Format a value rounded to a whole number, e.g. `72.4` -> `"72"`.
pub fn format_rounded(value: f64) -> String {
    format!("{}", round_half_up(value) as i64)
}

/// Format a value with a fixed number of decimals, e.g. `5.25` -> `"5.3"`.
pub fn format_fixed(value: f64, decimals: u32) -> String {
    let factor = 10f64.powi(decimals as i32);
    let magnitude = round_half_up(value.abs() * factor) / factor;
    let signed = if value.is_sign_negative() { -magnitude } else { magnitude };
    format!("{:.*}", decimals as usize, signed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(72.4), 72.0);
        assert_eq!(round_half_up(72.5), 73.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }

    #[test]
    fn test_round_just_below_half() {
        let below_half = 0.49999999999999994;
        assert_eq!(round_half_up(below_half), 0.0);
        assert_eq!(round_half_up(-below_half), 0.0);
        assert_eq!(round_half_up(4_503_599_627_370_497.0), 4_503_599_627_370_497.0);
        assert_eq!(format_rounded(below_half), "0");
    }

    #[test]
    fn test_format_rounded() {
        assert_eq!(format_rounded(72.4), "72");
        assert_eq!(format_rounded(89.5), "90");
        assert_eq!(format_rounded(0.0), "0");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(5.5, 1), "5.5");
        assert_eq!(format_fixed(5.25, 1), "5.3");
        assert_eq!(format_fixed(0.0, 1), "0.0");
        assert_eq!(format_fixed(37.774929, 4), "37.7749");
        assert_eq!(format_fixed(-122.419416, 4), "-122.4194");
    }
}
