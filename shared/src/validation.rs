//! Request validation shared by the relay and the client

use thiserror::Error;

use crate::models::AdviceRequest;

/// Client supplied incomplete required input
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0}")]
    MissingParameter(&'static str),
}

pub const DISTANCE_REQUIRED: &str = "Distance is required";
pub const COORDINATES_REQUIRED: &str = "Latitude and longitude are required";
pub const COORDINATES_NOT_NUMERIC: &str = "Latitude and longitude must be numbers";

/// Check an advice request and return its distance in yards
pub fn validate_advice_request(request: &AdviceRequest) -> Result<i64, ValidationError> {
    request
        .distance
        .filter(|yards| *yards > 0)
        .ok_or(ValidationError::MissingParameter(DISTANCE_REQUIRED))
}

/// Parse the `lat`/`lon` query parameters
pub fn parse_coordinates(
    latitude: Option<&str>,
    longitude: Option<&str>,
) -> Result<(f64, f64), ValidationError> {
    let (lat, lon) = match (non_empty(latitude), non_empty(longitude)) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => return Err(ValidationError::MissingParameter(COORDINATES_REQUIRED)),
    };

    let parse = |value: &str| {
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or(ValidationError::MissingParameter(COORDINATES_NOT_NUMERIC))
    };

    Ok((parse(lat)?, parse(lon)?))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_required() {
        assert_eq!(validate_advice_request(&AdviceRequest::new(150)), Ok(150));
        assert_eq!(
            validate_advice_request(&AdviceRequest::default()),
            Err(ValidationError::MissingParameter(DISTANCE_REQUIRED))
        );
        assert!(validate_advice_request(&AdviceRequest::new(0)).is_err());
        assert!(validate_advice_request(&AdviceRequest::new(-10)).is_err());
    }

    #[test]
    fn test_sub_yard_distance_required() {
        let request: AdviceRequest =
            serde_json::from_value(serde_json::json!({ "distance": 0.5 })).unwrap();
        assert_eq!(
            validate_advice_request(&request),
            Err(ValidationError::MissingParameter(DISTANCE_REQUIRED))
        );
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(
            parse_coordinates(Some("37.77"), Some("-122.42")),
            Ok((37.77, -122.42))
        );
        assert_eq!(
            parse_coordinates(Some("37.77"), None),
            Err(ValidationError::MissingParameter(COORDINATES_REQUIRED))
        );
        assert_eq!(
            parse_coordinates(Some(""), Some("1")),
            Err(ValidationError::MissingParameter(COORDINATES_REQUIRED))
        );
        assert_eq!(
            parse_coordinates(Some("north"), Some("1")),
            Err(ValidationError::MissingParameter(COORDINATES_NOT_NUMERIC))
        );
    }

    #[test]
    fn test_error_message() {
        let err = ValidationError::MissingParameter(DISTANCE_REQUIRED);
        assert_eq!(err.to_string(), "Distance is required");
    }
}
