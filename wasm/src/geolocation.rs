//! One-shot position lookup

use js_sys::{Promise, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::PositionOptions;

use shared::session::{GeolocationFailure, GEOLOCATION_TIMEOUT_MS};
use shared::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    Unsupported,
    Failed(GeolocationFailure),
}

impl LocationError {
    pub fn status_text(&self) -> String {
        match self {
            LocationError::Unsupported => GeolocationFailure::UNSUPPORTED_MESSAGE.to_string(),
            LocationError::Failed(failure) => failure.status_text(),
        }
    }
}

/// Ask the browser for a fresh high-accuracy fix
pub async fn current_position() -> Result<Coordinate, LocationError> {
    let window = web_sys::window().ok_or(LocationError::Unsupported)?;
    let navigator = window.navigator();
    if !Reflect::has(&navigator, &JsValue::from_str("geolocation")).unwrap_or(false) {
        return Err(LocationError::Unsupported);
    }
    let geolocation = navigator
        .geolocation()
        .map_err(|_| LocationError::Unsupported)?;

    let options = PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(GEOLOCATION_TIMEOUT_MS);
    options.set_maximum_age(0);

    // The browser's success and error callbacks settle the promise directly
    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
            &resolve,
            Some(&reject),
            &options,
        ) {
            let _ = reject.call1(&JsValue::UNDEFINED, &e);
        }
    });

    match JsFuture::from(promise).await {
        Ok(position) => coordinate(&position)
            .ok_or(LocationError::Failed(GeolocationFailure::Unknown)),
        Err(error) => Err(LocationError::Failed(failure(&error))),
    }
}

/// `position.coords` as a coordinate
///
/// Fields are read by name; the position and error constructors are named
/// differently across browsers.
fn coordinate(position: &JsValue) -> Option<Coordinate> {
    let coords = Reflect::get(position, &JsValue::from_str("coords")).ok()?;
    Some(Coordinate::new(
        number(&coords, "latitude")?,
        number(&coords, "longitude")?,
    ))
}

fn number(target: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()?
        .as_f64()
}

fn failure(error: &JsValue) -> GeolocationFailure {
    number(error, "code")
        .map(|code| GeolocationFailure::from_code(code as u16))
        .unwrap_or(GeolocationFailure::Unknown)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use js_sys::Object;
    use wasm_bindgen_test::*;

    fn object(fields: &[(&str, JsValue)]) -> JsValue {
        let object = Object::new();
        for (key, value) in fields {
            Reflect::set(&object, &JsValue::from_str(key), value).unwrap();
        }
        object.into()
    }

    #[wasm_bindgen_test]
    fn test_reads_position_coords() {
        let coords = object(&[
            ("latitude", JsValue::from(51.5)),
            ("longitude", JsValue::from(-0.12)),
            ("accuracy", JsValue::from(12.0)),
        ]);
        let position = object(&[("coords", coords)]);

        assert_eq!(coordinate(&position), Some(Coordinate::new(51.5, -0.12)));
    }

    #[wasm_bindgen_test]
    fn test_position_without_coords() {
        assert_eq!(coordinate(&object(&[])), None);
        assert_eq!(coordinate(&JsValue::UNDEFINED), None);
    }

    #[wasm_bindgen_test]
    fn test_error_code_maps_to_failure() {
        let error = |code: f64| object(&[("code", JsValue::from(code)), ("message", "x".into())]);

        assert_eq!(failure(&error(1.0)), GeolocationFailure::PermissionDenied);
        assert_eq!(failure(&error(2.0)), GeolocationFailure::PositionUnavailable);
        assert_eq!(failure(&error(3.0)), GeolocationFailure::Timeout);
        assert_eq!(failure(&error(9.0)), GeolocationFailure::Unknown);
        assert_eq!(failure(&JsValue::from_str("boom")), GeolocationFailure::Unknown);
    }
}
