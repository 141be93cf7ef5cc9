//! Compass heading from device orientation events
//!
//! Orientation is the one long-lived subscription on the page, so it is
//! owned by a guard: the listener is attached when the guard is created and
//! detached when it drops.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{DeviceOrientationEvent, Window};

const EVENT: &str = "deviceorientation";

/// Outcome of the platform permission handshake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationPermission {
    /// Granted, or the platform does not gate orientation at all
    Granted,
    Denied,
    /// The permission request itself failed
    Failed,
    Unsupported,
}

impl OrientationPermission {
    /// Status line for anything but `Granted`
    pub fn failure_text(&self) -> Option<&'static str> {
        match self {
            OrientationPermission::Granted => None,
            OrientationPermission::Denied => Some("Permission denied for device orientation."),
            OrientationPermission::Failed => Some("Error requesting orientation permission."),
            OrientationPermission::Unsupported => {
                Some("Device orientation is not supported by your browser.")
            }
        }
    }
}

/// Run `DeviceOrientationEvent.requestPermission()` where it exists
pub async fn request_permission() -> OrientationPermission {
    let Some(window) = web_sys::window() else {
        return OrientationPermission::Unsupported;
    };
    let constructor = match Reflect::get(&window, &JsValue::from_str("DeviceOrientationEvent")) {
        Ok(value) if !value.is_undefined() => value,
        _ => return OrientationPermission::Unsupported,
    };

    let request = Reflect::get(&constructor, &JsValue::from_str("requestPermission"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok());
    let Some(request) = request else {
        return OrientationPermission::Granted;
    };

    let promise = match request.call0(&constructor).map(|value| value.dyn_into::<Promise>()) {
        Ok(Ok(promise)) => promise,
        _ => return OrientationPermission::Failed,
    };

    match JsFuture::from(promise).await {
        Ok(answer) if answer.as_string().as_deref() == Some("granted") => {
            OrientationPermission::Granted
        }
        Ok(_) => OrientationPermission::Denied,
        Err(_) => OrientationPermission::Failed,
    }
}

/// Live `deviceorientation` listener, removed on drop
pub struct OrientationSubscription {
    target: Window,
    listener: Closure<dyn FnMut(DeviceOrientationEvent)>,
}

impl OrientationSubscription {
    pub fn subscribe(
        handler: impl FnMut(DeviceOrientationEvent) + 'static,
    ) -> Result<Self, JsValue> {
        let target = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let listener = Closure::<dyn FnMut(DeviceOrientationEvent)>::new(handler);
        target.add_event_listener_with_callback(EVENT, listener.as_ref().unchecked_ref())?;

        Ok(Self { target, listener })
    }
}

impl Drop for OrientationSubscription {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(EVENT, self.listener.as_ref().unchecked_ref())
        {
            web_sys::console::error_1(&e);
        }
    }
}
