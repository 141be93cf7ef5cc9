//! DOM helpers

use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

use shared::format_markdown;

/// Status line styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    fn class_name(&self) -> &'static str {
        match self {
            StatusKind::Info => "status info",
            StatusKind::Success => "status success",
            StatusKind::Error => "status error",
        }
    }
}

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Look up an element by id and cast it
pub fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{} has an unexpected type", id)))
}

pub fn set_status(element: &Element, text: &str, kind: StatusKind) {
    element.set_text_content(Some(text));
    element.set_class_name(kind.class_name());
}

pub fn set_visible(element: &HtmlElement, visible: bool) {
    let display = if visible { "block" } else { "none" };
    if let Err(e) = element.style().set_property("display", display) {
        log_error(&e);
    }
}

/// Attach a listener for the lifetime of the page
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Markdown to HTML, through `marked` when the page loaded it
pub fn markdown_to_html(text: &str) -> String {
    marked_parse(text).unwrap_or_else(|| format_markdown(text))
}

fn marked_parse(text: &str) -> Option<String> {
    let marked = Reflect::get(&js_sys::global(), &JsValue::from_str("marked"))
        .ok()
        .filter(|value| value.is_object())?;
    let parse = Reflect::get(&marked, &JsValue::from_str("parse"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    parse.call1(&marked, &JsValue::from_str(text)).ok()?.as_string()
}

/// Best-effort message text for a JS error value
pub fn error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| "Unknown error".to_string())
}

pub fn log_error(value: &JsValue) {
    web_sys::console::error_1(value);
}
