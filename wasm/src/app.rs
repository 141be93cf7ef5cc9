//! Page wiring: inputs feed the session, the session feeds the relay

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    DeviceOrientationEvent, Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement,
};

use shared::format::{format_fixed, format_rounded};
use shared::prompt::build_prompt;
use shared::session::{can_submit, parse_distance, OrientationStabilizer, SessionState};
use shared::{name_for, Coordinate, WeatherSummary};

use crate::api;
use crate::dom::{self, StatusKind};
use crate::geolocation;
use crate::image;
use crate::orientation::{self, OrientationSubscription};

const LOADING_HTML: &str =
    r#"<div class="loading"><div class="spinner"></div><p>Asking your caddy...</p></div>"#;
const WAITING_FOR_HEADING: &str = "Point your device toward your target and wait...";

struct Elements {
    document: Document,
    form: HtmlElement,
    location_button: HtmlButtonElement,
    location_status: Element,
    weather_card: HtmlElement,
    weather_info: Element,
    direction_button: HtmlButtonElement,
    direction_status: Element,
    image_input: HtmlInputElement,
    image_preview: HtmlElement,
    distance: HtmlInputElement,
    prompt_preview: Element,
    submit: HtmlButtonElement,
    advice_card: HtmlElement,
    advice_content: Element,
}

impl Elements {
    fn bind(document: Document) -> Result<Self, JsValue> {
        Ok(Self {
            form: dom::element(&document, "golfForm")?,
            location_button: dom::element(&document, "getLocationBtn")?,
            location_status: dom::element(&document, "locationStatus")?,
            weather_card: dom::element(&document, "weatherCard")?,
            weather_info: dom::element(&document, "weatherInfo")?,
            direction_button: dom::element(&document, "getDirectionBtn")?,
            direction_status: dom::element(&document, "directionStatus")?,
            image_input: dom::element(&document, "imageUpload")?,
            image_preview: dom::element(&document, "imagePreview")?,
            distance: dom::element(&document, "distance")?,
            prompt_preview: dom::element(&document, "promptPreview")?,
            submit: dom::element(&document, "submitBtn")?,
            advice_card: dom::element(&document, "adviceCard")?,
            advice_content: dom::element(&document, "adviceContent")?,
            document,
        })
    }
}

/// The mounted page
pub struct GolfApp {
    session: RefCell<SessionState>,
    elements: Elements,
    orientation: RefCell<Option<OrientationSubscription>>,
    submitting: Cell<bool>,
}

impl GolfApp {
    /// Bind to the page's elements and attach every listener
    pub fn mount() -> Result<Rc<Self>, JsValue> {
        let app = Rc::new(Self {
            session: RefCell::new(SessionState::new()),
            elements: Elements::bind(dom::document()?)?,
            orientation: RefCell::new(None),
            submitting: Cell::new(false),
        });

        app.bind_listeners()?;
        app.refresh_form();
        Ok(app)
    }

    fn bind_listeners(self: &Rc<Self>) -> Result<(), JsValue> {
        let elements = &self.elements;

        let app = Rc::clone(self);
        dom::listen(&elements.location_button, "click", move |_| {
            spawn_local(Rc::clone(&app).locate());
        })?;

        let app = Rc::clone(self);
        dom::listen(&elements.direction_button, "click", move |_| {
            spawn_local(Rc::clone(&app).track_direction());
        })?;

        let app = Rc::clone(self);
        dom::listen(&elements.image_input, "change", move |_| {
            spawn_local(Rc::clone(&app).select_image());
        })?;

        let app = Rc::clone(self);
        dom::listen(&elements.distance, "input", move |_| app.refresh_form())?;

        let app = Rc::clone(self);
        dom::listen(&elements.form, "submit", move |event| {
            event.prevent_default();
            spawn_local(Rc::clone(&app).submit());
        })?;

        Ok(())
    }

    async fn locate(self: Rc<Self>) {
        let status = &self.elements.location_status;
        dom::set_status(status, "Getting location...", StatusKind::Info);

        match geolocation::current_position().await {
            Ok(coordinate) => {
                self.session.borrow_mut().set_location(coordinate);
                let text = format!(
                    "Location found! ({}, {})",
                    format_fixed(coordinate.latitude, 4),
                    format_fixed(coordinate.longitude, 4)
                );
                dom::set_status(status, &text, StatusKind::Success);
                self.refresh_form();
                self.load_weather(coordinate).await;
            }
            Err(error) => dom::set_status(status, &error.status_text(), StatusKind::Error),
        }
    }

    async fn load_weather(&self, coordinate: Coordinate) {
        let elements = &self.elements;

        match api::fetch_weather(coordinate.latitude, coordinate.longitude).await {
            Ok(report) => {
                elements
                    .weather_info
                    .set_inner_html(&WeatherSummary::from_report(&report).to_html());
                dom::set_visible(&elements.weather_card, true);
                self.session.borrow_mut().weather = Some(report);
            }
            Err(message) => {
                dom::set_visible(&elements.weather_card, false);
                dom::set_status(
                    &elements.location_status,
                    &format!("Location found, but weather unavailable: {}", message),
                    StatusKind::Error,
                );
            }
        }
        self.refresh_form();
    }

    async fn track_direction(self: Rc<Self>) {
        let status = &self.elements.direction_status;

        let permission = orientation::request_permission().await;
        if let Some(text) = permission.failure_text() {
            dom::set_status(status, text, StatusKind::Error);
            return;
        }
        dom::set_status(status, WAITING_FOR_HEADING, StatusKind::Info);

        let app = Rc::downgrade(&self);
        let mut stabilizer = OrientationStabilizer::new();
        let subscription = OrientationSubscription::subscribe(move |event: DeviceOrientationEvent| {
            if let (Some(degrees), Some(app)) = (stabilizer.push(event.alpha()), app.upgrade()) {
                app.direction_frozen(degrees);
            }
        });

        match subscription {
            Ok(subscription) => {
                // Replacing detaches any earlier listener
                self.orientation.replace(Some(subscription));
            }
            Err(e) => {
                dom::log_error(&e);
                dom::set_status(
                    status,
                    "Error requesting orientation permission.",
                    StatusKind::Error,
                );
            }
        }
    }

    fn direction_frozen(self: Rc<Self>, degrees: f64) {
        self.session.borrow_mut().direction = Some(degrees);
        let text = format!(
            "Direction: {} ({}°)",
            name_for(degrees),
            format_rounded(degrees)
        );
        dom::set_status(&self.elements.direction_status, &text, StatusKind::Success);
        self.refresh_form();

        // Called from inside the listener; detach after it returns
        spawn_local(async move {
            self.orientation.borrow_mut().take();
        });
    }

    async fn select_image(self: Rc<Self>) {
        let file = self
            .elements
            .image_input
            .files()
            .and_then(|files| files.get(0));

        match file {
            Some(file) => match image::read_as_data_uri(&file).await {
                Ok(uri) => {
                    if let Err(e) = self.show_preview(&uri) {
                        dom::log_error(&e);
                    }
                    self.session.borrow_mut().image = Some(uri);
                }
                Err(e) => {
                    dom::log_error(&e);
                    self.clear_image();
                }
            },
            None => self.clear_image(),
        }
        self.refresh_form();
    }

    fn show_preview(&self, uri: &str) -> Result<(), JsValue> {
        let preview = &self.elements.image_preview;

        let img = self.elements.document.create_element("img")?;
        img.set_attribute("src", uri)?;
        img.set_attribute("alt", "Target area")?;

        preview.set_inner_html("");
        preview.append_child(&img)?;
        dom::set_visible(preview, true);
        Ok(())
    }

    fn clear_image(&self) {
        self.session.borrow_mut().clear_image();
        self.elements.image_preview.set_inner_html("");
        dom::set_visible(&self.elements.image_preview, false);
    }

    /// Re-derive the submit gate and the prompt preview from current input
    fn refresh_form(&self) {
        let input = self.elements.distance.value();

        self.elements
            .submit
            .set_disabled(self.submitting.get() || !can_submit(&input));

        let request = self.session.borrow().advice_request(parse_distance(&input));
        let prompt = build_prompt(&request);
        self.elements.prompt_preview.set_text_content(Some(&prompt));
    }

    async fn submit(self: Rc<Self>) {
        let input = self.elements.distance.value();
        if !can_submit(&input) || self.submitting.replace(true) {
            return;
        }
        self.refresh_form();

        let request = self.session.borrow().advice_request(parse_distance(&input));
        let elements = &self.elements;
        dom::set_visible(&elements.advice_card, true);
        elements.advice_content.set_inner_html(LOADING_HTML);

        match api::request_advice(&request).await {
            Ok(advice) => elements
                .advice_content
                .set_inner_html(&dom::markdown_to_html(&advice)),
            Err(message) => {
                let text = format!(
                    "Error: {}. Please make sure the server is running and your API keys are configured in the .env file.",
                    message
                );
                elements.advice_content.set_text_content(Some(&text));
            }
        }

        self.submitting.set(false);
        self.refresh_form();
    }
}
