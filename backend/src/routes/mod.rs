//! Route definitions for the Golf Caddy relay

use std::path::Path;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
};

use crate::{handlers, AppState};

/// Browser cache lifetime for the front-end bundle
const STATIC_CACHE_CONTROL: &str = "public, max-age=86400";

/// Create API routes; unmatched paths answer with a JSON 404
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/weather", get(handlers::get_weather))
        .route("/golf-advice", post(handlers::get_golf_advice))
        .fallback(handlers::api_not_found)
}

/// Serve the front-end bundle; `/` and unknown non-API paths get `index.html`
pub fn static_routes(static_dir: &str) -> Router<AppState> {
    let index = Path::new(static_dir).join("index.html");
    let cache = SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        HeaderValue::from_static(STATIC_CACHE_CONTROL),
    );

    let assets = ServiceBuilder::new()
        .layer(cache.clone())
        .service(ServeDir::new(static_dir).fallback(ServeFile::new(&index)));
    let root = ServiceBuilder::new()
        .layer(cache)
        .service(ServeFile::new(&index));

    Router::new()
        .route_service("/", root)
        .fallback_service(assets)
}
