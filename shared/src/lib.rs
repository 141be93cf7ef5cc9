//! Shared types and logic for the Golf Caddy advisor
//!
//! This crate contains everything the backend relay and the browser client
//! (via WASM) must agree on: the wire models, direction naming, prompt
//! assembly, and presentation helpers.

pub mod direction;
pub mod format;
pub mod models;
pub mod presentation;
pub mod prompt;
pub mod session;
pub mod types;
pub mod validation;

pub use direction::*;
pub use models::*;
pub use presentation::*;
pub use types::*;
pub use validation::*;
