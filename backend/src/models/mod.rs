//! Wire models for the relay endpoints
//!
//! Re-exports models from the shared crate so the browser and the relay
//! agree on every payload.

pub use shared::models::*;
pub use shared::types::{ErrorBody, HealthStatus};
