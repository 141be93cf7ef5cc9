//! Wire models exchanged between the browser, the relay, and the providers

mod advice;
mod weather;

pub use advice::*;
pub use weather::*;
