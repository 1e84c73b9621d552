//! Controller configuration
//!
//! There is no persistent storage: every value here is a compile-time
//! default that the host can override at runtime with `SET_LED_COUNT` and
//! `SET_LED_PIN`.

mod types;

pub use types::*;
