//! Board-agnostic core logic for the LED strip controller
//!
//! This crate contains everything that does not depend on a specific
//! microcontroller:
//!
//! - Pixel store (fixed-capacity RGBW buffer plus strip handle)
//! - Brightness scaling and gradient interpolation
//! - Protocol engine (command dispatch, sessions, bounded payload waits)
//! - LED driver trait implemented by chip HALs
//! - Configuration defaults and limits

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod engine;
pub mod store;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use dreamscaler_protocol::Rgbw;
