//! DreamScaler Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the protocol engine is written
//! against, so the same engine runs on the RP2040 board and in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  dreamscaler-core (protocol engine)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dreamscaler-hal (this crate - traits)  │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ dreamscaler-  │       │  host fakes   │
//! │  hal-rp2040   │       │  (unit tests) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial communication
//! - [`time::Monotonic`] - Millisecond clock for deadlines

#![no_std]
#![deny(unsafe_code)]

pub mod time;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use time::Monotonic;
pub use uart::{UartConfig, UartRx, UartTx};
