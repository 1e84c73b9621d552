//! DreamScaler Serial Protocol
//!
//! This crate defines the byte-oriented protocol between a host (PC tools,
//! keyboard visualizers) and the LED strip controller. The protocol is
//! deliberately unframed: one command byte followed by a fixed-size payload,
//! answered by exactly one response.
//!
//! # Protocol Overview
//!
//! ```text
//! Host → Controller:
//! ┌─────────┬──────────────────────────────┐
//! │ COMMAND │ PAYLOAD (fixed per command)  │
//! │ 1B      │ 0–12B, big-endian integers   │
//! └─────────┴──────────────────────────────┘
//!
//! Controller → Host:
//! ┌──────┐   ┌──────┐   ┌───────┬──────┐   ┌──────┬──────────────┐
//! │ OK   │   │ PONG │   │ ERROR │ CODE │   │ INFO │ 6B device    │
//! └──────┘   └──────┘   └───────┴──────┘   └──────┴──────────────┘
//! ```
//!
//! `BULK_UPDATE` is the one exception to the fixed payload rule: after its
//! 2-byte count the controller answers `OK` and then consumes `count` RGBW
//! quadruples before answering `OK` a second time.
//!
//! All byte values in this crate are a fixed contract shared with existing
//! host clients and must not change.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod command;
pub mod request;
pub mod response;

pub use color::Rgbw;
pub use command::{Command, MAX_PAYLOAD_SIZE};
pub use request::{DecodeError, Request};
pub use response::{DeviceInfo, ErrorCode, Response, MAX_RESPONSE_LEN, PROTOCOL_VERSION};
