//! RP2040-specific HAL for the LED controller firmware
//!
//! This crate provides RP2040 implementations of the shared traits:
//!
//! - Pin bank of PIO-capable data pins, selectable by number at runtime
//! - PIO-based SK6812 RGBW driver (implements `dreamscaler_core::traits::LedDriver`)
//! - Serial port adapter over the buffered UART (implements
//!   `dreamscaler_hal::UartRx` and `UartTx`)
//! - Embassy-backed millisecond clock (implements `dreamscaler_hal::Monotonic`)

#![no_std]

pub mod pins;
pub mod sk6812;
pub mod time;
pub mod uart;

pub use pins::{PinBank, PinError};
pub use sk6812::Sk6812;
pub use time::EmbassyClock;
pub use uart::SerialPort;
