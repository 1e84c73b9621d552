//! Hardware abstraction traits
//!
//! The engine drives the physical strip only through these traits, so the
//! same dispatch code runs on the board and in host tests.

pub mod led;

pub use led::LedDriver;
