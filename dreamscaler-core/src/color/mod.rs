//! Color math applied before pixels reach the store

mod brightness;
mod gradient;

pub use brightness::Brightness;
pub use gradient::{interpolate, Gradient};
