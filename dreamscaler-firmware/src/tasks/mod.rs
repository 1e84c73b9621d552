//! Embassy async tasks

pub mod engine;

pub use engine::{engine_task, LedEngine};
