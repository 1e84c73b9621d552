//! Embassy-backed monotonic clock

use dreamscaler_hal::Monotonic;
use embassy_time::Instant;

/// Millisecond clock on top of the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Monotonic for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
