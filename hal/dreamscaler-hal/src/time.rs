//! Monotonic time source

/// Free-running millisecond clock
///
/// Only differences between readings are meaningful. Implementations must
/// never go backwards.
pub trait Monotonic {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u64;

    /// Deadline `timeout_ms` from now
    fn deadline_after(&self, timeout_ms: u32) -> u64 {
        self.now_ms().saturating_add(u64::from(timeout_ms))
    }

    /// Returns true once `deadline` has been reached
    fn expired(&self, deadline: u64) -> bool {
        self.now_ms() >= deadline
    }
}
