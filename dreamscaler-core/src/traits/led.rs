//! LED strip driver trait

use dreamscaler_protocol::Rgbw;

/// Trait for the waveform generator behind a strip
///
/// Calls are synchronous and cannot fail from the engine's point of view.
/// A driver that loses a frame should log it and carry on; the next commit
/// repaints the whole strip anyway.
pub trait LedDriver {
    /// Claim `pin` for a strip of `led_count` pixels
    fn attach(&mut self, pin: u8, led_count: u16);

    /// Give `pin` back and stop driving it
    fn release(&mut self, pin: u8);

    /// Push a full frame to the strip on `pin`
    ///
    /// `pixels` holds already brightness-scaled RGBW values in strip order.
    /// Channel reordering (GRBW and friends) is the driver's business.
    fn commit(&mut self, pixels: &[Rgbw], pin: u8);
}

impl<T: LedDriver + ?Sized> LedDriver for &mut T {
    fn attach(&mut self, pin: u8, led_count: u16) {
        T::attach(self, pin, led_count)
    }

    fn release(&mut self, pin: u8) {
        T::release(self, pin)
    }

    fn commit(&mut self, pixels: &[Rgbw], pin: u8) {
        T::commit(self, pixels, pin)
    }
}
