//! Fixed-capacity RGBW buffer plus the handle of the strip it drives

use heapless::Vec;

use dreamscaler_protocol::{ErrorCode, Rgbw};

use crate::color::{Brightness, Gradient};
use crate::config::{StripConfig, MAX_LED_COUNT};
use crate::traits::LedDriver;

/// Errors from pixel store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// Index or range reaches past the last pixel
    OutOfRange,
    /// No strip has been initialized yet
    NotInitialized,
}

impl From<StoreError> for ErrorCode {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::OutOfRange => ErrorCode::OutOfRange,
            StoreError::NotInitialized => ErrorCode::NotInitialized,
        }
    }
}

/// An initialized strip: its pin and one color per pixel
#[derive(Debug)]
struct Strip {
    pin: u8,
    pixels: Vec<Rgbw, MAX_LED_COUNT>,
}

impl Strip {
    fn range_mut(&mut self, start: u16, end: u16) -> Result<&mut [Rgbw], StoreError> {
        let (start, end) = (usize::from(start), usize::from(end));
        if start > end || end >= self.pixels.len() {
            return Err(StoreError::OutOfRange);
        }
        Ok(&mut self.pixels[start..=end])
    }
}

/// Pixel buffer and the driver that shows it
///
/// Until [`initialize`](Self::initialize) runs there is no strip at all:
/// writes and commits fail with [`StoreError::NotInitialized`].
pub struct PixelStore<D> {
    driver: D,
    strip: Option<Strip>,
}

impl<D: LedDriver> PixelStore<D> {
    /// Create an uninitialized store around `driver`
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            strip: None,
        }
    }

    /// Replace the strip with a fresh all-black one and show it
    ///
    /// The previous pin is released before the new one is attached. The
    /// caller validates `config`; a count above capacity is truncated.
    pub fn initialize(&mut self, config: StripConfig) {
        if let Some(old) = self.strip.take() {
            self.driver.release(old.pin);
        }

        let count = usize::from(config.led_count).min(MAX_LED_COUNT);
        let mut pixels = Vec::new();
        // Cannot fail: count is clamped to capacity
        let _ = pixels.resize(count, Rgbw::BLACK);

        #[cfg(feature = "defmt")]
        defmt::info!("Strip initialized: {} LEDs on pin {}", count, config.pin);

        self.driver.attach(config.pin, count as u16);
        let strip = self.strip.insert(Strip {
            pin: config.pin,
            pixels,
        });
        self.driver.commit(&strip.pixels, strip.pin);
    }

    /// Overwrite one pixel
    pub fn write(&mut self, index: u16, color: Rgbw) -> Result<(), StoreError> {
        let pixel = self
            .strip_mut()?
            .pixels
            .get_mut(usize::from(index))
            .ok_or(StoreError::OutOfRange)?;
        *pixel = color;
        Ok(())
    }

    /// Overwrite the inclusive range `start..=end`
    pub fn fill_range(&mut self, start: u16, end: u16, color: Rgbw) -> Result<(), StoreError> {
        self.strip_mut()?.range_mut(start, end)?.fill(color);
        Ok(())
    }

    /// Overwrite every pixel
    pub fn fill(&mut self, color: Rgbw) -> Result<(), StoreError> {
        self.strip_mut()?.pixels.fill(color);
        Ok(())
    }

    /// Turn every pixel off
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.fill(Rgbw::BLACK)
    }

    /// Linear gradient over the inclusive range `start..=end`
    ///
    /// Each interpolated color is scaled by `brightness` as it is written.
    pub fn fill_gradient(
        &mut self,
        start: u16,
        end: u16,
        from: Rgbw,
        to: Rgbw,
        brightness: Brightness,
    ) -> Result<(), StoreError> {
        let range = self.strip_mut()?.range_mut(start, end)?;
        for (pixel, color) in range.iter_mut().zip(Gradient::new(start, end, from, to)) {
            *pixel = brightness.apply(color);
        }
        Ok(())
    }

    /// Push the whole buffer to the driver
    pub fn commit(&mut self) -> Result<(), StoreError> {
        let strip = self.strip.as_ref().ok_or(StoreError::NotInitialized)?;
        self.driver.commit(&strip.pixels, strip.pin);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.strip.is_some()
    }

    /// Pixel count of the current strip, 0 before initialization
    pub fn led_count(&self) -> u16 {
        self.strip.as_ref().map_or(0, |s| s.pixels.len() as u16)
    }

    /// Pin of the current strip
    pub fn pin(&self) -> Option<u8> {
        self.strip.as_ref().map(|s| s.pin)
    }

    pub fn pixel(&self, index: u16) -> Option<Rgbw> {
        self.pixels().get(usize::from(index)).copied()
    }

    /// Current buffer contents, empty before initialization
    pub fn pixels(&self) -> &[Rgbw] {
        match &self.strip {
            Some(strip) => &strip.pixels,
            None => &[],
        }
    }

    /// Get a reference to the driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a mutable reference to the driver
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    fn strip_mut(&mut self) -> Result<&mut Strip, StoreError> {
        self.strip.as_mut().ok_or(StoreError::NotInitialized)
    }
}
