//! Global brightness scalar
//!
//! Brightness is baked into pixel values at write time. Changing it does not
//! rescale pixels already in the store; the host repaints if it wants the
//! new level applied everywhere.

use dreamscaler_protocol::Rgbw;

/// Brightness level, 0 (off) to 255 (unscaled)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

impl Default for Brightness {
    fn default() -> Self {
        Self::FULL
    }
}

impl Brightness {
    /// No scaling
    pub const FULL: Brightness = Brightness(255);

    pub const fn new(level: u8) -> Self {
        Self(level)
    }

    pub const fn level(self) -> u8 {
        self.0
    }

    /// Scale one channel
    ///
    /// Full brightness is the identity. Any other level computes
    /// `value * level / 256`, rounded down.
    pub const fn scale(self, value: u8) -> u8 {
        if self.0 == u8::MAX {
            return value;
        }
        ((value as u16 * self.0 as u16) >> 8) as u8
    }

    /// Scale all four channels
    pub fn apply(self, color: Rgbw) -> Rgbw {
        color.map(|channel| self.scale(channel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_is_identity() {
        let color = Rgbw::new(255, 128, 1, 77);
        assert_eq!(Brightness::FULL.apply(color), color);
        assert_eq!(Brightness::default(), Brightness::FULL);
    }

    #[test]
    fn test_half_brightness() {
        let half = Brightness::new(128);
        assert_eq!(half.apply(Rgbw::new(255, 0, 0, 0)), Rgbw::new(127, 0, 0, 0));
        assert_eq!(half.scale(200), 100);
        assert_eq!(half.scale(1), 0);
    }

    #[test]
    fn test_zero_turns_everything_off() {
        let off = Brightness::new(0);
        assert_eq!(off.apply(Rgbw::new(255, 255, 255, 255)), Rgbw::BLACK);
    }

    #[test]
    fn test_254_is_not_identity() {
        assert_eq!(Brightness::new(254).scale(255), 253);
    }

    proptest! {
        #[test]
        fn prop_scaled_channel_never_exceeds_input(value in any::<u8>(), level in any::<u8>()) {
            let scaled = Brightness::new(level).scale(value);
            prop_assert!(scaled <= value);
            let expected = if level == 255 {
                value
            } else {
                (u16::from(value) * u16::from(level) / 256) as u8
            };
            prop_assert_eq!(scaled, expected);
        }
    }
}
