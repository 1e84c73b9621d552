//! Runtime selection of the strip data pin
//!
//! The host picks the data pin by number with `SET_LED_PIN`, so every pin it
//! may name is handed to the PIO block up front and looked up by number when
//! the strip is (re)initialized. Pins not driving a strip stay inputs.

use embassy_rp::pio::{Instance, Pin};

/// Number of GPIOs the host may select (0 to 19)
pub const LED_PIN_COUNT: usize = 20;

/// Build a [`PinBank`] from GPIO0 to GPIO19
///
/// Usage:
/// ```ignore
/// let Pio { mut common, sm0, .. } = Pio::new(p.PIO0, Irqs);
/// let pins = led_pin_bank!(common, p);
/// ```
#[macro_export]
macro_rules! led_pin_bank {
    ($common:expr, $p:expr) => {
        $crate::pins::PinBank::new([
            Some($common.make_pio_pin($p.PIN_0)),
            Some($common.make_pio_pin($p.PIN_1)),
            Some($common.make_pio_pin($p.PIN_2)),
            Some($common.make_pio_pin($p.PIN_3)),
            Some($common.make_pio_pin($p.PIN_4)),
            Some($common.make_pio_pin($p.PIN_5)),
            Some($common.make_pio_pin($p.PIN_6)),
            Some($common.make_pio_pin($p.PIN_7)),
            Some($common.make_pio_pin($p.PIN_8)),
            Some($common.make_pio_pin($p.PIN_9)),
            Some($common.make_pio_pin($p.PIN_10)),
            Some($common.make_pio_pin($p.PIN_11)),
            Some($common.make_pio_pin($p.PIN_12)),
            Some($common.make_pio_pin($p.PIN_13)),
            Some($common.make_pio_pin($p.PIN_14)),
            Some($common.make_pio_pin($p.PIN_15)),
            Some($common.make_pio_pin($p.PIN_16)),
            Some($common.make_pio_pin($p.PIN_17)),
            Some($common.make_pio_pin($p.PIN_18)),
            Some($common.make_pio_pin($p.PIN_19)),
        ])
    };
}

/// Error when looking up a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-19 valid)
    InvalidPin,
    /// Pin was left out of the bank
    Unavailable,
}

/// PIO pins indexed by GPIO number
pub struct PinBank<'d, PIO: Instance> {
    pins: [Option<Pin<'d, PIO>>; LED_PIN_COUNT],
}

impl<'d, PIO: Instance> PinBank<'d, PIO> {
    pub fn new(pins: [Option<Pin<'d, PIO>>; LED_PIN_COUNT]) -> Self {
        Self { pins }
    }

    /// Look up a pin by GPIO number
    pub fn get(&self, pin_num: u8) -> Result<&Pin<'d, PIO>, PinError> {
        self.pins
            .get(usize::from(pin_num))
            .ok_or(PinError::InvalidPin)?
            .as_ref()
            .ok_or(PinError::Unavailable)
    }
}
