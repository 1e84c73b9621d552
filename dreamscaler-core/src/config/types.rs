//! Configuration type definitions

use dreamscaler_protocol::ErrorCode;

/// Largest strip the pixel store can hold
pub const MAX_LED_COUNT: usize = 1000;

/// Smallest accepted LED count
pub const MIN_LED_COUNT: u16 = 1;

/// Highest accepted data pin number
pub const MAX_PIN: u8 = 19;

/// LED count used at boot and after `RESET`
pub const DEFAULT_LED_COUNT: u16 = 144;

/// Data pin used at boot and after `RESET`
pub const DEFAULT_PIN: u8 = 6;

/// Time allowed for a command's fixed payload to arrive
pub const DEFAULT_PAYLOAD_TIMEOUT_MS: u32 = 1000;

/// Time allowed for each 4-byte pixel of a bulk update
pub const DEFAULT_BULK_PIXEL_TIMEOUT_MS: u32 = 1000;

/// Rejected configuration values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// LED count is zero or above [`MAX_LED_COUNT`]
    LedCountOutOfRange(u16),
    /// Pin number is above [`MAX_PIN`]
    PinOutOfRange(u8),
}

impl From<ConfigError> for ErrorCode {
    fn from(_: ConfigError) -> Self {
        ErrorCode::InvalidParam
    }
}

/// Geometry of the attached strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StripConfig {
    /// Number of pixels
    pub led_count: u16,
    /// Data pin driving the strip
    pub pin: u8,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            led_count: DEFAULT_LED_COUNT,
            pin: DEFAULT_PIN,
        }
    }
}

impl StripConfig {
    /// Check an LED count against the store capacity
    pub fn check_led_count(count: u16) -> Result<u16, ConfigError> {
        if count < MIN_LED_COUNT || usize::from(count) > MAX_LED_COUNT {
            return Err(ConfigError::LedCountOutOfRange(count));
        }
        Ok(count)
    }

    /// Check a pin number against the board's usable range
    pub fn check_pin(pin: u8) -> Result<u8, ConfigError> {
        if pin > MAX_PIN {
            return Err(ConfigError::PinOutOfRange(pin));
        }
        Ok(pin)
    }

    /// Returns true if both fields are in range
    pub fn is_valid(&self) -> bool {
        Self::check_led_count(self.led_count).is_ok() && Self::check_pin(self.pin).is_ok()
    }
}

/// Protocol engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EngineConfig {
    /// Strip restored at boot and by `RESET`
    pub default_strip: StripConfig,
    /// Deadline for a command's fixed payload
    pub payload_timeout_ms: u32,
    /// Deadline for each pixel of a bulk update
    pub bulk_pixel_timeout_ms: u32,
    /// Initialize the default strip in `Engine::boot`
    pub init_on_boot: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_strip: StripConfig::default(),
            payload_timeout_ms: DEFAULT_PAYLOAD_TIMEOUT_MS,
            bulk_pixel_timeout_ms: DEFAULT_BULK_PIXEL_TIMEOUT_MS,
            init_on_boot: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_strip() {
        let strip = StripConfig::default();
        assert_eq!(strip.led_count, 144);
        assert_eq!(strip.pin, 6);
        assert!(strip.is_valid());
    }

    #[test]
    fn test_led_count_bounds() {
        assert_eq!(StripConfig::check_led_count(1), Ok(1));
        assert_eq!(StripConfig::check_led_count(1000), Ok(1000));
        assert_eq!(
            StripConfig::check_led_count(0),
            Err(ConfigError::LedCountOutOfRange(0))
        );
        assert_eq!(
            StripConfig::check_led_count(1001),
            Err(ConfigError::LedCountOutOfRange(1001))
        );
    }

    #[test]
    fn test_pin_bounds() {
        assert_eq!(StripConfig::check_pin(0), Ok(0));
        assert_eq!(StripConfig::check_pin(19), Ok(19));
        assert_eq!(
            StripConfig::check_pin(20),
            Err(ConfigError::PinOutOfRange(20))
        );
    }

    #[test]
    fn test_config_errors_map_to_invalid_param() {
        assert_eq!(
            ErrorCode::from(ConfigError::PinOutOfRange(99)),
            ErrorCode::InvalidParam
        );
    }

    #[test]
    fn test_engine_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.payload_timeout_ms, 1000);
        assert_eq!(config.bulk_pixel_timeout_ms, 1000);
        assert!(config.init_on_boot);
    }
}
