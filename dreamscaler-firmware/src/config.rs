//! Board configuration
//!
//! Everything is fixed at build time; the host adjusts LED count and pin at
//! runtime over the protocol.

use dreamscaler_core::config::{EngineConfig, StripConfig, DEFAULT_LED_COUNT, DEFAULT_PIN};
use dreamscaler_hal::uart::{DataBits, Parity, StopBits};
use dreamscaler_hal::UartConfig;
use embassy_rp::uart;
use embassy_time::Duration;

/// UART transmit buffer size
pub const TX_BUF_LEN: usize = 64;

/// UART receive buffer size; holds a burst of ~250 bulk pixels
pub const RX_BUF_LEN: usize = 1024;

/// Byte times to sleep when no command is waiting
const IDLE_POLL_BYTES: u64 = 2;

/// Host link line settings (115200 8N1)
pub fn host_line() -> UartConfig {
    UartConfig::default()
}

/// Translate line settings into the RP2040 UART configuration
pub fn serial_config(line: &UartConfig) -> uart::Config {
    let mut cfg = uart::Config::default();
    cfg.baudrate = line.baudrate;
    cfg.data_bits = match line.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    cfg.parity = match line.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match line.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    cfg
}

/// How long the engine task sleeps between empty polls
pub fn idle_poll(line: &UartConfig) -> Duration {
    Duration::from_micros(u64::from(line.byte_time_us()) * IDLE_POLL_BYTES)
}

/// Engine settings: default strip on GPIO6, initialized at power-on
pub fn engine_config() -> EngineConfig {
    EngineConfig {
        default_strip: StripConfig {
            led_count: DEFAULT_LED_COUNT,
            pin: DEFAULT_PIN,
        },
        init_on_boot: true,
        ..Default::default()
    }
}
