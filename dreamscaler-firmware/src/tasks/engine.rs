//! Protocol engine task
//!
//! Owns the engine for the lifetime of the firmware. A command runs to
//! completion inside `poll()`, payload waits included; between commands the
//! task sleeps briefly so the executor stays responsive.

use defmt::*;
use embassy_rp::peripherals::PIO0;
use embassy_rp::uart::BufferedUart;
use embassy_time::{Duration, Timer};

use dreamscaler_core::engine::Engine;
use dreamscaler_hal_rp2040::{EmbassyClock, SerialPort, Sk6812};

/// Engine wired to UART1 and the SK6812 driver on PIO0 SM0
pub type LedEngine = Engine<SerialPort<BufferedUart>, EmbassyClock, Sk6812<'static, PIO0, 0>>;

/// Engine task - boots the strip, then serves host commands forever
#[embassy_executor::task]
pub async fn engine_task(engine: &'static mut LedEngine, idle_poll: Duration) {
    info!("Engine task started");

    engine.boot();
    info!(
        "Default strip: {} LEDs on GPIO{}",
        engine.target().led_count,
        engine.target().pin
    );

    loop {
        match engine.poll() {
            Ok(Some(response)) => {
                trace!("Sent {:?}", response);
            }
            Ok(None) => {
                Timer::after(idle_poll).await;
            }
            Err(e) => {
                warn!("Serial error: {:?}", e);
                Timer::after(idle_poll).await;
            }
        }
    }
}
