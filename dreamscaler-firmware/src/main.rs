//! DreamScaler - RGBW LED Strip Controller Firmware
//!
//! Main firmware binary for RP2040-based boards. Receives the DreamScaler
//! serial protocol on UART1 (GPIO20 TX, GPIO21 RX) and drives an SK6812
//! RGBW strip from PIO0 on a host-selectable data pin.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::{PIO0, UART1};
use embassy_rp::pio::Pio;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use dreamscaler_core::engine::Engine;
use dreamscaler_hal_rp2040::{led_pin_bank, EmbassyClock, SerialPort, Sk6812};

mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART1_IRQ => BufferedInterruptHandler<UART1>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; config::TX_BUF_LEN]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; config::RX_BUF_LEN]> = StaticCell::new();

// The engine holds the whole pixel buffer; built in place by `init_with`
static ENGINE: StaticCell<tasks::LedEngine> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("DreamScaler firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Host link
    let line = config::host_line();
    let tx_buf = TX_BUF.init([0u8; config::TX_BUF_LEN]);
    let rx_buf = RX_BUF.init([0u8; config::RX_BUF_LEN]);

    let uart = Uart::new_blocking(p.UART1, p.PIN_20, p.PIN_21, config::serial_config(&line));
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    info!("UART1 initialized at {} baud", line.baudrate);

    // Strip output: every selectable data pin goes to PIO0
    let Pio {
        mut common,
        sm0,
        ..
    } = Pio::new(p.PIO0, Irqs);
    let pins = led_pin_bank!(common, p);
    let strip = Sk6812::new(&mut common, sm0, pins);
    info!("PIO SK6812 driver initialized");

    let engine = ENGINE.init_with(|| {
        Engine::new(
            SerialPort::new(uart),
            EmbassyClock,
            strip,
            config::engine_config(),
        )
    });

    spawner
        .spawn(tasks::engine_task(engine, config::idle_poll(&line)))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in the engine task
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
