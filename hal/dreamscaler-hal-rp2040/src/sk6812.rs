//! PIO-based SK6812 RGBW strip driver
//!
//! One state machine shifts out 32-bit GRBW words at 800 kHz. The data pin
//! can move at runtime: attaching a new pin reconfigures the state machine
//! onto it and releasing a pin turns it back into an input.
//!
//! Bit timing (in PIO cycles, 10 per bit):
//!
//! ```text
//!        ┌──────┬───────────────┬─────────┐
//!  "1"   │ T1=2 │ T2=5 high     │ T3=3 lo │
//!  "0"   │ T1=2 │ T2=5 low      │ T3=3 lo │
//!        └──────┴───────────────┴─────────┘
//! ```

use dreamscaler_core::traits::LedDriver;
use dreamscaler_core::Rgbw;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, FifoJoin, Instance, LoadedProgram, ShiftConfig,
    ShiftDirection, StateMachine,
};
use embassy_time::{block_for, Duration};
use fixed::types::U24F8;

use crate::pins::PinBank;

/// Data rate in kHz
const BIT_RATE_KHZ: u32 = 800;

/// PIO cycles per data bit (T1 + T2 + T3)
const CYCLES_PER_BIT: u32 = 10;

/// Low time that latches a frame (SK6812 needs at least 80µs)
const LATCH_US: u64 = 100;

/// Pack a pixel into the word the state machine shifts out, MSB first
pub fn grbw_word(color: Rgbw) -> u32 {
    u32::from_be_bytes([color.g, color.r, color.b, color.w])
}

/// State machine clock divider for a system clock of `clk_sys_khz`
pub fn clock_divider(clk_sys_khz: u32) -> U24F8 {
    U24F8::from_num(clk_sys_khz) / U24F8::from_num(BIT_RATE_KHZ * CYCLES_PER_BIT)
}

/// SK6812 RGBW strip on one PIO state machine
pub struct Sk6812<'d, PIO: Instance, const SM: usize> {
    sm: StateMachine<'d, PIO, SM>,
    program: LoadedProgram<'d, PIO>,
    pins: PinBank<'d, PIO>,
    /// Pin currently driven, if any
    attached: Option<u8>,
}

impl<'d, PIO: Instance, const SM: usize> Sk6812<'d, PIO, SM> {
    /// Load the SK6812 program and take ownership of the state machine
    ///
    /// No pin is driven until [`LedDriver::attach`] is called.
    pub fn new(
        common: &mut Common<'d, PIO>,
        sm: StateMachine<'d, PIO, SM>,
        pins: PinBank<'d, PIO>,
    ) -> Self {
        let prg = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1        side 0 [2]", // T3
            "    jmp !x do_zero  side 1 [1]", // T1
            "    jmp bitloop     side 1 [4]", // T2, bit is 1
            "do_zero:",
            "    nop             side 0 [4]", // T2, bit is 0
            ".wrap"
        );
        let program = common.load_program(&prg.program);

        Self {
            sm,
            program,
            pins,
            attached: None,
        }
    }
}

impl<'d, PIO: Instance, const SM: usize> LedDriver for Sk6812<'d, PIO, SM> {
    fn attach(&mut self, pin: u8, _led_count: u16) {
        let out_pin = match self.pins.get(pin) {
            Ok(out_pin) => out_pin,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Cannot drive strip on GPIO{}: {:?}", pin, _e);
                return;
            }
        };

        self.sm.set_enable(false);

        let mut cfg = Config::default();
        cfg.use_program(&self.program, &[out_pin]);
        cfg.clock_divider = clock_divider(clk_sys_freq() / 1000);
        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 32,
            direction: ShiftDirection::Left,
        };

        self.sm.set_config(&cfg);
        self.sm.set_pin_dirs(PioDirection::Out, &[out_pin]);
        self.sm.set_enable(true);
        self.attached = Some(pin);

        #[cfg(feature = "defmt")]
        defmt::info!("SK6812: {} LEDs on GPIO{}", _led_count, pin);
    }

    fn release(&mut self, pin: u8) {
        if self.attached != Some(pin) {
            return;
        }
        self.sm.set_enable(false);
        if let Ok(out_pin) = self.pins.get(pin) {
            self.sm.set_pin_dirs(PioDirection::In, &[out_pin]);
        }
        self.attached = None;
    }

    fn commit(&mut self, pixels: &[Rgbw], pin: u8) {
        if self.attached != Some(pin) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Frame for GPIO{} dropped, strip not attached", pin);
            return;
        }

        let tx = self.sm.tx();
        for pixel in pixels {
            let word = grbw_word(*pixel);
            while !tx.try_push(word) {
                core::hint::spin_loop();
            }
        }
        while !tx.empty() {
            core::hint::spin_loop();
        }

        // Last word is still shifting out when the FIFO drains
        block_for(Duration::from_micros(LATCH_US));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grbw_word_order() {
        assert_eq!(grbw_word(Rgbw::new(1, 2, 3, 4)), 0x0201_0304);
        assert_eq!(grbw_word(Rgbw::white(0xFF)), 0x0000_00FF);
        assert_eq!(grbw_word(Rgbw::rgb(0xAA, 0, 0)), 0x00AA_0000);
    }

    #[test]
    fn test_clock_divider() {
        // 125MHz / (800kHz * 10 cycles) = 15.625
        assert_eq!(clock_divider(125_000), U24F8::from_num(15.625));
        // 133MHz overclock
        assert_eq!(clock_divider(133_000).to_num::<u32>(), 16);
    }
}
