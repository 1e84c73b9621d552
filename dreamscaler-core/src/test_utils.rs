//! Host-side fakes for the serial port, clock and LED driver

use core::cell::Cell;
use core::convert::Infallible;
use std::collections::VecDeque;
use std::vec::Vec;

use dreamscaler_hal::{Monotonic, UartRx, UartTx};
use dreamscaler_protocol::{Request, Rgbw};

use crate::traits::LedDriver;

/// Serial port with a scripted receive queue and a captured transmit log
#[derive(Debug, Default)]
pub struct FakeSerial {
    rx: VecDeque<u8>,
    tx: Vec<u8>,
    pub flushes: usize,
}

impl FakeSerial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue raw bytes as if the host had sent them
    pub fn push(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }

    /// Queue an encoded request
    pub fn push_request(&mut self, request: Request) {
        self.push(&request.encode());
    }

    /// Bytes still waiting to be read
    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    /// Take everything written so far
    pub fn take_tx(&mut self) -> Vec<u8> {
        core::mem::take(&mut self.tx)
    }
}

impl UartRx for FakeSerial {
    type Error = Infallible;

    fn bytes_available(&mut self) -> Result<usize, Infallible> {
        Ok(self.rx.len())
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Infallible> {
        Ok(self.rx.pop_front())
    }
}

impl UartTx for FakeSerial {
    type Error = Infallible;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Infallible> {
        self.tx.extend_from_slice(data);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Infallible> {
        self.flushes += 1;
        Ok(())
    }
}

/// Clock that moves forward by a fixed step on every reading
///
/// Busy-wait loops therefore always reach their deadline.
#[derive(Debug)]
pub struct FakeClock {
    now: Cell<u64>,
    step: u64,
}

impl FakeClock {
    pub fn new(step_ms: u64) -> Self {
        Self {
            now: Cell::new(0),
            step: step_ms,
        }
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Monotonic for FakeClock {
    fn now_ms(&self) -> u64 {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}

/// Calls seen by [`FakeDriver`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverEvent {
    Attach { pin: u8, led_count: u16 },
    Release { pin: u8 },
    Commit { pin: u8, frame: Vec<Rgbw> },
}

/// LED driver that records every call
#[derive(Debug, Default)]
pub struct FakeDriver {
    pub events: Vec<DriverEvent>,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commit_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, DriverEvent::Commit { .. }))
            .count()
    }

    /// Most recently committed frame
    pub fn last_frame(&self) -> Option<&[Rgbw]> {
        self.events.iter().rev().find_map(|e| match e {
            DriverEvent::Commit { frame, .. } => Some(frame.as_slice()),
            _ => None,
        })
    }
}

impl LedDriver for FakeDriver {
    fn attach(&mut self, pin: u8, led_count: u16) {
        self.events.push(DriverEvent::Attach { pin, led_count });
    }

    fn release(&mut self, pin: u8) {
        self.events.push(DriverEvent::Release { pin });
    }

    fn commit(&mut self, pixels: &[Rgbw], pin: u8) {
        self.events.push(DriverEvent::Commit {
            pin,
            frame: pixels.to_vec(),
        });
    }
}
