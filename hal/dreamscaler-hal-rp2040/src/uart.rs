//! Serial port adapter for the engine
//!
//! The buffered UART only reports whether *some* bytes are ready, while the
//! engine needs a count to decide whether a whole payload has arrived. A
//! small staging queue bridges the two: ready bytes are moved into it and
//! counted there.

use dreamscaler_hal::{UartRx, UartTx};
use embedded_io::{ErrorType, Read, ReadReady, Write};
use heapless::Deque;

/// Staging queue size; must cover the largest payload the engine waits for
pub const STAGING_LEN: usize = 64;

/// Engine-facing wrapper around a buffered UART
pub struct SerialPort<T> {
    uart: T,
    staged: Deque<u8, STAGING_LEN>,
}

impl<T> SerialPort<T>
where
    T: Read + ReadReady + Write,
{
    pub fn new(uart: T) -> Self {
        Self {
            uart,
            staged: Deque::new(),
        }
    }

    /// Move every ready byte that fits into the staging queue
    fn stage(&mut self) -> Result<(), <T as ErrorType>::Error> {
        let mut chunk = [0u8; 16];
        while !self.staged.is_full() && self.uart.read_ready()? {
            let room = (STAGING_LEN - self.staged.len()).min(chunk.len());
            let n = self.uart.read(&mut chunk[..room])?;
            if n == 0 {
                break;
            }
            for &byte in &chunk[..n] {
                // Cannot fail: n never exceeds the free space
                let _ = self.staged.push_back(byte);
            }
        }
        Ok(())
    }
}

impl<T> UartRx for SerialPort<T>
where
    T: Read + ReadReady + Write,
{
    type Error = <T as ErrorType>::Error;

    fn bytes_available(&mut self) -> Result<usize, <T as ErrorType>::Error> {
        self.stage()?;
        Ok(self.staged.len())
    }

    fn read_byte(&mut self) -> Result<Option<u8>, <T as ErrorType>::Error> {
        if self.staged.is_empty() {
            self.stage()?;
        }
        Ok(self.staged.pop_front())
    }
}

impl<T> UartTx for SerialPort<T>
where
    T: Read + ReadReady + Write,
{
    type Error = <T as ErrorType>::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), <T as ErrorType>::Error> {
        self.uart.write_all(data)
    }

    fn flush(&mut self) -> Result<(), <T as ErrorType>::Error> {
        Write::flush(&mut self.uart)
    }
}
