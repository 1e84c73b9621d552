//! UART serial communication abstractions
//!
//! The protocol engine never blocks on an empty receiver: it asks how many
//! bytes are buffered and only reads what is already there. Blocking with a
//! deadline is built on top of that by the engine itself.

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been queued or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// UART receiver
pub trait UartRx {
    /// Error type for receive operations
    type Error;

    /// Number of received bytes that can be read without waiting
    fn bytes_available(&mut self) -> Result<usize, Self::Error>;

    /// Read one buffered byte, or `None` if the receive buffer is empty
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Fill `buf` from already-buffered bytes
    ///
    /// Returns the number of bytes copied, which is less than `buf.len()`
    /// only if the receive buffer ran dry.
    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let mut filled = 0;
        for slot in buf.iter_mut() {
            match self.read_byte()? {
                Some(byte) => {
                    *slot = byte;
                    filled += 1;
                }
                None => break,
            }
        }
        Ok(filled)
    }
}

/// UART configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 115200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

impl UartConfig {
    /// Time to shift one byte onto the wire, in microseconds (rounded up)
    pub fn byte_time_us(&self) -> u32 {
        let data = match self.data_bits {
            DataBits::Seven => 7,
            DataBits::Eight => 8,
        };
        let parity = match self.parity {
            Parity::None => 0,
            Parity::Even | Parity::Odd => 1,
        };
        let stop = match self.stop_bits {
            StopBits::One => 1,
            StopBits::Two => 2,
        };
        let bits: u32 = 1 + data + parity + stop;
        (bits * 1_000_000).div_ceil(self.baudrate.max(1))
    }
}
