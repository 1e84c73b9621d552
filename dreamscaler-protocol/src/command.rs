//! Command opcodes sent from the host to the controller
//!
//! Opcodes are grouped by their high nibble:
//! - `0x0_`: system (ping, info, reset)
//! - `0x1_`: strip configuration
//! - `0x2_`: single pixel writes
//! - `0x3_`: range and whole-strip writes
//! - `0x4_`: buffered writes
//! - `0x5_`: streamed and bulk writes
//! - `0x6_`: synchronization
//! - `0x7_`: effects

/// Largest fixed payload of any command (`FILL_GRADIENT`)
pub const MAX_PAYLOAD_SIZE: usize = 12;

// Wire format values
const CMD_PING: u8 = 0x01;
const CMD_GET_INFO: u8 = 0x02;
const CMD_RESET: u8 = 0x03;
const CMD_SET_LED_COUNT: u8 = 0x10;
const CMD_SET_LED_PIN: u8 = 0x11;
const CMD_INIT_STRIP: u8 = 0x12;
const CMD_SET_PIXEL_RGBW: u8 = 0x20;
const CMD_SET_PIXEL_RGB: u8 = 0x21;
const CMD_SET_PIXEL_W: u8 = 0x22;
const CMD_SET_RANGE: u8 = 0x30;
const CMD_SET_ALL: u8 = 0x31;
const CMD_CLEAR_ALL: u8 = 0x32;
const CMD_BUFFER_START: u8 = 0x40;
const CMD_BUFFER_PIXEL: u8 = 0x41;
const CMD_BUFFER_END: u8 = 0x42;
const CMD_STREAM_START: u8 = 0x50;
const CMD_STREAM_DATA: u8 = 0x51;
const CMD_STREAM_END: u8 = 0x52;
const CMD_BULK_UPDATE: u8 = 0x55;
const CMD_SYNC: u8 = 0x60;
const CMD_FILL_GRADIENT: u8 = 0x70;
const CMD_SET_BRIGHTNESS: u8 = 0x71;

/// Host command identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Liveness check, answered with PONG
    Ping,
    /// Request the INFO frame
    GetInfo,
    /// Reinitialize with factory defaults
    Reset,
    /// Set the LED count used by the next initialization
    SetLedCount,
    /// Set the output pin used by the next initialization
    SetLedPin,
    /// Reinitialize the strip with the configured count and pin
    InitStrip,
    /// Write one pixel (all four channels) and show it
    SetPixelRgbw,
    /// Write one pixel (white off) and show it
    SetPixelRgb,
    /// Write one pixel (white only) and show it
    SetPixelW,
    /// Fill an inclusive index range and show it
    SetRange,
    /// Fill the whole strip and show it
    SetAll,
    /// Turn every pixel off and show it
    ClearAll,
    /// Begin a buffered update
    BufferStart,
    /// Write one pixel without showing it
    BufferPixel,
    /// Show everything written since `BufferStart`
    BufferEnd,
    /// Begin a sequential stream of a declared length
    StreamStart,
    /// Next pixel of the active stream
    StreamData,
    /// Show the streamed pixels and leave streaming mode
    StreamEnd,
    /// Count-prefixed burst of pixels starting at index 0
    BulkUpdate,
    /// Push the current buffer to the strip
    Sync,
    /// Linear two-color gradient over an inclusive range
    FillGradient,
    /// Replace the global brightness scalar
    SetBrightness,
}

impl Command {
    /// Every command, in opcode order
    pub const ALL: [Command; 22] = [
        Command::Ping,
        Command::GetInfo,
        Command::Reset,
        Command::SetLedCount,
        Command::SetLedPin,
        Command::InitStrip,
        Command::SetPixelRgbw,
        Command::SetPixelRgb,
        Command::SetPixelW,
        Command::SetRange,
        Command::SetAll,
        Command::ClearAll,
        Command::BufferStart,
        Command::BufferPixel,
        Command::BufferEnd,
        Command::StreamStart,
        Command::StreamData,
        Command::StreamEnd,
        Command::BulkUpdate,
        Command::Sync,
        Command::FillGradient,
        Command::SetBrightness,
    ];

    /// Parse a command from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CMD_PING => Some(Command::Ping),
            CMD_GET_INFO => Some(Command::GetInfo),
            CMD_RESET => Some(Command::Reset),
            CMD_SET_LED_COUNT => Some(Command::SetLedCount),
            CMD_SET_LED_PIN => Some(Command::SetLedPin),
            CMD_INIT_STRIP => Some(Command::InitStrip),
            CMD_SET_PIXEL_RGBW => Some(Command::SetPixelRgbw),
            CMD_SET_PIXEL_RGB => Some(Command::SetPixelRgb),
            CMD_SET_PIXEL_W => Some(Command::SetPixelW),
            CMD_SET_RANGE => Some(Command::SetRange),
            CMD_SET_ALL => Some(Command::SetAll),
            CMD_CLEAR_ALL => Some(Command::ClearAll),
            CMD_BUFFER_START => Some(Command::BufferStart),
            CMD_BUFFER_PIXEL => Some(Command::BufferPixel),
            CMD_BUFFER_END => Some(Command::BufferEnd),
            CMD_STREAM_START => Some(Command::StreamStart),
            CMD_STREAM_DATA => Some(Command::StreamData),
            CMD_STREAM_END => Some(Command::StreamEnd),
            CMD_BULK_UPDATE => Some(Command::BulkUpdate),
            CMD_SYNC => Some(Command::Sync),
            CMD_FILL_GRADIENT => Some(Command::FillGradient),
            CMD_SET_BRIGHTNESS => Some(Command::SetBrightness),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            Command::Ping => CMD_PING,
            Command::GetInfo => CMD_GET_INFO,
            Command::Reset => CMD_RESET,
            Command::SetLedCount => CMD_SET_LED_COUNT,
            Command::SetLedPin => CMD_SET_LED_PIN,
            Command::InitStrip => CMD_INIT_STRIP,
            Command::SetPixelRgbw => CMD_SET_PIXEL_RGBW,
            Command::SetPixelRgb => CMD_SET_PIXEL_RGB,
            Command::SetPixelW => CMD_SET_PIXEL_W,
            Command::SetRange => CMD_SET_RANGE,
            Command::SetAll => CMD_SET_ALL,
            Command::ClearAll => CMD_CLEAR_ALL,
            Command::BufferStart => CMD_BUFFER_START,
            Command::BufferPixel => CMD_BUFFER_PIXEL,
            Command::BufferEnd => CMD_BUFFER_END,
            Command::StreamStart => CMD_STREAM_START,
            Command::StreamData => CMD_STREAM_DATA,
            Command::StreamEnd => CMD_STREAM_END,
            Command::BulkUpdate => CMD_BULK_UPDATE,
            Command::Sync => CMD_SYNC,
            Command::FillGradient => CMD_FILL_GRADIENT,
            Command::SetBrightness => CMD_SET_BRIGHTNESS,
        }
    }

    /// Number of payload bytes that follow the command byte
    ///
    /// For `BulkUpdate` this is only the count prefix; the pixel data that
    /// follows is consumed separately.
    pub fn payload_len(self) -> usize {
        match self {
            Command::Ping
            | Command::GetInfo
            | Command::Reset
            | Command::InitStrip
            | Command::ClearAll
            | Command::BufferStart
            | Command::BufferEnd
            | Command::StreamEnd
            | Command::Sync => 0,
            Command::SetLedPin | Command::SetBrightness => 1,
            Command::SetLedCount | Command::StreamStart | Command::BulkUpdate => 2,
            Command::SetPixelW => 3,
            Command::SetAll | Command::StreamData => 4,
            Command::SetPixelRgb => 5,
            Command::SetPixelRgbw | Command::BufferPixel => 6,
            Command::SetRange => 8,
            Command::FillGradient => 12,
        }
    }

    /// Returns true if the command needs an initialized strip
    ///
    /// Status queries and strip configuration work at any time; `InitStrip`
    /// and `Reset` are the commands that perform the initialization.
    pub fn requires_init(self) -> bool {
        !matches!(
            self,
            Command::Ping
                | Command::GetInfo
                | Command::SetLedCount
                | Command::SetLedPin
                | Command::InitStrip
                | Command::Reset
        )
    }

    /// Returns true if the command belongs to a stream session
    pub fn is_stream(self) -> bool {
        matches!(self, Command::StreamData | Command::StreamEnd)
    }

    /// Returns true if the command only reports state
    pub fn is_query(self) -> bool {
        matches!(self, Command::Ping | Command::GetInfo)
    }
}
