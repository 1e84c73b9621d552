//! Responses sent from the controller back to the host
//!
//! Every command is answered with exactly one of:
//! - `OK` (1 byte)
//! - `PONG` (1 byte)
//! - `ERROR` + error code (2 bytes)
//! - `INFO` + version, LED count (BE), pin, initialized, brightness (7 bytes)
//! - `UNKNOWN_CMD` (1 byte), kept apart from error framing so hosts can
//!   probe for optional commands

use heapless::Vec;

/// Protocol revision reported in the INFO frame
pub const PROTOCOL_VERSION: u8 = 1;

/// Longest encoded response (INFO frame)
pub const MAX_RESPONSE_LEN: usize = 7;

// Response tags
const RESP_OK: u8 = 0xF0;
const RESP_PONG: u8 = 0xF1;
const RESP_INFO: u8 = 0xF2;
const RESP_ERROR: u8 = 0xFE;
const RESP_UNKNOWN_CMD: u8 = 0xFF;

// Error codes
const ERR_BUFFER_OVERFLOW: u8 = 0x01;
const ERR_INVALID_PARAM: u8 = 0x02;
const ERR_NOT_INITIALIZED: u8 = 0x03;
const ERR_OUT_OF_RANGE: u8 = 0x04;
const ERR_TIMEOUT: u8 = 0x05;

/// Error codes carried in an `ERROR` frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorCode {
    /// Reserved; no current command produces it
    BufferOverflow,
    /// Configuration value outside its accepted range
    InvalidParam,
    /// Command needs an initialized strip
    NotInitialized,
    /// Pixel index or range beyond the LED count
    OutOfRange,
    /// Payload bytes did not arrive before the deadline
    Timeout,
}

impl ErrorCode {
    /// Parse an error code from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            ERR_BUFFER_OVERFLOW => Some(ErrorCode::BufferOverflow),
            ERR_INVALID_PARAM => Some(ErrorCode::InvalidParam),
            ERR_NOT_INITIALIZED => Some(ErrorCode::NotInitialized),
            ERR_OUT_OF_RANGE => Some(ErrorCode::OutOfRange),
            ERR_TIMEOUT => Some(ErrorCode::Timeout),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            ErrorCode::BufferOverflow => ERR_BUFFER_OVERFLOW,
            ErrorCode::InvalidParam => ERR_INVALID_PARAM,
            ErrorCode::NotInitialized => ERR_NOT_INITIALIZED,
            ErrorCode::OutOfRange => ERR_OUT_OF_RANGE,
            ErrorCode::Timeout => ERR_TIMEOUT,
        }
    }
}

/// Controller state reported by `GET_INFO`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceInfo {
    pub protocol_version: u8,
    pub led_count: u16,
    pub pin: u8,
    pub initialized: bool,
    pub brightness: u8,
}

/// A single response frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response {
    Ok,
    Pong,
    Info(DeviceInfo),
    Error(ErrorCode),
    UnknownCommand,
}

impl Response {
    /// Encode this response into wire bytes
    pub fn encode(&self) -> Vec<u8, MAX_RESPONSE_LEN> {
        let mut buf = [0u8; MAX_RESPONSE_LEN];
        let len = match self {
            Response::Ok => {
                buf[0] = RESP_OK;
                1
            }
            Response::Pong => {
                buf[0] = RESP_PONG;
                1
            }
            Response::UnknownCommand => {
                buf[0] = RESP_UNKNOWN_CMD;
                1
            }
            Response::Error(code) => {
                buf[0] = RESP_ERROR;
                buf[1] = code.to_byte();
                2
            }
            Response::Info(info) => {
                let [count_hi, count_lo] = info.led_count.to_be_bytes();
                buf = [
                    RESP_INFO,
                    info.protocol_version,
                    count_hi,
                    count_lo,
                    info.pin,
                    info.initialized as u8,
                    info.brightness,
                ];
                MAX_RESPONSE_LEN
            }
        };

        let mut out = Vec::new();
        // Cannot fail: len never exceeds MAX_RESPONSE_LEN
        let _ = out.extend_from_slice(&buf[..len]);
        out
    }

    /// Parse a complete response (for host tools and tests)
    ///
    /// Returns `None` if the bytes are not exactly one well-formed response.
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [RESP_OK] => Some(Response::Ok),
            [RESP_PONG] => Some(Response::Pong),
            [RESP_UNKNOWN_CMD] => Some(Response::UnknownCommand),
            [RESP_ERROR, code] => ErrorCode::from_byte(*code).map(Response::Error),
            [RESP_INFO, version, count_hi, count_lo, pin, initialized, brightness] => {
                Some(Response::Info(DeviceInfo {
                    protocol_version: *version,
                    led_count: u16::from_be_bytes([*count_hi, *count_lo]),
                    pin: *pin,
                    initialized: *initialized != 0,
                    brightness: *brightness,
                }))
            }
            _ => None,
        }
    }

    /// Returns true if this response reports a failure
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error(_))
    }
}

impl From<ErrorCode> for Response {
    fn from(code: ErrorCode) -> Self {
        Response::Error(code)
    }
}
