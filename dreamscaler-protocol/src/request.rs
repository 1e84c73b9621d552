//! Typed requests decoded from a command byte and its fixed payload
//!
//! Multi-byte integers are big-endian, matching the host's
//! `struct.pack('>H…')` encoding.

use heapless::Vec;

use crate::color::Rgbw;
use crate::command::{Command, MAX_PAYLOAD_SIZE};

/// Encoded request size (command byte + largest payload)
pub const MAX_REQUEST_LEN: usize = 1 + MAX_PAYLOAD_SIZE;

/// Errors that can occur while decoding a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Payload length does not match the command
    WrongLength { expected: usize, actual: usize },
}

/// A fully decoded host request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Request {
    Ping,
    GetInfo,
    Reset,
    SetLedCount { count: u16 },
    SetLedPin { pin: u8 },
    InitStrip,
    /// Covers all three single-pixel variants; missing channels are zero
    SetPixel { index: u16, color: Rgbw },
    SetRange { start: u16, end: u16, color: Rgbw },
    SetAll { color: Rgbw },
    ClearAll,
    BufferStart,
    BufferPixel { index: u16, color: Rgbw },
    BufferEnd,
    StreamStart { count: u16 },
    StreamData { color: Rgbw },
    StreamEnd,
    /// Count prefix only; pixel data follows separately
    BulkUpdate { count: u16 },
    Sync,
    FillGradient {
        start: u16,
        end: u16,
        from: Rgbw,
        to: Rgbw,
    },
    SetBrightness { value: u8 },
}

fn be16(bytes: &[u8]) -> u16 {
    u16::from_be_bytes([bytes[0], bytes[1]])
}

fn rgbw(bytes: &[u8]) -> Rgbw {
    Rgbw::new(bytes[0], bytes[1], bytes[2], bytes[3])
}

impl Request {
    /// Decode a request from a command and exactly its payload
    pub fn decode(command: Command, payload: &[u8]) -> Result<Self, DecodeError> {
        let expected = command.payload_len();
        if payload.len() != expected {
            return Err(DecodeError::WrongLength {
                expected,
                actual: payload.len(),
            });
        }

        let p = payload;
        let request = match command {
            Command::Ping => Request::Ping,
            Command::GetInfo => Request::GetInfo,
            Command::Reset => Request::Reset,
            Command::SetLedCount => Request::SetLedCount { count: be16(p) },
            Command::SetLedPin => Request::SetLedPin { pin: p[0] },
            Command::InitStrip => Request::InitStrip,
            Command::SetPixelRgbw => Request::SetPixel {
                index: be16(p),
                color: rgbw(&p[2..6]),
            },
            Command::SetPixelRgb => Request::SetPixel {
                index: be16(p),
                color: Rgbw::rgb(p[2], p[3], p[4]),
            },
            Command::SetPixelW => Request::SetPixel {
                index: be16(p),
                color: Rgbw::white(p[2]),
            },
            Command::SetRange => Request::SetRange {
                start: be16(p),
                end: be16(&p[2..]),
                color: rgbw(&p[4..8]),
            },
            Command::SetAll => Request::SetAll { color: rgbw(p) },
            Command::ClearAll => Request::ClearAll,
            Command::BufferStart => Request::BufferStart,
            Command::BufferPixel => Request::BufferPixel {
                index: be16(p),
                color: rgbw(&p[2..6]),
            },
            Command::BufferEnd => Request::BufferEnd,
            Command::StreamStart => Request::StreamStart { count: be16(p) },
            Command::StreamData => Request::StreamData { color: rgbw(p) },
            Command::StreamEnd => Request::StreamEnd,
            Command::BulkUpdate => Request::BulkUpdate { count: be16(p) },
            Command::Sync => Request::Sync,
            Command::FillGradient => Request::FillGradient {
                start: be16(p),
                end: be16(&p[2..]),
                from: rgbw(&p[4..8]),
                to: rgbw(&p[8..12]),
            },
            Command::SetBrightness => Request::SetBrightness { value: p[0] },
        };

        Ok(request)
    }

    /// Command byte this request is sent with
    ///
    /// `SetPixel` picks the narrowest variant that carries the color without
    /// loss, the same choice a host makes between `set_pixel`,
    /// `set_pixel_rgb` and `set_pixel_white`.
    pub fn command(&self) -> Command {
        match self {
            Request::Ping => Command::Ping,
            Request::GetInfo => Command::GetInfo,
            Request::Reset => Command::Reset,
            Request::SetLedCount { .. } => Command::SetLedCount,
            Request::SetLedPin { .. } => Command::SetLedPin,
            Request::InitStrip => Command::InitStrip,
            Request::SetPixel { color, .. } => {
                if color.w == 0 {
                    Command::SetPixelRgb
                } else if color.r == 0 && color.g == 0 && color.b == 0 {
                    Command::SetPixelW
                } else {
                    Command::SetPixelRgbw
                }
            }
            Request::SetRange { .. } => Command::SetRange,
            Request::SetAll { .. } => Command::SetAll,
            Request::ClearAll => Command::ClearAll,
            Request::BufferStart => Command::BufferStart,
            Request::BufferPixel { .. } => Command::BufferPixel,
            Request::BufferEnd => Command::BufferEnd,
            Request::StreamStart { .. } => Command::StreamStart,
            Request::StreamData { .. } => Command::StreamData,
            Request::StreamEnd => Command::StreamEnd,
            Request::BulkUpdate { .. } => Command::BulkUpdate,
            Request::Sync => Command::Sync,
            Request::FillGradient { .. } => Command::FillGradient,
            Request::SetBrightness { .. } => Command::SetBrightness,
        }
    }

    /// Encode this request into wire bytes (for host tools and simulation)
    pub fn encode(&self) -> Vec<u8, MAX_REQUEST_LEN> {
        let command = self.command();
        let mut buf = [0u8; MAX_REQUEST_LEN];
        buf[0] = command.to_byte();
        let p = &mut buf[1..];

        match *self {
            Request::SetLedCount { count }
            | Request::StreamStart { count }
            | Request::BulkUpdate { count } => p[..2].copy_from_slice(&count.to_be_bytes()),
            Request::SetLedPin { pin } => p[0] = pin,
            Request::SetBrightness { value } => p[0] = value,
            Request::SetPixel { index, color } => {
                p[..2].copy_from_slice(&index.to_be_bytes());
                match command {
                    Command::SetPixelRgb => p[2..5].copy_from_slice(&[color.r, color.g, color.b]),
                    Command::SetPixelW => p[2] = color.w,
                    _ => p[2..6].copy_from_slice(&color.to_bytes()),
                }
            }
            Request::BufferPixel { index, color } => {
                p[..2].copy_from_slice(&index.to_be_bytes());
                p[2..6].copy_from_slice(&color.to_bytes());
            }
            Request::SetRange { start, end, color } => {
                p[..2].copy_from_slice(&start.to_be_bytes());
                p[2..4].copy_from_slice(&end.to_be_bytes());
                p[4..8].copy_from_slice(&color.to_bytes());
            }
            Request::SetAll { color } | Request::StreamData { color } => {
                p[..4].copy_from_slice(&color.to_bytes());
            }
            Request::FillGradient {
                start,
                end,
                from,
                to,
            } => {
                p[..2].copy_from_slice(&start.to_be_bytes());
                p[2..4].copy_from_slice(&end.to_be_bytes());
                p[4..8].copy_from_slice(&from.to_bytes());
                p[8..12].copy_from_slice(&to.to_bytes());
            }
            Request::Ping
            | Request::GetInfo
            | Request::Reset
            | Request::InitStrip
            | Request::ClearAll
            | Request::BufferStart
            | Request::BufferEnd
            | Request::StreamEnd
            | Request::Sync => {}
        }

        let mut out = Vec::new();
        // Cannot fail: payload_len() never exceeds MAX_PAYLOAD_SIZE
        let _ = out.extend_from_slice(&buf[..1 + command.payload_len()]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_set_pixel_big_endian() {
        let payload = [0x01, 0x02, 10, 20, 30, 40];
        let request = Request::decode(Command::SetPixelRgbw, &payload).unwrap();
        assert_eq!(
            request,
            Request::SetPixel {
                index: 0x0102,
                color: Rgbw::new(10, 20, 30, 40),
            }
        );
    }

    #[test]
    fn test_decode_rgb_zeroes_white() {
        let request = Request::decode(Command::SetPixelRgb, &[0, 5, 1, 2, 3]).unwrap();
        assert_eq!(
            request,
            Request::SetPixel {
                index: 5,
                color: Rgbw::new(1, 2, 3, 0),
            }
        );
    }

    #[test]
    fn test_decode_white_zeroes_rgb() {
        let request = Request::decode(Command::SetPixelW, &[0, 7, 200]).unwrap();
        assert_eq!(
            request,
            Request::SetPixel {
                index: 7,
                color: Rgbw::new(0, 0, 0, 200),
            }
        );
    }

    #[test]
    fn test_decode_gradient() {
        let payload = [0, 0, 0, 9, 0, 0, 0, 0, 255, 255, 255, 255];
        let request = Request::decode(Command::FillGradient, &payload).unwrap();
        assert_eq!(
            request,
            Request::FillGradient {
                start: 0,
                end: 9,
                from: Rgbw::BLACK,
                to: Rgbw::new(255, 255, 255, 255),
            }
        );
    }

    #[test]
    fn test_decode_wrong_length() {
        let result = Request::decode(Command::SetLedCount, &[1]);
        assert_eq!(
            result,
            Err(DecodeError::WrongLength {
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_encode_matches_host_packing() {
        // struct.pack('>HHBBBB', 3, 300, 1, 2, 3, 4)
        let bytes = Request::SetRange {
            start: 3,
            end: 300,
            color: Rgbw::new(1, 2, 3, 4),
        }
        .encode();
        assert_eq!(&bytes[..], &[0x30, 0, 3, 0x01, 0x2C, 1, 2, 3, 4]);

        let bytes = Request::BulkUpdate { count: 144 }.encode();
        assert_eq!(&bytes[..], &[0x55, 0, 144]);
    }

    #[test]
    fn test_set_pixel_picks_narrowest_command() {
        let encoded_len = |color| Request::SetPixel { index: 1, color }.encode().len();
        assert_eq!(encoded_len(Rgbw::rgb(1, 2, 3)), 6);
        assert_eq!(encoded_len(Rgbw::white(3)), 4);
        assert_eq!(encoded_len(Rgbw::new(1, 0, 0, 3)), 7);
    }

    proptest! {
        #[test]
        fn prop_encoded_request_decodes_back(
            index in any::<u16>(),
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
            w in any::<u8>(),
        ) {
            let color = Rgbw::new(r, g, b, w);
            let original = Request::SetPixel { index, color };
            let bytes = original.encode();
            let command = Command::from_byte(bytes[0]).unwrap();
            let decoded = Request::decode(command, &bytes[1..]).unwrap();
            prop_assert_eq!(decoded, original);
        }
    }
}
