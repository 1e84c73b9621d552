//! Per-command handlers

use dreamscaler_hal::{Monotonic, UartRx, UartTx};
use dreamscaler_protocol::{
    Command, DeviceInfo, ErrorCode, Request, Response, Rgbw, MAX_PAYLOAD_SIZE, PROTOCOL_VERSION,
};

use super::session::Session;
use super::wait::{self, WaitError};
use super::{Engine, PortError};
use crate::color::Brightness;
use crate::config::{ConfigError, StripConfig};
use crate::store::StoreError;
use crate::traits::LedDriver;

/// Why a command did not complete
pub(super) enum Fault<E> {
    /// Reported to the host as an `ERROR` frame
    Reply(ErrorCode),
    /// The port itself failed; nothing can be reported
    Transport(E),
}

impl<E> From<ErrorCode> for Fault<E> {
    fn from(code: ErrorCode) -> Self {
        Fault::Reply(code)
    }
}

impl<E> From<StoreError> for Fault<E> {
    fn from(err: StoreError) -> Self {
        Fault::Reply(err.into())
    }
}

impl<E> From<ConfigError> for Fault<E> {
    fn from(err: ConfigError) -> Self {
        Fault::Reply(err.into())
    }
}

impl<E> From<WaitError<E>> for Fault<E> {
    fn from(err: WaitError<E>) -> Self {
        match err {
            WaitError::Timeout => Fault::Reply(ErrorCode::Timeout),
            WaitError::Transport(e) => Fault::Transport(e),
        }
    }
}

impl<P, C, D> Engine<P, C, D>
where
    P: UartRx + UartTx<Error = PortError<P>>,
    C: Monotonic,
    D: LedDriver,
{
    /// Read the payload of `command`, then run it
    pub(super) fn execute(&mut self, command: Command) -> Result<Response, Fault<PortError<P>>> {
        let mut payload = [0u8; MAX_PAYLOAD_SIZE];
        let payload = &mut payload[..command.payload_len()];
        let deadline = self.clock.deadline_after(self.config.payload_timeout_ms);
        wait::read_exact(&mut self.port, &self.clock, payload, deadline).inspect_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Payload timeout for {}", command);
        })?;

        if !self.session.admits(command) {
            #[cfg(feature = "defmt")]
            defmt::warn!("{} aborted {}", command, self.session);
            self.session = Session::Idle;
        }

        if command.requires_init() && !self.store.is_initialized() {
            return Err(ErrorCode::NotInitialized.into());
        }

        let request = Request::decode(command, payload).map_err(|_| ErrorCode::InvalidParam)?;
        self.apply(request)
    }

    fn apply(&mut self, request: Request) -> Result<Response, Fault<PortError<P>>> {
        match request {
            Request::Ping => return Ok(Response::Pong),
            Request::GetInfo => return Ok(Response::Info(self.info())),
            Request::Reset => {
                self.target = self.config.default_strip;
                self.brightness = Brightness::FULL;
                self.session = Session::Idle;
                self.store.initialize(self.target);
            }
            Request::SetLedCount { count } => {
                self.target.led_count = StripConfig::check_led_count(count)?;
            }
            Request::SetLedPin { pin } => {
                self.target.pin = StripConfig::check_pin(pin)?;
            }
            Request::InitStrip => {
                self.session = Session::Idle;
                self.store.initialize(self.target);
            }
            Request::SetPixel { index, color } => {
                self.store.write(index, self.brightness.apply(color))?;
                self.store.commit()?;
            }
            Request::SetRange { start, end, color } => {
                self.store.fill_range(start, end, self.brightness.apply(color))?;
                self.store.commit()?;
            }
            Request::SetAll { color } => {
                self.store.fill(self.brightness.apply(color))?;
                self.store.commit()?;
            }
            Request::ClearAll => {
                self.store.clear()?;
                self.store.commit()?;
            }
            Request::BufferStart => self.session = Session::Buffering { writes: 0 },
            Request::BufferPixel { index, color } => {
                self.store.write(index, self.brightness.apply(color))?;
                self.session.advance();
            }
            Request::BufferEnd => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Buffer end ({})", self.session);
                self.session = Session::Idle;
                self.store.commit()?;
            }
            Request::StreamStart { count } => {
                self.session = Session::Streaming {
                    expected: count,
                    cursor: 0,
                };
            }
            Request::StreamData { color } => {
                let index = self.session.stream_cursor()?;
                self.store.write(index, self.brightness.apply(color))?;
                self.session.advance();
            }
            Request::StreamEnd => {
                self.session = Session::Idle;
                self.store.commit()?;
            }
            Request::BulkUpdate { count } => return self.bulk_update(count),
            Request::Sync => self.store.commit()?,
            Request::FillGradient {
                start,
                end,
                from,
                to,
            } => {
                self.store
                    .fill_gradient(start, end, from, to, self.brightness)?;
                self.store.commit()?;
            }
            Request::SetBrightness { value } => self.brightness = Brightness::new(value),
        }

        Ok(Response::Ok)
    }

    /// Acknowledge, then take `count` pixels from index 0 onwards
    ///
    /// Each pixel gets its own deadline. The frame is committed only after
    /// the last pixel arrives.
    fn bulk_update(&mut self, count: u16) -> Result<Response, Fault<PortError<P>>> {
        if count > self.store.led_count() {
            return Err(ErrorCode::OutOfRange.into());
        }
        self.reply(Response::Ok).map_err(Fault::Transport)?;

        for index in 0..count {
            let mut quad = [0u8; 4];
            let deadline = self.clock.deadline_after(self.config.bulk_pixel_timeout_ms);
            wait::read_exact(&mut self.port, &self.clock, &mut quad, deadline).inspect_err(|_| {
                #[cfg(feature = "defmt")]
                defmt::warn!("Bulk update stalled at pixel {} of {}", index, count);
            })?;
            self.store
                .write(index, self.brightness.apply(Rgbw::from_bytes(quad)))?;
        }

        self.store.commit()?;
        Ok(Response::Ok)
    }

    pub(super) fn info(&self) -> DeviceInfo {
        DeviceInfo {
            protocol_version: PROTOCOL_VERSION,
            led_count: self.target.led_count,
            pin: self.target.pin,
            initialized: self.store.is_initialized(),
            brightness: self.brightness.level(),
        }
    }
}
