//! Protocol engine
//!
//! Reads one command byte at a time from the serial port, waits (bounded)
//! for its fixed payload, applies it to the pixel store and answers with
//! exactly one response. `BULK_UPDATE` is the only command that answers
//! twice: once before its pixel data and once after.
//!
//! # States
//!
//! ```text
//!            ┌──────────── STREAM_END / foreign command ─────────┐
//!            ▼                                                    │
//!  ┌──────┐  STREAM_START  ┌─────────────────────────────┐        │
//!  │ Idle ├───────────────►│ Streaming(expected, cursor) ├────────┘
//!  └──┬───┘                └─────────────────────────────┘
//!     │ BUFFER_START  ┌─────────────────────┐
//!     └──────────────►│ Buffering(writes)   │── BUFFER_END ──► Idle
//!                     └─────────────────────┘
//! ```
//!
//! Waiting for a payload is not a state of its own: it happens inside a
//! single [`Engine::dispatch`] call, bounded by the configured deadline.

mod dispatch;
pub mod session;
pub mod wait;

use dreamscaler_hal::{Monotonic, UartRx, UartTx};
use dreamscaler_protocol::{Command, Response};

use crate::color::Brightness;
use crate::config::{EngineConfig, StripConfig};
use crate::store::PixelStore;
use crate::traits::LedDriver;

use self::dispatch::Fault;
pub use self::session::Session;
pub use self::wait::WaitError;

type PortError<P> = <P as UartRx>::Error;

/// Engine context: port, clock, pixel store and all protocol state
pub struct Engine<P, C, D> {
    port: P,
    clock: C,
    store: PixelStore<D>,
    brightness: Brightness,
    /// Geometry applied by the next `INIT_STRIP`
    target: StripConfig,
    session: Session,
    config: EngineConfig,
}

impl<P, C, D> Engine<P, C, D>
where
    P: UartRx + UartTx<Error = PortError<P>>,
    C: Monotonic,
    D: LedDriver,
{
    /// Create an engine with no strip initialized
    pub fn new(port: P, clock: C, driver: D, config: EngineConfig) -> Self {
        Self {
            port,
            clock,
            store: PixelStore::new(driver),
            brightness: Brightness::FULL,
            target: config.default_strip,
            session: Session::Idle,
            config,
        }
    }

    /// Power-on initialization of the default strip
    pub fn boot(&mut self) {
        if self.config.init_on_boot {
            self.store.initialize(self.target);
        }
    }

    /// Process one command if a command byte is waiting
    ///
    /// Returns the final response sent, or `None` if the port was idle.
    /// Only port failures are errors; everything else is reported to the
    /// host and returned as a response.
    pub fn poll(&mut self) -> Result<Option<Response>, PortError<P>> {
        match self.port.read_byte()? {
            Some(byte) => self.dispatch(byte).map(Some),
            None => Ok(None),
        }
    }

    /// Run the command identified by `byte` to completion
    pub fn dispatch(&mut self, byte: u8) -> Result<Response, PortError<P>> {
        let Some(command) = Command::from_byte(byte) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("Unknown command byte {=u8:#x}", byte);
            return self.reply(Response::UnknownCommand);
        };

        #[cfg(feature = "defmt")]
        defmt::trace!("Command {}", command);

        let response = match self.execute(command) {
            Ok(response) => response,
            Err(Fault::Reply(code)) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("{} failed: {}", command, code);
                Response::Error(code)
            }
            Err(Fault::Transport(err)) => return Err(err),
        };
        self.reply(response)
    }

    fn reply(&mut self, response: Response) -> Result<Response, PortError<P>> {
        self.port.write_blocking(&response.encode())?;
        self.port.flush()?;
        Ok(response)
    }

    pub fn store(&self) -> &PixelStore<D> {
        &self.store
    }

    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    pub fn session(&self) -> Session {
        self.session
    }

    /// Geometry the next `INIT_STRIP` will use
    pub fn target(&self) -> StripConfig {
        self.target
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }
}
