//! Multi-command update sessions

use dreamscaler_protocol::{Command, ErrorCode};

/// Update mode spanning several commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Session {
    /// No session; every write command stands alone
    #[default]
    Idle,
    /// Between `BUFFER_START` and `BUFFER_END`; commits are deferred
    Buffering {
        /// Pixels written so far
        writes: u16,
    },
    /// Between `STREAM_START` and `STREAM_END`
    Streaming {
        /// Pixel count announced by the host
        expected: u16,
        /// Index the next `STREAM_DATA` writes to
        cursor: u16,
    },
}

impl Session {
    pub fn is_streaming(&self) -> bool {
        matches!(self, Session::Streaming { .. })
    }

    /// Returns true if `command` may run without ending this session
    ///
    /// A stream tolerates only its own commands and status queries.
    /// Buffering tolerates anything.
    pub fn admits(&self, command: Command) -> bool {
        !self.is_streaming() || command.is_stream() || command.is_query()
    }

    /// Index for the next streamed pixel
    pub fn stream_cursor(&self) -> Result<u16, ErrorCode> {
        match *self {
            Session::Streaming { expected, cursor } if cursor < expected => Ok(cursor),
            Session::Streaming { .. } => Err(ErrorCode::OutOfRange),
            _ => Err(ErrorCode::InvalidParam),
        }
    }

    /// Record one pixel written within the session
    pub fn advance(&mut self) {
        match self {
            Session::Buffering { writes } => *writes = writes.saturating_add(1),
            Session::Streaming { cursor, .. } => *cursor = cursor.saturating_add(1),
            Session::Idle => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_admits_only_its_own_commands() {
        let session = Session::Streaming {
            expected: 3,
            cursor: 0,
        };
        assert!(session.admits(Command::StreamData));
        assert!(session.admits(Command::StreamEnd));
        assert!(session.admits(Command::Ping));
        assert!(session.admits(Command::GetInfo));
        assert!(!session.admits(Command::SetPixelRgbw));
        assert!(!session.admits(Command::StreamStart));
        assert!(!session.admits(Command::Sync));
    }

    #[test]
    fn test_idle_and_buffering_admit_everything() {
        for command in Command::ALL {
            assert!(Session::Idle.admits(command));
            assert!(Session::Buffering { writes: 2 }.admits(command));
        }
    }

    #[test]
    fn test_stream_cursor_runs_out() {
        let mut session = Session::Streaming {
            expected: 2,
            cursor: 0,
        };
        assert_eq!(session.stream_cursor(), Ok(0));
        session.advance();
        assert_eq!(session.stream_cursor(), Ok(1));
        session.advance();
        assert_eq!(session.stream_cursor(), Err(ErrorCode::OutOfRange));
    }

    #[test]
    fn test_stream_cursor_outside_stream() {
        assert_eq!(Session::Idle.stream_cursor(), Err(ErrorCode::InvalidParam));
        assert_eq!(
            Session::Buffering { writes: 0 }.stream_cursor(),
            Err(ErrorCode::InvalidParam)
        );
    }

    #[test]
    fn test_advance_counts_buffered_writes() {
        let mut session = Session::Buffering { writes: 0 };
        session.advance();
        session.advance();
        assert_eq!(session, Session::Buffering { writes: 2 });

        let mut idle = Session::Idle;
        idle.advance();
        assert_eq!(idle, Session::Idle);
    }
}
