//! Bounded waits for payload bytes
//!
//! The receiver is polled against a deadline instead of blocking on a read,
//! so a host that stops mid-command costs at most one timeout.

use dreamscaler_hal::{Monotonic, UartRx};

/// Errors that can occur while waiting for bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaitError<E> {
    /// Deadline passed before enough bytes arrived
    Timeout,
    /// Receiver failed
    Transport(E),
}

/// Spin until `needed` bytes are buffered or `deadline` passes
pub fn wait_for<R, C>(
    rx: &mut R,
    clock: &C,
    needed: usize,
    deadline: u64,
) -> Result<(), WaitError<R::Error>>
where
    R: UartRx + ?Sized,
    C: Monotonic + ?Sized,
{
    loop {
        if rx.bytes_available().map_err(WaitError::Transport)? >= needed {
            return Ok(());
        }
        if clock.expired(deadline) {
            return Err(WaitError::Timeout);
        }
        core::hint::spin_loop();
    }
}

/// Fill `buf` completely before `deadline`
///
/// On timeout the bytes that did arrive are read and dropped, so they are
/// not mistaken for the next command.
pub fn read_exact<R, C>(
    rx: &mut R,
    clock: &C,
    buf: &mut [u8],
    deadline: u64,
) -> Result<(), WaitError<R::Error>>
where
    R: UartRx + ?Sized,
    C: Monotonic + ?Sized,
{
    if buf.is_empty() {
        return Ok(());
    }

    match wait_for(rx, clock, buf.len(), deadline) {
        Ok(()) => {}
        Err(WaitError::Timeout) => {
            rx.read_available(buf).map_err(WaitError::Transport)?;
            return Err(WaitError::Timeout);
        }
        Err(err) => return Err(err),
    }

    let read = rx.read_available(buf).map_err(WaitError::Transport)?;
    if read < buf.len() {
        return Err(WaitError::Timeout);
    }
    Ok(())
}
