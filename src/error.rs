//! Firmware start-up errors.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! The motor core itself has no failure modes; only wiring things up can go
//! wrong. Implements `defmt::Format` for on-target logging.

use defmt::Format;
use embassy_executor::SpawnError;

use halfstep::ButtonLine;

/// Top-level error type used by the firmware binary.
#[derive(Debug, Format)]
pub enum Error {
    /// The button task pool was exhausted.
    Spawn(ButtonLine),
}

impl Error {
    pub fn spawn(line: ButtonLine) -> impl FnOnce(SpawnError) -> Self {
        move |_| Error::Spawn(line)
    }
}
