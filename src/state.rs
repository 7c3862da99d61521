//! Motor state shared between the button handler and the sequencer loop.
//!
//! The handler (interrupt priority) is the only writer of both fields and
//! the sequencer (thread mode) only reads them, so plain relaxed loads and
//! stores are enough. A stale read costs at most one step period.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Rotation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Direction {
    Clockwise = 0,
    CounterClockwise = 1,
}

impl Direction {
    /// `(direction + 1) mod 2`.
    pub const fn toggled(self) -> Self {
        Self::from_bits(self as u8 + 1)
    }

    const fn from_bits(bits: u8) -> Self {
        match bits % 2 {
            0 => Direction::Clockwise,
            _ => Direction::CounterClockwise,
        }
    }
}

/// Sequencer macro-state, derived from `enabled`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorMode {
    /// Coils off, polling for enable.
    Stopped,
    /// Actively stepping.
    Running,
}

/// Shared `enabled` / `direction` flags.
///
/// Meant to live in a `static` for the whole process:
///
/// ```
/// use halfstep::state::MotorState;
/// static MOTOR: MotorState = MotorState::new();
/// assert!(!MOTOR.is_enabled());
/// ```
#[derive(Debug)]
pub struct MotorState {
    enabled: AtomicBool,
    direction: AtomicU8,
}

impl MotorState {
    /// Stopped, clockwise.
    pub const fn new() -> Self {
        Self {
            enabled: AtomicBool::new(false),
            direction: AtomicU8::new(Direction::Clockwise as u8),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn direction(&self) -> Direction {
        Direction::from_bits(self.direction.load(Ordering::Relaxed))
    }

    pub fn set_direction(&self, direction: Direction) {
        self.direction.store(direction as u8, Ordering::Relaxed);
    }

    /// Flip the direction. Load then store: only the handler writes.
    pub fn toggle_direction(&self) {
        self.set_direction(self.direction().toggled());
    }

    pub fn mode(&self) -> MotorMode {
        if self.is_enabled() {
            MotorMode::Running
        } else {
            MotorMode::Stopped
        }
    }
}

impl Default for MotorState {
    fn default() -> Self {
        Self::new()
    }
}
