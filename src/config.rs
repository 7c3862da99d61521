//! Application-wide constants and compile-time configuration.
//!
//! All pin assignments, timing parameters and button encodings live here so
//! they can be tuned in one place.

// Timing

/// Coil hold time per half-step (µs). This is the step rate; it never changes.
pub const STEP_HOLD_US: u32 = 1200;

/// Poll interval while the motor is stopped (µs).
pub const IDLE_POLL_US: u32 = 1200;

/// Steps in one uninterrupted burst before the outer loop re-enters.
/// 4100 half-steps is a little over one output-shaft revolution (4096).
pub const BURST_STEPS: u32 = 4100;

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u32 = 20;

// Button encoding
//
// Each recognised press is reported as exactly one asserted bit.

/// Start rotation.
pub const BUTTON0_MASK: u8 = 0x04;
/// Stop rotation.
pub const BUTTON1_MASK: u8 = 0x08;
/// Toggle direction.
pub const BUTTON2_MASK: u8 = 0x10;
/// Reserved.
pub const BUTTON3_MASK: u8 = 0x20;

/// Coil lines occupy the low nibble of a pattern.
pub const COIL_MASK: u8 = 0x0F;

// GPIO pin assignments (nRF52840-DK defaults)
//
// Concrete `embassy_nrf::peripherals::*` types are picked in `board.rs`.
// Adjust for your own wiring.
//
//   Coil IN1 (ULN2003)   → P0.03
//   Coil IN2             → P0.04
//   Coil IN3             → P0.28
//   Coil IN4             → P0.29
//   Button 0 (start)     → P0.11
//   Button 1 (stop)      → P0.12
//   Button 2 (direction) → P0.24
//   Button 3 (reserved)  → P0.25
//   Aux indicator lines  → P0.13, P0.14 (driven high at boot)

/// Timing parameters of the motor sequencer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequencerConfig {
    /// Hold time of each emitted pattern (µs).
    pub step_hold_us: u32,
    /// Dwell between enable checks while stopped (µs).
    pub idle_poll_us: u32,
    /// Upper bound of one stepping burst.
    pub burst_steps: u32,
}

impl SequencerConfig {
    pub const DEFAULT: Self = Self {
        step_hold_us: STEP_HOLD_US,
        idle_poll_us: IDLE_POLL_US,
        burst_steps: BURST_STEPS,
    };
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
