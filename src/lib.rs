//! Library interface for halfstep.
//!
//! Holds everything that does not touch the nRF52840 directly: the half-step
//! sequence, shared motor state, button dispatch, the debounced input
//! watcher and the sequencer loop. All of it is generic over `embedded-hal`
//! traits and can be tested on the host.
//!
//! Usage: `cargo test --lib` or `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! It wires these modules to GPIOTE buttons and GPIO coil outputs.

#![cfg_attr(not(test), no_std)]

pub mod coils;
pub mod config;
pub mod dispatch;
pub mod input;
pub mod pattern;
pub mod sequencer;
pub mod state;

pub use coils::{CoilPins, CoilPort};
pub use config::SequencerConfig;
pub use dispatch::ButtonHandler;
pub use input::{watch_press, ButtonLine};
pub use pattern::{CoilPattern, StepIndex, HALF_STEP};
pub use sequencer::{Cycle, Sequencer};
pub use state::{Direction, MotorMode, MotorState};
