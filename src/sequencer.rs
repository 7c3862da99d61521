//! Motor sequencer - the firmware's main control loop.
//!
//! Two macro-states, driven only by [`MotorState::is_enabled`]:
//!
//! - **Stopped**: coils off, re-check after `idle_poll_us`.
//! - **Running**: bursts of up to `burst_steps` half-steps. Every step
//!   re-checks `enabled`, writes the current pattern, holds for
//!   `step_hold_us` and moves the index by the current direction.
//!
//! A completed burst simply starts over; the step index carries across.

use embedded_hal::delay::DelayNs;

use crate::coils::CoilPort;
use crate::config::SequencerConfig;
use crate::pattern::{CoilPattern, StepIndex};
use crate::state::{Direction, MotorMode, MotorState};

/// Result of one outer-loop iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cycle {
    /// Motor was disabled; coils were turned off for one poll interval.
    Idle,
    /// Motor was enabled; `steps` patterns were emitted. `completed` is false
    /// when the burst was cut short by a stop request.
    Burst { steps: u32, completed: bool },
}

/// Half-step sequencer over a coil port and a blocking delay.
pub struct Sequencer<C, D> {
    coils: C,
    delay: D,
    config: SequencerConfig,
    index: StepIndex,
    mode: MotorMode,
}

impl<C, D> Sequencer<C, D>
where
    C: CoilPort,
    D: DelayNs,
{
    /// Start at index 0, stopped.
    pub fn new(coils: C, delay: D, config: SequencerConfig) -> Self {
        Self {
            coils,
            delay,
            config,
            index: StepIndex::ZERO,
            mode: MotorMode::Stopped,
        }
    }

    /// Drive the motor until power-off.
    pub fn run_forever(&mut self, state: &MotorState) -> ! {
        loop {
            self.run_once(state);
        }
    }

    /// One pass of the outer loop: an idle poll or a stepping burst.
    pub fn run_once(&mut self, state: &MotorState) -> Cycle {
        if !state.is_enabled() {
            self.enter(MotorMode::Stopped);
            self.coils.write(CoilPattern::OFF);
            self.delay.delay_us(self.config.idle_poll_us);
            return Cycle::Idle;
        }

        self.enter(MotorMode::Running);
        let mut steps = 0;
        while steps < self.config.burst_steps {
            if !state.is_enabled() {
                return Cycle::Burst {
                    steps,
                    completed: false,
                };
            }
            self.hold_current();
            // Direction is sampled after the hold so a toggle during it
            // applies to this step's advance.
            self.advance(state.direction());
            steps += 1;
        }
        Cycle::Burst {
            steps,
            completed: true,
        }
    }

    /// Emit the current pattern, hold it, then advance toward `direction`.
    pub fn step(&mut self, direction: Direction) -> CoilPattern {
        let pattern = self.hold_current();
        self.advance(direction);
        pattern
    }

    /// Move the index one half-step without touching the coils.
    pub fn advance(&mut self, direction: Direction) {
        self.index = self.index.advance(direction);
    }

    pub fn step_index(&self) -> StepIndex {
        self.index
    }

    /// Mode seen on the last `run_once`.
    pub fn mode(&self) -> MotorMode {
        self.mode
    }

    pub fn coils(&self) -> &C {
        &self.coils
    }

    /// Tear down, returning the coil port and delay.
    pub fn release(self) -> (C, D) {
        (self.coils, self.delay)
    }

    fn hold_current(&mut self) -> CoilPattern {
        let pattern = self.index.pattern();
        self.coils.write(pattern);
        self.delay.delay_us(self.config.step_hold_us);
        pattern
    }

    fn enter(&mut self, mode: MotorMode) {
        if self.mode != mode {
            #[cfg(feature = "defmt")]
            defmt::info!("Motor: {:?} -> {:?} at step {}", self.mode, mode, self.index);
            self.mode = mode;
        }
    }
}
