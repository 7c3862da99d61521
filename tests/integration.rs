//! Integration tests for halfstep host-testable logic.
//!
//! The "interrupt" is simulated by a delay that fires button events after a
//! given number of hold periods, so presses land in the middle of a burst.

use core::cell::{Cell, RefCell};
use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use halfstep::config::{BUTTON0_MASK, BUTTON1_MASK, BUTTON2_MASK, BUTTON3_MASK};
use halfstep::{
    ButtonHandler, CoilPins, Cycle, Direction, MotorState, Sequencer, SequencerConfig, HALF_STEP,
};
use heapless::Vec;

/// Shared view of the four coil lines plus a log of every full pattern
/// present after each coil write.
#[derive(Default)]
struct Driver {
    levels: [Cell<bool>; 4],
    frames: RefCell<Vec<u8, 128>>,
}

impl Driver {
    fn bits(&self) -> u8 {
        self.levels
            .iter()
            .enumerate()
            .fold(0, |acc, (i, l)| acc | (u8::from(l.get()) << i))
    }

    fn frames(&self) -> Vec<u8, 128> {
        self.frames.borrow().clone()
    }
}

struct MockPin<'a> {
    driver: &'a Driver,
    line: usize,
}

impl ErrorType for MockPin<'_> {
    type Error = Infallible;
}

impl OutputPin for MockPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.driver.levels[self.line].set(false);
        self.frame();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.driver.levels[self.line].set(true);
        self.frame();
        Ok(())
    }
}

impl MockPin<'_> {
    /// IN4 is written last, so a frame is complete once it has been set.
    fn frame(&self) {
        if self.line == 3 {
            self.driver.frames.borrow_mut().push(self.driver.bits()).unwrap();
        }
    }
}

fn coils(driver: &Driver) -> CoilPins<MockPin<'_>> {
    CoilPins::new(core::array::from_fn(|line| MockPin { driver, line }))
}

/// Blocking delay that delivers `mask` to `state` when the `fire_at`-th hold
/// period (1-based) elapses.
struct InterruptingDelay<'a> {
    state: &'a MotorState,
    holds: u32,
    fire_at: u32,
    mask: u8,
}

impl<'a> InterruptingDelay<'a> {
    fn new(state: &'a MotorState, fire_at: u32, mask: u8) -> Self {
        Self {
            state,
            holds: 0,
            fire_at,
            mask,
        }
    }
}

impl DelayNs for InterruptingDelay<'_> {
    fn delay_ns(&mut self, _ns: u32) {
        self.holds += 1;
        if self.holds == self.fire_at {
            self.state.on_button_event(self.mask);
        }
    }
}

fn config(burst_steps: u32) -> SequencerConfig {
    SequencerConfig {
        burst_steps,
        ..SequencerConfig::DEFAULT
    }
}

#[test]
fn start_button_spins_motor_through_sequence() {
    let state = MotorState::new();
    let driver = Driver::default();
    let delay = InterruptingDelay::new(&state, 0, 0);
    let mut seq = Sequencer::new(coils(&driver), delay, config(16));

    assert_eq!(seq.run_once(&state), Cycle::Idle);
    state.on_button_event(BUTTON0_MASK);
    assert_eq!(seq.run_once(&state), Cycle::Burst { steps: 16, completed: true });

    let frames = driver.frames();
    // Construction and the idle poll both leave the coils off.
    assert_eq!(&frames[..2], &[0, 0]);
    let expected: Vec<u8, 16> = HALF_STEP
        .iter()
        .chain(HALF_STEP.iter())
        .map(|p| p.bits())
        .collect();
    assert_eq!(&frames[2..], expected.as_slice());
    assert_eq!(seq.step_index().get(), 0);
}

#[test]
fn stop_mid_burst_zeroes_coils_within_one_step() {
    let state = MotorState::new();
    state.on_button_event(BUTTON0_MASK);
    let driver = Driver::default();
    // Stop arrives during the hold of the 5th step.
    let delay = InterruptingDelay::new(&state, 5, BUTTON1_MASK);
    let mut seq = Sequencer::new(coils(&driver), delay, config(4100));

    assert_eq!(seq.run_once(&state), Cycle::Burst { steps: 5, completed: false });
    // Nothing new is written until the outer loop sees the stop.
    assert_eq!(driver.bits(), HALF_STEP[4].bits());

    assert_eq!(seq.run_once(&state), Cycle::Idle);
    let frames = driver.frames();
    assert_eq!(frames.last(), Some(&0));
    assert_eq!(frames.len(), 1 + 5 + 1);
    assert!(!state.is_enabled());
    assert_eq!(seq.step_index().get(), 5);
}

#[test]
fn direction_toggle_mid_burst_reverses_without_skipping() {
    let state = MotorState::new();
    state.on_button_event(BUTTON0_MASK);
    let driver = Driver::default();
    // Toggle during the hold of the 3rd step (index 2).
    let delay = InterruptingDelay::new(&state, 3, BUTTON2_MASK);
    let mut seq = Sequencer::new(coils(&driver), delay, config(6));

    seq.run_once(&state);

    assert_eq!(state.direction(), Direction::CounterClockwise);
    let frames = driver.frames();
    // 0x01 0x03 0x02 then back through 0x03 0x01 0x09.
    assert_eq!(&frames[1..], &[0x01, 0x03, 0x02, 0x03, 0x01, 0x09]);
    for pair in frames[1..].windows(2) {
        assert_eq!((pair[0] ^ pair[1]).count_ones(), 1);
    }
    assert_eq!(seq.step_index().get(), 6);
}

#[test]
fn unknown_and_reserved_presses_do_not_disturb_rotation() {
    let state = MotorState::new();
    state.on_button_event(BUTTON0_MASK);
    let driver = Driver::default();
    let delay = InterruptingDelay::new(&state, 2, 0x99);
    let mut seq = Sequencer::new(coils(&driver), delay, config(8));

    assert_eq!(seq.run_once(&state), Cycle::Burst { steps: 8, completed: true });
    state.on_button_event(BUTTON3_MASK);
    assert!(state.is_enabled());
    assert_eq!(state.direction(), Direction::Clockwise);
    assert_eq!(seq.run_once(&state), Cycle::Burst { steps: 8, completed: true });
    assert_eq!(driver.frames().len(), 1 + 16);
}

#[test]
fn closure_handler_sees_raw_masks() {
    let seen: RefCell<Vec<u8, 8>> = RefCell::new(Vec::new());
    let handler = |mask: u8| seen.borrow_mut().push(mask).unwrap();
    let registered: &dyn ButtonHandler = &handler;

    for mask in [BUTTON0_MASK, 0x99, BUTTON2_MASK] {
        registered.on_button_event(mask);
    }
    assert_eq!(seen.borrow().as_slice(), &[0x04, 0x99, 0x10]);
}
