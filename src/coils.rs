//! Coil output - the four driver inputs of the ULN2003 board.

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};

use crate::pattern::CoilPattern;

/// Something that can present a 4-bit coil pattern on the driver inputs.
///
/// Only the four coil lines may change; any other output shares nothing with
/// a `CoilPort`.
pub trait CoilPort {
    fn write(&mut self, pattern: CoilPattern);
}

/// Four GPIO outputs, IN1..IN4 in order. Bit `n` of a pattern drives `pins[n]`.
///
/// The pins must be infallible so a coil write cannot fail.
pub struct CoilPins<P> {
    pins: [P; 4],
}

impl<P> CoilPins<P>
where
    P: OutputPin<Error = Infallible>,
{
    /// Take ownership of the pins and de-energise all coils.
    pub fn new(pins: [P; 4]) -> Self {
        let mut coils = Self { pins };
        coils.write(CoilPattern::OFF);
        coils
    }

    /// Give the pins back.
    pub fn release(self) -> [P; 4] {
        self.pins
    }
}

impl<P> CoilPort for CoilPins<P>
where
    P: OutputPin<Error = Infallible>,
{
    fn write(&mut self, pattern: CoilPattern) {
        for (coil, pin) in self.pins.iter_mut().enumerate() {
            let state = PinState::from(pattern.is_energized(coil));
            pin.set_state(state).unwrap_or_else(|never| match never {});
        }
    }
}
