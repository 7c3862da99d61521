//! Button dispatch - turns a raw button mask into `MotorState` changes.
//!
//! Runs in interrupt context: no blocking, no allocation, no logging.

use crate::input::ButtonLine;
use crate::state::MotorState;

/// Receiver of debounced button presses.
///
/// The input source calls this with the single-bit mask of the line that
/// was pressed. Implementations must return quickly.
pub trait ButtonHandler {
    fn on_button_event(&self, mask: u8);
}

impl ButtonHandler for MotorState {
    fn on_button_event(&self, mask: u8) {
        match ButtonLine::from_mask(mask) {
            Some(ButtonLine::Button0) => self.set_enabled(true),
            Some(ButtonLine::Button1) => self.set_enabled(false),
            Some(ButtonLine::Button2) => self.toggle_direction(),
            // Reserved line and unknown masks leave the state alone.
            Some(ButtonLine::Button3) | None => {}
        }
    }
}

impl<F> ButtonHandler for F
where
    F: Fn(u8),
{
    fn on_button_event(&self, mask: u8) {
        self(mask)
    }
}
