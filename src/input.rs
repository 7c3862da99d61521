//! Button input source - edge detection, debouncing and event delivery.
//!
//! Four active-low buttons with internal pull-ups:
//!   - Button 0 - start rotation
//!   - Button 1 - stop rotation
//!   - Button 2 - toggle direction
//!   - Button 3 - reserved
//!
//! Each line is watched by [`watch_press`], which waits for a GPIO edge,
//! debounces it and hands the line's mask to a [`ButtonHandler`].

use embedded_hal::digital::InputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;

use crate::config::{BUTTON0_MASK, BUTTON1_MASK, BUTTON2_MASK, BUTTON3_MASK};
use crate::dispatch::ButtonHandler;

/// One of the four recognised button lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonLine {
    Button0,
    Button1,
    Button2,
    Button3,
}

impl ButtonLine {
    pub const ALL: [ButtonLine; 4] = [
        ButtonLine::Button0,
        ButtonLine::Button1,
        ButtonLine::Button2,
        ButtonLine::Button3,
    ];

    /// Event mask reported for a press on this line.
    pub const fn mask(self) -> u8 {
        match self {
            ButtonLine::Button0 => BUTTON0_MASK,
            ButtonLine::Button1 => BUTTON1_MASK,
            ButtonLine::Button2 => BUTTON2_MASK,
            ButtonLine::Button3 => BUTTON3_MASK,
        }
    }

    /// Exact match only; combined or unknown masks yield `None`.
    pub const fn from_mask(mask: u8) -> Option<Self> {
        match mask {
            BUTTON0_MASK => Some(ButtonLine::Button0),
            BUTTON1_MASK => Some(ButtonLine::Button1),
            BUTTON2_MASK => Some(ButtonLine::Button2),
            BUTTON3_MASK => Some(ButtonLine::Button3),
            _ => None,
        }
    }
}

/// Watch one press cycle on an active-low button.
///
/// Waits for the falling edge, debounces and re-checks the level. A press
/// that survives the debounce interval is delivered to `handler`, then the
/// release is awaited (and debounced) so a held button fires once.
///
/// Returns `Ok(false)` when the edge turned out to be a bounce.
pub async fn watch_press<P, D, H>(
    pin: &mut P,
    delay: &mut D,
    line: ButtonLine,
    handler: &H,
    debounce_ms: u32,
) -> Result<bool, P::Error>
where
    P: Wait + InputPin,
    D: DelayNs,
    H: ButtonHandler + ?Sized,
{
    pin.wait_for_falling_edge().await?;
    delay.delay_ms(debounce_ms).await;

    if !pin.is_low()? {
        return Ok(false);
    }

    handler.on_button_event(line.mask());

    pin.wait_for_rising_edge().await?;
    delay.delay_ms(debounce_ms).await;
    Ok(true)
}
