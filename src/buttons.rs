//! GPIO button input with async debouncing.
//!
//! Four buttons (active-low with internal pull-up), one task each. The
//! tasks run on the interrupt-priority executor, so a press preempts the
//! blocking sequencer loop the same way a GPIO ISR would.

use defmt::{debug, info};
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::Delay;
use halfstep::config::BUTTON_DEBOUNCE_MS;
use halfstep::{watch_press, ButtonHandler, ButtonLine};

/// Registered receiver of button presses.
pub type Handler = &'static (dyn ButtonHandler + Sync);

/// Watch one button line forever, delivering each debounced press to
/// `handler`.
#[embassy_executor::task(pool_size = 4)]
pub async fn button_task(pin: AnyPin, line: ButtonLine, handler: Handler) -> ! {
    let mut btn = Input::new(pin, Pull::Up);
    let mut delay = Delay;

    loop {
        match watch_press(&mut btn, &mut delay, line, handler, BUTTON_DEBOUNCE_MS).await {
            Ok(true) => info!("Button: {} ({=u8:#x})", line, line.mask()),
            Ok(false) => debug!("Button: {} bounce ignored", line),
            Err(never) => match never {},
        }
    }
}
