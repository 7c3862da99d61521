//! Board wiring - the nRF52840-DK pin map from `config.rs`.
//!
//! Mirrors the stepper bring-up: coil lines become push-pull outputs
//! starting low, the two auxiliary lines are driven high once and left
//! alone, and the button lines are handed out for the input tasks.

use defmt::info;
use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive, Pin as _};
use embassy_nrf::Peripherals;
use halfstep::{ButtonLine, CoilPins};

/// Coil driver on four GPIO outputs.
pub type Coils = CoilPins<Output<'static>>;

pub struct Board {
    /// ULN2003 IN1..IN4.
    pub coils: Coils,
    /// Button lines in `ButtonLine::ALL` order.
    pub buttons: [(ButtonLine, AnyPin); 4],
    /// Held so the lines stay driven; dropping an `Output` disconnects it.
    pub aux: [Output<'static>; 2],
}

impl Board {
    pub fn new(p: Peripherals) -> Self {
        let coil = |pin: AnyPin| Output::new(pin, Level::Low, OutputDrive::Standard);
        let coils = CoilPins::new([
            coil(p.P0_03.degrade()),
            coil(p.P0_04.degrade()),
            coil(p.P0_28.degrade()),
            coil(p.P0_29.degrade()),
        ]);

        let aux = [
            Output::new(p.P0_13.degrade(), Level::High, OutputDrive::Standard),
            Output::new(p.P0_14.degrade(), Level::High, OutputDrive::Standard),
        ];

        let [b0, b1, b2, b3] = ButtonLine::ALL;
        let buttons = [
            (b0, p.P0_11.degrade()),
            (b1, p.P0_12.degrade()),
            (b2, p.P0_24.degrade()),
            (b3, p.P0_25.degrade()),
        ];

        info!("Board: coils P0.03/04/28/29, buttons P0.11/12/24/25, aux P0.13/14 high");

        Self { coils, buttons, aux }
    }
}
