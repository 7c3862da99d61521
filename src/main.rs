//! halfstep firmware entry point.
//!
//! Thread mode runs the blocking half-step sequencer forever. Button tasks
//! live on an interrupt executor (EGU1_SWI1) so they preempt it.

#![no_std]
#![no_main]

mod board;
mod buttons;
mod error;

use cortex_m_rt::entry;
use defmt::{info, unwrap};
use embassy_executor::{InterruptExecutor, SendSpawner};
use embassy_nrf::gpio::AnyPin;
use embassy_nrf::interrupt;
use embassy_nrf::interrupt::{InterruptExt, Priority};
use embassy_time::Delay;
use halfstep::{ButtonLine, MotorState, Sequencer, SequencerConfig};
use {defmt_rtt as _, panic_probe as _};

use crate::error::Error;

/// Shared between the button tasks (writers) and the sequencer (reader).
static MOTOR: MotorState = MotorState::new();

static BUTTON_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn EGU1_SWI1() {
    BUTTON_EXECUTOR.on_interrupt()
}

#[entry]
fn main() -> ! {
    let mut config = embassy_nrf::config::Config::default();
    config.gpiote_interrupt_priority = Priority::P2;
    config.time_interrupt_priority = Priority::P2;
    let p = embassy_nrf::init(config);
    info!("halfstep starting");

    let board = board::Board::new(p);
    let _aux = board.aux;

    interrupt::EGU1_SWI1.set_priority(Priority::P6);
    let spawner = BUTTON_EXECUTOR.start(interrupt::EGU1_SWI1);
    unwrap!(spawn_buttons(spawner, board.buttons));

    let config = SequencerConfig::DEFAULT;
    info!("Sequencer: {}", config);
    let mut sequencer = Sequencer::new(board.coils, Delay, config);
    sequencer.run_forever(&MOTOR)
}

fn spawn_buttons(spawner: SendSpawner, lines: [(ButtonLine, AnyPin); 4]) -> Result<(), Error> {
    for (line, pin) in lines {
        spawner
            .spawn(buttons::button_task(pin, line, &MOTOR))
            .map_err(Error::spawn(line))?;
    }
    Ok(())
}
