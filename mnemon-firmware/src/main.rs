//! Mnemon - Simon-style memory game firmware
//!
//! Main firmware binary for RP2040-based boards. Four indicator LEDs play
//! back a growing symbol sequence, four buttons take the player's answer,
//! a 16x2 character LCD shows the score, and one continue button starts
//! games. All game logic lives in `mnemon-core` and runs one scheduler
//! tick per timer notification; this binary is device glue.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::clocks::RoscRng;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_core::RngCore;
use {defmt_rtt as _, panic_probe as _};

use mnemon_core::scheduler::Game;

mod devices;
mod lcd;
mod tasks;

use devices::{ButtonPad, LedPanel};
use lcd::Hd44780;
use tasks::{tick_task, wait_tick, TICK_INTERVAL_MS};

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Mnemon firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Indicator LEDs, one per symbol
    let mut panel = LedPanel::new([
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
    ]);

    // Game buttons and the continue button, active-low with pull-ups
    let buttons = ButtonPad::new(
        [
            Input::new(p.PIN_6, Pull::Up),
            Input::new(p.PIN_7, Pull::Up),
            Input::new(p.PIN_8, Pull::Up),
            Input::new(p.PIN_9, Pull::Up),
        ],
        Input::new(p.PIN_10, Pull::Up),
    );

    // 16x2 character LCD on a 4-bit bus: RS, EN, D4-D7
    let mut display = Hd44780::new(
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
        [
            Output::new(p.PIN_13, Level::Low),
            Output::new(p.PIN_14, Level::Low),
            Output::new(p.PIN_15, Level::Low),
            Output::new(p.PIN_16, Level::Low),
        ],
    );
    display.init();
    info!("Devices initialized");

    // Hardware-seeded generator; each game draws a fresh target sequence
    let rng = SmallRng::seed_from_u64(RoscRng.next_u64());
    let mut game = Game::new(rng);

    spawner.must_spawn(tick_task());
    info!("Game loop running, {} ms per tick", TICK_INTERVAL_MS);

    loop {
        game.tick(&mut panel, &buttons, &mut display);
        wait_tick().await;
    }
}
