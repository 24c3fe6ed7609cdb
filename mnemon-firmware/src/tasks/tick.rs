//! Tick producer task
//!
//! Delivers the fixed time quantum the game logic runs on. The producer
//! does nothing but raise a flag - it never touches game state - and the
//! game loop consumes exactly one notification per iteration, so the two
//! sides only share the single atomic.

use defmt::*;
use embassy_futures::yield_now;
use embassy_time::{Duration, Ticker};
use portable_atomic::{AtomicBool, Ordering};

/// Tick interval in milliseconds (one game tick per interval)
pub const TICK_INTERVAL_MS: u32 = 200;

/// Set by the producer, cleared by the game loop
static TICK_ELAPSED: AtomicBool = AtomicBool::new(false);

/// Tick task - raises the elapsed flag once per interval
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));

    loop {
        ticker.next().await;
        TICK_ELAPSED.store(true, Ordering::Release);
    }
}

/// Block the game loop until the next tick, consuming the notification.
///
/// Yields to the executor while waiting so the producer can run.
pub async fn wait_tick() {
    while !TICK_ELAPSED.swap(false, Ordering::AcqRel) {
        yield_now().await;
    }
}
