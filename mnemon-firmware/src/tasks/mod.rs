//! Embassy async tasks
//!
//! The game itself runs in the main task; the only other task is the
//! periodic tick producer.

pub mod tick;

pub use tick::{tick_task, wait_tick, TICK_INTERVAL_MS};
