//! Periodic tick source abstraction
//!
//! The producer side runs in an interrupt-like context and does nothing
//! but raise a notification; it never touches game state. The consumer
//! (the scheduler run loop) blocks on `wait_elapsed` between ticks and
//! consumes exactly one notification per iteration.

/// A periodic timer delivering consumable elapsed notifications.
pub trait TickSource {
    /// Start delivering notifications every `period_ms` milliseconds.
    fn start(&mut self, period_ms: u32);

    /// Stop delivering notifications.
    fn stop(&mut self);

    /// Block until the next notification and consume it.
    ///
    /// Returns `false` if the source has stopped, which terminates the
    /// scheduler's run loop (test-friendly cancellation; real hardware
    /// sources simply never stop).
    fn wait_elapsed(&mut self) -> bool;
}
