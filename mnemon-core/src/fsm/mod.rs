//! The four cooperatively scheduled state machines
//!
//! Each machine owns its enum state (and cursor, where it has one) and
//! exposes a `tick` function taking the shared [`GameContext`] plus the
//! devices it drives. The scheduler calls them once per tick in a fixed
//! order; see [`crate::scheduler`].
//!
//! Every tick function follows the same two-phase shape: compute the next
//! state from the current state and inputs, commit it, then perform the
//! new state's actions. Several timing contracts (one symbol visible per
//! tick, success flags raised on the entry tick) depend on that shape.
//!
//! [`GameContext`]: crate::context::GameContext

pub mod continue_button;
pub mod display;
pub mod input;
pub mod playback;

pub use continue_button::ContinueButtonFsm;
pub use display::DisplayFsm;
pub use input::InputFsm;
pub use playback::PlaybackFsm;
