//! Hardware abstraction traits
//!
//! These traits define the interface between the game logic and
//! hardware-specific implementations. Per the device contracts, all
//! operations are synchronous register-style accesses that complete
//! within a tick and cannot fail, so none of them return a `Result`.

pub mod buttons;
pub mod display;
pub mod indicators;
pub mod timer;

pub use buttons::InputDevice;
pub use display::TextDisplay;
pub use indicators::IndicatorPanel;
pub use timer::TickSource;
