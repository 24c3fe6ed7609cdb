//! Board-agnostic core logic for the Mnemon memory game
//!
//! This crate contains all game logic that does not depend on specific
//! hardware implementations:
//!
//! - Hardware abstraction traits (indicator panel, buttons, text display, tick source)
//! - The four cooperatively scheduled state machines (display, continue
//!   button, sequence playback, input recognition)
//! - The shared game context coordinating them
//! - Target sequence generation
//! - The fixed-order tick scheduler
//!
//! # Scheduling model
//!
//! All game logic runs single-threaded. Once per timer tick the scheduler
//! runs the four state machines in a fixed order: display, continue button,
//! sequence playback, input recognition. A flag written by an earlier
//! machine is visible to later machines in the same tick; a flag written by
//! a later machine reaches earlier machines only on the next tick. That
//! one-tick propagation delay is part of the game's behavioral contract.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod context;
pub mod fsm;
pub mod scheduler;
pub mod sequence;
pub mod traits;

pub use context::GameContext;
pub use scheduler::Game;
pub use sequence::{Symbol, SymbolSource, TargetSequence, FINAL_ROUND, SEQUENCE_LEN};
