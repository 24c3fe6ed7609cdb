//! Shared game state
//!
//! The coordination substrate between the four state machines: a handful of
//! boolean flags plus the round counter and the target sequence. The context
//! is passed by mutable reference to each machine's tick function in the
//! scheduler's fixed order, so a flag written by an earlier machine is seen
//! by later machines in the same tick, and by earlier machines on the next.
//!
//! Writer discipline (at most one machine writes a given flag per tick):
//!
//! | field                | writer(s)                                    |
//! |----------------------|----------------------------------------------|
//! | `continue_pulse`     | continue button                              |
//! | `next_round_ready`   | input recognition (set), playback (clear)    |
//! | `new_game_requested` | input recognition (set), playback (clear)    |
//! | `player_won`         | input recognition (set), playback (clear)    |
//! | `allow_input`        | playback (set), input recognition (clear)    |
//! | `round`, `sequence`  | playback                                     |
//!
//! The display machine is a pure consumer and writes nothing.

use crate::sequence::{SymbolSource, TargetSequence};

/// Shared flags and counters coordinating the four state machines.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameContext {
    /// One-tick pulse: the continue button was pressed.
    pub continue_pulse: bool,
    /// The current round ended (in success or failure).
    pub next_round_ready: bool,
    /// The game ended; the next continue press starts a fresh game.
    pub new_game_requested: bool,
    /// The player cleared the final round.
    pub player_won: bool,
    /// Playback finished; input recognition may consume button presses.
    pub allow_input: bool,
    /// Highest round reached in the current game, 0 through 8.
    pub round: u8,
    /// The sequence the player must recall, regenerated at game start.
    pub sequence: TargetSequence,
}

impl GameContext {
    /// Create a context with all flags cleared and no sequence yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset everything for a fresh game and draw a new target sequence.
    ///
    /// Called by the playback machine's `Init` state, so from the
    /// scheduler's point of view the whole reset lands within one tick.
    pub fn start_game<S: SymbolSource>(&mut self, source: &mut S) {
        // continue_pulse is deliberately left alone: the continue button
        // machine is its sole writer and re-asserts it every tick anyway.
        self.next_round_ready = false;
        self.new_game_requested = false;
        self.player_won = false;
        self.allow_input = false;
        self.round = 0;
        self.sequence.regenerate(source);
    }
}
