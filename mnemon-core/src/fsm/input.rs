//! Input recognition state machine
//!
//! Decodes the player's button presses and judges them against the target
//! sequence. Decoding is fail-safe: anything that is not one of the four
//! recognized one-hot patterns (no press, chords, glitches) counts as "no
//! press". A press is only accepted after the previous press was released,
//! enforced by the `WaitForZero` state.

use crate::context::GameContext;
use crate::sequence::{Symbol, FINAL_ROUND};

/// Decode a raw 4-bit button pattern to a symbol.
///
/// Exactly the four one-hot patterns map to a symbol; everything else,
/// including multiple simultaneous presses, is `None`.
pub fn decode_buttons(raw: u8) -> Option<Symbol> {
    match raw & 0x0F {
        0b0001 => Some(Symbol::One),
        0b0010 => Some(Symbol::Two),
        0b0100 => Some(Symbol::Three),
        0b1000 => Some(Symbol::Four),
        _ => None,
    }
}

/// Machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    /// Reset the input cursor.
    Init,
    /// Idle until playback opens the floor (`allow_input`).
    WaitForSequence,
    /// Judging the next press against the expected symbol.
    GetInput,
    /// Press accepted; require release before the next one.
    WaitForZero,
    /// Whole round entered correctly.
    Success,
    /// Wrong symbol pressed; the game is over.
    Fail,
}

/// Judges player input against the target sequence, round by round.
#[derive(Debug)]
pub struct InputFsm {
    state: State,
    /// Cursor into the target sequence, reset whenever recognition
    /// restarts after a success or failure.
    index: u8,
}

impl InputFsm {
    pub fn new() -> Self {
        Self {
            state: State::Init,
            index: 0,
        }
    }

    /// Advance one tick. `raw` is this tick's sampled button pattern.
    ///
    /// On round completion raises `next_round_ready` and clears
    /// `allow_input`; additionally raises `new_game_requested` on any
    /// failure, and `new_game_requested` + `player_won` when the final
    /// round is cleared.
    pub fn tick(&mut self, ctx: &mut GameContext, raw: u8) {
        let pressed = decode_buttons(raw);

        self.state = match self.state {
            State::Init => {
                self.index = 0;
                State::WaitForSequence
            }
            State::WaitForSequence => {
                if ctx.allow_input {
                    State::GetInput
                } else {
                    State::WaitForSequence
                }
            }
            State::GetInput => match pressed {
                None => State::GetInput,
                Some(symbol) => {
                    if ctx.sequence.symbol_at(self.index) == Some(symbol) {
                        if self.index < ctx.round {
                            self.index += 1;
                            State::WaitForZero
                        } else {
                            // Last symbol of the round
                            State::Success
                        }
                    } else {
                        State::Fail
                    }
                }
            },
            State::WaitForZero => {
                if pressed.is_none() {
                    State::GetInput
                } else {
                    State::WaitForZero
                }
            }
            State::Success | State::Fail => State::Init,
        };

        // Verdict flags are raised on the tick the verdict state is
        // entered; the state itself is left again on the next tick.
        match self.state {
            State::Success => {
                ctx.allow_input = false;
                ctx.next_round_ready = true;
                if ctx.round == FINAL_ROUND {
                    ctx.new_game_requested = true;
                    ctx.player_won = true;
                }
            }
            State::Fail => {
                ctx.allow_input = false;
                ctx.next_round_ready = true;
                ctx.new_game_requested = true;
            }
            _ => {}
        }
    }
}

impl Default for InputFsm {
    fn default() -> Self {
        Self::new()
    }
}
