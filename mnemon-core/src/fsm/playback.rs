//! Sequence playback state machine
//!
//! Owns target sequence generation, the round counter, and the output
//! indicators: each round it replays the first `round + 1` symbols of the
//! sequence, one tick lit and one tick blanked per symbol, then opens the
//! floor to the player by asserting `allow_input`.

use crate::context::GameContext;
use crate::sequence::SymbolSource;
use crate::traits::IndicatorPanel;

/// Machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    /// Reset all shared flags, draw a fresh sequence.
    Init,
    /// Idle until the player pulses the continue button.
    WaitForContinue,
    /// One symbol lit on the indicator panel for this tick.
    ShowSequence,
    /// Panel blanked for this tick; decides whether more symbols follow.
    Off,
    /// Playback done; player input is open.
    WaitForPlayer,
}

/// Replays the current round's subsequence on the indicator panel.
#[derive(Debug)]
pub struct PlaybackFsm {
    state: State,
    /// Cursor into the target sequence, reset at the start of every
    /// round's playback.
    index: u8,
}

impl PlaybackFsm {
    pub fn new() -> Self {
        Self {
            state: State::Init,
            index: 0,
        }
    }

    /// Advance one tick.
    ///
    /// Sole writer of the indicator panel and of `round`/`sequence`;
    /// sets `allow_input` while waiting for the player and clears
    /// `next_round_ready` when consuming a round advance.
    pub fn tick<S, P>(&mut self, ctx: &mut GameContext, source: &mut S, panel: &mut P)
    where
        S: SymbolSource,
        P: IndicatorPanel,
    {
        self.state = match self.state {
            State::Init => {
                ctx.start_game(source);
                self.index = 0;
                State::WaitForContinue
            }
            State::WaitForContinue => {
                if ctx.continue_pulse {
                    State::ShowSequence
                } else {
                    State::WaitForContinue
                }
            }
            State::ShowSequence => State::Off,
            State::Off => {
                let next = if self.index < ctx.round {
                    State::ShowSequence
                } else {
                    State::WaitForPlayer
                };
                // Incremented on both paths, matching the original machine;
                // the cursor is reset before its next use, so the round
                // length invariant is unaffected.
                self.index += 1;
                next
            }
            State::WaitForPlayer => {
                if ctx.next_round_ready && ctx.new_game_requested {
                    self.index = 0;
                    ctx.round = 0;
                    State::Init
                } else if ctx.next_round_ready {
                    self.index = 0;
                    ctx.round += 1;
                    ctx.next_round_ready = false;
                    State::ShowSequence
                } else {
                    State::WaitForPlayer
                }
            }
        };

        match self.state {
            State::ShowSequence => {
                if let Some(symbol) = ctx.sequence.symbol_at(self.index) {
                    panel.set_active(symbol.mask());
                }
            }
            State::Off => panel.set_active(0),
            State::WaitForPlayer => ctx.allow_input = true,
            State::Init | State::WaitForContinue => {}
        }
    }
}

impl Default for PlaybackFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Symbol;

    struct TestPanel {
        /// Every mask written, in order.
        writes: Vec<u8>,
    }

    impl TestPanel {
        fn new() -> Self {
            Self { writes: Vec::new() }
        }
    }

    impl IndicatorPanel for TestPanel {
        fn set_active(&mut self, mask: u8) {
            self.writes.push(mask);
        }
    }

    /// Cycles 1,2,3,4,1,2,... so sequence[i] is predictable.
    struct CyclingSource(u8);

    impl SymbolSource for CyclingSource {
        fn next_symbol(&mut self) -> Symbol {
            let s = Symbol::from_index(self.0);
            self.0 = self.0.wrapping_add(1);
            s
        }
    }

    fn ticked(fsm: &mut PlaybackFsm, ctx: &mut GameContext, panel: &mut TestPanel) {
        let mut src = CyclingSource(0);
        fsm.tick(ctx, &mut src, panel);
    }

    #[test]
    fn init_then_waits_for_continue() {
        let mut fsm = PlaybackFsm::new();
        let mut ctx = GameContext::new();
        let mut panel = TestPanel::new();

        ticked(&mut fsm, &mut ctx, &mut panel); // Init
        assert_eq!(ctx.sequence.len(), 9);
        assert_eq!(ctx.round, 0);

        for _ in 0..5 {
            ticked(&mut fsm, &mut ctx, &mut panel);
        }
        // No indicator writes while idle
        assert!(panel.writes.is_empty());
    }

    #[test]
    fn round_zero_plays_one_symbol_then_opens_input() {
        let mut fsm = PlaybackFsm::new();
        let mut ctx = GameContext::new();
        let mut panel = TestPanel::new();

        ticked(&mut fsm, &mut ctx, &mut panel); // Init
        ctx.continue_pulse = true;
        ticked(&mut fsm, &mut ctx, &mut panel); // -> ShowSequence
        ctx.continue_pulse = false;
        ticked(&mut fsm, &mut ctx, &mut panel); // -> Off
        assert_eq!(panel.writes, vec![Symbol::One.mask(), 0]);
        assert!(!ctx.allow_input);

        ticked(&mut fsm, &mut ctx, &mut panel); // -> WaitForPlayer
        assert!(ctx.allow_input);
        // allow_input re-asserted every waiting tick
        ctx.allow_input = false;
        ticked(&mut fsm, &mut ctx, &mut panel);
        assert!(ctx.allow_input);
    }

    #[test]
    fn round_advance_replays_longer_prefix() {
        let mut fsm = PlaybackFsm::new();
        let mut ctx = GameContext::new();
        let mut panel = TestPanel::new();

        ticked(&mut fsm, &mut ctx, &mut panel); // Init
        ctx.continue_pulse = true;
        ticked(&mut fsm, &mut ctx, &mut panel);
        ctx.continue_pulse = false;
        ticked(&mut fsm, &mut ctx, &mut panel);
        ticked(&mut fsm, &mut ctx, &mut panel); // WaitForPlayer

        // Input machine would raise this after a successful round
        ctx.next_round_ready = true;
        ctx.allow_input = false;
        panel.writes.clear();
        ticked(&mut fsm, &mut ctx, &mut panel); // consumes, replays
        assert_eq!(ctx.round, 1);
        assert!(!ctx.next_round_ready);

        // Round 1: two symbols, each lit one tick and blanked one tick
        for _ in 0..4 {
            ticked(&mut fsm, &mut ctx, &mut panel);
        }
        assert_eq!(
            panel.writes,
            vec![Symbol::One.mask(), 0, Symbol::Two.mask(), 0]
        );
        assert!(ctx.allow_input);
    }

    #[test]
    fn round_r_shows_r_plus_one_symbols_alternating_with_blanks() {
        for round in 0..=8u8 {
            let mut fsm = PlaybackFsm::new();
            let mut ctx = GameContext::new();
            let mut panel = TestPanel::new();

            ticked(&mut fsm, &mut ctx, &mut panel); // Init
            ctx.round = round;
            ctx.continue_pulse = true;
            ticked(&mut fsm, &mut ctx, &mut panel);
            ctx.continue_pulse = false;
            while !ctx.allow_input {
                ticked(&mut fsm, &mut ctx, &mut panel);
            }

            // 2*(round+1) writes: one lit tick and one blank tick per symbol
            assert_eq!(panel.writes.len(), 2 * (usize::from(round) + 1));
            for (i, mask) in panel.writes.iter().enumerate() {
                if i % 2 == 0 {
                    let expected = ctx.sequence.symbol_at(i as u8 / 2).map(Symbol::mask);
                    assert_eq!(Some(*mask), expected);
                } else {
                    assert_eq!(*mask, 0);
                }
            }
        }
    }

    #[test]
    fn game_over_returns_to_init_and_redraws() {
        let mut fsm = PlaybackFsm::new();
        let mut ctx = GameContext::new();
        let mut panel = TestPanel::new();

        ticked(&mut fsm, &mut ctx, &mut panel); // Init
        ctx.continue_pulse = true;
        ticked(&mut fsm, &mut ctx, &mut panel);
        ctx.continue_pulse = false;
        ticked(&mut fsm, &mut ctx, &mut panel);
        ticked(&mut fsm, &mut ctx, &mut panel); // WaitForPlayer

        ctx.next_round_ready = true;
        ctx.new_game_requested = true;
        ctx.player_won = true;
        ticked(&mut fsm, &mut ctx, &mut panel); // -> Init
        assert_eq!(ctx.round, 0);

        ticked(&mut fsm, &mut ctx, &mut panel); // Init runs: full reset
        assert!(!ctx.next_round_ready);
        assert!(!ctx.new_game_requested);
        assert!(!ctx.player_won);
        assert!(!ctx.allow_input);
    }
}
