//! Status display state machine
//!
//! Pure consumer: renders human-readable game status from the shared
//! flags and the round counter. Rendering happens only on state-entry
//! transitions, never on a steady state, so the display device is not
//! rewritten every tick.
//!
//! Because this machine runs first in the tick order, it sees flags
//! written by the other machines one tick late. The in-game score update
//! therefore renders `round + 1`: on that tick the playback machine has
//! not yet consumed `next_round_ready` and incremented the round.

use crate::context::GameContext;
use crate::traits::TextDisplay;

const WELCOME_TEXT: &str = "Welcome to SIMON  Press Start!";
const WIN_TEXT: &str = "  YOU WON     Play Again?";
const LOSE_TEXT: &str = "  YOU LOST    Play Again?";
const SCORE_TEXT: &str = "Your Score Is: ";

/// Machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    /// Power-on entry, renders the welcome screen once.
    Initial,
    /// Welcome screen up, waiting for the first continue pulse.
    Welcome,
    /// Score screen up during play.
    InGame,
    /// Win screen up, waiting for a replay pulse.
    Win,
    /// Lose screen up, waiting for a replay pulse.
    Lose,
}

/// Renders game status on the text display.
#[derive(Debug)]
pub struct DisplayFsm {
    state: State,
}

impl DisplayFsm {
    pub fn new() -> Self {
        Self {
            state: State::Initial,
        }
    }

    /// Advance one tick, rendering only when the state is entered.
    pub fn tick<D: TextDisplay>(&mut self, ctx: &GameContext, display: &mut D) {
        self.state = match self.state {
            State::Initial => {
                display.display_string(1, WELCOME_TEXT);
                State::Welcome
            }
            State::Welcome => {
                if ctx.continue_pulse {
                    render_score(display, ctx.round);
                    State::InGame
                } else {
                    State::Welcome
                }
            }
            State::InGame => {
                if ctx.player_won {
                    display.display_string(1, WIN_TEXT);
                    State::Win
                } else if ctx.new_game_requested {
                    display.display_string(1, LOSE_TEXT);
                    State::Lose
                } else if ctx.next_round_ready {
                    // Playback will increment the round later this tick
                    render_score(display, ctx.round + 1);
                    State::InGame
                } else {
                    State::InGame
                }
            }
            State::Win => {
                if ctx.continue_pulse {
                    render_score(display, ctx.round);
                    State::InGame
                } else {
                    State::Win
                }
            }
            State::Lose => {
                if ctx.continue_pulse {
                    render_score(display, ctx.round);
                    State::InGame
                } else {
                    State::Lose
                }
            }
        };
    }
}

impl Default for DisplayFsm {
    fn default() -> Self {
        Self::new()
    }
}

/// Score screen: fixed label plus a single appended digit (scores are 0-9).
fn render_score<D: TextDisplay>(display: &mut D, score: u8) {
    display.display_string(1, SCORE_TEXT);
    display.write_char((b'0' + score) as char);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestDisplay {
        /// One entry per display_string call, with appended chars folded in.
        screens: Vec<String>,
    }

    impl TextDisplay for TestDisplay {
        fn display_string(&mut self, _position: u8, text: &str) {
            self.screens.push(text.to_string());
        }

        fn write_char(&mut self, c: char) {
            if let Some(last) = self.screens.last_mut() {
                last.push(c);
            }
        }
    }

    #[test]
    fn welcome_rendered_once() {
        let mut fsm = DisplayFsm::new();
        let ctx = GameContext::new();
        let mut lcd = TestDisplay::default();

        for _ in 0..10 {
            fsm.tick(&ctx, &mut lcd);
        }
        assert_eq!(lcd.screens, vec![WELCOME_TEXT.to_string()]);
    }

    #[test]
    fn continue_pulse_enters_game_with_zero_score() {
        let mut fsm = DisplayFsm::new();
        let mut ctx = GameContext::new();
        let mut lcd = TestDisplay::default();

        fsm.tick(&ctx, &mut lcd);
        ctx.continue_pulse = true;
        fsm.tick(&ctx, &mut lcd);
        assert_eq!(lcd.screens.last().unwrap(), "Your Score Is: 0");

        // Steady in-game state: no rewrites
        ctx.continue_pulse = false;
        let rendered = lcd.screens.len();
        for _ in 0..10 {
            fsm.tick(&ctx, &mut lcd);
        }
        assert_eq!(lcd.screens.len(), rendered);
    }

    #[test]
    fn score_update_renders_upcoming_round() {
        let mut fsm = DisplayFsm::new();
        let mut ctx = GameContext::new();
        let mut lcd = TestDisplay::default();

        fsm.tick(&ctx, &mut lcd);
        ctx.continue_pulse = true;
        fsm.tick(&ctx, &mut lcd);
        ctx.continue_pulse = false;

        // Input machine finished round 2; playback has not bumped round yet
        ctx.round = 2;
        ctx.next_round_ready = true;
        fsm.tick(&ctx, &mut lcd);
        assert_eq!(lcd.screens.last().unwrap(), "Your Score Is: 3");
    }

    #[test]
    fn win_and_replay_flow() {
        let mut fsm = DisplayFsm::new();
        let mut ctx = GameContext::new();
        let mut lcd = TestDisplay::default();

        fsm.tick(&ctx, &mut lcd);
        ctx.continue_pulse = true;
        fsm.tick(&ctx, &mut lcd);
        ctx.continue_pulse = false;

        ctx.round = 8;
        ctx.player_won = true;
        ctx.new_game_requested = true;
        fsm.tick(&ctx, &mut lcd);
        assert_eq!(lcd.screens.last().unwrap(), WIN_TEXT);

        // Win screen is sticky until the player pulses continue
        fsm.tick(&ctx, &mut lcd);
        assert_eq!(lcd.screens.last().unwrap(), WIN_TEXT);

        ctx.continue_pulse = true;
        fsm.tick(&ctx, &mut lcd);
        assert_eq!(lcd.screens.last().unwrap(), "Your Score Is: 8");
    }

    #[test]
    fn lose_screen_on_failed_round() {
        let mut fsm = DisplayFsm::new();
        let mut ctx = GameContext::new();
        let mut lcd = TestDisplay::default();

        fsm.tick(&ctx, &mut lcd);
        ctx.continue_pulse = true;
        fsm.tick(&ctx, &mut lcd);
        ctx.continue_pulse = false;

        ctx.round = 4;
        ctx.next_round_ready = true;
        ctx.new_game_requested = true;
        fsm.tick(&ctx, &mut lcd);
        assert_eq!(lcd.screens.last().unwrap(), LOSE_TEXT);
    }
}
