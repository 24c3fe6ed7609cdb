//! Cooperative tick scheduler
//!
//! Runs the four state machines once per tick in a fixed order:
//!
//! 1. display
//! 2. continue button
//! 3. sequence playback
//! 4. input recognition
//!
//! The order is a behavioral contract, not an implementation detail. A
//! flag written by an earlier machine is visible to later machines in the
//! same tick; a flag written by a later machine reaches earlier machines
//! only on the next tick. The continue-pulse/display coupling depends on
//! exactly this: playback reacts to a pulse in the tick it is emitted,
//! the display one tick later, while the pulse is still set.

use crate::context::GameContext;
use crate::fsm::{ContinueButtonFsm, DisplayFsm, InputFsm, PlaybackFsm};
use crate::sequence::SymbolSource;
use crate::traits::{IndicatorPanel, InputDevice, TextDisplay, TickSource};

/// The complete game: shared context, the four machines, and the symbol
/// source used to draw each game's target sequence.
#[derive(Debug)]
pub struct Game<S: SymbolSource> {
    context: GameContext,
    display: DisplayFsm,
    continue_button: ContinueButtonFsm,
    playback: PlaybackFsm,
    input: InputFsm,
    source: S,
}

impl<S: SymbolSource> Game<S> {
    /// Create a game in its power-on state.
    pub fn new(source: S) -> Self {
        Self {
            context: GameContext::new(),
            display: DisplayFsm::new(),
            continue_button: ContinueButtonFsm::new(),
            playback: PlaybackFsm::new(),
            input: InputFsm::new(),
            source,
        }
    }

    /// Run one tick: all four machines, in the fixed order.
    pub fn tick<P, B, D>(&mut self, panel: &mut P, buttons: &B, display: &mut D)
    where
        P: IndicatorPanel,
        B: InputDevice,
        D: TextDisplay,
    {
        self.display.tick(&self.context, display);
        self.continue_button
            .tick(&mut self.context, buttons.read_continue());
        self.playback
            .tick(&mut self.context, &mut self.source, panel);
        self.input.tick(&mut self.context, buttons.read_buttons());
    }

    /// The shared flags and counters, for status reporting.
    pub fn context(&self) -> &GameContext {
        &self.context
    }
}

/// Drive a game off a tick source until the source stops.
///
/// One `tick` per elapsed notification; the wait between ticks blocks and
/// consumes exactly one notification. This is the loop for synchronous
/// tick sources; the firmware's timer notification is async, so it calls
/// [`Game::tick`] directly from its own await loop instead.
pub fn run<S, T, P, B, D>(
    game: &mut Game<S>,
    ticks: &mut T,
    period_ms: u32,
    panel: &mut P,
    buttons: &B,
    display: &mut D,
) where
    S: SymbolSource,
    T: TickSource,
    P: IndicatorPanel,
    B: InputDevice,
    D: TextDisplay,
{
    ticks.start(period_ms);
    loop {
        game.tick(panel, buttons, display);
        if !ticks.wait_elapsed() {
            break;
        }
    }
    ticks.stop();
}
