//! GPIO device implementations
//!
//! Wires the core's hardware traits to RP2040 pins: four indicator LEDs
//! and five momentary buttons (four game buttons plus continue). Buttons
//! are wired active-low with internal pull-ups; the conversion to the
//! active-high one-hot pattern the game logic expects happens here.

use embassy_rp::gpio::{Input, Output};

use mnemon_core::traits::{IndicatorPanel, InputDevice};

/// Four indicator LEDs, one per symbol.
pub struct LedPanel {
    lines: [Output<'static>; 4],
}

impl LedPanel {
    pub fn new(lines: [Output<'static>; 4]) -> Self {
        Self { lines }
    }
}

impl IndicatorPanel for LedPanel {
    fn set_active(&mut self, mask: u8) {
        for (i, line) in self.lines.iter_mut().enumerate() {
            if mask & (1 << i) != 0 {
                line.set_high();
            } else {
                line.set_low();
            }
        }
    }
}

/// Four game buttons plus the continue button, active-low.
pub struct ButtonPad {
    buttons: [Input<'static>; 4],
    cont: Input<'static>,
}

impl ButtonPad {
    pub fn new(buttons: [Input<'static>; 4], cont: Input<'static>) -> Self {
        Self { buttons, cont }
    }
}

impl InputDevice for ButtonPad {
    fn read_buttons(&self) -> u8 {
        let mut pattern = 0;
        for (i, button) in self.buttons.iter().enumerate() {
            if button.is_low() {
                pattern |= 1 << i;
            }
        }
        // Chords come through as multi-bit patterns; the game logic
        // decodes those as "no press"
        pattern
    }

    fn read_continue(&self) -> bool {
        self.cont.is_low()
    }
}
