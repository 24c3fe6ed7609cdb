//! HD44780 character LCD driver (16x2, 4-bit bus)
//!
//! Plain GPIO bit-banging with busy-delays; every write completes within
//! a game tick. The game logic addresses the display as a single 32-cell
//! line with 1-based cursor positions, wrapping from cell 16 onto the
//! second hardware row.

use embassy_rp::gpio::Output;
use embassy_time::{block_for, Duration};

use mnemon_core::traits::TextDisplay;

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE: u8 = 0x06; // increment cursor, no shift
const CMD_DISPLAY_ON: u8 = 0x0C; // display on, cursor off
const CMD_FUNCTION_SET: u8 = 0x28; // 4-bit, two lines, 5x8 font
const CMD_SET_DDRAM: u8 = 0x80;

/// Cells per hardware row.
const ROW_LEN: u8 = 16;
/// Total addressable cells (two rows).
const CELLS: u8 = 32;
/// DDRAM address of the second row's first cell.
const ROW2_ADDR: u8 = 0x40;

/// HD44780 in 4-bit mode: register select, enable, data lines D4-D7.
pub struct Hd44780 {
    rs: Output<'static>,
    en: Output<'static>,
    data: [Output<'static>; 4],
    /// 1-based cursor position, 1..=32.
    cursor: u8,
}

impl Hd44780 {
    pub fn new(rs: Output<'static>, en: Output<'static>, data: [Output<'static>; 4]) -> Self {
        Self {
            rs,
            en,
            data,
            cursor: 1,
        }
    }

    /// Power-on initialization dance into 4-bit mode.
    pub fn init(&mut self) {
        block_for(Duration::from_millis(40));

        self.rs.set_low();
        // Three times 8-bit function set, then the switch to 4-bit
        self.write_nibble(0x03);
        block_for(Duration::from_millis(5));
        self.write_nibble(0x03);
        block_for(Duration::from_micros(150));
        self.write_nibble(0x03);
        block_for(Duration::from_micros(150));
        self.write_nibble(0x02);
        block_for(Duration::from_micros(150));

        self.command(CMD_FUNCTION_SET);
        self.command(CMD_DISPLAY_ON);
        self.command(CMD_ENTRY_MODE);
        self.clear();
    }

    fn clear(&mut self) {
        self.command(CMD_CLEAR);
        // Clear is the one slow instruction
        block_for(Duration::from_millis(2));
        self.cursor = 1;
    }

    /// Move the cursor to a 1-based cell position.
    fn set_cursor(&mut self, position: u8) {
        let position = position.clamp(1, CELLS);
        let addr = if position <= ROW_LEN {
            position - 1
        } else {
            ROW2_ADDR + (position - ROW_LEN - 1)
        };
        self.command(CMD_SET_DDRAM | addr);
        self.cursor = position;
    }

    fn command(&mut self, byte: u8) {
        self.rs.set_low();
        self.write_byte(byte);
    }

    fn write_data(&mut self, byte: u8) {
        self.rs.set_high();
        self.write_byte(byte);
    }

    fn write_byte(&mut self, byte: u8) {
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
        block_for(Duration::from_micros(50));
    }

    fn write_nibble(&mut self, nibble: u8) {
        for (i, line) in self.data.iter_mut().enumerate() {
            if nibble & (1 << i) != 0 {
                line.set_high();
            } else {
                line.set_low();
            }
        }
        // Latch on the falling edge of enable
        self.en.set_high();
        block_for(Duration::from_micros(2));
        self.en.set_low();
        block_for(Duration::from_micros(2));
    }
}

impl TextDisplay for Hd44780 {
    fn display_string(&mut self, position: u8, text: &str) {
        self.clear();
        self.set_cursor(position);
        for c in text.chars() {
            self.write_char(c);
        }
    }

    fn write_char(&mut self, c: char) {
        if self.cursor > CELLS {
            return;
        }
        // Jump the discontinuity between the two DDRAM rows
        if self.cursor == ROW_LEN + 1 {
            self.set_cursor(ROW_LEN + 1);
        }
        let byte = if c.is_ascii() { c as u8 } else { b'?' };
        self.write_data(byte);
        self.cursor += 1;
    }
}
