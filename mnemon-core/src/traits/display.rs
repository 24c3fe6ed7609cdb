//! Text display abstraction
//!
//! A small character display (16x2 LCD on real hardware). Writes are
//! synchronous and always succeed; there is no error path.

/// Character display for human-readable game status.
pub trait TextDisplay {
    /// Clear the display and write `text` starting at 1-based cursor
    /// `position`, wrapping onto the second row where the hardware has one.
    fn display_string(&mut self, position: u8, text: &str);

    /// Write a single character at the current cursor position.
    fn write_char(&mut self, c: char);
}
