//! Output indicator abstraction
//!
//! Four independent binary lines (LEDs on real hardware), driven by a
//! 4-bit mask. The sequence playback machine is the sole writer.

/// The bank of four output indicator lines.
pub trait IndicatorPanel {
    /// Drive the four lines from the low four bits of `mask`
    /// (bit 0 = line 1). `0` blanks the panel.
    fn set_active(&mut self, mask: u8);
}
