//! Player input abstraction

/// The player-facing input device: four game buttons plus a separate
/// continue button. Both are level-sampled once per tick.
pub trait InputDevice {
    /// Current game button pattern in the low four bits (bit 0 = button 1).
    ///
    /// A clean single press yields a one-hot pattern; no press yields 0.
    /// Implementations do not need to filter chords or glitches - the
    /// input recognition machine decodes anything that is not one-hot as
    /// "no press".
    fn read_buttons(&self) -> u8;

    /// Current (debounced) level of the continue button.
    fn read_continue(&self) -> bool;
}
