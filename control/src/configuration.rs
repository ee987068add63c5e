use fugit::MillisDurationU32;

/// Timing policy of a button group.
///
/// The defaults suit a mechanical button on a resistor ladder sampled from
/// the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    /// Time after a press begins during which the whole group ignores the line.
    pub debounce: MillisDurationU32,
    /// Minimal duration of a press to be reported as a long press.
    pub long_press: MillisDurationU32,
    /// Minimal time between two consecutive readings of the line.
    pub sampling_interval: MillisDurationU32,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            debounce: MillisDurationU32::millis(20),
            long_press: MillisDurationU32::millis(1000),
            sampling_interval: MillisDurationU32::millis(20),
        }
    }
}
