//! Sub-range of the analog line claimed by a single button.

/// Inclusive range of raw readings.
///
/// Buttons on a resistor ladder pull the shared line to distinct levels.
/// Each of them is recognized by the reading falling within its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Range {
    low: u16,
    high: u16,
}

impl Range {
    /// Range spanning `low..=high`.
    ///
    /// Inverted bounds are a configuration mistake. They are only caught
    /// in debug builds, otherwise such a range never matches anything.
    #[must_use]
    pub const fn new(low: u16, high: u16) -> Self {
        debug_assert!(low <= high, "range bounds are inverted");
        Self { low, high }
    }

    /// Range spanning `center ± tolerance`, clamped to the valid readings.
    #[must_use]
    pub const fn around(center: u16, tolerance: u16) -> Self {
        Self {
            low: center.saturating_sub(tolerance),
            high: center.saturating_add(tolerance),
        }
    }

    #[must_use]
    pub const fn low(&self) -> u16 {
        self.low
    }

    #[must_use]
    pub const fn high(&self) -> u16 {
        self.high
    }

    #[must_use]
    pub const fn contains(&self, value: u16) -> bool {
        value >= self.low && value <= self.high
    }

    /// Whether at least one reading would be claimed by both ranges.
    #[must_use]
    pub const fn overlaps(&self, other: &Range) -> bool {
        self.low <= other.high && other.low <= self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn when_value_is_on_the_boundary_it_is_contained() {
        let range = Range::new(400, 600);
        assert!(range.contains(400));
        assert!(range.contains(600));
        assert!(!range.contains(399));
        assert!(!range.contains(601));
    }

    #[test]
    #[should_panic(expected = "range bounds are inverted")]
    fn when_bounds_are_inverted_it_panics_in_debug() {
        let _ = Range::new(600, 400);
    }

    #[test]
    fn when_range_is_zero_width_it_contains_only_its_single_value() {
        let range = Range::new(512, 512);
        assert!(range.contains(512));
        assert!(!range.contains(511));
        assert!(!range.contains(513));
    }

    #[test]
    fn when_built_around_center_near_the_edges_it_saturates() {
        let bottom = Range::around(3, 50);
        assert_eq!(bottom.low(), 0);
        assert_eq!(bottom.high(), 53);

        let top = Range::around(u16::MAX - 10, 150);
        assert_eq!(top.low(), u16::MAX - 160);
        assert_eq!(top.high(), u16::MAX);
    }

    #[test]
    fn when_ranges_share_a_single_value_they_overlap() {
        let a = Range::new(0, 500);
        assert!(a.overlaps(&Range::new(500, 1024)));
        assert!(Range::new(500, 1024).overlaps(&a));
        assert!(!a.overlaps(&Range::new(501, 1024)));
        assert!(a.overlaps(&Range::new(100, 200)));
    }

    proptest! {
        #[test]
        fn contains_is_true_iff_value_is_within_bounds(
            a in any::<u16>(),
            b in any::<u16>(),
            value in any::<u16>(),
        ) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let range = Range::new(low, high);
            prop_assert_eq!(range.contains(value), low <= value && value <= high);
        }

        #[test]
        fn range_around_center_always_contains_the_center(
            center in any::<u16>(),
            tolerance in any::<u16>(),
        ) {
            let range = Range::around(center, tolerance);
            prop_assert!(range.contains(center));
            prop_assert!(range.low() <= range.high());
        }
    }
}
