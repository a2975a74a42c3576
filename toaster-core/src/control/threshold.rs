//! Cook-to threshold with dual operator input
//!
//! The operator can set the threshold with a continuous control (slider)
//! or by typing a number. Both are transient until committed. A commit
//! clamps the value into the configured bounds, makes it authoritative and
//! resynchronises the other representation, so the two inputs never feed
//! back into each other while being edited.

use crate::config::TempBounds;

/// Threshold state: two transient representations and one committed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThresholdInput {
    bounds: TempBounds,
    committed: i16,
    slider: i16,
    text: i16,
}

impl ThresholdInput {
    /// Create a new threshold, clamping the initial value into bounds
    pub fn new(bounds: TempBounds, initial: i16) -> Self {
        let committed = bounds.clamp(initial);
        Self {
            bounds,
            committed,
            slider: committed,
            text: committed,
        }
    }

    /// Authoritative threshold (°C)
    pub fn value(&self) -> i16 {
        self.committed
    }

    /// Current slider position (may be uncommitted)
    pub fn slider(&self) -> i16 {
        self.slider
    }

    /// Current text entry (may be uncommitted and out of bounds)
    pub fn text(&self) -> i16 {
        self.text
    }

    /// Accepted range
    pub fn bounds(&self) -> TempBounds {
        self.bounds
    }

    /// Move the slider without committing
    pub fn move_slider(&mut self, value: i16) {
        self.slider = value;
    }

    /// Change the text entry without committing
    ///
    /// No clamping happens here; the operator may be halfway through
    /// typing a number.
    pub fn edit_text(&mut self, value: i16) {
        self.text = value;
    }

    /// Commit the slider position
    ///
    /// Returns the new authoritative value.
    pub fn commit_slider(&mut self) -> i16 {
        self.commit(self.slider)
    }

    /// Commit the text entry
    ///
    /// Returns the new authoritative value.
    pub fn commit_text(&mut self) -> i16 {
        self.commit(self.text)
    }

    /// Commit a value directly
    ///
    /// The value is clamped into bounds and both representations are
    /// resynchronised to it. Returns the new authoritative value.
    pub fn commit(&mut self, value: i16) -> i16 {
        self.committed = self.bounds.clamp(value);
        self.resync();
        self.committed
    }

    /// Discard uncommitted edits
    pub fn resync(&mut self) {
        self.slider = self.committed;
        self.text = self.committed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn input() -> ThresholdInput {
        ThresholdInput::new(TempBounds::new(50, 150), 80)
    }

    #[test]
    fn test_initial_value() {
        let t = input();
        assert_eq!(t.value(), 80);
        assert_eq!(t.slider(), 80);
        assert_eq!(t.text(), 80);
    }

    #[test]
    fn test_initial_value_clamped() {
        let t = ThresholdInput::new(TempBounds::new(50, 150), 10);
        assert_eq!(t.value(), 50);
    }

    #[test]
    fn test_commit_clamps() {
        let mut t = input();
        assert_eq!(t.commit(5), 50);
        assert_eq!(t.commit(500), 150);
        assert_eq!(t.commit(80), 80);
    }

    #[test]
    fn test_text_not_clamped_until_commit() {
        let mut t = input();
        t.edit_text(5);
        assert_eq!(t.text(), 5);
        assert_eq!(t.value(), 80);
        assert_eq!(t.slider(), 80);

        assert_eq!(t.commit_text(), 50);
        assert_eq!(t.text(), 50);
        assert_eq!(t.slider(), 50);
    }

    #[test]
    fn test_slider_commit_resyncs_text() {
        let mut t = input();
        t.edit_text(120);
        t.move_slider(95);
        assert_eq!(t.value(), 80);

        assert_eq!(t.commit_slider(), 95);
        assert_eq!(t.text(), 95);
    }

    #[test]
    fn test_slider_commit_is_clamped() {
        let mut t = input();
        t.move_slider(200);
        assert_eq!(t.commit_slider(), 150);
        assert_eq!(t.slider(), 150);
    }

    #[test]
    fn test_resync_discards_edits() {
        let mut t = input();
        t.move_slider(100);
        t.edit_text(110);
        t.resync();
        assert_eq!(t.slider(), 80);
        assert_eq!(t.text(), 80);
        assert_eq!(t.value(), 80);
    }

    proptest! {
        #[test]
        fn prop_commit_equals_clamp(v in any::<i16>()) {
            let mut t = input();
            let stored = t.commit(v);
            prop_assert_eq!(stored, v.clamp(50, 150));
            prop_assert_eq!(t.value(), stored);
            prop_assert_eq!(t.slider(), stored);
            prop_assert_eq!(t.text(), stored);
        }

        #[test]
        fn prop_both_paths_land_in_range(slider in any::<i16>(), text in any::<i16>()) {
            let mut t = input();
            t.move_slider(slider);
            prop_assert!(t.bounds().contains(t.commit_slider()));
            t.edit_text(text);
            prop_assert!(t.bounds().contains(t.commit_text()));
        }
    }
}
