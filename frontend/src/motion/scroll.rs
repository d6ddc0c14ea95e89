use crate::config::{BACK_TO_TOP_THRESHOLD, NAV_COMPACT_THRESHOLD};

/// Booleans derived from the vertical scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollFlags {
    pub scrolled: bool,
    pub show_back_to_top: bool,
}

impl ScrollFlags {
    pub fn from_offset(offset: f64) -> Self {
        Self {
            scrolled: offset > NAV_COMPACT_THRESHOLD,
            show_back_to_top: offset > BACK_TO_TOP_THRESHOLD,
        }
    }
}

/// Which flags flipped between two observations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlagChange {
    pub scrolled: bool,
    pub show_back_to_top: bool,
}

impl FlagChange {
    pub fn any(&self) -> bool {
        self.scrolled || self.show_back_to_top
    }
}

/// Remembers the last flags so repeated events at one offset report nothing.
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    flags: ScrollFlags,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags(&self) -> ScrollFlags {
        self.flags
    }

    pub fn observe(&mut self, offset: f64) -> FlagChange {
        let next = ScrollFlags::from_offset(offset);
        let change = FlagChange {
            scrolled: next.scrolled != self.flags.scrolled,
            show_back_to_top: next.show_back_to_top != self.flags.show_back_to_top,
        };
        self.flags = next;
        change
    }
}

/// Fraction of the scrollable height already scrolled, in `[0, 1]`.
///
/// A document that fits in the viewport has no scrollable height and
/// always reports 0.
pub fn scroll_progress(offset: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

/// What the shared scroll store publishes to its consumers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub offset: f64,
    pub progress: f64,
    /// Visible height of the document; changes on resize without scrolling.
    pub viewport_height: f64,
}

impl ScrollSnapshot {
    pub fn new(offset: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            offset: offset.max(0.0),
            progress: scroll_progress(offset, scroll_height, viewport_height),
            viewport_height,
        }
    }

    pub fn flags(&self) -> ScrollFlags {
        ScrollFlags::from_offset(self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_follow_thresholds_independently() {
        for offset in [0.0, 19.0, 20.0, 20.5, 21.0, 399.0, 400.0, 401.0, 5000.0] {
            let flags = ScrollFlags::from_offset(offset);
            assert_eq!(flags.scrolled, offset > 20.0, "offset {offset}");
            assert_eq!(flags.show_back_to_top, offset > 400.0, "offset {offset}");
        }
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert!(!ScrollFlags::from_offset(20.0).scrolled);
        assert!(!ScrollFlags::from_offset(400.0).show_back_to_top);
    }

    #[test]
    fn crossing_nav_threshold_reports_once() {
        let mut tracker = ScrollTracker::new();
        assert!(!tracker.observe(0.0).any());

        let change = tracker.observe(25.0);
        assert!(change.scrolled);
        assert!(!change.show_back_to_top);

        for _ in 0..5 {
            assert!(!tracker.observe(25.0).any());
        }
        assert!(tracker.flags().scrolled);
    }

    #[test]
    fn jumping_past_both_thresholds_flips_both() {
        let mut tracker = ScrollTracker::new();
        let change = tracker.observe(900.0);
        assert!(change.scrolled && change.show_back_to_top);

        let back = tracker.observe(100.0);
        assert!(!back.scrolled);
        assert!(back.show_back_to_top);
        assert_eq!(
            tracker.flags(),
            ScrollFlags { scrolled: true, show_back_to_top: false }
        );
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(2600.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-30.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn unscrollable_document_has_zero_progress() {
        assert_eq!(scroll_progress(10.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 3000.0, 800.0), 0.0);
    }

    #[test]
    fn snapshot_derives_flags_from_offset() {
        let snapshot = ScrollSnapshot::new(450.0, 4000.0, 1000.0);
        assert_eq!(snapshot.progress, 0.15);
        assert!(snapshot.flags().scrolled);
        assert!(snapshot.flags().show_back_to_top);
        assert_eq!(ScrollSnapshot::default().flags(), ScrollFlags::default());
    }

    #[test]
    fn resize_alone_yields_a_new_snapshot() {
        let before = ScrollSnapshot::new(0.0, 3000.0, 800.0);
        let after = ScrollSnapshot::new(0.0, 3000.0, 1200.0);
        assert_eq!(before.progress, after.progress);
        assert_ne!(before, after);
    }
}
