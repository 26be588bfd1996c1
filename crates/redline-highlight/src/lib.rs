//! Transient emphasis tracking for redline.
//!
//! [`Highlighter`] derives a short-lived "recently updated" field set from
//! the merge engine's output so a host surface can briefly emphasize fields
//! the extractor just overwrote. It is presentation-adjacent but not UI: it
//! knows field names and a wall-clock window, nothing else, and it keeps
//! timer concerns out of the merge engine entirely.
//!
//! # Window rules
//!
//! - [`Highlighter::on_merge`] arms the emphasis set with the changed fields
//!   of the most recent merge and restarts the window. A second merge before
//!   the window elapses **replaces** the previous set, it never unions.
//! - A merge that changed nothing clears the emphasis immediately, so the
//!   set is always a subset of the most recent merge's changed fields.
//! - [`Highlighter::current`] returns the set while the window is open and
//!   an empty set after it elapses.

use std::collections::{BTreeSet, HashSet};
use std::time::{Duration, Instant};

use redline_types::FieldName;

/// Tracks which fields were overwritten by the most recent merge, for a
/// fixed wall-clock window.
#[derive(Clone, Debug)]
pub struct Highlighter {
    window: Duration,
    lit: HashSet<FieldName>,
    deadline: Option<Instant>,
}

impl Highlighter {
    /// Default emphasis window.
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(2500);

    /// Create a highlighter with the default window.
    pub fn new() -> Self {
        Self::with_window(Self::DEFAULT_WINDOW)
    }

    /// Create a highlighter with an explicit window.
    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            lit: HashSet::new(),
            deadline: None,
        }
    }

    /// The configured window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record the changed-field set of a merge that just completed.
    pub fn on_merge(&mut self, changed: &BTreeSet<FieldName>) {
        if changed.is_empty() {
            self.lit.clear();
            self.deadline = None;
        } else {
            self.lit = changed.iter().copied().collect();
            self.deadline = Some(Instant::now() + self.window);
        }
    }

    /// The fields currently under emphasis.
    pub fn current(&self) -> HashSet<FieldName> {
        self.current_at(Instant::now())
    }

    /// The fields under emphasis as of `now`.
    ///
    /// Deterministic seam for tests; `current` is this with the real clock.
    pub fn current_at(&self, now: Instant) -> HashSet<FieldName> {
        match self.deadline {
            Some(deadline) if now < deadline => self.lit.clone(),
            _ => HashSet::new(),
        }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changed(fields: &[FieldName]) -> BTreeSet<FieldName> {
        fields.iter().copied().collect()
    }

    #[test]
    fn starts_dark() {
        let highlighter = Highlighter::new();
        assert!(highlighter.current().is_empty());
    }

    #[test]
    fn merge_lights_changed_fields() {
        let mut highlighter = Highlighter::new();
        highlighter.on_merge(&changed(&[FieldName::Behavior, FieldName::Summary]));

        let lit = highlighter.current();
        assert_eq!(lit.len(), 2);
        assert!(lit.contains(&FieldName::Behavior));
        assert!(lit.contains(&FieldName::Summary));
    }

    #[test]
    fn window_elapses() {
        let mut highlighter = Highlighter::with_window(Duration::from_secs(5));
        highlighter.on_merge(&changed(&[FieldName::Behavior]));

        let armed_at = Instant::now();
        assert!(!highlighter.current_at(armed_at).is_empty());
        assert!(highlighter
            .current_at(armed_at + Duration::from_secs(6))
            .is_empty());
    }

    #[test]
    fn second_merge_replaces_not_unions() {
        let mut highlighter = Highlighter::new();
        highlighter.on_merge(&changed(&[FieldName::Summary]));
        highlighter.on_merge(&changed(&[FieldName::Behavior]));

        let lit = highlighter.current();
        assert_eq!(lit.len(), 1);
        assert!(lit.contains(&FieldName::Behavior));
        assert!(!lit.contains(&FieldName::Summary));
    }

    #[test]
    fn no_op_merge_clears_emphasis() {
        let mut highlighter = Highlighter::new();
        highlighter.on_merge(&changed(&[FieldName::Summary]));
        highlighter.on_merge(&BTreeSet::new());
        assert!(highlighter.current().is_empty());
    }

    #[test]
    fn second_merge_restarts_the_window() {
        let mut highlighter = Highlighter::with_window(Duration::from_secs(10));
        highlighter.on_merge(&changed(&[FieldName::Summary]));
        let first_arm = Instant::now();

        highlighter.on_merge(&changed(&[FieldName::Behavior]));
        // Well past the first window's start but inside the second's.
        let probe = first_arm + Duration::from_secs(9);
        assert_eq!(
            highlighter.current_at(probe),
            [FieldName::Behavior].into_iter().collect()
        );
    }
}
