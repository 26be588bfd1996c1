//! Field lock tracking for redline.
//!
//! [`FieldLocks`] records which fields of a record are currently under
//! direct human composition. The host surface translates editor focus/blur
//! events into [`FieldLocks::acquire`] / [`FieldLocks::release`] calls; the
//! merge engine consults a [`FieldLocks::snapshot`] to decide which fields
//! an extractor proposal may touch.
//!
//! The tracker is scoped to one live editing session, has no persistence,
//! and cannot fail: acquiring an already-held lock or releasing an unheld
//! one is a no-op.

use std::collections::HashSet;

use redline_types::FieldName;

/// The set of fields currently under active human composition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldLocks {
    held: HashSet<FieldName>,
}

impl FieldLocks {
    /// Create a tracker with no fields locked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `field` as under human composition. Idempotent.
    pub fn acquire(&mut self, field: FieldName) {
        self.held.insert(field);
    }

    /// Mark `field` as no longer under human composition. Idempotent.
    pub fn release(&mut self, field: FieldName) {
        self.held.remove(&field);
    }

    /// Returns `true` if `field` is currently locked.
    pub fn is_locked(&self, field: FieldName) -> bool {
        self.held.contains(&field)
    }

    /// An owned copy of the current lock set.
    ///
    /// Callers get a value, never a reference into the tracker, so the
    /// internal set cannot be mutated from outside.
    pub fn snapshot(&self) -> HashSet<FieldName> {
        self.held.clone()
    }

    /// Number of fields currently locked.
    pub fn len(&self) -> usize {
        self.held.len()
    }

    /// Returns `true` if no field is locked.
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Release every lock. Used when an editing session ends.
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_and_release() {
        let mut locks = FieldLocks::new();
        assert!(locks.is_empty());

        locks.acquire(FieldName::Behavior);
        assert!(locks.is_locked(FieldName::Behavior));
        assert!(!locks.is_locked(FieldName::Summary));
        assert_eq!(locks.len(), 1);

        locks.release(FieldName::Behavior);
        assert!(!locks.is_locked(FieldName::Behavior));
        assert!(locks.is_empty());
    }

    #[test]
    fn acquire_is_idempotent() {
        let mut locks = FieldLocks::new();
        locks.acquire(FieldName::Summary);
        locks.acquire(FieldName::Summary);
        assert_eq!(locks.len(), 1);
    }

    #[test]
    fn release_unheld_is_a_noop() {
        let mut locks = FieldLocks::new();
        locks.release(FieldName::Summary);
        assert!(locks.is_empty());
    }

    #[test]
    fn snapshot_is_detached_from_tracker() {
        let mut locks = FieldLocks::new();
        locks.acquire(FieldName::Antecedent);

        let mut snapshot = locks.snapshot();
        snapshot.insert(FieldName::Behavior);
        snapshot.remove(&FieldName::Antecedent);

        assert!(locks.is_locked(FieldName::Antecedent));
        assert!(!locks.is_locked(FieldName::Behavior));
    }

    #[test]
    fn clear_releases_everything() {
        let mut locks = FieldLocks::new();
        locks.acquire(FieldName::Summary);
        locks.acquire(FieldName::Behavior);
        locks.clear();
        assert!(locks.is_empty());
    }
}
