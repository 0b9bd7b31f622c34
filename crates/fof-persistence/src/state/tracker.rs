//! Dirty state tracking.

/// Tracks unsaved changes.
///
/// Every change bumps a revision so a save can tell whether the data it
/// wrote is still the latest.
#[derive(Debug, Clone, Default)]
pub struct DirtyTracker {
    dirty: bool,
    revision: u64,
}

impl DirtyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
        self.revision += 1;
    }

    /// Mark the data clean, e.g. after replacing it wholesale.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
        self.revision += 1;
    }

    /// Record a finished save of the data as it was at `revision`.
    ///
    /// Changes made while the save was running keep the state dirty.
    pub fn save_complete(&mut self, revision: u64) {
        if self.revision == revision {
            self.dirty = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracker_is_clean() {
        let tracker = DirtyTracker::new();
        assert!(!tracker.is_dirty());
        assert_eq!(tracker.revision(), 0);
    }

    #[test]
    fn test_save_complete_clears_dirty() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_dirty();
        let revision = tracker.revision();
        tracker.save_complete(revision);
        assert!(!tracker.is_dirty());
    }

    #[test]
    fn test_change_during_save_stays_dirty() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_dirty();
        let revision = tracker.revision();
        tracker.mark_dirty();
        tracker.save_complete(revision);
        assert!(tracker.is_dirty());
    }

    #[test]
    fn test_mark_clean_invalidates_pending_save() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_dirty();
        let revision = tracker.revision();
        tracker.mark_clean();
        tracker.mark_dirty();
        tracker.save_complete(revision);
        assert!(tracker.is_dirty());
    }
}
