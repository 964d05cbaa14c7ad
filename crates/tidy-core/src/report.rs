//! Rename run summary

use serde::Serialize;

/// Counters collected during one rename run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenameReport {
    /// Nodes that passed the gate and were considered
    pub visited: usize,
    /// Nodes whose name was changed
    pub written: usize,
    /// Considered nodes whose new name equalled the old one
    pub unchanged: usize,
    /// Subtree roots stopped by the gate (descendants are not counted)
    pub skipped: usize,
    /// Nodes kept because their name looked custom
    pub kept_custom: usize,
    /// Nodes named by the fallback after a strategy failure
    pub fallbacks: usize,
    /// Names the host refused to store
    pub write_failures: usize,
    /// Top-level batches processed
    pub batches: usize,
}

impl RenameReport {
    /// Whether any node was renamed
    #[inline]
    #[must_use]
    pub fn renamed(&self) -> bool {
        self.written > 0
    }

    /// Fold another run's counters into this one
    pub fn merge(&mut self, other: &Self) {
        self.visited += other.visited;
        self.written += other.written;
        self.unchanged += other.unchanged;
        self.skipped += other.skipped;
        self.kept_custom += other.kept_custom;
        self.fallbacks += other.fallbacks;
        self.write_failures += other.write_failures;
        self.batches += other.batches;
    }
}
