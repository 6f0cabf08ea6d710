//! Variation cursor over a fingering set.

use serde::{Deserialize, Serialize};

use crate::search::FingeringSet;

/// A stateful cursor over the variations of a [`FingeringSet`].
///
/// The cursor holds only a count and an optional selection; it has no
/// search logic of its own and must be [`reset`](VariationIndex::reset)
/// whenever the set it tracks is recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VariationIndex {
    count: usize,
    selected: Option<usize>,
}

impl VariationIndex {
    /// Track a freshly computed set: the count is taken over, the
    /// selection is dropped.
    pub fn reset(&mut self, set: &FingeringSet) {
        self.count = set.len();
        self.selected = None;
    }

    /// Select a variation, clamping past-the-end requests to the last
    /// one. Returns the effective selection; `None` when the set is empty.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        self.selected = if self.count == 0 {
            None
        } else {
            Some(index.min(self.count - 1))
        };
        self.selected
    }

    /// Drop the selection, keeping the count.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Display string for the current state.
    pub fn describe(&self) -> String {
        match (self.selected, self.count) {
            (Some(index), count) => format!("Variation: {} / {}", index + 1, count),
            (None, 0) => "No variation found".to_string(),
            (None, 1) => "1 variation found".to_string(),
            (None, count) => format!("{} variations found", count),
        }
    }
}
