//! Per-message visibility of render units.
//!
//! Unit ids are only unique inside one message, so every entry is keyed by
//! `(message id, unit id)`. Nothing here is persisted.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use std::collections::HashSet;

/// Which render panels are currently expanded. Absent means collapsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToggleState {
    open: HashSet<(String, String)>,
}

impl ToggleState {
    /// Flip one unit of one message and return its new visibility.
    pub fn toggle(&mut self, message_id: &str, unit_id: &str) -> bool {
        let key = (message_id.to_owned(), unit_id.to_owned());
        if self.open.remove(&key) {
            false
        } else {
            self.open.insert(key);
            true
        }
    }

    #[must_use]
    pub fn is_open(&self, message_id: &str, unit_id: &str) -> bool {
        self.open.contains(&(message_id.to_owned(), unit_id.to_owned()))
    }

    /// Number of expanded panels across all messages.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}
