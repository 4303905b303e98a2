//! In-memory record of the last-notified status per homework name.

use std::collections::HashMap;

/// Process-lifetime only; resets to empty on restart.
#[derive(Debug, Default)]
pub struct ChangeTracker {
    seen: HashMap<String, String>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff `status` differs from the stored status for `name`, or `name`
    /// has never been recorded.
    pub fn should_notify(&self, name: &str, status: &str) -> bool {
        self.seen.get(name).map(String::as_str) != Some(status)
    }

    /// Unconditionally overwrite the stored status for `name`.
    pub fn record(&mut self, name: &str, status: &str) {
        self.seen.insert(name.to_string(), status.to_string());
    }
}
