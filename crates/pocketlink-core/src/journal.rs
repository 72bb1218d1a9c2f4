//! An in-process observer for application events.
//!
//! Services call into an injected [`Journal`] at the points a user would
//! care about (a link was created, a visit hit an expired link, ...). The
//! [`MemoryJournal`] keeps every entry so a front-end can display them,
//! while [`TracingJournal`] forwards them to `tracing`.

use crate::clock::{Clock, SystemClock};
use jiff::Timestamp;
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// A single recorded event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalEntry {
    pub timestamp: Timestamp,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

pub trait Journal: Send + Sync {
    /// Records an event with optional structured data.
    fn record(&self, message: &str, data: Option<Value>);
}

impl<J: Journal + ?Sized> Journal for Arc<J> {
    fn record(&self, message: &str, data: Option<Value>) {
        (**self).record(message, data)
    }
}

/// Keeps entries in memory, in the order they were recorded.
///
/// Entries are stamped with the journal's clock, so a journal sharing a
/// clock with the services agrees with the expiries they compute.
pub struct MemoryJournal {
    clock: Box<dyn Clock>,
    entries: Mutex<Vec<JournalEntry>>,
}

impl Default for MemoryJournal {
    fn default() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl std::fmt::Debug for MemoryJournal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryJournal")
            .field("entries", &self.entries.lock().len())
            .finish_non_exhaustive()
    }
}

impl MemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all entries recorded so far.
    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Journal for MemoryJournal {
    fn record(&self, message: &str, data: Option<Value>) {
        let timestamp = self.clock.now();
        self.entries.lock().push(JournalEntry {
            timestamp,
            message: message.to_owned(),
            data,
        });
    }
}

/// Forwards entries to the `tracing` subscriber at `INFO` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingJournal;

impl Journal for TracingJournal {
    fn record(&self, message: &str, data: Option<Value>) {
        match data {
            Some(data) => tracing::info!(target: "pocketlink::journal", data = %data, "{message}"),
            None => tracing::info!(target: "pocketlink::journal", "{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use jiff::SignedDuration;
    use serde_json::json;

    #[test]
    fn memory_journal_keeps_order() {
        let journal = MemoryJournal::new();
        assert!(journal.is_empty());

        journal.record("first", None);
        journal.record("second", Some(json!({ "code": "abc" })));

        let entries = journal.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].message, "second");
        assert_eq!(entries[1].data, Some(json!({ "code": "abc" })));
        assert!(entries[0].timestamp <= entries[1].timestamp);
    }

    #[test]
    fn snapshot_is_detached() {
        let journal = MemoryJournal::new();
        journal.record("first", None);

        let snapshot = journal.entries();
        journal.record("second", None);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(journal.len(), 2);
    }

    #[test]
    fn shared_journal_records_through_arc() {
        let journal = Arc::new(MemoryJournal::new());
        let shared: Arc<dyn Journal> = journal.clone();

        shared.record("via arc", None);

        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn entries_use_the_journal_clock() {
        let start = Timestamp::from_second(1_000).unwrap();
        let clock = ManualClock::new(start);
        let journal = MemoryJournal::with_clock(clock.clone());

        journal.record("first", None);
        clock.advance(SignedDuration::from_mins(10));
        journal.record("second", None);

        let stamps: Vec<_> = journal.entries().iter().map(|e| e.timestamp).collect();
        assert_eq!(stamps, vec![start, start + SignedDuration::from_mins(10)]);
    }

    #[test]
    fn entry_serializes_without_empty_data() {
        let entry = JournalEntry {
            timestamp: Timestamp::from_second(0).unwrap(),
            message: "hello".to_string(),
            data: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["message"], "hello");
        assert!(json.get("data").is_none());
    }
}
