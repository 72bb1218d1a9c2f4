use pocketlink_core::LinkRecord;
use std::collections::HashSet;

/// The ordered collection of short links, newest first.
///
/// A `Store` is never mutated in place: [`Store::insert`] returns a new
/// store with the record prepended, which keeps allocation and resolution
/// pure functions of a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    records: Vec<LinkRecord>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps records that are already ordered newest first.
    pub fn from_records(records: Vec<LinkRecord>) -> Self {
        Self { records }
    }

    /// Returns a new store with `record` in front of the existing records.
    pub fn insert(&self, record: LinkRecord) -> Self {
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.push(record);
        records.extend(self.records.iter().cloned());
        Self { records }
    }

    /// Finds the first record whose short code equals `code` exactly.
    pub fn find(&self, code: &str) -> Option<&LinkRecord> {
        self.records.iter().find(|r| r.short_code.as_str() == code)
    }

    /// Checks whether any record, expired or not, uses `code`.
    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// All codes currently in the store.
    pub fn codes(&self) -> HashSet<&str> {
        self.records.iter().map(|r| r.short_code.as_str()).collect()
    }

    pub fn records(&self) -> &[LinkRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LinkRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<LinkRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = &'a LinkRecord;
    type IntoIter = std::slice::Iter<'a, LinkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;
    use pocketlink_core::ShortCode;

    fn record(code: &str, url: &str) -> LinkRecord {
        LinkRecord::new(
            url,
            ShortCode::new_unchecked(code),
            Timestamp::from_second(1_000).unwrap(),
        )
    }

    #[test]
    fn insert_prepends() {
        let store = Store::new()
            .insert(record("first", "https://one.com"))
            .insert(record("second", "https://two.com"));

        let codes: Vec<_> = store.iter().map(|r| r.short_code.as_str()).collect();
        assert_eq!(codes, vec!["second", "first"]);
    }

    #[test]
    fn insert_leaves_original_untouched() {
        let empty = Store::new();
        let one = empty.insert(record("abc", "https://example.com"));

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn find_is_exact_and_case_sensitive() {
        let store = Store::new().insert(record("AbC", "https://example.com"));

        assert!(store.find("AbC").is_some());
        assert!(store.find("abc").is_none());
        assert!(store.find("AbCd").is_none());
        assert!(!store.contains("ABC"));
    }

    #[test]
    fn find_returns_newest_duplicate() {
        // duplicates can only come from hand-edited blobs, the newest wins
        let store = Store::from_records(vec![
            record("dup", "https://new.com"),
            record("dup", "https://old.com"),
        ]);

        assert_eq!(store.find("dup").unwrap().long_url, "https://new.com");
    }

    #[test]
    fn codes_lists_every_record() {
        let store = Store::new()
            .insert(record("aaa", "https://a.com"))
            .insert(record("bbb", "https://b.com"));

        let codes = store.codes();
        assert_eq!(codes.len(), 2);
        assert!(codes.contains("aaa"));
        assert!(codes.contains("bbb"));
    }
}
