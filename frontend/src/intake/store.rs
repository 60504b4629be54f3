#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::intake::export::ExportDocument;
use crate::intake::model::IntakeRecord;

/// Key the submissions live under in browser storage.
pub const STORAGE_KEY: &str = "intake-submissions";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Browser storage is unavailable")]
    Unavailable,
    #[error("Stored submissions could not be read: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("Submissions could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Failed to save submissions: {0}")]
    Write(String),
}

/// String key/value storage, shaped like the browser's `Storage` API.
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`. Shared by every tab on the origin, so concurrent
/// appends from two tabs can overwrite each other.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

impl StorageBackend for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StoreError::Unavailable)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}

/// Append-only list of submitted records, kept as one JSON array under a
/// single storage key.
pub struct IntakeStore<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> IntakeStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: &str) -> Self {
        Self {
            backend,
            key: key.to_string(),
        }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// All records in insertion order. A missing or blank entry is an empty
    /// store; anything that does not parse is reported as `Corrupt`.
    pub fn records(&self) -> Result<Vec<IntakeRecord>, StoreError> {
        match self.backend.get_item(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => {
                serde_json::from_str(&raw).map_err(StoreError::Corrupt)
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Reads the stored list, pushes `record` and writes the whole list back.
    /// A corrupted document is left as is and the append fails.
    pub fn append(&self, record: &IntakeRecord) -> Result<usize, StoreError> {
        let mut records = self.records()?;
        records.push(record.clone());
        let encoded = serde_json::to_string(&records).map_err(StoreError::Encode)?;
        self.backend.set_item(&self.key, &encoded)?;
        Ok(records.len())
    }

    /// Renders every stored record as a downloadable JSON document named
    /// after `today`. Does not modify the store.
    pub fn export_all(&self, today: NaiveDate) -> Result<ExportDocument, StoreError> {
        let records = self.records()?;
        ExportDocument::from_records(&records, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::test_support::complete_draft;
    use chrono::{Duration, TimeZone, Utc};

    fn record(name: &str, offset_secs: i64) -> IntakeRecord {
        let mut draft = complete_draft();
        draft.name = name.to_string();
        draft.notes = format!("notes from {}", name);
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap() + Duration::seconds(offset_secs);
        IntakeRecord::from_draft(&draft, at).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn empty_store_has_no_records() {
        let store = IntakeStore::new(MemoryStorage::new());
        assert!(store.records().unwrap().is_empty());
    }

    #[test]
    fn blank_entry_counts_as_empty() {
        let storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY, "").unwrap();
        let store = IntakeStore::new(storage);
        assert!(store.records().unwrap().is_empty());
        assert_eq!(store.append(&record("a", 0)).unwrap(), 1);
    }

    #[test]
    fn append_preserves_insertion_order_and_duplicates() {
        let store = IntakeStore::new(MemoryStorage::new());
        let first = record("first", 0);
        let second = record("second", 10);

        assert_eq!(store.append(&first).unwrap(), 1);
        assert_eq!(store.append(&second).unwrap(), 2);
        assert_eq!(store.append(&first).unwrap(), 3);

        let records = store.records().unwrap();
        assert_eq!(records, vec![first.clone(), second, first]);
    }

    #[test]
    fn export_round_trips_every_record() {
        let store = IntakeStore::new(MemoryStorage::new());
        let appended: Vec<IntakeRecord> = (0..5).map(|i| record(&format!("lead {}", i), i * 60)).collect();
        for r in &appended {
            store.append(r).unwrap();
        }

        let doc = store.export_all(today()).unwrap();
        let exported: Vec<IntakeRecord> = serde_json::from_str(&doc.contents).unwrap();
        assert_eq!(exported, appended);
    }

    #[test]
    fn export_is_repeatable_and_read_only() {
        let store = IntakeStore::new(MemoryStorage::new());
        store.append(&record("only", 0)).unwrap();
        let before = store.backend().get_item(STORAGE_KEY).unwrap();

        let first = store.export_all(today()).unwrap();
        let second = store.export_all(today()).unwrap();
        assert_eq!(first, second);
        assert_eq!(store.backend().get_item(STORAGE_KEY).unwrap(), before);
    }

    #[test]
    fn corrupted_document_is_reported_and_kept() {
        let storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY, "{not json").unwrap();
        let store = IntakeStore::new(storage);

        assert!(matches!(store.records(), Err(StoreError::Corrupt(_))));
        assert!(matches!(store.append(&record("x", 0)), Err(StoreError::Corrupt(_))));
        assert!(matches!(store.export_all(today()), Err(StoreError::Corrupt(_))));
        assert_eq!(
            store.backend().get_item(STORAGE_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn stores_with_different_keys_are_independent() {
        let store = IntakeStore::with_key(MemoryStorage::new(), "other-key");
        store.append(&record("a", 0)).unwrap();
        assert!(store.backend().get_item(STORAGE_KEY).unwrap().is_none());
        assert!(store.backend().get_item("other-key").unwrap().is_some());
    }
}
