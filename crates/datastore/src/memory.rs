//! In-process store implementation.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::error::StoreError;
use crate::store::{DataStore, StoreRecord};

#[derive(Default)]
struct Inner {
    records: BTreeMap<String, (u64, Vec<u8>)>,
    next_index: u64,
}

/// An in-process [`DataStore`] backed by a `BTreeMap`.
///
/// Implements the full contract, including optimistic-concurrency index
/// checks and `NotFound` on empty prefix listings, so it can stand in for
/// a distributed store in tests and tooling.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }
}

impl DataStore for MemoryStore {
    fn list(&self, prefix: &str) -> Result<Vec<StoreRecord>, StoreError> {
        // Match whole key atoms: "a/b" must not match "a/bc/...".
        let needle = format!("{}/", prefix.trim_end_matches('/'));
        let inner = self.inner.read();
        let records: Vec<StoreRecord> = inner
            .records
            .range(needle.clone()..)
            .take_while(|(key, _)| key.starts_with(&needle))
            .map(|(key, (index, value))| StoreRecord {
                key: key.clone(),
                value: value.clone(),
                index: *index,
            })
            .collect();
        if records.is_empty() {
            return Err(StoreError::NotFound);
        }
        Ok(records)
    }

    fn get(&self, key: &str) -> Result<StoreRecord, StoreError> {
        let inner = self.inner.read();
        let (index, value) = inner.records.get(key).ok_or(StoreError::NotFound)?;
        Ok(StoreRecord {
            key: key.to_string(),
            value: value.clone(),
            index: *index,
        })
    }

    fn put(&self, key: &str, value: &[u8], index: u64) -> Result<u64, StoreError> {
        let mut inner = self.inner.write();
        let current = inner.records.get(key).map(|(index, _)| *index).unwrap_or(0);
        if index != current {
            return Err(StoreError::StaleIndex {
                key: key.to_string(),
                index,
            });
        }
        inner.next_index += 1;
        let assigned = inner.next_index;
        inner
            .records
            .insert(key.to_string(), (assigned, value.to_vec()));
        Ok(assigned)
    }

    fn delete(&self, key: &str, index: u64) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        let current = inner.records.get(key).map(|(index, _)| *index);
        match current {
            None => Err(StoreError::NotFound),
            Some(current) if current != index => Err(StoreError::StaleIndex {
                key: key.to_string(),
                index,
            }),
            Some(_) => {
                inner.records.remove(key);
                Ok(())
            }
        }
    }
}
