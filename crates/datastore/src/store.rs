//! Byte-level store interface and the typed helpers layered on top.

use crate::error::StoreError;
use crate::object::KvObject;

/// One stored record as the store sees it: a key, an opaque blob, and the
/// version index assigned on the last successful write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreRecord {
    pub key: String,
    pub value: Vec<u8>,
    pub index: u64,
}

/// A pluggable key-value store.
///
/// Implementations only deal in keys, byte blobs, and version indices;
/// record semantics stay on the caller's side of the boundary. All calls
/// are blocking; timeout and retry policy belong to the implementation.
pub trait DataStore: Send + Sync {
    /// All records whose key starts with `prefix`.
    ///
    /// Returns `Err(StoreError::NotFound)` when no key matches; callers
    /// that consider an empty prefix legitimate translate that into an
    /// empty result.
    fn list(&self, prefix: &str) -> Result<Vec<StoreRecord>, StoreError>;

    /// The record stored under `key`.
    fn get(&self, key: &str) -> Result<StoreRecord, StoreError>;

    /// Write `value` under `key`, atomically.
    ///
    /// `index` must echo the record's current version index (0 for a
    /// record that does not exist yet); otherwise the write is rejected
    /// with [`StoreError::StaleIndex`]. Returns the newly assigned index.
    fn put(&self, key: &str, value: &[u8], index: u64) -> Result<u64, StoreError>;

    /// Delete the record under `key`, with the same index check as
    /// [`put`](DataStore::put).
    fn delete(&self, key: &str, index: u64) -> Result<(), StoreError>;
}

/// Join ordered key atoms into the store's flat key form.
pub fn key_path(parts: &[String]) -> String {
    parts.join("/")
}

/// List and decode every record under `prototype`'s key prefix.
///
/// Each blob is decoded into a fresh instance produced by the prototype's
/// `new_instance`, and the store's version index is assigned to it.
/// Propagates `NotFound` untranslated; only the caller knows whether an
/// empty prefix is an error.
pub fn list_objects<T: KvObject>(
    store: &dyn DataStore,
    prototype: &T,
) -> Result<Vec<T>, StoreError> {
    let prefix = key_path(&prototype.key_prefix());
    let records = store.list(&prefix)?;
    let mut objects = Vec::with_capacity(records.len());
    for record in records {
        let mut object = prototype.new_instance();
        object.set_value(&record.value)?;
        object.set_index(record.index);
        objects.push(object);
    }
    Ok(objects)
}

/// Read the record stored under `object`'s key into `object`.
pub fn get_object<T: KvObject>(store: &dyn DataStore, object: &mut T) -> Result<(), StoreError> {
    let record = store.get(&key_path(&object.key()))?;
    object.set_value(&record.value)?;
    object.set_index(record.index);
    Ok(())
}

/// Write `object` to the store, echoing its current version index for the
/// optimistic-concurrency check, and record the new index on success.
pub fn put_object<T: KvObject>(store: &dyn DataStore, object: &mut T) -> Result<(), StoreError> {
    let key = key_path(&object.key());
    let value = object
        .value()
        .ok_or_else(|| StoreError::InvalidRecord(key.clone()))?;
    let index = store.put(&key, &value, object.index())?;
    object.set_index(index);
    Ok(())
}

/// Delete `object`'s record from the store.
pub fn delete_object<T: KvObject>(store: &dyn DataStore, object: &T) -> Result<(), StoreError> {
    store.delete(&key_path(&object.key()), object.index())
}
