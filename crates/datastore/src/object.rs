//! The store-record contract.

use crate::error::StoreError;

/// Replication scope of a record type.
///
/// Informs the store which replication policy applies; the store itself
/// never inspects record contents.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Scope {
    /// Relevant only to the local node; never distributed cluster-wide.
    Local,
    /// Distributed across the cluster.
    Global,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Local => "local",
            Scope::Global => "global",
        }
    }
}

/// Operations a record type must support to be stored, retrieved, and
/// versioned by a [`DataStore`](crate::DataStore).
///
/// Implementations are plain owned value types; the store only ever sees
/// the key atoms and the raw bytes this trait produces. The trait is
/// deliberately not object-safe (`new_instance` returns `Self`): records
/// cross the store boundary through the generic helpers in
/// [`store`](crate::store), while the store trait itself stays byte-level
/// and swappable.
pub trait KvObject: Sized {
    /// Ordered key atoms identifying this exact record,
    /// e.g. `["bridge_endpoint", network_id, record_id]`.
    fn key(&self) -> Vec<String>;

    /// Ordered key atoms identifying all records of this kind for the
    /// owning parent, used for bulk listing.
    fn key_prefix(&self) -> Vec<String>;

    /// Serialize to raw bytes. `None` signals an encoding failure.
    fn value(&self) -> Option<Vec<u8>>;

    /// Decode raw bytes into this record in place.
    fn set_value(&mut self, value: &[u8]) -> Result<(), StoreError>;

    /// Store-assigned version index last seen for this record.
    fn index(&self) -> u64;

    /// Record the store-assigned version index. Also marks the record as
    /// existing in the store.
    fn set_index(&mut self, index: u64);

    /// True once the record has been assigned a version index at least
    /// once.
    fn exists(&self) -> bool;

    /// A zero-value record bound to the same parent, for use as a decode
    /// target. Must not mutate `self`.
    fn new_instance(&self) -> Self;

    /// Replication scope of this record type.
    fn scope(&self) -> Scope;
}
