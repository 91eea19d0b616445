//! Pluggable key-value persistence for driver records.
//!
//! This crate defines the narrow contract between a driver's records and
//! whatever key-value store backs them:
//! - `KvObject`: the operations a record type must support to be stored,
//!   retrieved, and versioned
//! - `DataStore`: the byte-level store interface (keys, blobs, version
//!   indices only)
//! - Typed helpers (`list_objects`, `put_object`, ...) bridging the two
//! - `MemoryStore`: an in-process store for tests and tooling
//!
//! The store never learns record semantics and the records never learn
//! store internals, so either side can be swapped independently.

pub mod error;
pub mod memory;
pub mod object;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use object::{KvObject, Scope};
pub use store::{
    delete_object, get_object, key_path, list_objects, put_object, DataStore, StoreRecord,
};
