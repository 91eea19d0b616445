//! Per-network endpoint table and the restore protocol.

use std::collections::HashMap;
use std::sync::Arc;

use datastore::{delete_object, list_objects, put_object, DataStore, KvObject, StoreError};
use parking_lot::Mutex;
use tracing::debug;

use crate::endpoint::BridgeEndpoint;

/// A bridge network and its in-memory endpoint table.
///
/// The table owns its records. Callers read through
/// [`endpoint`](BridgeNetwork::endpoint), which clones under the lock, so
/// no reference into shared state ever escapes. The lock is held only for
/// table access, never across store I/O.
pub struct BridgeNetwork {
    id: String,
    store: Arc<dyn DataStore>,
    endpoints: Mutex<HashMap<String, BridgeEndpoint>>,
}

impl BridgeNetwork {
    pub fn new(id: impl Into<String>, store: Arc<dyn DataStore>) -> Self {
        Self {
            id: id.into(),
            store,
            endpoints: Mutex::new(HashMap::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Rebuild the endpoint table from the store.
    ///
    /// Called once after a process restart. An empty key prefix is a
    /// legitimate outcome (the network may have no persisted endpoints);
    /// any other store error is propagated and the table is left
    /// unchanged. Port allocation is not replayed here: the allocator
    /// recognizes in-use resources on its own, so restore only rehydrates
    /// bookkeeping state.
    pub fn restore(&self) -> Result<(), StoreError> {
        let endpoints = self.endpoints_from_store()?;
        let restored = endpoints.len();
        for mut ep in endpoints {
            ep.bind_network(&self.id);
            let mut table = self.endpoints.lock();
            table.insert(ep.id().to_string(), ep);
        }
        debug!(network = %self.id, endpoints = restored, "restored endpoint table");
        Ok(())
    }

    fn endpoints_from_store(&self) -> Result<Vec<BridgeEndpoint>, StoreError> {
        let prototype = BridgeEndpoint::prototype(&self.id);
        match list_objects(self.store.as_ref(), &prototype) {
            Err(StoreError::NotFound) => Ok(Vec::new()),
            Err(err) => {
                debug!(network = %self.id, error = %err, "failed to get bridge endpoints");
                Err(err)
            }
            Ok(endpoints) => Ok(endpoints),
        }
    }

    /// Bind `ep` to this network, persist it, and insert it into the
    /// table. The store-assigned version index is recorded on the stored
    /// copy.
    pub fn add_endpoint(&self, mut ep: BridgeEndpoint) -> Result<(), StoreError> {
        ep.bind_network(&self.id);
        put_object(self.store.as_ref(), &mut ep)?;
        self.endpoints.lock().insert(ep.id().to_string(), ep);
        Ok(())
    }

    /// Owned copy of the endpoint with identifier `id`, if present.
    pub fn endpoint(&self, id: &str) -> Option<BridgeEndpoint> {
        self.endpoints.lock().get(id).cloned()
    }

    /// Remove the endpoint from the table and delete its store record.
    ///
    /// A record the store never had (e.g. the endpoint was never
    /// persisted) is not an error.
    pub fn remove_endpoint(&self, id: &str) -> Result<(), StoreError> {
        let removed = self.endpoints.lock().remove(id);
        let Some(ep) = removed else {
            return Ok(());
        };
        if !ep.exists() {
            return Ok(());
        }
        match delete_object(self.store.as_ref(), &ep) {
            Err(StoreError::NotFound) => Ok(()),
            other => other,
        }
    }

    pub fn endpoint_count(&self) -> usize {
        self.endpoints.lock().len()
    }
}
