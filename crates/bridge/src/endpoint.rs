//! Endpoint records and their store-record contract.

use datastore::{key_path, KvObject, Scope, StoreError};
use ipnetwork::{Ipv4Network, Ipv6Network};
use nettypes::{MacAddress, PortBinding, TransportPort};

use crate::codec;

/// Record-kind tag leading every endpoint store key.
pub const BRIDGE_ENDPOINT_PREFIX: &str = "bridge_endpoint";

/// User-requested configuration for an endpoint.
///
/// Owned exclusively by its parent record; duplicating the record clones
/// this too, never shares it.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EndpointConfig {
    pub mac_address: Option<MacAddress>,
    pub port_bindings: Vec<PortBinding>,
    pub exposed_ports: Vec<TransportPort>,
}

/// Linkage metadata between endpoints of linked containers.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ContainerConfig {
    pub parent_endpoints: Vec<String>,
    pub child_endpoints: Vec<String>,
}

/// One network endpoint's persisted state.
///
/// The record carries the identifier of its owning network instead of a
/// back-pointer; key derivation and prototype construction need nothing
/// more, and the network's table stays the single owner of the record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgeEndpoint {
    network_id: String,
    id: String,
    pub src_name: String,
    /// Primary address in CIDR form, host bits preserved.
    pub addr: Option<Ipv4Network>,
    /// Secondary (IPv6) address in CIDR form.
    pub addrv6: Option<Ipv6Network>,
    pub mac_address: Option<MacAddress>,
    pub config: Option<EndpointConfig>,
    pub container_config: Option<ContainerConfig>,
    /// External-to-internal port bindings, in creation order.
    pub port_mapping: Vec<PortBinding>,
    db_index: u64,
    db_exists: bool,
}

impl BridgeEndpoint {
    /// Create a fresh endpoint record bound to `network_id`.
    pub fn new(
        network_id: impl Into<String>,
        id: impl Into<String>,
        src_name: impl Into<String>,
    ) -> Self {
        Self {
            network_id: network_id.into(),
            id: id.into(),
            src_name: src_name.into(),
            addr: None,
            addrv6: None,
            mac_address: None,
            config: None,
            container_config: None,
            port_mapping: Vec::new(),
            db_index: 0,
            db_exists: false,
        }
    }

    /// A zero-value record bound to `network_id`, used as a decode target
    /// and for key-prefix derivation.
    pub fn prototype(network_id: impl Into<String>) -> Self {
        Self::new(network_id, "", "")
    }

    /// Endpoint identifier, unique within a network. Immutable after
    /// creation.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Identifier of the owning network.
    pub fn network_id(&self) -> &str {
        &self.network_id
    }

    /// Re-bind the record to its owning network, e.g. after it has been
    /// decoded from the store.
    pub(crate) fn bind_network(&mut self, network_id: &str) {
        self.network_id = network_id.to_string();
    }

    pub(crate) fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl KvObject for BridgeEndpoint {
    fn key(&self) -> Vec<String> {
        vec![
            BRIDGE_ENDPOINT_PREFIX.to_string(),
            self.network_id.clone(),
            self.id.clone(),
        ]
    }

    fn key_prefix(&self) -> Vec<String> {
        vec![BRIDGE_ENDPOINT_PREFIX.to_string(), self.network_id.clone()]
    }

    fn value(&self) -> Option<Vec<u8>> {
        codec::endpoint_to_bytes(self).ok()
    }

    fn set_value(&mut self, value: &[u8]) -> Result<(), StoreError> {
        codec::endpoint_from_bytes(self, value)?;
        Ok(())
    }

    fn index(&self) -> u64 {
        self.db_index
    }

    fn set_index(&mut self, index: u64) {
        self.db_index = index;
        self.db_exists = true;
    }

    fn exists(&self) -> bool {
        self.db_exists
    }

    fn new_instance(&self) -> Self {
        Self::prototype(&self.network_id)
    }

    fn scope(&self) -> Scope {
        Scope::Local
    }
}

impl BridgeEndpoint {
    /// Flat store key of this record.
    pub fn store_key(&self) -> String {
        key_path(&self.key())
    }
}
