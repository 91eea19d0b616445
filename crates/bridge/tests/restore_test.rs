//! End-to-end tests for endpoint persistence and restore.
//!
//! # Test Strategy
//!
//! 1. **Round trip**: persist through the store-record contract, restore
//!    into a fresh table
//! 2. **Absence**: restoring a network with no persisted endpoints
//! 3. **Failure propagation**: a store error other than not-found
//! 4. **Isolation**: networks never see each other's records
//! 5. **Ownership**: handed-out records are independent copies

use std::sync::Arc;

use bridge::{BridgeEndpoint, BridgeNetwork, ContainerConfig, EndpointConfig};
use datastore::{DataStore, KvObject, MemoryStore, StoreError, StoreRecord};
use nettypes::{Protocol, TransportPort};

fn sample_endpoint(network_id: &str, id: &str) -> BridgeEndpoint {
    let mut ep = BridgeEndpoint::new(network_id, id, format!("veth-{id}"));
    ep.addr = Some("10.0.0.5/24".parse().unwrap());
    ep.addrv6 = Some("fd00::5/64".parse().unwrap());
    ep.mac_address = Some("02:42:ac:11:00:02".parse().unwrap());
    ep.config = Some(EndpointConfig {
        mac_address: None,
        port_bindings: vec!["172.17.0.2:443/tcp:443".parse().unwrap()],
        exposed_ports: vec![TransportPort::new(443, Protocol::Tcp)],
    });
    ep.container_config = Some(ContainerConfig {
        parent_endpoints: vec!["parent-ep".to_string()],
        child_endpoints: vec!["child-ep".to_string()],
    });
    ep.port_mapping = vec!["172.17.0.2:80/tcp:80".parse().unwrap()];
    ep
}

// ============================================================================
// Round Trip
// ============================================================================

#[test]
fn test_restore_rebuilds_table_from_store() {
    let store = Arc::new(MemoryStore::new());

    let network = BridgeNetwork::new("net1", store.clone());
    network.add_endpoint(sample_endpoint("net1", "ep1")).unwrap();
    network.add_endpoint(sample_endpoint("net1", "ep2")).unwrap();

    // Simulate a process restart: a fresh network over the same store.
    let restarted = BridgeNetwork::new("net1", store);
    assert_eq!(restarted.endpoint_count(), 0);
    restarted.restore().unwrap();
    assert_eq!(restarted.endpoint_count(), 2);

    let ep1 = restarted.endpoint("ep1").expect("ep1 restored");
    assert_eq!(ep1.network_id(), "net1");
    assert_eq!(ep1.src_name, "veth-ep1");
    assert_eq!(ep1.addr.unwrap().to_string(), "10.0.0.5/24");
    assert_eq!(ep1.port_mapping.len(), 1);
    assert!(ep1.exists(), "restored records carry their store index");
    assert!(ep1.index() > 0);

    // Everything except the store bookkeeping round-trips deep-equal.
    let original = sample_endpoint("net1", "ep1");
    assert_eq!(ep1.config, original.config);
    assert_eq!(ep1.container_config, original.container_config);
    assert_eq!(ep1.port_mapping, original.port_mapping);
    assert_eq!(ep1.addrv6, original.addrv6);
    assert_eq!(ep1.mac_address, original.mac_address);
}

#[test]
fn test_restore_bare_endpoint() {
    // No optional fields set at all.
    let store = Arc::new(MemoryStore::new());
    let network = BridgeNetwork::new("net1", store.clone());
    network
        .add_endpoint(BridgeEndpoint::new("net1", "plain", "veth9"))
        .unwrap();

    let restarted = BridgeNetwork::new("net1", store);
    restarted.restore().unwrap();
    let ep = restarted.endpoint("plain").unwrap();
    assert_eq!(ep.addr, None);
    assert_eq!(ep.addrv6, None);
    assert_eq!(ep.mac_address, None);
    assert_eq!(ep.config, None);
    assert_eq!(ep.container_config, None);
    assert!(ep.port_mapping.is_empty());
}

// ============================================================================
// Absence and Failure
// ============================================================================

#[test]
fn test_restore_empty_prefix_is_not_an_error() {
    let store = Arc::new(MemoryStore::new());
    let network = BridgeNetwork::new("net-empty", store);

    network.restore().unwrap();
    assert_eq!(network.endpoint_count(), 0);
}

/// A store whose list calls always fail.
struct BrokenStore;

impl DataStore for BrokenStore {
    fn list(&self, _prefix: &str) -> Result<Vec<StoreRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn get(&self, _key: &str) -> Result<StoreRecord, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn put(&self, _key: &str, _value: &[u8], _index: u64) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn delete(&self, _key: &str, _index: u64) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

#[test]
fn test_restore_propagates_listing_errors() {
    let network = BridgeNetwork::new("net1", Arc::new(BrokenStore));

    let err = network.restore().unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
    assert_eq!(network.endpoint_count(), 0, "table left unchanged");
}

#[test]
fn test_restore_surfaces_corrupt_records() {
    let store = Arc::new(MemoryStore::new());
    store
        .put("bridge_endpoint/net1/bad", br#"{"srcName":"veth0"}"#, 0)
        .unwrap();

    let network = BridgeNetwork::new("net1", store);
    let err = network.restore().unwrap_err();
    assert!(matches!(err, StoreError::InvalidValue(_)));
    assert_eq!(network.endpoint_count(), 0);
}

// ============================================================================
// Isolation
// ============================================================================

#[test]
fn test_networks_restore_independently() {
    let store = Arc::new(MemoryStore::new());
    BridgeNetwork::new("net1", store.clone())
        .add_endpoint(sample_endpoint("net1", "ep1"))
        .unwrap();
    BridgeNetwork::new("net2", store.clone())
        .add_endpoint(sample_endpoint("net2", "ep2"))
        .unwrap();

    let net1 = BridgeNetwork::new("net1", store.clone());
    net1.restore().unwrap();
    assert_eq!(net1.endpoint_count(), 1);
    assert!(net1.endpoint("ep1").is_some());
    assert!(net1.endpoint("ep2").is_none());

    // A failing restore of one network leaves another's table intact.
    let net2 = BridgeNetwork::new("net2", store);
    net2.restore().unwrap();
    let broken = BridgeNetwork::new("net3", Arc::new(BrokenStore));
    assert!(broken.restore().is_err());
    assert_eq!(net2.endpoint_count(), 1);
}

// ============================================================================
// Ownership
// ============================================================================

#[test]
fn test_handed_out_records_are_owned_copies() {
    let store = Arc::new(MemoryStore::new());
    let network = BridgeNetwork::new("net1", store);
    network.add_endpoint(sample_endpoint("net1", "ep1")).unwrap();

    let mut copy = network.endpoint("ep1").unwrap();
    copy.port_mapping.clear();
    copy.src_name = "mutated".to_string();

    // The table's record is unaffected by mutation of the copy.
    let fresh = network.endpoint("ep1").unwrap();
    assert_eq!(fresh.port_mapping.len(), 1);
    assert_eq!(fresh.src_name, "veth-ep1");
}

#[test]
fn test_remove_endpoint_deletes_store_record() {
    let store = Arc::new(MemoryStore::new());
    let network = BridgeNetwork::new("net1", store.clone());
    network.add_endpoint(sample_endpoint("net1", "ep1")).unwrap();
    assert_eq!(store.len(), 1);

    network.remove_endpoint("ep1").unwrap();
    assert_eq!(network.endpoint_count(), 0);
    assert_eq!(store.len(), 0);

    // Removing an unknown endpoint is a no-op.
    network.remove_endpoint("ghost").unwrap();
}
