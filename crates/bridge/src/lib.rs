//! Bridge-driver endpoint persistence and restore.
//!
//! This crate holds the bridge driver's persisted state:
//! - The endpoint record and its two nested configuration records
//! - An explicit codec between records and their JSON key-value form
//! - The store-record contract implementation for endpoints
//! - The per-network endpoint table and its restore protocol
//!
//! Records are plain owned value types; the network's table owns them and
//! hands out clones, never references into shared state.

pub mod codec;
pub mod endpoint;
pub mod error;
pub mod network;

pub use endpoint::{BridgeEndpoint, ContainerConfig, EndpointConfig, BRIDGE_ENDPOINT_PREFIX};
pub use error::CodecError;
pub use network::BridgeNetwork;
