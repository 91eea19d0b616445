//! Network value types shared across the workspace.
//!
//! This crate provides the small typed values a driver persists:
//! - Hardware (MAC) addresses
//! - Transport protocols and exposed transport ports
//! - Port bindings (external-to-internal port associations)
//!
//! Every type has a canonical string wire form (`Display`/`FromStr`) used
//! by the persistence codec; the in-memory form is never serialized
//! directly.

pub mod error;
pub mod mac;
pub mod port;

pub use error::{Error, Result};
pub use mac::MacAddress;
pub use port::{PortBinding, Protocol, TransportPort};
