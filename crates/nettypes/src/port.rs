//! Transport ports and port bindings.
//!
//! # Canonical string forms
//!
//! These types cross a persistence boundary, so each has a single string
//! wire form that `Display` produces and `FromStr` accepts:
//!
//! - `TransportPort` — `80/tcp`
//! - `PortBinding` — `[addr:]port/proto:[host_addr:]host_port`, e.g.
//!   `172.17.0.2:80/tcp:80` or `172.17.0.2:80/tcp:0.0.0.0:8080`
//!
//! Address parts are recovered by splitting on the *right-most* colon of
//! their segment, so bare IPv6 literals (which themselves contain colons)
//! survive a round trip.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::Error;

/// Transport protocol of a port or binding.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Protocol {
    #[default]
    Tcp,
    Udp,
    Sctp,
}

impl Protocol {
    /// Lower-case protocol name as used in the wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Tcp => "tcp",
            Protocol::Udp => "udp",
            Protocol::Sctp => "sctp",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tcp" => Ok(Protocol::Tcp),
            "udp" => Ok(Protocol::Udp),
            "sctp" => Ok(Protocol::Sctp),
            _ => Err(Error::InvalidProtocol(s.to_string())),
        }
    }
}

/// A transport port an endpoint exposes, e.g. `80/tcp`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TransportPort {
    pub port: u16,
    pub proto: Protocol,
}

impl TransportPort {
    pub fn new(port: u16, proto: Protocol) -> Self {
        Self { port, proto }
    }
}

impl fmt::Display for TransportPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.port, self.proto)
    }
}

impl FromStr for TransportPort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (port, proto) = s
            .split_once('/')
            .ok_or_else(|| Error::InvalidTransportPort(s.to_string()))?;
        let port = port
            .parse::<u16>()
            .map_err(|_| Error::InvalidTransportPort(s.to_string()))?;
        let proto = proto
            .parse::<Protocol>()
            .map_err(|_| Error::InvalidTransportPort(s.to_string()))?;
        Ok(Self { port, proto })
    }
}

/// Association between an endpoint-internal port and an externally
/// reachable host port.
///
/// `addr`/`host_addr` are optional; an omitted address means "unspecified"
/// and is left out of the string form entirely.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PortBinding {
    /// Endpoint-side address, if bound to one.
    pub addr: Option<IpAddr>,
    /// Endpoint-side port.
    pub port: u16,
    pub proto: Protocol,
    /// Host-side address, if bound to one.
    pub host_addr: Option<IpAddr>,
    /// Host-side port.
    pub host_port: u16,
}

impl fmt::Display for PortBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(addr) = &self.addr {
            write!(f, "{}:", addr)?;
        }
        write!(f, "{}/{}:", self.port, self.proto)?;
        if let Some(host_addr) = &self.host_addr {
            write!(f, "{}:", host_addr)?;
        }
        write!(f, "{}", self.host_port)
    }
}

impl FromStr for PortBinding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidPortBinding(s.to_string());

        // "[addr:]port" on the left of the slash, "proto:[host_addr:]host_port"
        // on the right.
        let (endpoint, host) = s.split_once('/').ok_or_else(invalid)?;

        let (addr, port) = split_addr_port(endpoint).ok_or_else(invalid)?;
        let (proto, host_rest) = host.split_once(':').ok_or_else(invalid)?;
        let proto = proto.parse::<Protocol>().map_err(|_| invalid())?;
        let (host_addr, host_port) = split_addr_port(host_rest).ok_or_else(invalid)?;

        Ok(Self {
            addr,
            port,
            proto,
            host_addr,
            host_port,
        })
    }
}

/// Split `"[addr:]port"` at the right-most colon.
fn split_addr_port(s: &str) -> Option<(Option<IpAddr>, u16)> {
    match s.rsplit_once(':') {
        Some((addr, port)) => {
            let addr = addr.parse::<IpAddr>().ok()?;
            let port = port.parse::<u16>().ok()?;
            Some((Some(addr), port))
        }
        None => Some((None, s.parse::<u16>().ok()?)),
    }
}
