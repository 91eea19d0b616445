//! Error types for network value parsing.

use std::fmt;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when parsing a value from its string form.
///
/// Each variant carries the offending input so callers can surface it
/// verbatim in their own error context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Not a valid colon-separated MAC address
    InvalidMac(String),
    /// Unknown transport protocol name
    InvalidProtocol(String),
    /// Not a valid `port/proto` pair
    InvalidTransportPort(String),
    /// Not a valid canonical port-binding string
    InvalidPortBinding(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidMac(s) => write!(f, "invalid MAC address: {}", s),
            Error::InvalidProtocol(s) => write!(f, "invalid protocol: {}", s),
            Error::InvalidTransportPort(s) => write!(f, "invalid transport port: {}", s),
            Error::InvalidPortBinding(s) => write!(f, "invalid port binding: {}", s),
        }
    }
}

impl std::error::Error for Error {}
