//! Hardware (MAC) address newtype.
//!
//! Kept as a fixed six-byte array so copies are trivial and there is no
//! "present but empty" state: an absent address is `Option::None`, never a
//! zero-length buffer.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A 48-bit hardware address.
///
/// Newtype over `[u8; 6]` so the value is `Copy` and comparisons are cheap.
/// The canonical string form is lower-case colon-separated hex,
/// e.g. `02:42:ac:11:00:02`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Construct from raw octets.
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// The six raw octets, in transmission order.
    pub fn octets(&self) -> [u8; 6] {
        self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            o[0], o[1], o[2], o[3], o[4], o[5]
        )
    }
}

impl FromStr for MacAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut octets = [0u8; 6];
        let mut count = 0;
        for part in s.split(':') {
            if count == 6 || part.len() != 2 {
                return Err(Error::InvalidMac(s.to_string()));
            }
            octets[count] = u8::from_str_radix(part, 16)
                .map_err(|_| Error::InvalidMac(s.to_string()))?;
            count += 1;
        }
        if count != 6 {
            return Err(Error::InvalidMac(s.to_string()));
        }
        Ok(Self(octets))
    }
}
