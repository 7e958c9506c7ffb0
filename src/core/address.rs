//! # Variable-Width Address
//!
//! An IPREF address is exactly 4 or 16 bytes. The wire carries no length
//! tag, so the width travels separately as a [`Family`] derived from the
//! header's version nibble.

use crate::error::{ProtocolError, Result};
use crate::protocol::constants::{V1_NIBBLE_IPV4, V1_NIBBLE_IPV6};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Address family, selecting a 4- or 16-byte width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Map a header version nibble to a family
    pub fn from_nibble(nibble: u8) -> Result<Self> {
        match nibble {
            V1_NIBBLE_IPV4 => Ok(Family::V4),
            V1_NIBBLE_IPV6 => Ok(Family::V6),
            other => {
                tracing::debug!(nibble = other, "unsupported address family nibble");
                Err(ProtocolError::InvalidFamily(other))
            }
        }
    }

    pub fn nibble(self) -> u8 {
        match self {
            Family::V4 => V1_NIBBLE_IPV4,
            Family::V6 => V1_NIBBLE_IPV6,
        }
    }

    pub fn addr_len(self) -> usize {
        match self {
            Family::V4 => 4,
            Family::V6 => 16,
        }
    }

    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            4 => Ok(Family::V4),
            16 => Ok(Family::V6),
            other => Err(ProtocolError::InvalidLength(other)),
        }
    }
}

/// A 4- or 16-byte network address, immutable once built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    V4([u8; 4]),
    V6([u8; 16]),
}

impl Address {
    /// Build from a slice of exactly 4 or 16 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if let Ok(b) = <[u8; 4]>::try_from(bytes) {
            return Ok(Address::V4(b));
        }
        if let Ok(b) = <[u8; 16]>::try_from(bytes) {
            return Ok(Address::V6(b));
        }
        tracing::debug!(len = bytes.len(), "invalid address length");
        Err(ProtocolError::InvalidLength(bytes.len()))
    }

    /// Byte length, always 4 or 16
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.family().addr_len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Address::V4(b) => b,
            Address::V6(b) => b,
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Address::V4(_) => Family::V4,
            Address::V6(_) => Family::V6,
        }
    }

    pub fn to_ip(self) -> IpAddr {
        match self {
            Address::V4(b) => IpAddr::V4(Ipv4Addr::from(b)),
            Address::V6(b) => IpAddr::V6(Ipv6Addr::from(b)),
        }
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Address::V4(ip.octets())
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Self {
        Address::V6(ip.octets())
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        addr.to_ip()
    }
}

impl FromStr for Address {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<IpAddr>()
            .map(Address::from)
            .map_err(|e| ProtocolError::InvalidAddress(format!("{s}: {e}")))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_ip().fmt(f)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
