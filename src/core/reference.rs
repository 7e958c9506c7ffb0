//! # Reference
//!
//! A 128-bit opaque identifier carried as two 64-bit big-endian halves,
//! high half first.

use crate::core::address::Address;
use crate::error::{check_len, ProtocolError, Result};
use crate::protocol::constants::V1_REF_LEN;
use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    pub high: u64,
    pub low: u64,
}

impl Reference {
    pub const fn new(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    pub const fn from_u128(v: u128) -> Self {
        Self {
            high: (v >> 64) as u64,
            low: v as u64,
        }
    }

    pub const fn as_u128(&self) -> u128 {
        ((self.high as u128) << 64) | self.low as u128
    }

    /// Write exactly 16 bytes into `buf`, which must be 16 bytes long
    pub fn encode(&self, buf: &mut [u8]) -> Result<()> {
        check_len(V1_REF_LEN, buf.len())?;
        let mut out = buf;
        self.put(&mut out);
        Ok(())
    }

    /// Append the 16-byte encoding to `buf`
    pub fn put(&self, buf: &mut impl BufMut) {
        buf.put_u64(self.high);
        buf.put_u64(self.low);
    }

    /// Inverse of [`Reference::encode`]; `buf` must be 16 bytes long
    pub fn decode(buf: &[u8]) -> Result<Self> {
        check_len(V1_REF_LEN, buf.len())?;
        let mut cur = buf;
        Ok(Self {
            high: cur.get_u64(),
            low: cur.get_u64(),
        })
    }

    pub fn to_bytes(&self) -> [u8; V1_REF_LEN] {
        self.as_u128().to_be_bytes()
    }
}

impl From<u128> for Reference {
    fn from(v: u128) -> Self {
        Self::from_u128(v)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.high == 0 {
            write!(f, "{:x}", self.low)
        } else {
            write!(f, "{:x}-{:016x}", self.high, self.low)
        }
    }
}

impl FromStr for Reference {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        let bad =
            |e: std::num::ParseIntError| ProtocolError::InvalidReference(format!("{s}: {e}"));
        match s.split_once('-') {
            None => Ok(Self::new(0, u64::from_str_radix(s, 16).map_err(bad)?)),
            Some((h, l)) => Ok(Self::new(
                u64::from_str_radix(h, 16).map_err(bad)?,
                u64::from_str_radix(l, 16).map_err(bad)?,
            )),
        }
    }
}

/// An address paired with its reference, used for display and lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IpRef {
    pub address: Address,
    pub reference: Reference,
}

impl IpRef {
    pub fn new(address: Address, reference: Reference) -> Self {
        Self { address, reference }
    }
}

impl fmt::Display for IpRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.address, self.reference)
    }
}
