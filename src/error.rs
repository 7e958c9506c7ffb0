//! # Error Types
//!
//! Error handling for the IPREF v1 wire codec.
//!
//! Every codec operation is synchronous and local to the call: it either
//! succeeds completely or returns one of the variants below without having
//! written or partially decoded anything.
//!
//! ## Error Categories
//! - **Wire Errors**: bad signature, unknown opcode, unsupported address family
//! - **Contract Errors**: EA/IP width mismatch, wrong buffer size, bad address length
//! - **Parse Errors**: textual addresses and references
//! - **Configuration Errors**: TOML and environment loading
//!
//! ## Example Usage
//! ```rust
//! use ipref_wire::core::header::Header;
//! use ipref_wire::error::ProtocolError;
//! use tracing::warn;
//!
//! let raw = [0x10, 0, 0, 0, 0x44, 0, 0, 8];
//! match Header::decode(&raw) {
//!     Err(ProtocolError::BadSignature(sig)) => warn!(sig, "dropping packet"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Static error messages shared by the codec and config layers.
pub mod constants {
    /// Wire validation errors
    pub const ERR_BAD_SIGNATURE: &str = "Packet signature is not IPREF v1";
    pub const ERR_BUFFER_SIZE: &str = "Buffer size does not match encoded length";
    pub const ERR_ADDRESS_MISMATCH: &str = "EA and IP address lengths differ";

    /// Configuration errors
    pub const ERR_CONFIG_PARSE: &str = "Failed to parse TOML";
    pub const ERR_SUBSCRIBER_SET: &str = "A global tracing subscriber is already installed";
}

// ProtocolError is the error type for all codec operations
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    #[serde(skip_serializing, skip_deserializing)]
    Io(#[from] io::Error),

    #[error("Bad packet signature: {0:#04x}")]
    BadSignature(u8),

    #[error("Address length mismatch: EA is {ea} bytes, IP is {ip} bytes")]
    AddressLengthMismatch { ea: usize, ip: usize },

    #[error("Invalid address length: {0} bytes (expected 4 or 16)")]
    InvalidLength(usize),

    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Unsupported address family nibble: {0}")]
    InvalidFamily(u8),

    #[error("Unknown command opcode: {0:#04x}")]
    UnknownCommand(u8),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Packet length mismatch: header declares {declared} bytes, got {actual}")]
    PacketLengthMismatch { declared: usize, actual: usize },

    #[error("Mixed address families not allowed: EA nibble {ea}, GW nibble {gw}")]
    MixedFamily { ea: u8, gw: u8 },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Fails with [`ProtocolError::BufferSize`] unless `actual == expected`.
#[inline]
pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        tracing::debug!(expected, actual, "{}", constants::ERR_BUFFER_SIZE);
        return Err(ProtocolError::BufferSize { expected, actual });
    }
    Ok(())
}

/// View an exactly-`N`-byte buffer as a fixed array
pub(crate) fn fixed_mut<const N: usize>(buf: &mut [u8]) -> Result<&mut [u8; N]> {
    let actual = buf.len();
    buf.try_into().map_err(|_| {
        tracing::debug!(expected = N, actual, "{}", constants::ERR_BUFFER_SIZE);
        ProtocolError::BufferSize { expected: N, actual }
    })
}
