//! # ipref-wire
//!
//! Binary wire codec for IPREF v1, the protocol that exchanges mappings
//! between external addresses (EA), internal addresses (IP), gateways (GW)
//! and 128-bit references.
//!
//! ## Wire Format
//! ```text
//! Header  [Sig(1)] [Cmd(1)] [PktId(2)] [IpVer(1)] [Reserved(1)] [PktLen(2)]
//! AddrRec [EA] [IP] [GW] [RefHigh(8)] [RefLow(8)]
//! Mark    [Oid(4)] [Mark(4)]
//! ```
//!
//! Address widths are never tagged on the wire. They come from the header's
//! version nibbles, so every decode is driven by a layout computed up front.
//!
//! ## Example
//! ```rust
//! use ipref_wire::{AddrRec, Reference};
//!
//! let rec = AddrRec::new(
//!     "192.0.2.1".parse()?,
//!     "10.1.1.1".parse()?,
//!     "10.0.0.1".parse()?,
//!     Reference::new(0, 42),
//! )?;
//! let mut buf = vec![0u8; rec.encoded_len()];
//! rec.encode(&mut buf)?;
//! assert_eq!(AddrRec::decode(4, 4, &buf)?, rec);
//! # Ok::<(), ipref_wire::ProtocolError>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;
pub mod utils;

pub use crate::core::address::{Address, Family};
pub use crate::core::arec::{encoded_len, AddrRec, ArecLayout};
pub use crate::core::header::Header;
pub use crate::core::mark::Mark;
pub use crate::core::reference::{IpRef, Reference};
pub use crate::error::{ProtocolError, Result};
pub use crate::protocol::command::{Command, Mode, Opcode};
