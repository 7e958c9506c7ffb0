//! # Core Wire Codecs
//!
//! Value types and their byte-exact encodings.
//!
//! ## Components
//! - **Address**: 4- or 16-byte address with its family
//! - **Reference**: 128-bit identifier as two big-endian halves
//! - **AddrRec**: variable-length EA/IP/GW/Ref record
//! - **Header**: fixed 8-byte packet header
//! - **Mark**: fixed 8-byte oid/mark pair
//!
//! Every codec works on caller-owned buffers of an exact size. A buffer of
//! any other size is rejected before a single byte is read or written.

pub mod address;
pub mod arec;
pub mod header;
pub mod mark;
pub mod reference;
