//! IPREF v1 wire constants.
//!
//! Field offsets for every fixed-layout record shape. Codecs read their
//! positions from here and nowhere else.

/// Signature carried in byte 0 of every v1 header
pub const V1_SIG: u8 = 0x11;

/// Fixed header length
pub const V1_HDR_LEN: usize = 8;

/// Mark record length: oid + mark
pub const V1_MARK_LEN: usize = 4 + 4;

/// Reference length on the wire: high + low halves
pub const V1_REF_LEN: usize = 8 + 8;

// Header offsets
pub const V1_VER: usize = 0;
pub const V1_CMD: usize = 1;
pub const V1_PKTID: usize = 2;
/// High nibble is the EA/IP family, low nibble the GW family
pub const V1_IPVER: usize = 4;
pub const V1_RESERVED: usize = 5;
pub const V1_PKTLEN: usize = 6;

// Mark offsets
pub const V1_OID: usize = 0;
pub const V1_MARK: usize = 4;

// Host data offsets (batch id and count share offset 0)
pub const V1_HOST_DATA_BATCHID: usize = 0;
pub const V1_HOST_DATA_COUNT: usize = 0;
pub const V1_HOST_DATA_HASH: usize = 4;
pub const V1_HOST_DATA_SOURCE: usize = 12;

// Save DNS source offsets (mark and xmark alias)
pub const V1_DNSSOURCE_MARK: usize = 4;
pub const V1_DNSSOURCE_XMARK: usize = 4;
pub const V1_DNSSOURCE_HASH: usize = 8;
pub const V1_DNSSOURCE_SOURCE: usize = 16;

/// Item type tag for string payloads
pub const V1_TYPE_STRING: u8 = 4;

/// Version nibble for 4-byte addresses
pub const V1_NIBBLE_IPV4: u8 = 4;
/// Version nibble for 16-byte addresses
pub const V1_NIBBLE_IPV6: u8 = 6;

/// Largest value the 2-byte packet length field can hold
pub const V1_MAX_PKT_LEN: usize = u16::MAX as usize;
