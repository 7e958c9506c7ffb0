//! # Address Record
//!
//! Wire record pairing EA, IP, GW and a Reference.
//!
//! ## Wire Format
//! ```text
//! [EA(ea_len)] [IP(ea_len)] [GW(gw_len)] [RefHigh(8)] [RefLow(8)]
//! ```
//!
//! Nothing in the record says how wide EA/IP or GW are. Both ends compute
//! the layout from the header's version nibbles, so every offset comes from
//! [`ArecLayout`] and nowhere else.

use crate::core::address::{Address, Family};
use crate::core::reference::Reference;
use crate::error::{check_len, constants, ProtocolError, Result};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Field widths for one address record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArecLayout {
    pub ea_len: usize,
    pub gw_len: usize,
}

/// Sub-views of an encoded record, in wire order
#[derive(Debug)]
pub struct ArecSlices<'a> {
    pub ea: &'a [u8],
    pub ip: &'a [u8],
    pub gw: &'a [u8],
    pub ref_high: &'a [u8],
    pub ref_low: &'a [u8],
}

/// Mutable sub-views of a record buffer, in wire order
#[derive(Debug)]
pub struct ArecSlicesMut<'a> {
    pub ea: &'a mut [u8],
    pub ip: &'a mut [u8],
    pub gw: &'a mut [u8],
    pub ref_high: &'a mut [u8],
    pub ref_low: &'a mut [u8],
}

/// `2 * ea_len + gw_len + 16`, saturating at `usize::MAX` for widths no
/// buffer can hold
pub fn encoded_len(ea_len: usize, gw_len: usize) -> usize {
    ArecLayout::new(ea_len, gw_len).encoded_len()
}

impl ArecLayout {
    pub const fn new(ea_len: usize, gw_len: usize) -> Self {
        Self { ea_len, gw_len }
    }

    pub fn for_families(ea: Family, gw: Family) -> Self {
        Self::new(ea.addr_len(), gw.addr_len())
    }

    /// Field ranges in wire order: EA, IP, GW, RefHigh, RefLow.
    ///
    /// `None` when the widths overflow `usize`.
    pub fn field_ranges(&self) -> Option<[Range<usize>; 5]> {
        let ip_end = self.ea_len.checked_mul(2)?;
        let gw_end = ip_end.checked_add(self.gw_len)?;
        let high_end = gw_end.checked_add(8)?;
        let low_end = high_end.checked_add(8)?;
        Some([
            0..self.ea_len,
            self.ea_len..ip_end,
            ip_end..gw_end,
            gw_end..high_end,
            high_end..low_end,
        ])
    }

    pub fn checked_len(&self) -> Option<usize> {
        self.field_ranges().map(|r| r[4].end)
    }

    pub fn encoded_len(&self) -> usize {
        self.checked_len().unwrap_or(usize::MAX)
    }

    /// Ranges for a buffer of `actual` bytes, which must match exactly
    fn ranges_for(&self, actual: usize) -> Result<[Range<usize>; 5]> {
        let Some(ranges) = self.field_ranges() else {
            tracing::debug!(
                ea_len = self.ea_len,
                gw_len = self.gw_len,
                "record widths overflow"
            );
            return Err(ProtocolError::BufferSize {
                expected: usize::MAX,
                actual,
            });
        };
        check_len(ranges[4].end, actual)?;
        Ok(ranges)
    }

    /// Partition `buf` into its five fields. `buf` must be exactly
    /// [`ArecLayout::encoded_len`] bytes.
    pub fn slices<'a>(&self, buf: &'a [u8]) -> Result<ArecSlices<'a>> {
        let [ea, ip, gw, ref_high, ref_low] = self.ranges_for(buf.len())?;
        Ok(ArecSlices {
            ea: &buf[ea],
            ip: &buf[ip],
            gw: &buf[gw],
            ref_high: &buf[ref_high],
            ref_low: &buf[ref_low],
        })
    }

    pub fn slices_mut<'a>(&self, buf: &'a mut [u8]) -> Result<ArecSlicesMut<'a>> {
        let [ea, ip, gw, ref_high, _] = self.ranges_for(buf.len())?;
        let (rest, ref_low) = buf.split_at_mut(ref_high.end);
        let (rest, ref_high) = rest.split_at_mut(gw.end);
        let (rest, gw) = rest.split_at_mut(ip.end);
        let (ea, ip) = rest.split_at_mut(ea.end);
        Ok(ArecSlicesMut {
            ea,
            ip,
            gw,
            ref_high,
            ref_low,
        })
    }
}

/// Address record: EA and IP always share a width, GW may differ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddrRec {
    pub ea: Address,
    pub ip: Address,
    pub gw: Address,
    pub reference: Reference,
}

impl AddrRec {
    /// Build a record, rejecting EA/IP of different widths
    pub fn new(ea: Address, ip: Address, gw: Address, reference: Reference) -> Result<Self> {
        let rec = Self {
            ea,
            ip,
            gw,
            reference,
        };
        rec.check_widths()?;
        Ok(rec)
    }

    fn check_widths(&self) -> Result<()> {
        if self.ea.len() != self.ip.len() {
            tracing::debug!(
                ea = self.ea.len(),
                ip = self.ip.len(),
                "{}",
                constants::ERR_ADDRESS_MISMATCH
            );
            return Err(ProtocolError::AddressLengthMismatch {
                ea: self.ea.len(),
                ip: self.ip.len(),
            });
        }
        Ok(())
    }

    /// Layout implied by this record's own address widths
    pub fn layout(&self) -> ArecLayout {
        ArecLayout::new(self.ea.len(), self.gw.len())
    }

    pub fn encoded_len(&self) -> usize {
        self.layout().encoded_len()
    }

    /// Encode into `buf`, which must be exactly [`AddrRec::encoded_len`]
    /// bytes. On error `buf` is left untouched.
    pub fn encode(&self, buf: &mut [u8]) -> Result<()> {
        self.check_widths()?;
        let s = self.layout().slices_mut(buf)?;
        s.ea.copy_from_slice(self.ea.as_bytes());
        s.ip.copy_from_slice(self.ip.as_bytes());
        s.gw.copy_from_slice(self.gw.as_bytes());
        s.ref_high.copy_from_slice(&self.reference.high.to_be_bytes());
        s.ref_low.copy_from_slice(&self.reference.low.to_be_bytes());
        Ok(())
    }

    /// Append the encoding to `buf`
    pub fn put(&self, buf: &mut impl BufMut) -> Result<()> {
        self.check_widths()?;
        buf.put_slice(self.ea.as_bytes());
        buf.put_slice(self.ip.as_bytes());
        buf.put_slice(self.gw.as_bytes());
        self.reference.put(buf);
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(self.encoded_len());
        self.put(&mut buf)?;
        Ok(buf.freeze())
    }

    /// Decode a record whose widths the caller takes from the header.
    ///
    /// Only the buffer size is checked. Bytes that were encoded with other
    /// widths decode to a different, well-formed record.
    pub fn decode(ea_len: usize, gw_len: usize, buf: &[u8]) -> Result<Self> {
        Self::decode_with(ArecLayout::new(ea_len, gw_len), buf)
    }

    pub fn decode_with(layout: ArecLayout, buf: &[u8]) -> Result<Self> {
        let s = layout.slices(buf)?;
        let mut ref_high = s.ref_high;
        let mut ref_low = s.ref_low;
        Ok(Self {
            ea: Address::from_slice(s.ea)?,
            ip: Address::from_slice(s.ip)?,
            gw: Address::from_slice(s.gw)?,
            reference: Reference::new(ref_high.get_u64(), ref_low.get_u64()),
        })
    }
}
