//! # Packet Header
//!
//! ## Wire Format
//! ```text
//! [Sig(1)=0x11] [Cmd(1)] [PktId(2)] [IpVer(1)] [Reserved(1)] [PktLen(2)]
//! ```
//!
//! `IpVer` packs the EA/IP family in its high nibble and the GW family in
//! its low nibble. Callers size address records from these nibbles, never
//! from the buffer length.

use crate::core::address::Family;
use crate::core::arec::ArecLayout;
use crate::error::{check_len, constants, fixed_mut, ProtocolError, Result};
use crate::protocol::command::Command;
use crate::protocol::constants::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub command: Command,
    pub packet_id: u16,
    /// Raw version nibble pair, EA/IP high and GW low
    pub ipver: u8,
    pub reserved: u8,
    pub packet_len: u16,
}

impl Header {
    pub fn new(command: Command, packet_id: u16) -> Self {
        Self {
            command,
            packet_id,
            ipver: 0,
            reserved: 0,
            packet_len: V1_HDR_LEN as u16,
        }
    }

    /// Set both version nibbles from address families
    pub fn with_families(mut self, ea: Family, gw: Family) -> Self {
        self.ipver = (ea.nibble() << 4) | gw.nibble();
        self
    }

    pub fn with_packet_len(mut self, packet_len: u16) -> Self {
        self.packet_len = packet_len;
        self
    }

    pub fn ea_version_nibble(&self) -> u8 {
        self.ipver >> 4
    }

    pub fn gw_version_nibble(&self) -> u8 {
        self.ipver & 0x0F
    }

    /// Record layout selected by the version nibbles
    pub fn arec_layout(&self) -> Result<ArecLayout> {
        let ea = Family::from_nibble(self.ea_version_nibble())?;
        let gw = Family::from_nibble(self.gw_version_nibble())?;
        Ok(ArecLayout::for_families(ea, gw))
    }

    fn write_into(&self, buf: &mut [u8; V1_HDR_LEN]) {
        buf[V1_VER] = V1_SIG;
        buf[V1_CMD] = self.command.raw();
        buf[V1_PKTID..V1_PKTID + 2].copy_from_slice(&self.packet_id.to_be_bytes());
        buf[V1_IPVER] = self.ipver;
        buf[V1_RESERVED] = self.reserved;
        buf[V1_PKTLEN..V1_PKTLEN + 2].copy_from_slice(&self.packet_len.to_be_bytes());
    }

    /// Write the 8 header bytes; `buf` must be exactly 8 bytes
    pub fn encode(&self, buf: &mut [u8]) -> Result<()> {
        self.write_into(fixed_mut(buf)?);
        Ok(())
    }

    pub fn to_bytes(&self) -> [u8; V1_HDR_LEN] {
        let mut buf = [0u8; V1_HDR_LEN];
        self.write_into(&mut buf);
        buf
    }

    /// Parse the 8 header bytes; `buf` must be exactly 8 bytes
    pub fn decode(buf: &[u8]) -> Result<Self> {
        check_len(V1_HDR_LEN, buf.len())?;
        if buf[V1_VER] != V1_SIG {
            tracing::debug!(sig = buf[V1_VER], "{}", constants::ERR_BAD_SIGNATURE);
            return Err(ProtocolError::BadSignature(buf[V1_VER]));
        }
        Ok(Self {
            command: Command::from_byte(buf[V1_CMD]),
            packet_id: u16::from_be_bytes([buf[V1_PKTID], buf[V1_PKTID + 1]]),
            ipver: buf[V1_IPVER],
            reserved: buf[V1_RESERVED],
            packet_len: u16::from_be_bytes([buf[V1_PKTLEN], buf[V1_PKTLEN + 1]]),
        })
    }

    /// Parse the header at the front of a whole packet
    pub fn decode_prefix(packet: &[u8]) -> Result<Self> {
        match packet.get(..V1_HDR_LEN) {
            Some(head) => Self::decode(head),
            None => {
                tracing::debug!(len = packet.len(), "packet shorter than header");
                Err(ProtocolError::BufferSize {
                    expected: V1_HDR_LEN,
                    actual: packet.len(),
                })
            }
        }
    }
}
