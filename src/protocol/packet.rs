//! Single-record packets.
//!
//! Helpers that join a header to one address record or one mark. The header
//! nibbles decide how the record is sliced; the buffer length is only used
//! to cross-check the header's length field.

use crate::config::CodecConfig;
use crate::core::arec::AddrRec;
use crate::core::header::Header;
use crate::core::mark::Mark;
use crate::error::{ProtocolError, Result};
use crate::protocol::command::Command;
use crate::protocol::constants::{V1_HDR_LEN, V1_MARK_LEN, V1_MAX_PKT_LEN};
use tracing::{debug, instrument};

/// Total length of a packet carrying `rec`
pub fn arec_packet_len(rec: &AddrRec) -> usize {
    V1_HDR_LEN + rec.encoded_len()
}

fn packet_len_field(total: usize) -> Result<u16> {
    u16::try_from(total).map_err(|_| ProtocolError::BufferSize {
        expected: V1_MAX_PKT_LEN,
        actual: total,
    })
}

/// Encode header and record into `buf`, which must be exactly
/// [`arec_packet_len`] bytes. Returns the number of bytes written.
pub fn encode_arec_packet(
    command: Command,
    packet_id: u16,
    rec: &AddrRec,
    buf: &mut [u8],
) -> Result<usize> {
    let total = arec_packet_len(rec);
    if buf.len() != total {
        return Err(ProtocolError::BufferSize {
            expected: total,
            actual: buf.len(),
        });
    }
    let header = Header::new(command, packet_id)
        .with_families(rec.ea.family(), rec.gw.family())
        .with_packet_len(packet_len_field(total)?);

    let (head, body) = buf.split_at_mut(V1_HDR_LEN);
    // record first: a width mismatch must leave the whole buffer untouched
    rec.encode(body)?;
    header.encode(head)?;
    Ok(total)
}

/// Decode a packet holding exactly one address record
#[instrument(level = "trace", skip_all, fields(len = packet.len()))]
pub fn decode_arec_packet(packet: &[u8], config: &CodecConfig) -> Result<(Header, AddrRec)> {
    let header = decode_checked_header(packet, config)?;

    if !config.allow_mixed_gateway_family
        && header.ea_version_nibble() != header.gw_version_nibble()
    {
        debug!(ipver = header.ipver, "mixed gateway family rejected");
        return Err(ProtocolError::MixedFamily {
            ea: header.ea_version_nibble(),
            gw: header.gw_version_nibble(),
        });
    }

    let layout = header.arec_layout()?;
    let rec = AddrRec::decode_with(layout, &packet[V1_HDR_LEN..])?;
    Ok((header, rec))
}

pub fn encode_mark_packet(
    command: Command,
    packet_id: u16,
    mark: &Mark,
    buf: &mut [u8],
) -> Result<usize> {
    let total = V1_HDR_LEN + V1_MARK_LEN;
    if buf.len() != total {
        return Err(ProtocolError::BufferSize {
            expected: total,
            actual: buf.len(),
        });
    }
    let (head, body) = buf.split_at_mut(V1_HDR_LEN);
    Header::new(command, packet_id)
        .with_packet_len(total as u16)
        .encode(head)?;
    mark.encode(body)?;
    Ok(total)
}

/// Decode a packet holding exactly one mark
#[instrument(level = "trace", skip_all, fields(len = packet.len()))]
pub fn decode_mark_packet(packet: &[u8], config: &CodecConfig) -> Result<(Header, Mark)> {
    let header = decode_checked_header(packet, config)?;
    let mark = Mark::decode(&packet[V1_HDR_LEN..])?;
    Ok((header, mark))
}

/// Size policy shared by every packet decoder, then the header itself
fn decode_checked_header(packet: &[u8], config: &CodecConfig) -> Result<Header> {
    let actual = packet.len();
    if actual > config.max_packet_len {
        debug!(max = config.max_packet_len, "packet exceeds configured maximum");
        return Err(ProtocolError::BufferSize {
            expected: config.max_packet_len,
            actual,
        });
    }

    let header = Header::decode_prefix(packet)?;
    let declared = header.packet_len as usize;
    if config.verify_packet_length && declared != actual {
        debug!(declared, actual, "header length disagrees with packet");
        return Err(ProtocolError::PacketLengthMismatch { declared, actual });
    }
    Ok(header)
}
