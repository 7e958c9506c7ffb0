//! Property-based tests using proptest
//!
//! These tests validate codec invariants across randomly generated records,
//! headers and buffers.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use ipref_wire::config::CodecConfig;
use ipref_wire::core::address::Address;
use ipref_wire::core::arec::{encoded_len, AddrRec};
use ipref_wire::core::header::Header;
use ipref_wire::core::mark::Mark;
use ipref_wire::core::reference::Reference;
use ipref_wire::protocol::command::Command;
use ipref_wire::protocol::packet::{arec_packet_len, decode_arec_packet, encode_arec_packet};
use proptest::prelude::*;

fn any_address() -> impl Strategy<Value = Address> {
    prop_oneof![
        any::<[u8; 4]>().prop_map(Address::V4),
        any::<[u8; 16]>().prop_map(Address::V6),
    ]
}

/// EA and IP share a family; GW is drawn independently
fn any_arec() -> impl Strategy<Value = AddrRec> {
    let pair = prop_oneof![
        (any::<[u8; 4]>(), any::<[u8; 4]>()).prop_map(|(a, b)| (Address::V4(a), Address::V4(b))),
        (any::<[u8; 16]>(), any::<[u8; 16]>())
            .prop_map(|(a, b)| (Address::V6(a), Address::V6(b))),
    ];
    (pair, any_address(), any::<u64>(), any::<u64>()).prop_map(|((ea, ip), gw, h, l)| AddrRec {
        ea,
        ip,
        gw,
        reference: Reference::new(h, l),
    })
}

// Property: reference encoding round-trips for every (high, low)
proptest! {
    #[test]
    fn prop_reference_roundtrip(high in any::<u64>(), low in any::<u64>()) {
        let r = Reference::new(high, low);
        let mut buf = [0u8; 16];
        r.encode(&mut buf).expect("16-byte buffer");
        prop_assert_eq!(Reference::decode(&buf).expect("16-byte buffer"), r);
    }
}

// Property: any 16 bytes decode and re-encode to themselves
proptest! {
    #[test]
    fn prop_reference_bytes_roundtrip(bytes in any::<[u8; 16]>()) {
        let r = Reference::decode(&bytes).expect("16-byte buffer");
        prop_assert_eq!(r.to_bytes(), bytes);
    }
}

// Property: address records round-trip with widths taken from the record
proptest! {
    #[test]
    fn prop_arec_roundtrip(rec in any_arec()) {
        let mut buf = vec![0u8; encoded_len(rec.ea.len(), rec.gw.len())];
        rec.encode(&mut buf).expect("matching widths");
        let back = AddrRec::decode(rec.ea.len(), rec.gw.len(), &buf).expect("exact buffer");
        prop_assert_eq!(back, rec);
    }
}

// Property: slice-encode and append-encode produce identical bytes
proptest! {
    #[test]
    fn prop_arec_put_matches_encode(rec in any_arec()) {
        let mut fixed = vec![0u8; rec.encoded_len()];
        rec.encode(&mut fixed).expect("matching widths");
        let appended = rec.to_bytes().expect("matching widths");
        prop_assert_eq!(appended.as_ref(), fixed.as_slice());
    }
}

// Property: EA/IP width mismatch is always rejected
proptest! {
    #[test]
    fn prop_arec_mismatch_rejected(v4 in any::<[u8; 4]>(), v6 in any::<[u8; 16]>(), gw in any_address(), swap in any::<bool>()) {
        let (ea, ip) = if swap { (Address::V6(v6), Address::V4(v4)) } else { (Address::V4(v4), Address::V6(v6)) };
        prop_assert!(AddrRec::new(ea, ip, gw, Reference::default()).is_err());
    }
}

// Property: decoding arbitrary bytes never panics
proptest! {
    #[test]
    fn prop_decode_arbitrary_never_panics(data in prop::collection::vec(any::<u8>(), 0..128), ea in 0usize..20, gw in 0usize..20) {
        let _ = AddrRec::decode(ea, gw, &data);
        let _ = Header::decode(&data);
        let _ = Header::decode_prefix(&data);
        let _ = Mark::decode(&data);
        let _ = decode_arec_packet(&data, &CodecConfig::default());
    }
}

// Property: header fields survive a round trip
proptest! {
    #[test]
    fn prop_header_roundtrip(cmd in any::<u8>(), id in any::<u16>(), ipver in any::<u8>(), reserved in any::<u8>(), len in any::<u16>()) {
        let h = Header { command: Command::from_byte(cmd), packet_id: id, ipver, reserved, packet_len: len };
        let back = Header::decode(&h.to_bytes()).expect("signature is set by encode");
        prop_assert_eq!(back, h);
    }
}

// Property: mark fields survive a round trip
proptest! {
    #[test]
    fn prop_mark_roundtrip(oid in any::<u32>(), mark in any::<u32>()) {
        let m = Mark::new(oid, mark);
        prop_assert_eq!(Mark::decode(&m.to_bytes()).expect("8-byte buffer"), m);
    }
}

// Property: whole packets round-trip through the header nibbles
proptest! {
    #[test]
    fn prop_arec_packet_roundtrip(rec in any_arec(), id in any::<u16>()) {
        let mut buf = vec![0u8; arec_packet_len(&rec)];
        encode_arec_packet(Command::from_byte(1), id, &rec, &mut buf).expect("valid record");
        let (h, back) = decode_arec_packet(&buf, &CodecConfig::default()).expect("valid packet");
        prop_assert_eq!(h.packet_id, id);
        prop_assert_eq!(back, rec);
    }
}
