#![no_main]

use ipref_wire::config::CodecConfig;
use ipref_wire::protocol::packet::{decode_arec_packet, decode_mark_packet};
use ipref_wire::AddrRec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz packet and record decoding - test for panics and out-of-bounds reads
    let config = CodecConfig::default();
    let _ = decode_arec_packet(data, &config);
    let _ = decode_mark_packet(data, &config);
    for (ea, gw) in [(4, 4), (4, 16), (16, 4), (16, 16)] {
        let _ = AddrRec::decode(ea, gw, data);
    }
});
