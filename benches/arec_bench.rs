use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ipref_wire::core::address::Address;
use ipref_wire::core::arec::AddrRec;
use ipref_wire::core::header::Header;
use ipref_wire::core::reference::Reference;

#[allow(clippy::unwrap_used)]
fn bench_arec_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("arec_encode_decode");
    let records = [
        ("v4_v4", Address::V4([192, 0, 2, 1]), Address::V4([10, 0, 0, 1])),
        ("v4_v6", Address::V4([192, 0, 2, 1]), Address::V6([0x20; 16])),
        ("v6_v6", Address::V6([0xFD; 16]), Address::V6([0x20; 16])),
    ];

    for (name, ea, gw) in records {
        let rec = AddrRec::new(ea, ea, gw, Reference::new(1, 2)).unwrap();
        let len = rec.encoded_len();
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_function(format!("encode_{name}"), |b| {
            let mut buf = vec![0u8; len];
            b.iter(|| black_box(&rec).encode(&mut buf).unwrap())
        });
        group.bench_function(format!("decode_{name}"), |b| {
            let buf = rec.to_bytes().unwrap();
            b.iter(|| {
                let decoded = AddrRec::decode(ea.len(), gw.len(), black_box(&buf));
                assert!(decoded.is_ok());
            })
        });
    }

    group.finish();
}

#[allow(clippy::unwrap_used)]
fn bench_header_decode(c: &mut Criterion) {
    let raw = [0x11, 0x41, 0x00, 0x01, 0x44, 0x00, 0x00, 0x20];
    c.bench_function("header_decode", |b| {
        b.iter(|| Header::decode(black_box(&raw)).unwrap())
    });
}

criterion_group!(benches, bench_arec_encode_decode, bench_header_decode);
criterion_main!(benches);
