use criterion::{black_box, criterion_group, criterion_main, Criterion};
use edidinfo::ReportConfig;

const SAMPLE_HEX: &str = "00FFFFFFFFFFFF0010AC6BA0534A3730 1513010380342078EAEE91A3544C9926
                          0F5054A54B00714F8180A940D100D140 010101010101283C80A070B023403020
                          360006442100001A000000FF00433539 324D394239354A4A4C0A000000FC0044
                          454C4C2055323431300A2020000000FD 00384C1E5111000A20202020202001A0";

fn sample() -> Vec<u8> {
    edidinfo::input::decode_hex_text(SAMPLE_HEX).unwrap()
}

pub fn bench_parse(c: &mut Criterion) {
    let bytes = sample();
    c.bench_function("parse_edid", |b| {
        b.iter(|| edidinfo::parse_edid(black_box(&bytes)))
    });
}

pub fn bench_render(c: &mut Criterion) {
    let bytes = sample();
    let record = edidinfo::parse_edid(&bytes).unwrap();
    let config = ReportConfig::default();
    c.bench_function("render_text", |b| {
        b.iter(|| edidinfo::render_text(black_box(&record), Some(&bytes), &config))
    });
}

criterion_group!(benches, bench_parse, bench_render);
criterion_main!(benches);
