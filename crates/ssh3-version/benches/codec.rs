//! Version string benchmarks for ssh3-version.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ssh3_version::{codec, compat, LocalIdentity};

const ANNOUNCEMENT: &str =
    "SSH 3.0 francoismichel/ssh3 0.1.5 experimental_spec_version=alpha-00 foo=bar";

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.bench_function("announcement", |b| {
        b.iter(|| codec::parse_version_string(black_box(ANNOUNCEMENT)))
    });
    group.bench_function("garbage", |b| {
        b.iter(|| codec::parse_version_string(black_box("garbage")))
    });
    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let version = LocalIdentity::default().version();

    c.bench_function("format_announcement", |b| {
        b.iter(|| codec::format_version_string(black_box(&version)))
    });
}

fn bench_negotiate(c: &mut Criterion) {
    let local = LocalIdentity::default().version();

    c.bench_function("negotiate", |b| {
        b.iter(|| compat::negotiate(black_box(&local), black_box(ANNOUNCEMENT)))
    });
}

criterion_group!(benches, bench_parse, bench_format, bench_negotiate);
criterion_main!(benches);
