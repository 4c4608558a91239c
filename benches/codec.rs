use bech32key::{decode, encode};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const NPUB: &str = "npub10elfcs4fr0l0r8af98jlmgdh9c8tcxjvz9qkw038js35mp4dma8qzvjptg";

fn criterion_benchmark(c: &mut Criterion) {
    let key = [0x5a; 32];
    c.bench_function("encode key", |b| {
        b.iter(|| encode(black_box("npub"), black_box(&key)))
    });
    c.bench_function("decode key", |b| b.iter(|| decode(black_box(NPUB))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
