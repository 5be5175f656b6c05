use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weft_crypto::{blake2b_256, extract_expansion, hash_expansion};

fn blake2b_256_bench(c: &mut Criterion) {
    let data = [0xABu8; 256];

    c.bench_function("blake2b_256_256B", |b| {
        b.iter(|| blake2b_256(black_box(&data)))
    });
}

fn blake2b_256_1kb_bench(c: &mut Criterion) {
    let data = vec![0xCDu8; 1024];

    c.bench_function("blake2b_256_1KB", |b| {
        b.iter(|| blake2b_256(black_box(&data)))
    });
}

fn hash_expansion_bench(c: &mut Criterion) {
    // Roughly the size of a real vouch expansion payload.
    let payload = vec![0x7Bu8; 512];

    c.bench_function("hash_expansion_512B", |b| {
        b.iter(|| hash_expansion(black_box(&payload)))
    });
}

fn extract_expansion_bench(c: &mut Criterion) {
    let payload = "x".repeat(512);
    let commitment = hash_expansion(payload.as_bytes());

    c.bench_function("extract_expansion_512B", |b| {
        b.iter(|| extract_expansion(black_box(&commitment), black_box(&payload)))
    });
}

criterion_group!(
    benches,
    blake2b_256_bench,
    blake2b_256_1kb_bench,
    hash_expansion_bench,
    extract_expansion_bench,
);
criterion_main!(benches);
