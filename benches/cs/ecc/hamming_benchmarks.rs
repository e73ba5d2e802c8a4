use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamcode::cs::ecc::hamming::{decode_batch, encode_batch, HammingCode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_single_unit(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_unit");
    for width in [7usize, 26, 57, 64] {
        let code = HammingCode::new(width).unwrap();
        let value = if width == 64 {
            u64::MAX / 3
        } else {
            (1u64 << width) / 3
        };
        let word = code.encode(value).unwrap();
        let noisy = word.flipped(word.width() / 2).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", width), &value, |b, &v| {
            b.iter(|| code.encode(black_box(v)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decode", width), &noisy, |b, w| {
            b.iter(|| code.decode(black_box(w)).unwrap())
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let code = HammingCode::ascii();
    let mut rng = StdRng::seed_from_u64(42);
    let units: Vec<u64> = (0..10_000).map(|_| rng.gen_range(0..128)).collect();
    let words = encode_batch(&code, &units).unwrap();

    let mut group = c.benchmark_group("hamming_batch");
    group.bench_function("encode_10k", |b| {
        b.iter(|| encode_batch(&code, black_box(&units)).unwrap())
    });
    group.bench_function("decode_10k", |b| {
        b.iter(|| decode_batch(&code, black_box(&words)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_single_unit, bench_batch);
criterion_main!(benches);
