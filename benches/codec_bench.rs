use criterion::{criterion_group, criterion_main, Criterion};
use prefixcode::{sample, Decoder, Encoder, FrequencyTable};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_huffman(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman");
    let text = sample::sample_text_with(&mut StdRng::seed_from_u64(7), 5000);
    let freqs = FrequencyTable::from_text(&text);

    let encoder = Encoder::huffman(&freqs).unwrap();
    group.bench_function("encode", |b| b.iter(|| encoder.encode(&text).unwrap()));

    let bits = encoder.encode(&text).unwrap();
    let decoder = Decoder::huffman(&freqs).unwrap();
    group.bench_function("decode", |b| b.iter(|| decoder.decode(&bits).unwrap()));
}

fn bench_fixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed");
    let text = sample::sample_text_with(&mut StdRng::seed_from_u64(7), 5000);
    let freqs = FrequencyTable::from_text(&text);

    let encoder = Encoder::fixed(&freqs).unwrap();
    group.bench_function("encode", |b| b.iter(|| encoder.encode(&text).unwrap()));

    let bits = encoder.encode(&text).unwrap();
    let decoder = Decoder::fixed(&freqs).unwrap();
    group.bench_function("decode", |b| b.iter(|| decoder.decode(&bits).unwrap()));
}

criterion_group!(benches, bench_huffman, bench_fixed);
criterion_main!(benches);
