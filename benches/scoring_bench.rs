use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use typeprobe::config::{ByteOrder, ScoringWeights};
use typeprobe::generator;
use typeprobe::TypeScorer;

fn setup_data() -> Vec<u8> {
    let mut rng = fastrand::Rng::with_seed(42);
    generator::uniform_u64(&mut rng, 128 * 1024, 0, 200, ByteOrder::Little)
        .expect("valid range")
}

fn bench_add_chunk(c: &mut Criterion) {
    let data = setup_data();
    let mut group = c.benchmark_group("add_chunk");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| {
            let mut scorer =
                TypeScorer::with_options(ByteOrder::Little, ScoringWeights::default(), false);
            scorer.add_chunk(black_box(&data));
            black_box(scorer.bytes_seen())
        })
    });

    group.bench_function("parallel", |b| {
        b.iter(|| {
            let mut scorer =
                TypeScorer::with_options(ByteOrder::Little, ScoringWeights::default(), true);
            scorer.add_chunk(black_box(&data));
            black_box(scorer.bytes_seen())
        })
    });

    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let data = setup_data();
    let mut scorer = TypeScorer::new();
    scorer.add_chunk(&data);

    c.bench_function("ranking", |b| b.iter(|| black_box(scorer.ranking())));
}

criterion_group!(benches, bench_add_chunk, bench_ranking);
criterion_main!(benches);
