use criterion::{black_box, criterion_group, criterion_main, Criterion};
use limbic::classifier::normalize;
use limbic::SentimentPipeline;

fn setup_benchmark_pipeline() -> SentimentPipeline {
    SentimentPipeline::new().unwrap()
}

fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("Normalization");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    group.bench_function("short_text", |b| {
        b.iter(|| normalize(black_box("Amazing hotel, excellent service!")))
    });

    group.bench_function("noisy_text", |b| {
        b.iter(|| {
            normalize(black_box(
                "BEST deal EVER!!! 50% off at http://example.com/promo \
                 and www.example.org - the room was *spotless*, 10/10",
            ))
        })
    });

    group.bench_function("long_text", |b| {
        let text = "the staff were friendly and the rooms were clean but the \
                    location was noisy and breakfast was average at best "
            .repeat(20);
        b.iter(|| normalize(black_box(&text)))
    });

    group.finish();
}

fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("Training");
    group.sample_size(10);

    group.bench_function("builtin_corpus", |b| b.iter(setup_benchmark_pipeline));

    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let pipeline = setup_benchmark_pipeline();
    let mut group = c.benchmark_group("Analysis");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    group.bench_function("short_text", |b| {
        b.iter(|| pipeline.analyze(black_box("decent stay")).unwrap())
    });

    group.bench_function("medium_text", |b| {
        b.iter(|| {
            pipeline
                .analyze(black_box(
                    "The hotel was in a great location with friendly staff, \
                     but the rooms were dirty and the service was poor.",
                ))
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_normalization, bench_training, bench_analysis);
criterion_main!(benches);
