use criterion::{black_box, criterion_group, criterion_main, Criterion};
use genesis::{
    alphabet::Alphabet,
    evolution::{EvolutionLauncher, EvolutionOptions, LogLevel},
    individual::Individual,
    rng::RandomNumberGenerator,
    strategy::{BreedStrategy, MutatingCrossover},
};

const TARGET: &str = "A larger population is great for working with bigger, more complex problems. More power!!!";

fn bench_mate(c: &mut Criterion) {
    let alphabet = Alphabet::default();
    let mut rng = RandomNumberGenerator::from_seed(1);
    let first = Individual::random(TARGET.len(), &alphabet, &mut rng);
    let second = Individual::random(TARGET.len(), &alphabet, &mut rng);

    c.bench_function("mate", |b| {
        b.iter(|| {
            MutatingCrossover.mate(
                black_box(&first),
                black_box(&second),
                5,
                &alphabet,
                &mut rng,
            )
        })
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (popsize, survivors, top) in [(200, 50, 20), (1000, 400, 200), (5000, 2000, 1000)] {
        group.bench_function(format!("generate_{}", popsize), |b| {
            let options = EvolutionOptions::builder()
                .population_size(popsize)
                .survivors(survivors)
                .top(top)
                .log_level(LogLevel::None)
                .build();
            let mut launcher =
                EvolutionLauncher::new(TARGET, options, RandomNumberGenerator::from_seed(7))
                    .unwrap();
            b.iter(|| {
                launcher.generate();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mate, bench_generate);
criterion_main!(benches);
