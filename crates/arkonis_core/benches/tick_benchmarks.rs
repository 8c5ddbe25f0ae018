use arkonis_core::config::AppConfig;
use arkonis_core::milestone::check_milestones;
use arkonis_core::roster::founding_council;
use arkonis_core::Council;
use arkonis_data::{Directive, Entity};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const NO_RESOURCES: &[Entity] = &[];

fn seeded_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.simulation.seed = Some(42);
    config
}

/// Benchmark one tick over the founding council.
fn bench_tick_founders(c: &mut Criterion) {
    let mut council = Council::new(seeded_config());

    c.bench_function("tick_founders", |b| {
        b.iter(|| {
            let outcome = council.tick(black_box(NO_RESOURCES));
            black_box(outcome)
        })
    });
}

/// Benchmark a tick at the population cap.
fn bench_tick_full_population(c: &mut Criterion) {
    let mut council = Council::new(seeded_config());
    while council.population() < council.config().population.cap {
        let parents: Vec<String> = council.agents().into_iter().map(|a| a.id).collect();
        if parents.iter().all(|id| council.replicate(id).is_none()) {
            break;
        }
    }

    c.bench_function("tick_full_population", |b| {
        b.iter(|| {
            let outcome = council.tick(black_box(NO_RESOURCES));
            black_box(outcome)
        })
    });
}

/// Benchmark milestone evaluation for an agent crossing every threshold.
fn bench_milestones(c: &mut Criterion) {
    let mut agent = founding_council().remove(1);
    agent.efficiency = 2500.0;

    c.bench_function("milestones_all_thresholds", |b| {
        b.iter(|| {
            let upgrade = check_milestones(black_box(&agent), Directive::ProtocolOmega, 2);
            black_box(upgrade)
        })
    });
}

criterion_group!(
    benches,
    bench_tick_founders,
    bench_tick_full_population,
    bench_milestones
);
criterion_main!(benches);
