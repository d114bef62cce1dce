use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use elp2000::{cartesian_position_fk5, spherical_position};

/// Epochs spread over the 1900-2100 span the theory targets.
fn sample_epochs(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(0x1202_82b);
    (0..n).map(|_| rng.random::<f64>() * 2.0 - 1.0).collect()
}

fn bench_spherical_position(c: &mut Criterion) {
    let epochs = sample_epochs(256);
    let mut i = 0;

    c.bench_function("spherical_position", |b| {
        b.iter(|| {
            i = (i + 1) % epochs.len();
            black_box(spherical_position(black_box(epochs[i])))
        })
    });
}

fn bench_fk5_chain(c: &mut Criterion) {
    let epochs = sample_epochs(256);
    let mut i = 0;

    c.bench_function("cartesian_position_fk5", |b| {
        b.iter(|| {
            i = (i + 1) % epochs.len();
            black_box(cartesian_position_fk5(black_box(epochs[i])))
        })
    });
}

criterion_group!(benches, bench_spherical_position, bench_fk5_chain);
criterion_main!(benches);
