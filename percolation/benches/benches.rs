use criterion::{criterion_group, criterion_main, Criterion};
use percolation::Percolation;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn open_until_percolation(c: &mut Criterion) {
    c.bench_function("open_until_percolation_64", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(17);
            let mut grid = Percolation::new(64).unwrap();
            while !grid.percolates() {
                let row = rng.gen_range(1..=64);
                let col = rng.gen_range(1..=64);
                grid.open(row, col).unwrap();
            }
            grid.open_sites()
        })
    });
}

criterion_group!(benches, open_until_percolation);
criterion_main!(benches);
