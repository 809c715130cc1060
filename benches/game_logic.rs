use criterion::{black_box, criterion_group, criterion_main, Criterion};

use drop_merge::core::{gravity, matcher, DefaultEngine, Grid, SimpleRng, Spawner, Tile};
use drop_merge::types::{EngineConfig, NeighborModel, TileId, TileSpec};

fn bench_drop_cascade(c: &mut Criterion) {
    let config = EngineConfig::default();

    c.bench_function("drop_with_cascade", |b| {
        let mut engine = DefaultEngine::with_seed(config, 12345);
        let mut column = 0u8;
        b.iter(|| {
            if engine.drop(black_box(column)).is_err() {
                engine.reset_match(config);
            }
            column = (column + 1) % config.columns;
        })
    });
}

fn bench_match_scan(c: &mut Criterion) {
    // Checkerboard of 2s and 4s: plenty of in-bounds neighbors, no merges.
    let mut grid = Grid::new(5, 8);
    let mut id = 0u32;
    for column in 0..5 {
        for row in 0..8 {
            let value = if (column + row) % 2 == 0 { 2 } else { 4 };
            grid.set(
                column,
                row,
                Some(Tile::new(TileId(id), TileSpec::with_value(value))),
            );
            id += 1;
        }
    }

    c.bench_function("matches_at_center", |b| {
        b.iter(|| {
            matcher::matches_at(
                black_box(&grid),
                black_box(2),
                black_box(4),
                NeighborModel::Omnidirectional,
            )
        })
    });
}

fn bench_gravity_compact(c: &mut Criterion) {
    c.bench_function("compact_gapped_column", |b| {
        b.iter(|| {
            let mut grid = Grid::new(1, 8);
            for row in [1u8, 3, 5, 7] {
                grid.set(0, row, Some(Tile::new(TileId(row as u32), TileSpec::with_value(2))));
            }
            gravity::compact(&mut grid, 0)
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut spawner = Spawner::new(SimpleRng::new(12345), 0.05, 2);

    c.bench_function("spawner_promote", |b| {
        b.iter(|| spawner.promote(black_box(4)))
    });
}

criterion_group!(
    benches,
    bench_drop_cascade,
    bench_match_scan,
    bench_gravity_compact,
    bench_spawn
);
criterion_main!(benches);
