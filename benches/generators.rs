use criterion::{criterion_group, criterion_main, Criterion};
use keymaze::{
    generators,
    grid::MazeGrid,
    units::{Height, MarkersCount, Width},
};

fn bench_recursive_backtracker_maze_101(c: &mut Criterion) {
    let mut g = MazeGrid::new(Width(101), Height(101)).unwrap();
    let mut rng = generators::seeded_rng(Some(101));
    c.bench_function("recursive_backtracker_maze_101", move |b| {
        b.iter(|| generators::recursive_backtracker(&mut g, &mut rng))
    });
}

fn bench_generate_maze_351(c: &mut Criterion) {
    c.bench_function("generate_maze_351", |b| {
        b.iter(|| generators::generate_maze(Width(351), Height(351), Some(351)))
    });
}

fn bench_place_markers_101(c: &mut Criterion) {
    let carved = generators::generate_maze(Width(101), Height(101), Some(7)).unwrap();
    let mut rng = generators::seeded_rng(Some(7));
    c.bench_function("place_markers_101", move |b| {
        b.iter(|| {
            let mut g = carved.clone();
            generators::place_markers(&mut g, MarkersCount(100), &mut rng)
        })
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_101,
    bench_generate_maze_351,
    bench_place_markers_101
);
criterion_main!(benches);
