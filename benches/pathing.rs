use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use keymaze::cells::Cartesian2DCoordinate;
use keymaze::generators;
use keymaze::graph;
use keymaze::pathing::{self, Distances};
use keymaze::units::{Height, Width};

fn bench_distances(c: &mut Criterion) {
    c.bench_function("distances", |b| {
        let g = generators::generate_maze(Width(351), Height(351), Some(350)).unwrap();
        let start_coord = Cartesian2DCoordinate::new(251, 251);
        b.iter(|| Distances::for_grid(&g, start_coord))
    });
}

fn bench_furthest_points(c: &mut Criterion) {
    c.bench_function("furthest_points", |b| {
        let g = generators::generate_maze(Width(351), Height(351), Some(350)).unwrap();
        let start_coord = Cartesian2DCoordinate::new(251, 251);
        let distances = Distances::for_grid(&g, start_coord).unwrap();
        b.iter(|| distances.furthest_points_on_grid())
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    c.bench_function("shortest_path", |b| {
        let g = generators::generate_maze(Width(351), Height(351), Some(350)).unwrap();
        let start_coord = Cartesian2DCoordinate::new(251, 251);
        let end_coord = Cartesian2DCoordinate::new(1, 1);
        b.iter(|| pathing::shortest_path(&g, start_coord, end_coord))
    });
}

fn bench_longest_path(c: &mut Criterion) {
    c.bench_function("longest_path", |b| {
        let g = generators::generate_maze(Width(201), Height(201), Some(200)).unwrap();
        b.iter(|| pathing::longest_path(&g))
    });
}

fn bench_passage_graph(c: &mut Criterion) {
    c.bench_function("passage_graph", |b| {
        let g = generators::generate_maze(Width(201), Height(201), Some(200)).unwrap();
        b.iter(|| graph::passage_graph(&g))
    });
}

criterion_group!(benches,
    bench_distances,
    bench_furthest_points,
    bench_shortest_path,
    bench_longest_path,
    bench_passage_graph
);
criterion_main!(benches);
