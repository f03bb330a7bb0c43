use criterion::{criterion_group, criterion_main, Criterion};
use mazes::{
    generators::Algorithm,
    grid::Grid,
    units::RoomsPerSide,
};
use rand::{rngs::SmallRng, SeedableRng};

fn bench_algorithm(c: &mut Criterion, algorithm: Algorithm) {
    let mut rng = SmallRng::seed_from_u64(32);

    c.bench_function(&format!("{}_maze_32", algorithm), move |b| {
        b.iter(|| {
            let mut g = Grid::new(RoomsPerSide(32));
            algorithm.carve_passages(&mut g, &mut rng);
            g
        })
    });
}

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    bench_algorithm(c, Algorithm::Dfs);
}

fn bench_kruskal_maze_32(c: &mut Criterion) {
    bench_algorithm(c, Algorithm::Kruskal);
}

fn bench_prim_maze_32(c: &mut Criterion) {
    bench_algorithm(c, Algorithm::Prim);
}

fn bench_breadth_first_maze_32(c: &mut Criterion) {
    bench_algorithm(c, Algorithm::Bfs);
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_32,
    bench_kruskal_maze_32,
    bench_prim_maze_32,
    bench_breadth_first_maze_32
);
criterion_main!(benches);
