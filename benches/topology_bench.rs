//! Performance benchmarks for edge generation and rendering.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use topoviz::connectivity::{expected_edge_count, generate_edges};
use topoviz::{ConnectivityMode, Layer, TopologyModel};

fn deep_layers(depth: usize, width: usize) -> Vec<Layer> {
    (0..depth).map(|_| Layer::new(width)).collect()
}

fn bench_generate_edges(c: &mut Criterion) {
    for mode in [
        ConnectivityMode::Feedforward,
        ConnectivityMode::Cascade,
        ConnectivityMode::Rbf,
    ] {
        let mut group = c.benchmark_group(format!("generate_edges/{}", mode));

        for depth in [3, 10, 25].iter() {
            let layers = deep_layers(*depth, 16);
            let mut rng = rand::rngs::StdRng::seed_from_u64(0);

            group.throughput(Throughput::Elements(expected_edge_count(&layers, mode) as u64));
            group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, _| {
                b.iter(|| black_box(generate_edges(black_box(&layers), mode, &mut rng)));
            });
        }
        group.finish();
    }
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for depth in [3, 10, 25].iter() {
        let mut model = TopologyModel::with_seed(0);
        for _ in 0..*depth {
            model.add_layer(16);
        }
        model.set_connectivity_mode(ConnectivityMode::Cascade);

        group.throughput(Throughput::Elements(model.edges().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, _| {
            b.iter(|| black_box(model.render(black_box(1280.0), black_box(720.0))));
        });
    }
    group.finish();
}

fn bench_add_layer(c: &mut Criterion) {
    c.bench_function("add_random_layer_x10", |b| {
        b.iter(|| {
            let mut model = TopologyModel::with_seed(0);
            for _ in 0..10 {
                black_box(model.add_random_layer());
            }
        });
    });
}

criterion_group!(benches, bench_generate_edges, bench_render, bench_add_layer);

criterion_main!(benches);
