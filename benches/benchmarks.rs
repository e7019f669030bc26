//! Criterion benchmarks for hopgraph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use hopgraph::Graph;

/// Build a random graph with `node_count` vertices and roughly
/// `edges_per_node` edges each.
fn make_large_graph(node_count: u32, edges_per_node: usize) -> Graph<u32> {
    let mut rng = rand::thread_rng();
    let mut edges = Vec::with_capacity(node_count as usize * edges_per_node);
    for i in 0..node_count {
        for _ in 0..edges_per_node {
            let target = rng.gen_range(0..node_count);
            if target != i {
                edges.push((i, target));
            }
        }
    }
    Graph::new(edges)
}

fn bench_construction(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let edges: Vec<(u32, u32)> = (0..30_000)
        .map(|_| (rng.gen_range(0..10_000), rng.gen_range(0..10_000)))
        .collect();

    c.bench_function("construct_10k_nodes_30k_edges", |b| {
        b.iter(|| Graph::new(edges.iter().copied()))
    });
}

fn bench_add_edge(c: &mut Criterion) {
    let graph = make_large_graph(10_000, 3);

    c.bench_function("add_edge_10k", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut g| {
                for i in 0..1_000u32 {
                    let _ = g.add_edge(&i, &(i + 5_000));
                }
                g
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

fn bench_bfs(c: &mut Criterion) {
    let graph = make_large_graph(10_000, 3);

    c.bench_function("bfs_10k", |b| b.iter(|| graph.bfs(&0)));
}

fn bench_distance(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 3);

    c.bench_function("distance_100k", |b| b.iter(|| graph.distance(&0, &99_999)));
}

criterion_group!(
    benches,
    bench_construction,
    bench_add_edge,
    bench_bfs,
    bench_distance
);
criterion_main!(benches);
