//! Criterion benchmarks for undigraph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use undigraph::{Graph, VertexId};

/// Build a random connected graph: a spanning path plus extra random edges.
fn make_random_graph(vertex_count: usize, extra_edges: usize) -> (Graph<usize>, VertexId) {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new();

    let ids: Vec<VertexId> = (0..vertex_count).map(|i| graph.create_vertex(i)).collect();
    graph.add_vertices(ids.iter().copied());

    for pair in ids.windows(2) {
        graph.add_edge(pair[0], pair[1]).unwrap();
    }
    for _ in 0..extra_edges {
        let a = ids[rng.gen_range(0..vertex_count)];
        let b = ids[rng.gen_range(0..vertex_count)];
        graph.add_edge(a, b).unwrap();
    }

    (graph, ids[0])
}

fn bench_traversals(c: &mut Criterion) {
    let (graph, start) = make_random_graph(10_000, 30_000);

    c.bench_function("dfs_10k_vertices", |b| {
        b.iter(|| black_box(graph.depth_first_search(black_box(start)).unwrap()))
    });

    c.bench_function("bfs_10k_vertices", |b| {
        b.iter(|| black_box(graph.breadth_first_search(black_box(start)).unwrap()))
    });
}

fn bench_mutation(c: &mut Criterion) {
    c.bench_function("build_1k_vertex_graph", |b| {
        b.iter(|| black_box(make_random_graph(1_000, 3_000)))
    });

    c.bench_function("remove_vertex_from_1k", |b| {
        b.iter_batched(
            || make_random_graph(1_000, 3_000),
            |(mut graph, start)| graph.remove_vertex(start).unwrap(),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_traversals, bench_mutation);
criterion_main!(benches);
