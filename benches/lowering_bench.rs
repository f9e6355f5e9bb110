//! Lowering Benchmark
//!
//! Measures the pass over wide sibling lists and long conditional chains,
//! plus the full JSON parse/lower/serialize round trip the CLI performs.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use pugvue::{Node, lower_tree};
use serde_json::{Value, json};

// =============================================================================
// Fixtures
// =============================================================================

fn li(line: u32) -> Value {
    json!({
        "type": "Tag",
        "name": "li",
        "selfClosing": false,
        "block": {"type": "Block", "nodes": [], "line": line},
        "attrs": [],
        "attributeBlocks": [],
        "isInline": false,
        "line": line
    })
}

/// A flat template alternating standalone conditionals and loops.
fn wide_tree(width: usize) -> Node {
    let nodes: Vec<Value> = (0..width)
        .map(|i| {
            let line = i as u32 + 1;
            if i % 2 == 0 {
                json!({
                    "type": "Conditional",
                    "test": format!("visible{i}"),
                    "consequent": {"type": "Block", "nodes": [li(line)], "line": line},
                    "line": line
                })
            } else {
                json!({
                    "type": "Each",
                    "obj": "items",
                    "val": "item",
                    "key": null,
                    "block": {"type": "Block", "nodes": [li(line)], "line": line},
                    "line": line
                })
            }
        })
        .collect();
    serde_json::from_value(json!({"type": "Block", "nodes": nodes, "line": 1})).unwrap()
}

/// One `if` followed by `depth - 1` chained `else if` branches.
fn chain_tree(depth: usize) -> Node {
    let mut conditional = json!({
        "type": "Conditional",
        "test": "c0",
        "consequent": {"type": "Block", "nodes": [li(1)], "line": 1},
        "line": 1
    });
    for i in 1..depth {
        conditional = json!({
            "type": "Conditional",
            "test": format!("c{i}"),
            "consequent": {"type": "Block", "nodes": [li(1)], "line": 1},
            "alternate": conditional,
            "line": 1
        });
    }
    serde_json::from_value(json!({"type": "Block", "nodes": [conditional], "line": 1})).unwrap()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_lower_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("lower_wide");
    for width in [64usize, 512] {
        let tree = wide_tree(width);
        group.throughput(Throughput::Elements(width as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &tree, |b, tree| {
            b.iter(|| lower_tree(black_box(tree.clone())).unwrap());
        });
    }
    group.finish();
}

fn bench_lower_chain(c: &mut Criterion) {
    let tree = chain_tree(32);
    c.bench_function("lower_chain_32", |b| {
        b.iter(|| lower_tree(black_box(tree.clone())).unwrap());
    });
}

fn bench_json_round_trip(c: &mut Criterion) {
    let raw = serde_json::to_string(&wide_tree(256)).unwrap();
    c.bench_function("parse_lower_serialize_256", |b| {
        b.iter(|| {
            let tree: Node = serde_json::from_str(black_box(&raw)).unwrap();
            let lowered = lower_tree(tree).unwrap();
            serde_json::to_string(&lowered).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_lower_wide,
    bench_lower_chain,
    bench_json_round_trip
);
criterion_main!(benches);
