use criterion::{Criterion, criterion_group, criterion_main};
use gitcfg_git::{resolve_entries, tokenize_listing};

/// Builds a listing with `keys` distinct keys, each declared `layers` times
/// across ascending scopes, the shape of a real multi-layer config stack.
fn synthetic_listing(keys: usize, layers: usize) -> Vec<u8> {
    let scopes = ["system", "global", "local", "worktree"];
    let mut raw = Vec::new();
    for layer in 0..layers {
        let scope = scopes[layer % scopes.len()];
        for key in 0..keys {
            let origin = format!("file:/etc/layer{layer}/config:{}", key + 1);
            let key_value = format!("section{key}.option\nvalue-{layer}-{key}");
            for field in [scope, origin.as_str(), key_value.as_str()] {
                raw.extend_from_slice(field.as_bytes());
                raw.push(0);
            }
        }
    }
    raw
}

fn benchmark_listing_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("listing_pipeline");

    let raw = synthetic_listing(200, 4);
    group.bench_function("tokenize_800_records", |b| {
        b.iter(|| tokenize_listing(std::hint::black_box(&raw)));
    });

    group.bench_function("resolve_800_records", |b| {
        b.iter_with_setup(
            || tokenize_listing(&raw),
            |records| resolve_entries(records),
        );
    });

    group.finish();
}

criterion_group!(benches, benchmark_listing_pipeline);
criterion_main!(benches);
