//! CargoBox Benchmark Suite
//!
//! Every query is a linear scan over the box; these benchmarks track the
//! per-item cost on a 1 000-item box:
//!   cargo_box_build_1000 ............ batch construction with absent entries
//!   cargo_box_aggregates_1000 ....... total + average + greatest
//!   cargo_box_filter_copy_1000 ...... make_new_cargo_box_with
//!   cargo_box_heaviest_of_50 ........ heaviest_cargo_box over 50 boxes

use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cargobox_core::{CargoBox, Item, heaviest_cargo_box};

fn make_item(i: i32) -> Arc<Item> {
    Arc::new(Item::new(format!("item-{i}"), (i * 37) % 1000))
}

fn make_batch(n: i32) -> Vec<Option<Arc<Item>>> {
    (0..n)
        .map(|i| if i % 10 == 0 { None } else { Some(make_item(i)) })
        .collect()
}

/// Benchmark: batch construction, skipping every tenth (absent) entry.
fn bench_build(c: &mut Criterion) {
    let batch = make_batch(1000);
    c.bench_function("cargo_box_build_1000", |b| {
        b.iter(|| {
            let cargo = CargoBox::from_items(black_box(&batch).iter().cloned());
            black_box(cargo);
        });
    });
}

/// Benchmark: the three aggregate queries together.
fn bench_aggregates(c: &mut Criterion) {
    let cargo = CargoBox::from_items(make_batch(1000));
    c.bench_function("cargo_box_aggregates_1000", |b| {
        b.iter(|| {
            let cargo = black_box(&cargo);
            black_box(cargo.total_weight_in_grammes());
            black_box(cargo.average_weight_in_grammes());
            black_box(cargo.greatest_item());
        });
    });
}

/// Benchmark: filtered copy keeping roughly half the items.
fn bench_filter_copy(c: &mut Criterion) {
    let cargo = CargoBox::from_items(make_batch(1000));
    c.bench_function("cargo_box_filter_copy_1000", |b| {
        b.iter(|| {
            let light = black_box(&cargo).make_new_cargo_box_with(black_box(500));
            black_box(light);
        });
    });
}

/// Benchmark: heaviest among 50 boxes of 20 items, every fifth one absent.
fn bench_heaviest(c: &mut Criterion) {
    let boxes: Vec<Option<CargoBox>> = (0..50)
        .map(|n| {
            if n % 5 == 0 {
                None
            } else {
                Some(CargoBox::from_items((0..20).map(|i| make_item(n * 20 + i))))
            }
        })
        .collect();

    c.bench_function("cargo_box_heaviest_of_50", |b| {
        b.iter(|| {
            let heaviest = heaviest_cargo_box(black_box(&boxes).iter().map(Option::as_ref));
            black_box(heaviest);
        });
    });
}

criterion_group!(
    benches,
    bench_build,
    bench_aggregates,
    bench_filter_copy,
    bench_heaviest,
);
criterion_main!(benches);
