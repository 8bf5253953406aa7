use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use techstore_cart::CartStore;
use techstore_catalog::{Catalog, Product};
use techstore_core::{Money, ProductId};

fn wide_catalog(size: u32) -> Catalog {
    let products = (1..=size)
        .map(|i| {
            Product::new(
                ProductId::new(i),
                format!("Товар {i}"),
                Money::new(u64::from(i) * 100),
                if i % 2 == 0 { "Аудио" } else { "Электроника" },
                "img",
                "desc",
            )
        })
        .collect();
    Catalog::new(products).expect("generated catalog is valid")
}

fn bench_add_distinct_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("cart_add_distinct");
    for size in [10u32, 100, 1000] {
        let catalog = wide_catalog(size);
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| {
                let mut store = CartStore::without_notifications();
                for product in catalog.products() {
                    store.add(black_box(product));
                }
                black_box(store.count())
            })
        });
    }
    group.finish();
}

fn bench_derived_reads(c: &mut Criterion) {
    let catalog = wide_catalog(1000);
    let mut store = CartStore::without_notifications();
    for product in catalog.products() {
        store.add(product);
    }

    c.bench_function("cart_total_1000_lines", |b| b.iter(|| black_box(store.total())));
    c.bench_function("cart_snapshot_1000_lines", |b| b.iter(|| black_box(store.snapshot())));
}

fn bench_set_quantity(c: &mut Criterion) {
    let catalog = wide_catalog(100);
    let mut store = CartStore::without_notifications();
    for product in catalog.products() {
        store.add(product);
    }

    c.bench_function("cart_set_quantity_last_line", |b| {
        let mut quantity = 1i64;
        b.iter(|| {
            quantity = quantity % 50 + 1;
            black_box(store.set_quantity(ProductId::new(100), quantity))
        })
    });
}

criterion_group!(benches, bench_add_distinct_products, bench_derived_reads, bench_set_quantity);
criterion_main!(benches);
