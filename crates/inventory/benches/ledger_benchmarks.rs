use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use stockroom_core::{Quantity, Sku, WarehouseId};
use stockroom_inventory::InventoryDirectory;

fn directory_with(skus: &[Sku], limit: Option<Quantity>) -> InventoryDirectory {
    let mut dir = InventoryDirectory::new();
    let warehouse: WarehouseId = "W1".parse().unwrap();
    dir.add_warehouse(warehouse, limit).unwrap();
    for sku in skus {
        dir.add_product(format!("product {sku}"), sku.clone()).unwrap();
    }
    dir
}

fn bench_stock_unstock(c: &mut Criterion) {
    let mut group = c.benchmark_group("stock_unstock");
    let warehouse: WarehouseId = "W1".parse().unwrap();

    for sku_count in [10usize, 100, 1_000] {
        let skus: Vec<Sku> = (0..sku_count)
            .map(|i| format!("SKU{i:05}").parse().unwrap())
            .collect();

        for (label, limit) in [("unbounded", None), ("limited", Some(Quantity::new(50_000)))] {
            group.bench_with_input(BenchmarkId::new(label, sku_count), &skus, |b, skus| {
                b.iter(|| {
                    let mut dir = directory_with(skus, limit);
                    for sku in skus {
                        dir.stock(sku, &warehouse, Quantity::new(40)).unwrap();
                    }
                    for sku in skus {
                        dir.unstock(sku, &warehouse, Quantity::new(25)).unwrap();
                    }
                    black_box(dir.warehouse(&warehouse).unwrap())
                });
            });
        }
    }

    group.finish();
}

fn bench_list_contents(c: &mut Criterion) {
    let warehouse: WarehouseId = "W1".parse().unwrap();
    let skus: Vec<Sku> = (0..1_000).map(|i| format!("SKU{i:05}").parse().unwrap()).collect();
    let mut dir = directory_with(&skus, None);
    for sku in &skus {
        dir.stock(sku, &warehouse, Quantity::new(3)).unwrap();
    }

    c.bench_function("list_warehouse_contents_1000", |b| {
        b.iter(|| black_box(dir.list_warehouse_contents(&warehouse).unwrap()))
    });
}

criterion_group!(benches, bench_stock_unstock, bench_list_contents);
criterion_main!(benches);
