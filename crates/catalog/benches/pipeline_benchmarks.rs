use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use tary_catalog::{
    Category, CategoryFilter, FilterAction, FilterState, PriceBand, Product, SortKey, compute_view,
    create_slug, resolve_external_filter,
};
use tary_core::Reducer;

const CATEGORIES: [&str; 4] = ["Biquínis", "Maiôs", "Saídas de Praia", "Moda Masculina"];

/// Synthetic catalog with a spread of prices, categories and flags.
fn catalog(size: usize) -> Vec<Product> {
    (0..size)
        .map(|i| {
            let cents = (i * 7919) % 60_000;
            let mut product = Product::new(format!("p{i}"), format!("Produto {}", size - i))
                .with_category(CATEGORIES[i % CATEGORIES.len()])
                .with_price(format!("R$ {},{:02}", cents / 100, cents % 100).as_str())
                .with_plus_size(i % 5 == 0);
            if i % 3 == 0 {
                product = product.with_collection("Tropical");
            }
            product
        })
        .collect()
}

fn bench_compute_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_view");

    let states = [
        ("default", FilterState::new()),
        (
            "mid_price_asc",
            FilterState::new().reduce_all(&[
                FilterAction::SetPriceRange(PriceBand::Mid),
                FilterAction::SetSort(SortKey::PriceAsc),
            ]),
        ),
        (
            "plus_size_name_asc",
            FilterState::new().reduce_all(&[
                FilterAction::SetCategory(CategoryFilter::PlusSizeVirtual),
                FilterAction::SetSort(SortKey::NameAsc),
            ]),
        ),
    ];

    for size in [100usize, 1_000, 10_000] {
        let products = catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        for (label, state) in &states {
            group.bench_with_input(BenchmarkId::new(*label, size), &products, |b, products| {
                b.iter(|| black_box(compute_view(products, state).remaining_count));
            });
        }
    }

    group.finish();
}

fn bench_deep_link(c: &mut Criterion) {
    let categories: Vec<Category> = CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, name)| Category::new(format!("c{i}"), *name, create_slug(name)))
        .collect();
    let state = FilterState::new();

    c.bench_function("resolve_external_filter/slug", |b| {
        b.iter(|| black_box(resolve_external_filter("saidas-de-praia", &state, &categories)))
    });
}

criterion_group!(benches, bench_compute_view, bench_deep_link);
criterion_main!(benches);
