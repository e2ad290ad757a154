// https://bheisler.github.io/criterion.rs/book/getting_started.html

extern crate pricing;
use pricing::analytic::{BlackScholesMerton, OptionPrice};
use pricing::common::models::OptionParameters;
use pricing::grid::{GridRange, PriceSurface};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

criterion_group!(benches, criterion_analytic_pricing);
criterion_main!(benches);

pub fn criterion_analytic_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Black-Scholes analytic pricing");

    group.bench_function("single call/put price pair", |b| {
        b.iter(|| price_single_scenario(black_box((120.0, 100.0))))
    });
    group.bench_function("100x100 price surface", |b| {
        b.iter(|| price_surface(black_box((100, 100))))
    });

    group.finish()
}

fn price_single_scenario((asset_price, strike): (f64, f64)) {
    let op = OptionParameters::new(asset_price, strike, 1.0, 0.04, 0.2);
    let (call, put) = BlackScholesMerton::prices(&op);
    assert!(call.is_finite() && put.is_finite());
}

fn price_surface((nr_asset_prices, nr_volas): (usize, usize)) {
    let base = OptionParameters::new(100.0, 100.0, 1.0, 0.04, 0.2);
    let surface = PriceSurface::new(
        GridRange::new(60.0, 140.0, nr_asset_prices),
        GridRange::new(0.05, 0.6, nr_volas),
    );

    let calls = surface.call_prices(&base);
    assert_eq!(calls.dim(), (nr_asset_prices, nr_volas));
}
