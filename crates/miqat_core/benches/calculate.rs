use std::hint::black_box;

use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};
use miqat_core::types::GeoCoordinate;
use miqat_core::{calculate_prayer_times, CalculationContext, CalculationMethod, HighLatitudeRule};

fn bench_single_day(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
    let toronto = GeoCoordinate::new_unchecked(43.6532, -79.3832).with_altitude(76.0);
    let ctx = CalculationContext::new();

    c.bench_function("calculate_single_day", |b| {
        b.iter(|| {
            calculate_prayer_times(black_box(date), black_box(toronto), black_box(-5.0), &ctx)
        })
    });
}

fn bench_year_sweep_high_latitude(c: &mut Criterion) {
    // A full year at 65°N exercises the substitution path for part of it.
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let oulu = GeoCoordinate::new_unchecked(65.0, 25.5);
    let ctx = CalculationContext::new()
        .method(CalculationMethod::Mwl)
        .high_latitude_rule(HighLatitudeRule::AngleBased);

    c.bench_function("calculate_year_sweep_65n", |b| {
        b.iter(|| {
            for day in 0..365 {
                let date = start + Duration::days(day);
                black_box(calculate_prayer_times(date, oulu, 2.0, &ctx));
            }
        })
    });
}

criterion_group!(benches, bench_single_day, bench_year_sweep_high_latitude);
criterion_main!(benches);
