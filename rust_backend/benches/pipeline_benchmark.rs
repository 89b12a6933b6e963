use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use bikeshare_rust::models::{BikeRecord, Dataset, DayType, Granularity, Season};
use bikeshare_rust::services::{hourly_mean_counts, seasonal_totals, temperature_totals};
use bikeshare_rust::transformations::{filter_records, FilterCriteria};

fn synthetic_hour_dataset(n: usize) -> Dataset {
    let weathers = ["Clear", "Mist", "Light Rain"];
    let weekdays = [
        "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
    ];

    let records = (0..n)
        .map(|i| {
            let casual = (i % 50) as u32;
            let registered = (i % 300) as u32;
            BikeRecord {
                date: NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
                season: Season::CANONICAL_ORDER[i % 4],
                hour: Some((i % 24) as u8),
                weekday: weekdays[i % 7].to_string(),
                weather: weathers[i % 3].to_string(),
                temp: (i % 100) as f64 / 100.0,
                atemp: (i % 100) as f64 / 100.0,
                humidity: 0.5,
                windspeed: 0.1,
                casual,
                registered,
                total: casual + registered,
            }
        })
        .collect();

    Dataset::new(Granularity::Hour, records)
}

fn bench_filter_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_pipeline");

    let dataset = synthetic_hour_dataset(17_379); // hour_clean.csv size
    let criteria = FilterCriteria {
        seasons: Season::CANONICAL_ORDER.into_iter().collect(),
        weather: ["Clear".to_string(), "Mist".to_string()].into_iter().collect(),
        day_type: DayType::Weekday,
    };

    group.bench_function("filter_records", |b| {
        b.iter(|| black_box(filter_records(black_box(&dataset), black_box(&criteria))));
    });

    group.finish();
}

fn bench_aggregations(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregations");

    let dataset = synthetic_hour_dataset(17_379);

    group.bench_function("hourly_mean_counts", |b| {
        b.iter(|| black_box(hourly_mean_counts(black_box(&dataset.records))));
    });

    group.bench_function("seasonal_totals", |b| {
        b.iter(|| black_box(seasonal_totals(black_box(&dataset.records))));
    });

    group.bench_function("temperature_totals", |b| {
        b.iter(|| black_box(temperature_totals(black_box(&dataset.records))));
    });

    group.finish();
}

criterion_group!(benches, bench_filter_pipeline, bench_aggregations);
criterion_main!(benches);
