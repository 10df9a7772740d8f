// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for `/videos` response handling.
//!
//! Measures the performance of:
//! - Parsing a wrapped `{videos, total}` page
//! - Parsing a bare array of nested `snippet` records
//! - Extracting a single record

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use video_dashboard::infrastructure::http::response;

fn flat_page(count: usize) -> String {
    let items: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"id":"v{i}","title":"Video {i}","description":"Description {i}","publishedAt":"2024-01-01T00:00:00Z","thumbnails":{{"medium":{{"url":"https://img.example/{i}.jpg"}}}}}}"#
            )
        })
        .collect();
    format!(r#"{{"videos":[{}],"total":4200}}"#, items.join(","))
}

fn nested_array(count: usize) -> String {
    let items: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"snippet":{{"title":"Video {i}","description":"Description {i}","publishedAt":"2024-01-01T00:00:00Z","resourceId":{{"videoId":"v{i}"}}}}}}"#
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

/// Benchmark parsing a typical wrapped page (10 records).
fn bench_parse_wrapped(c: &mut Criterion) {
    let mut group = c.benchmark_group("response_parsing");
    let body = flat_page(10);

    group.bench_function("parse_wrapped_page", |b| {
        b.iter(|| {
            let parsed = response::parse_page(black_box(&body)).unwrap();
            black_box(parsed);
        });
    });

    group.finish();
}

/// Benchmark parsing a large bare array of nested records.
fn bench_parse_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("response_parsing");
    let body = nested_array(500);

    group.bench_function("parse_nested_array_500", |b| {
        b.iter(|| {
            let parsed = response::parse_page(black_box(&body)).unwrap();
            black_box(parsed);
        });
    });

    group.finish();
}

/// Benchmark field extraction from an already-parsed value.
fn bench_extract_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("response_parsing");
    let value: serde_json::Value = serde_json::from_str(&nested_array(1)).unwrap();
    let record = &value[0];

    group.bench_function("extract_record", |b| {
        b.iter(|| black_box(response::extract_record(black_box(record))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_wrapped,
    bench_parse_nested,
    bench_extract_record
);
criterion_main!(benches);
