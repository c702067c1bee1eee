use std::time::Duration;

use chinageo::{Coordinate, Provider, markers};
use criterion::{BatchSize, Criterion};
use serde_json::{Value, json};

const MARKER_COUNT: usize = 10_000;

fn create_markers() -> Vec<Value> {
    (0..MARKER_COUNT)
        .map(|i| {
            let offset = (i % 1000) as f64 * 0.001;
            json!({ "id": i, "title": format!("Marker {i}"), "lat": 39.9042 + offset, "lng": 116.4074 + offset })
        })
        .collect()
}

pub fn bench_marker_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("markers");
    group.warm_up_time(Duration::from_secs(1));

    for provider in [Provider::Osm, Provider::Amap, Provider::Baidu] {
        group.bench_function(format!("convert_markers_{provider}"), |b| {
            b.iter_batched(create_markers, |records| markers::convert_markers(provider, records), BatchSize::LargeInput);
        });
    }

    let converted = markers::convert_markers(Provider::Amap, create_markers());
    group.bench_function("restore_markers_amap", |b| {
        b.iter_batched(|| converted.clone(), |records| markers::restore_markers(Provider::Amap, records), BatchSize::LargeInput);
    });

    group.finish();
}

pub fn bench_coordinates(c: &mut Criterion) {
    let coords: Vec<Coordinate> = (0..MARKER_COUNT)
        .map(|i| Coordinate::latlon(22.0 + (i % 300) as f64 * 0.1, 100.0 + (i % 300) as f64 * 0.1))
        .collect();

    let mut group = c.benchmark_group("coordinates");
    group.bench_function("to_gcj02", |b| b.iter(|| coords.iter().map(|c| chinageo::to_gcj02(*c)).collect::<Vec<_>>()));
    group.bench_function("to_wgs84_amap", |b| {
        b.iter(|| coords.iter().map(|c| chinageo::to_wgs84(*c, Provider::Amap)).collect::<Vec<_>>())
    });
    group.finish();
}

criterion::criterion_group!(benches, bench_marker_conversion, bench_coordinates);
criterion::criterion_main!(benches);
