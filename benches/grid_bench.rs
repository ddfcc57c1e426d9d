// Benchmark for the calendar view-model
// Measures grid building and per-day indicator computation over growing event sets

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use noizb::models::event::Event;
use noizb::models::identity::IdentityContext;
use noizb::services::calendar::{build_month_grid, day_indicators, month_indicators};

fn generate_events(count: usize) -> Vec<Event> {
    let start = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
    (0..count)
        .map(|i| {
            let owner = if i % 2 == 0 { "me-1" } else { "partner-1" };
            Event::builder()
                .id(format!("evt-{}", i))
                .title(format!("Event {}", i))
                .date(start + Duration::days((i % 90) as i64))
                .owner(owner)
                .shared(i % 5 == 0)
                .build()
                .unwrap()
        })
        .collect()
}

fn bench_build_month_grid(c: &mut Criterion) {
    let anchor = NaiveDate::from_ymd_opt(2025, 12, 17).unwrap();
    c.bench_function("build_month_grid", |b| {
        b.iter(|| build_month_grid(black_box(anchor)))
    });
}

fn bench_indicators(c: &mut Criterion) {
    let mut group = c.benchmark_group("month_indicators");
    let identity = IdentityContext::new("me-1", Some("partner-1".to_string()));
    let grid = build_month_grid(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());

    for count in [10, 100, 1000].iter() {
        let events = generate_events(*count);

        group.bench_with_input(BenchmarkId::new("single_pass", count), &events, |b, events| {
            b.iter(|| month_indicators(black_box(&grid), black_box(events), &identity));
        });

        group.bench_with_input(BenchmarkId::new("per_cell", count), &events, |b, events| {
            b.iter(|| {
                grid.cells()
                    .map(|cell| day_indicators(black_box(events), cell.date, &identity))
                    .collect::<Vec<_>>()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_month_grid, bench_indicators);
criterion_main!(benches);
