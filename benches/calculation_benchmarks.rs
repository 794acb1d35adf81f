//! Performance benchmarks for the payroll engine.
//!
//! This benchmark suite verifies that the engine meets performance targets:
//! - Forward calculation without shifts: < 100μs mean
//! - Forward calculation with a full month of shifts: < 1ms mean
//! - Reverse net-to-gross search: < 10ms mean
//! - Batch of 100 calculations: < 100ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use paykit_engine::api::create_router;
use paykit_engine::calculation::{CalculationRequest, calculate, solve_net_to_gross};
use paykit_engine::models::Money;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Weekday dates across March 2026, Monday through Friday.
const MARCH_WEEKDAYS: [&str; 22] = [
    "2026-03-02", "2026-03-03", "2026-03-04", "2026-03-05", "2026-03-06",
    "2026-03-09", "2026-03-10", "2026-03-11", "2026-03-12", "2026-03-13",
    "2026-03-16", "2026-03-17", "2026-03-18", "2026-03-19", "2026-03-20",
    "2026-03-23", "2026-03-24", "2026-03-25", "2026-03-26", "2026-03-27",
    "2026-03-30", "2026-03-31",
];

/// Creates an hourly wage request with the given number of shifts.
fn request_with_shifts(shift_count: usize) -> CalculationRequest {
    let shifts: Vec<serde_json::Value> = MARCH_WEEKDAYS
        .iter()
        .cycle()
        .take(shift_count)
        .map(|date| {
            serde_json::json!({
                "date": date,
                "start_time": "09:00",
                "end_time": "18:00",
                "break_minutes": 60
            })
        })
        .collect();

    let request_json = serde_json::json!({
        "employee": {
            "employment_type": "FULL_TIME",
            "company_size": "OVER_5",
            "scheduled_work_days": 5,
            "daily_work_hours": 8,
            "dependents": 1
        },
        "wage_type": "HOURLY_MONTHLY",
        "hourly_wage": 10320,
        "calculation_month": "2026-03",
        "work_shifts": shifts
    });

    serde_json::from_value(request_json).expect("Failed to create request")
}

/// Creates a fixed monthly salary request with no shifts.
fn monthly_request(base_salary: i64) -> CalculationRequest {
    serde_json::from_value(serde_json::json!({
        "employee": {
            "employment_type": "FULL_TIME",
            "company_size": "OVER_5",
            "scheduled_work_days": 5,
            "daily_work_hours": 8,
            "dependents": 1
        },
        "wage_type": "MONTHLY_FIXED",
        "base_salary": base_salary,
        "calculation_month": "2026-03"
    }))
    .expect("Failed to create request")
}

/// Benchmark: forward calculation without shifts.
///
/// Target: < 100μs mean
fn bench_forward_no_shifts(c: &mut Criterion) {
    let request = monthly_request(3_000_000);

    c.bench_function("forward_no_shifts", |b| {
        b.iter(|| black_box(calculate(black_box(&request)).unwrap()))
    });
}

/// Benchmark: forward calculation over a full month of shifts.
///
/// Target: < 1ms mean
fn bench_forward_full_month(c: &mut Criterion) {
    let request = request_with_shifts(22);

    c.bench_function("forward_full_month", |b| {
        b.iter(|| black_box(calculate(black_box(&request)).unwrap()))
    });
}

/// Benchmark: the reverse net-to-gross bisection.
///
/// Target: < 10ms mean
fn bench_reverse_solver(c: &mut Criterion) {
    let template = monthly_request(0);
    let target = Money::won(2_654_480);

    c.bench_function("reverse_solver", |b| {
        b.iter(|| black_box(solve_net_to_gross(black_box(target), &template).unwrap()))
    });
}

/// Benchmark: a POST through the router, serde included.
fn bench_http_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router();
    let body = serde_json::to_string(&request_with_shifts(22)).unwrap();

    c.bench_function("http_round_trip", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/salary/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batch of 100 varied calculations.
///
/// Target: < 100ms mean
fn bench_batch_100(c: &mut Criterion) {
    // Pre-create 100 different requests across the salary range
    let requests: Vec<CalculationRequest> = (0..100)
        .map(|i| monthly_request(2_000_000 + i * 50_000))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.iter(|| {
            let mut results = Vec::with_capacity(100);
            for request in &requests {
                results.push(calculate(request).unwrap());
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: various shift counts to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for shift_count in [1, 5, 10, 22].iter() {
        let request = request_with_shifts(*shift_count);

        group.throughput(Throughput::Elements(*shift_count as u64));
        group.bench_with_input(
            BenchmarkId::new("shifts", shift_count),
            shift_count,
            |b, _| b.iter(|| black_box(calculate(black_box(&request)).unwrap())),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_forward_no_shifts,
    bench_forward_full_month,
    bench_reverse_solver,
    bench_http_round_trip,
    bench_batch_100,
    bench_scaling,
);
criterion_main!(benches);
