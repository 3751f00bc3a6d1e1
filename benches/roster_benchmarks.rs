//! Performance benchmarks for the Roster Engine.
//!
//! Measures lookup and payroll over rosters of increasing size.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use roster_engine::models::{Employee, Role};
use roster_engine::roster::{EmployeeQuery, Roster};

/// Creates a roster of `size` employees cycling through every role.
fn create_roster(size: usize) -> Roster {
    Role::ALL
        .iter()
        .cycle()
        .take(size)
        .enumerate()
        .map(|(i, role)| {
            let name = format!("Employee {:05}", i);
            if i % 2 == 0 {
                Employee::hourly(name, *role)
            } else {
                Employee::salaried(name, *role)
            }
        })
        .collect()
}

fn bench_find_employees(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_employees");

    for size in [100usize, 1_000, 10_000] {
        let roster = create_roster(size);
        group.throughput(Throughput::Elements(size as u64));

        let by_role = EmployeeQuery::new().with_role(Role::Manager);
        group.bench_with_input(BenchmarkId::new("by_role", size), &roster, |b, roster| {
            b.iter(|| roster.find_employees(black_box(&by_role)))
        });

        let by_name = EmployeeQuery::new().with_name("employee 0001");
        group.bench_with_input(BenchmarkId::new("by_name", size), &roster, |b, roster| {
            b.iter(|| roster.find_employees(black_box(&by_name)))
        });
    }

    group.finish();
}

fn bench_payroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("payroll");

    for size in [100usize, 1_000, 10_000] {
        let roster = create_roster(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| black_box(roster).payroll().expect("payroll overflowed"))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find_employees, bench_payroll);
criterion_main!(benches);
