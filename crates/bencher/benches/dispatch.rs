use bencher::{BASE_PATH, TestCase, site_router};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn create_test_cases() -> Vec<TestCase> {
    vec![
        TestCase::static_hit("static_first", "/app/"),
        TestCase::static_hit("static_last", "/app/static/page-15"),
        TestCase::regex_hit("regex_named", "/app/news/42"),
        TestCase::regex_hit("regex_positional", "/app/users/alice/posts"),
        TestCase::fallback("default_route", "/app/blog/archive/2024/10"),
        TestCase::fallback("no_handler", "/app/blog"),
    ]
}

fn benchmark_dispatch(criterion: &mut Criterion) {
    let router = site_router();
    let test_cases = create_test_cases();
    let mut group = criterion.benchmark_group("dispatch");

    for case in test_cases {
        group.bench_with_input(BenchmarkId::new(format!("{:?}", case.group()), case.name()), &case, |b, case| {
            b.iter(|| {
                black_box(router.dispatch(case.path(), BASE_PATH));
            });
        });
    }

    group.finish();
}

criterion_group!(dispatch, benchmark_dispatch);
criterion_main!(dispatch);
