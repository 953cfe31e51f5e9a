use criterion::{black_box, criterion_group, criterion_main, Criterion};
use npm_semver::{parse, Options, Range, Semver};

fn bench_parse(c: &mut Criterion) {
    let versions = [
        "1.2.3",
        "v1.2.3",
        "1.2.3-beta.1",
        "2.4.0+build.5",
        "1.2.3-alpha.beta.11+exp.sha.5114f85",
        "10.20.30",
        "01.2.3",
        "not a version",
    ];

    c.bench_function("parse_versions", |b| {
        b.iter(|| {
            for version in versions {
                black_box(parse(black_box(version), Options::STRICT));
            }
        })
    });
}

fn bench_parse_ranges(c: &mut Criterion) {
    let ranges = [
        ">=1.2.3 <2.0.0",
        "^1.2.3 || ~2.4",
        "1.2.* || 2.*",
        "1.2.3 - 2.0.0",
        "~1.2.1 >=1.2.3",
        ">1.0 <3.0 || >=4.0",
        "^0.0.3",
        "*",
    ];

    c.bench_function("parse_ranges", |b| {
        b.iter(|| {
            for range in ranges {
                black_box(Range::new(black_box(range), Options::STRICT).ok());
            }
        })
    });
}

fn bench_satisfies(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "^1.2.0"),
        ("1.2.3-beta", "^1.2.3"),
        ("2.4.5", "~2.4"),
        ("1.2.3", ">=1.2.3 <2.0.0"),
        ("1.9999.9999", "<2.0.0"),
        ("1.2.3-alpha.2", ">=1.2.3-alpha.1 <1.3.0"),
        ("1.2.3", "1.2.* || 2.*"),
        ("0.2.9", "1.0.0 - 2.0.0"),
    ];

    c.bench_function("semver_satisfies", |b| {
        b.iter(|| {
            for (version, range) in cases {
                black_box(Semver::satisfies(
                    black_box(version),
                    black_box(range),
                    Options::STRICT,
                ));
            }
        })
    });
}

fn bench_max_satisfying(c: &mut Criterion) {
    let versions = [
        "0.1.0",
        "0.1.1",
        "1.0.0",
        "1.2.3",
        "1.2.4-rc.1",
        "1.9.0",
        "2.0.0",
        "2.4.0-alpha",
        "2.4.0",
        "2.4.5",
        "3.2.1",
        "50.2.0",
    ];

    c.bench_function("semver_max_satisfying", |b| {
        b.iter(|| {
            black_box(Semver::max_satisfying(
                black_box(&versions),
                black_box("^1.2.0 || ~2.4"),
                Options::STRICT,
            ));
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let versions = vec![
        "1.0.0",
        "0.1.0",
        "0.1.1",
        "3.2.1",
        "2.4.0-alpha",
        "2.4.0",
        "2.4.0+build.1",
        "50.2.0",
        "1.2.3",
        "2.4.5",
        "2.4.5-rc.1",
    ];

    c.bench_function("semver_sort", |b| {
        b.iter(|| {
            black_box(Semver::sort(black_box(&versions), Options::STRICT));
        })
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_parse_ranges,
    bench_satisfies,
    bench_max_satisfying,
    bench_sort
);
criterion_main!(benches);
