#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Comparison benchmarks: urlquery vs url crate's `form_urlencoded`
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use url::form_urlencoded;
use urlquery::{Charset, QueryPairs};

const SIMPLE: &str = "username=SSM&password=123456";
const ESCAPED: &str = "q=%E4%B8%AD%E6%96%87%20search&signature=%2Br1ekUCGjXiu50Y%2Bk0MO4ovulK8%3D\
                       &redirect=https%3A%2F%2Fexample.com%2Fcallback%3Fa%3D1&page=2&size=50";

fn long_query() -> String {
    (0..100)
        .map(|i| format!("key{i}=value%20{i}"))
        .collect::<Vec<_>>()
        .join("&")
}

fn bench_parse_simple_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_simple");

    group.bench_function("urlquery", |b| {
        b.iter(|| QueryPairs::parse(black_box(SIMPLE), Charset::utf_8()).unwrap());
    });

    group.bench_function("urlquery_passthrough", |b| {
        b.iter(|| QueryPairs::parse(black_box(SIMPLE), Charset::NONE).unwrap());
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| form_urlencoded::parse(black_box(SIMPLE).as_bytes()).count());
    });

    group.finish();
}

fn bench_parse_escaped_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_escaped");

    group.bench_function("urlquery", |b| {
        b.iter(|| QueryPairs::parse(black_box(ESCAPED), Charset::utf_8()).unwrap());
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::parse(black_box(ESCAPED).as_bytes())
                .into_owned()
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

fn bench_build_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let query = QueryPairs::parse(ESCAPED, Charset::utf_8()).unwrap();

    group.bench_function("urlquery_lenient", |b| {
        b.iter(|| black_box(&query).build(Charset::utf_8(), false));
    });

    group.bench_function("urlquery_strict", |b| {
        b.iter(|| black_box(&query).build(Charset::utf_8(), true));
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            let mut serializer = form_urlencoded::Serializer::new(String::new());
            for pair in black_box(&query) {
                if let (Some(key), Some(value)) = (pair.key(), pair.value()) {
                    serializer.append_pair(key, value);
                }
            }
            serializer.finish()
        });
    });

    group.finish();
}

fn bench_round_trip_long(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip_long");
    let input = long_query();

    group.bench_function("urlquery", |b| {
        b.iter(|| {
            let query = QueryPairs::parse(black_box(&input), Charset::utf_8()).unwrap();
            query.to_string()
        });
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::Serializer::new(String::new())
                .extend_pairs(form_urlencoded::parse(black_box(&input).as_bytes()))
                .finish()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_simple_all,
    bench_parse_escaped_all,
    bench_build_all,
    bench_round_trip_long
);

criterion_main!(benches);
