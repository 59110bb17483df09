use criterion::{criterion_group, Criterion};
use dictx::{Dictionary, SearchOpts};
use rand::Rng;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};

fn read_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("** dictx::basic::dictionary::Dictionary **");
    group
        .measurement_time(std::time::Duration::from_secs(3))
        .sample_size(10);

    let i = AtomicUsize::new(0);
    let mut db = Dictionary::new();

    group.bench_function(" write ", |b| {
        b.iter(|| {
            let n = i.fetch_add(1, Ordering::SeqCst);
            db.add(&n.to_string(), n);
        })
    });

    group.bench_function(" read ", |b| {
        b.iter(|| {
            let n = i.fetch_sub(1, Ordering::SeqCst);
            db.get(&n.to_string());
        })
    });

    group.bench_function(" bulk merge (100 items) ", |b| {
        b.iter(|| {
            let src = (0..100)
                .map(|_| {
                    let n = i.fetch_add(1, Ordering::SeqCst);
                    (n.to_string(), json!(n))
                })
                .collect::<serde_json::Map<_, _>>();
            db.add_all(src, false);
        })
    });

    group.finish();
}

fn random_read_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("** dictx::basic::dictionary::Dictionary **");
    group
        .measurement_time(std::time::Duration::from_secs(3))
        .sample_size(10);

    let mut rng = rand::thread_rng();
    let mut db = Dictionary::new();
    let mut keys = vec![];
    group.bench_function(" random write ", |b| {
        b.iter(|| {
            let key = rng.gen::<u64>().to_string();
            db.add(&key, "x".repeat(16));
            keys.push(key);
        })
    });

    group.bench_function(" random read ", |b| {
        b.iter(|| {
            let index: usize = rng.gen_range(0..keys.len());
            if let Some(key) = keys.get(index) {
                db.get(key);
            }
        })
    });
    group.finish();
}

fn search(c: &mut Criterion) {
    let mut group = c.benchmark_group("** dictx::basic::dictionary::Dictionary **");
    group
        .measurement_time(std::time::Duration::from_secs(3))
        .sample_size(10);

    let mut db = Dictionary::new();
    db.add("name", "Anna Karenina");
    db.add("age", 28);

    group.bench_function(" search substring ", |b| {
        b.iter(|| db.search("name", "karen", false, false))
    });

    let exact = SearchOpts::new().strict(true).exact_match(true);
    group.bench_function(" search exact ", |b| {
        b.iter(|| db.search_with("name", "Anna Karenina", &exact))
    });

    group.bench_function(" search number ", |b| {
        b.iter(|| db.search("age", 28, false, false))
    });

    group.finish();
}

criterion_group!(benches, read_write, random_read_write, search);
