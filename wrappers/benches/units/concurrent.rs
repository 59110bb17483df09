use criterion::{criterion_group, Criterion};
use dictx::SharedDictionary;
use std::{
    sync::{Arc, Barrier},
    time::Instant,
};

fn concurrent_hotspot_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("** dictx::concurrent::hotspot_writes **");
    group.sample_size(10);

    let thread_counts = [2, 4, 8];

    for &num_threads in &thread_counts {
        group.bench_function(format!("{} threads", num_threads), |b| {
            b.iter_custom(|iters| {
                let iters_per_thread = (iters / num_threads) + 1;
                let shared_db = SharedDictionary::new();
                let barrier = Arc::new(Barrier::new(num_threads as usize + 1));
                let mut handles = vec![];

                for t in 0..num_threads {
                    let b = barrier.clone();
                    let db = shared_db.clone();
                    handles.push(std::thread::spawn(move || {
                        b.wait();
                        for j in 0..iters_per_thread {
                            db.add(&format!("{}-{}", t, j), j);
                        }
                        b.wait();
                    }));
                }

                barrier.wait();
                let start = Instant::now();
                barrier.wait();
                let elapsed = start.elapsed();

                for h in handles {
                    h.join().unwrap();
                }

                elapsed
            })
        });
    }

    group.finish();
}

fn concurrent_read_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("** dictx::concurrent::read_heavy **");
    group.sample_size(10);

    let shared_db = SharedDictionary::new();
    (0..1000u64).for_each(|i| {
        shared_db.add(&i.to_string(), i);
    });

    for &num_threads in &[2u64, 4, 8] {
        group.bench_function(format!("{} threads", num_threads), |b| {
            b.iter_custom(|iters| {
                let iters_per_thread = (iters / num_threads) + 1;
                let barrier = Arc::new(Barrier::new(num_threads as usize + 1));
                let mut handles = vec![];

                for _ in 0..num_threads {
                    let b = barrier.clone();
                    let db = shared_db.clone();
                    handles.push(std::thread::spawn(move || {
                        b.wait();
                        for j in 0..iters_per_thread {
                            db.has_key(&(j % 1000).to_string());
                        }
                        b.wait();
                    }));
                }

                barrier.wait();
                let start = Instant::now();
                barrier.wait();
                let elapsed = start.elapsed();

                for h in handles {
                    h.join().unwrap();
                }

                elapsed
            })
        });
    }

    group.finish();
}

criterion_group!(benches, concurrent_hotspot_writes, concurrent_read_heavy);
