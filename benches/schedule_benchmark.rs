/*!
 * Schedule Benchmark
 * Run-loop throughput over varying ready-queue sizes
 */

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use esched::{NoopExecutor, Scheduler};

fn seeded_scheduler(count: usize) -> Scheduler {
    let scheduler = Scheduler::new(10).unwrap();
    for i in 0..count {
        let pid = i as u32 + 1;
        let burst = 20 + (i as i64 % 37);
        let priority = (i % 7) as i32;
        scheduler.add_process(pid, burst, priority);
    }
    scheduler
}

fn benchmark_run_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_loop");

    for count in [10usize, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || seeded_scheduler(count),
                |scheduler| {
                    scheduler.run(&NoopExecutor);
                    black_box(scheduler.stats());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_run_loop);
criterion_main!(benches);
