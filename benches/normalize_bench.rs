//! Benchmark for commit message normalization on synthetic commit logs.

use commitsweep::handle_commit_msg;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const TAGS: [&str; 9] = [
    "feat", "fix", "refactor", "style", "docs", "test", "chore", "Merge", "wip",
];

/// Build a commit log where roughly a quarter of the lines repeat.
fn synthetic_log(lines: usize) -> String {
    (0..lines)
        .map(|i| {
            let tag = TAGS[i % TAGS.len()];
            let subject = i % (lines * 3 / 4).max(1);
            if tag == "Merge" || tag == "wip" {
                format!("{tag} branch topic-{subject}")
            } else {
                format!("{tag}: change number {subject}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_handle_commit_msg(c: &mut Criterion) {
    let mut group = c.benchmark_group("handle_commit_msg");

    for size in [100, 1_000, 10_000] {
        let log = synthetic_log(size);

        group.bench_with_input(BenchmarkId::new("default", size), &log, |b, log| {
            b.iter(|| handle_commit_msg(black_box(log), false))
        });

        group.bench_with_input(BenchmarkId::new("strict", size), &log, |b, log| {
            b.iter(|| handle_commit_msg(black_box(log), true))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_handle_commit_msg);
criterion_main!(benches);
