use criterion::{Criterion, criterion_group, criterion_main};
use rwc_engine::processor::count_lines;
use std::hint::black_box;
use std::io::Cursor;

fn benchmark_count_lines(c: &mut Criterion) {
    let data = "the quick brown fox jumps over the lazy dog\n".repeat(100_000);

    c.bench_function("count_lines_4mb", |b| {
        b.iter(|| {
            let mut reader = Cursor::new(black_box(data.as_bytes()));
            let lines = count_lines(&mut reader).unwrap();
            black_box(lines);
        })
    });
}

criterion_group!(benches, benchmark_count_lines);
criterion_main!(benches);
