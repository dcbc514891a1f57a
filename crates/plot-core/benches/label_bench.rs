use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plot_core::format_tick_label;

fn bench_labels(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_labels");
    for &exponent in &[-9i32, -2, 0, 3, 6] {
        group.bench_function(format!("exp_{exponent}"), |b| {
            b.iter(|| {
                for i in -50i64..=50 {
                    black_box(format_tick_label(black_box(i), exponent));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_labels);
criterion_main!(benches);
