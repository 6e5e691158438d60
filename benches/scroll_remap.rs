// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use journal_strip::application::port::Animator;
use journal_strip::domain::scroll::{Easing, WheelDelta};
use journal_strip::ui::state::{ScrollRemapper, ScrollTween};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn scroll_remap_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_remap");

    group.bench_function("sample_running_tween", |b| {
        let start = Instant::now();
        let mut tween = ScrollTween::default();
        tween.animate(0.0, 650.0, Duration::from_millis(800), Easing::Power2Out, start);
        let at = start + Duration::from_millis(300);

        b.iter(|| black_box(tween.position(black_box(at))));
    });

    group.bench_function("retarget_burst_of_ten", |b| {
        let start = Instant::now();
        b.iter(|| {
            let mut remapper = ScrollRemapper::default();
            remapper.attach();
            remapper.observe(0.0, Some(100_000.0));
            for step in 0..10u64 {
                let now = start + Duration::from_millis(step * 16);
                black_box(remapper.handle_wheel(WheelDelta::new(0.0, 100.0), now));
                black_box(remapper.tick(now));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, scroll_remap_benchmark);
criterion_main!(benches);
