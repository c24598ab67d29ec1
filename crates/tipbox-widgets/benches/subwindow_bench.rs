//! Benchmarks for SubWindow sizing and rendering.
//!
//! Run with: cargo bench -p tipbox-widgets --bench subwindow_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tipbox_core::cursor::{Cursor, ViewPort};
use tipbox_render::buffer::Buffer;
use tipbox_render::cell::Cell;
use tipbox_widgets::{BoxStyle, SubWindow};

fn doc_lines(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("fn item_{i}(value: &str) -> Result<中文, Error>"))
        .collect()
}

// =============================================================================
// Sizing
// =============================================================================

fn bench_sizing(c: &mut Criterion) {
    let mut group = c.benchmark_group("subwindow/sizing");

    for n in [1usize, 10, 100] {
        let lines = doc_lines(n);
        let joined = lines.join("\n");
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("conform_lines", n), &lines, |b, lines| {
            b.iter(|| black_box(SubWindow::conform_lines(None, lines.iter().cloned())))
        });

        group.bench_with_input(BenchmarkId::new("conform_str", n), &joined, |b, msg| {
            b.iter(|| black_box(SubWindow::conform_str(msg, None)))
        });
    }

    group.finish();
}

// =============================================================================
// Rendering
// =============================================================================

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("subwindow/render");

    for n in [1usize, 10, 40] {
        let sw = SubWindow::conform_lines(Some(BoxStyle::Rounded), doc_lines(n));
        group.bench_with_input(BenchmarkId::new("place_as_tooltip_120x48", n), &sw, |b, sw| {
            let view = ViewPort::new(0).with_gutter(5);
            let cursor = Cursor::at(44, 12);
            b.iter(|| {
                let mut buf = Buffer::new(120, 48);
                let area = sw.place_as_tooltip(&view, &cursor, &mut buf, Cell::from_char(' '));
                black_box((area, &buf));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sizing, bench_render);
criterion_main!(benches);
