//! Benchmarks for full grid passes.

use arraygrid_core::{Canvas, Point, RecordingCanvas, TextStyle, WidgetId};
use arraygrid_layout::{
    measure_rows, CellContent, CellRender, ColumnCount, GridConfig, GridFrame, GridHost,
    LayoutEngine, RelayoutTicket, RowAction, StateStore, TrackedVec,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Host that records drawing and drops relayout tickets immediately.
#[derive(Default)]
struct BenchHost {
    canvas: RecordingCanvas,
}

impl GridHost for BenchHost {
    fn canvas(&mut self) -> &mut dyn Canvas {
        &mut self.canvas
    }

    fn show_context_menu(&mut self, _: usize, _: Point, _: &[RowAction]) -> Option<RowAction> {
        None
    }

    fn defer_relayout(&mut self, ticket: RelayoutTicket) {
        ticket.complete();
    }
}

struct Values;

impl CellRender<u32> for Values {
    fn render(&mut self, value: &mut u32, content: &CellContent, canvas: &mut dyn Canvas) {
        canvas.draw_text(&value.to_string(), content.rect.origin(), &TextStyle::default());
    }
}

fn measure(value: &u32) -> f32 {
    12.0 + (value % 4) as f32 * 8.0
}

fn bench_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("pass");
    let engine = LayoutEngine::default();

    for len in [100_u32, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut store = StateStore::new();
            let mut list = TrackedVec::new((0..len).collect::<Vec<_>>());
            let mut host = BenchHost::default();
            let frame = GridFrame::new(WidgetId::new(1), Point::ORIGIN, ColumnCount::clamped(8));
            b.iter(|| {
                host.canvas.clear();
                black_box(engine.pass(
                    &mut store,
                    frame,
                    &mut list,
                    &measure,
                    &mut Values,
                    &mut host,
                ))
            });
        });
    }

    group.finish();
}

fn bench_measure_rows(c: &mut Criterion) {
    let config = GridConfig::default();
    let list = TrackedVec::new((0..10_000_u32).collect::<Vec<_>>());

    c.bench_function("measure_rows_10k_x16", |b| {
        b.iter(|| measure_rows(black_box(&list), &measure, ColumnCount::clamped(16), &config));
    });
}

criterion_group!(benches, bench_pass, bench_measure_rows);
criterion_main!(benches);
