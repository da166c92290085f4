use criterion::{black_box, criterion_group, criterion_main, Criterion};
use termstage::config::Config;
use termstage::core::{diff_runs, Grid};
use termstage::engine::Session;
use termstage::term::{encode_runs_into, MemorySurface};
use termstage::types::{CellStyle, Rgb};

fn filled(width: u16, height: u16, ch: char) -> Grid {
    let mut g = Grid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            g.put_char(x, y, ch, CellStyle::fg(Rgb::CYAN_BRIGHT));
        }
    }
    g
}

fn bench_diff_identical(c: &mut Criterion) {
    let a = filled(80, 40, '#');
    let b = a.clone();

    c.bench_function("diff_identical_80x40", |bench| {
        bench.iter(|| diff_runs(black_box(&a), black_box(&b)))
    });
}

fn bench_diff_full_repaint(c: &mut Criterion) {
    let blank = Grid::new(80, 40);
    let full = filled(80, 40, '#');

    c.bench_function("diff_full_repaint_80x40", |bench| {
        bench.iter(|| diff_runs(black_box(&blank), black_box(&full)))
    });
}

fn bench_encode_full_repaint(c: &mut Criterion) {
    let runs = diff_runs(&Grid::new(80, 40), &filled(80, 40, '#'));
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("encode_full_repaint_80x40", |bench| {
        bench.iter(|| {
            out.clear();
            encode_runs_into(black_box(&runs), 80, &mut out).unwrap();
        })
    });
}

fn bench_session_tick(c: &mut Criterion) {
    let mut session = Session::new(&Config::default(), 80, 40);
    let mut surface = MemorySurface::new(80, 40);
    session.start(&mut surface).unwrap();
    let mut tick = 0u64;

    c.bench_function("session_tick_start_scene", |bench| {
        bench.iter(|| {
            tick += 1;
            session.tick(black_box(tick), &mut surface).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_diff_identical,
    bench_diff_full_repaint,
    bench_encode_full_repaint,
    bench_session_tick
);
criterion_main!(benches);
