//! Benchmarks for rendering block trees.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flexlayout_blocks::{render, Col, Row, Text};
use flexlayout_core::{parse_token, RenderConfig, SpacingToken};

fn wide_row(cols: usize, rows: usize) -> Row {
    (0..cols).fold(Row::new().col_gap(2), |row, c| {
        let col = (0..rows).fold(Col::new().row_gap(3), |col, r| {
            col.child(Text::new(format!("{c}:{r}")))
        });
        row.child(col)
    })
}

fn bench_parse_token(c: &mut Criterion) {
    let token = SpacingToken::from("7");
    c.bench_function("parse_token", |b| {
        b.iter(|| parse_token(black_box("rowGap"), black_box(&token)))
    });
}

fn bench_render_small(c: &mut Criterion) {
    let row = wide_row(3, 3);
    let config = RenderConfig::default();
    c.bench_function("render_3x3", |b| b.iter(|| render(black_box(&row), &config)));
}

fn bench_render_large(c: &mut Criterion) {
    let row = wide_row(12, 50);
    let config = RenderConfig::default();
    c.bench_function("render_12x50", |b| b.iter(|| render(black_box(&row), &config)));
}

fn bench_to_html(c: &mut Criterion) {
    let row = wide_row(12, 50);
    let rendered = render(&row, &RenderConfig::default()).expect("valid tree");
    c.bench_function("to_html_12x50", |b| b.iter(|| black_box(&rendered).to_html()));
}

criterion_group!(
    benches,
    bench_parse_token,
    bench_render_small,
    bench_render_large,
    bench_to_html
);
criterion_main!(benches);
