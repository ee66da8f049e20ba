//! Benchmarks for Markdown rendering.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use notedown::markdown::{render_inline, render_markdown, slugify};
use notedown::site::render_toc;

const ARTICLE: &str = include_str!("../tests/fixtures/article.md");

/// The sample article repeated until it is roughly the size of a long post.
fn long_article() -> String {
    ARTICLE.repeat(20)
}

// ============================================================================
// Block Rendering
// ============================================================================

fn bench_render_article(c: &mut Criterion) {
    c.bench_function("render_article", |b| {
        b.iter(|| render_markdown(ARTICLE));
    });
}

fn bench_render_long_article(c: &mut Criterion) {
    let text = long_article();

    c.bench_function("render_long_article", |b| {
        b.iter(|| render_markdown(&text));
    });
}

// ============================================================================
// Inline and Headings
// ============================================================================

fn bench_render_inline(c: &mut Criterion) {
    let summary = "**ドウデュース**が`5.8`倍で制した*グランプリ*を[振り返る](https://example.com/a_b)。";

    c.bench_function("render_inline", |b| {
        b.iter(|| render_inline(summary));
    });
}

fn bench_slugify(c: &mut Criterion) {
    c.bench_function("slugify", |b| {
        b.iter(|| slugify("有馬記念 2023 振り返り：ＡＢＣ"));
    });
}

fn bench_render_toc(c: &mut Criterion) {
    let headings = render_markdown(&long_article()).headings;

    c.bench_function("render_toc", |b| {
        b.iter(|| render_toc(&headings));
    });
}

criterion_group!(
    benches,
    bench_render_article,
    bench_render_long_article,
    bench_render_inline,
    bench_slugify,
    bench_render_toc,
);
criterion_main!(benches);
