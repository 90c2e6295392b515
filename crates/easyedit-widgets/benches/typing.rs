//! Benchmarks for the text change pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use easyedit_core::{Event, Widget};
use easyedit_widgets::EasyEdit;

fn typed(edit: &mut EasyEdit, text: &str) {
    for c in text.chars() {
        edit.event(&Event::TextInput {
            text: c.to_string(),
        });
    }
}

fn bench_typing_plain(c: &mut Criterion) {
    c.bench_function("typing_plain", |b| {
        b.iter(|| {
            let mut edit = EasyEdit::new();
            edit.event(&Event::FocusIn);
            typed(&mut edit, black_box("the quick brown fox"));
            edit
        })
    });
}

fn bench_typing_with_watcher(c: &mut Criterion) {
    c.bench_function("typing_with_watcher", |b| {
        b.iter(|| {
            let mut edit = EasyEdit::new().clear_button(true).min_length(4);
            edit.on_text_changed(|text| {
                black_box(text);
            });
            edit.event(&Event::FocusIn);
            typed(&mut edit, black_box("the quick brown fox"));
            edit
        })
    });
}

fn bench_typing_past_max(c: &mut Criterion) {
    c.bench_function("typing_past_max", |b| {
        b.iter(|| {
            let mut edit = EasyEdit::new().max_length(8);
            edit.event(&Event::FocusIn);
            typed(&mut edit, black_box("the quick brown fox"));
            edit
        })
    });
}

fn bench_set_text_truncate(c: &mut Criterion) {
    let long = "ñ".repeat(1_000);
    c.bench_function("set_text_truncate", |b| {
        b.iter(|| {
            let mut edit = EasyEdit::new().max_length(100);
            edit.set_text(black_box(long.as_str()));
            edit
        })
    });
}

criterion_group!(
    benches,
    bench_typing_plain,
    bench_typing_with_watcher,
    bench_typing_past_max,
    bench_set_text_truncate,
);
criterion_main!(benches);
