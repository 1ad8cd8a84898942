use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use kwic::{Formatter, KeywordIndex, StopWords, build_index};

fn corpus(words: usize) -> String {
    (0..words)
        .map(|i| format!("word{}", i % 997))
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_build_index(c: &mut Criterion) {
    let text = corpus(50_000);
    let stop_words = StopWords::from_words(["word1", "word2", "word3"]);

    c.bench_function("build_index_50k", |b| {
        b.iter(|| build_index(black_box(&text), KeywordIndex::new(stop_words.clone())))
    });
}

fn bench_render(c: &mut Criterion) {
    let index = build_index(&corpus(50_000), KeywordIndex::default());
    let formatter = Formatter::for_index(&index);

    c.bench_function("render_50k", |b| b.iter(|| formatter.render(black_box(&index))));
}

criterion_group!(benches, bench_build_index, bench_render);
criterion_main!(benches);
