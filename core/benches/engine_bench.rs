use criterion::{criterion_group, criterion_main, Criterion};
use search_core::tokenizer::split_into_words;
use search_core::SearchEngine;

const VOCAB: &[&str] = &[
    "кот", "пёс", "хвост", "ошейник", "глаза", "модный", "белый", "пушистый",
    "ухоженный", "выразительные", "дом", "двор", "хозяин", "миска", "игрушка",
];

fn corpus_engine() -> SearchEngine {
    let mut engine = SearchEngine::with_stop_words("и в на");
    for id in 0..500u32 {
        let text: Vec<&str> = (0..20)
            .map(|i| VOCAB[((id as usize) * 7 + i * 3) % VOCAB.len()])
            .collect();
        engine.add_document(id, &text.join(" "), &[1, 2, 3]).unwrap();
    }
    engine
}

fn bench_tokenize(c: &mut Criterion) {
    let text = "белый кот и модный ошейник ".repeat(200);
    c.bench_function("split_into_words", |b| b.iter(|| split_into_words(&text)));
}

fn bench_find_top_documents(c: &mut Criterion) {
    let engine = corpus_engine();
    c.bench_function("find_top_documents", |b| {
        b.iter(|| engine.find_top_documents("пушистый ухоженный кот -пёс"))
    });
}

criterion_group!(benches, bench_tokenize, bench_find_top_documents);
criterion_main!(benches);
