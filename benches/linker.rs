use std::collections::HashSet;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use glossary_rs::linker::link_terms;
use glossary_rs::tokenizer::tokens;

const PARAGRAPH: &str = "Ohio is a state in the Midwestern United States. Its capital, Columbus, \
    sits near the center of the state; Cleveland (on Lake Erie) and Cincinnati - on the Ohio \
    River - are its other large cities. \"Buckeye\" is the state's nickname, from the Ohio buckeye tree.";

fn definition(repeats: usize) -> String {
    std::iter::repeat(PARAGRAPH)
        .take(repeats)
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_tokenize(c: &mut Criterion) {
    for repeats in [1usize, 16, 256] {
        let text = definition(repeats);
        c.bench_with_input(BenchmarkId::new("tokenize", repeats), &text, |b, text| {
            b.iter(|| black_box(tokens(text).count()));
        });
    }
}

fn bench_link(c: &mut Criterion) {
    let known: HashSet<&str> = ["Ohio", "Columbus", "Cleveland", "Cincinnati", "Erie", "Buckeye"]
        .into_iter()
        .collect();
    for repeats in [1usize, 16, 256] {
        let text = definition(repeats);
        c.bench_with_input(BenchmarkId::new("link_terms", repeats), &text, |b, text| {
            b.iter(|| black_box(link_terms(text, &known).len()));
        });
    }
}

criterion_group!(benches, bench_tokenize, bench_link);
criterion_main!(benches);
