use criterion::{criterion_group, criterion_main, Criterion};
use crossword_engine::{Alphabet, DawgBuilder, Dictionary, FindNavigator, MatchNavigator};

const WORDS: &[&str] = &[
    "aldin", "aldur", "ari", "dalur", "lið", "rital", "altari", "kista", "stóll", "borð",
];

fn sample_dict(alphabet: &Alphabet) -> Dictionary {
    let mut words = WORDS.to_vec();
    words.sort_by_key(|w| alphabet.sort_key_ci(w));
    let mut builder = DawgBuilder::new(alphabet);
    for word in &words {
        builder.add_word(word).unwrap();
    }
    Dictionary::parse(&builder.finish().to_text()).unwrap()
}

fn bench_build(c: &mut Criterion) {
    let alphabet = Alphabet::default();
    let mut words = WORDS.to_vec();
    words.sort_by_key(|w| alphabet.sort_key_ci(w));
    c.bench_function("dawg.build", |b| {
        b.iter(|| {
            let mut builder = DawgBuilder::new(&alphabet);
            for word in &words {
                builder.add_word(word).unwrap();
            }
            builder.finish()
        })
    });
}

fn bench_find(c: &mut Criterion) {
    let alphabet = Alphabet::default();
    let dict = sample_dict(&alphabet);
    c.bench_function("dawg.find", |b| {
        b.iter(|| {
            let mut p = FindNavigator::new("altari");
            crossword_engine::dawg_navigate(&dict, &mut p);
            p.found()
        })
    });
}

fn bench_match(c: &mut Criterion) {
    let alphabet = Alphabet::default();
    let dict = sample_dict(&alphabet);
    c.bench_function("dawg.match", |b| {
        b.iter(|| {
            let mut p = MatchNavigator::new("?????");
            crossword_engine::dawg_navigate(&dict, &mut p);
            p.into_matches()
        })
    });
}

criterion_group!(benches, bench_build, bench_find, bench_match);
criterion_main!(benches);
