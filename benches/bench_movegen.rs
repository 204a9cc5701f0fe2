use criterion::{criterion_group, criterion_main, Criterion};
use crossword_engine::{generate_moves, Alphabet, Bag, Board, DawgBuilder, Dictionary, Rack};

const WORDS: &[&str] = &[
    "aldin", "aldur", "ari", "dalur", "lið", "rital", "altari", "kista", "stóll", "borð", "arinn",
    "tala", "kalla", "salur",
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

fn bench_opening_move(c: &mut Criterion) {
    let alphabet = Alphabet::default();
    let dict = sample_dict(&alphabet);
    let board = Board::new(&alphabet);
    let mut bag = Bag::new(&alphabet);
    let mut rack = Rack::new();
    rack.replenish(&mut bag);
    c.bench_function("movegen.opening", |b| {
        b.iter(|| generate_moves(&board, &rack, &dict))
    });
}

criterion_group!(benches, bench_opening_move);
criterion_main!(benches);
