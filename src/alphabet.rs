//! The letter order, scores and tile bag composition for a language.
#![allow(dead_code)]
use crate::labelset::{Label as BitLabel, LabelSet};
use crate::tiles::{Codec, Code, BLANK, LETTER_MASK};
use multiset::HashMultiSet;

/// letter, bag count, score
type LetterInfo = (char, u32, u32);

/// The 32-letter Icelandic Scrabble alphabet: sort order, per-letter
/// score and tile bag composition, matching the standard Icelandic
/// Scrabble tile set.
const ICELANDIC: &[LetterInfo] = &[
    ('a', 10, 1),
    ('á', 2, 4),
    ('b', 1, 6),
    ('d', 2, 4),
    ('ð', 5, 2),
    ('e', 3, 1),
    ('é', 1, 6),
    ('f', 3, 3),
    ('g', 4, 2),
    ('h', 2, 3),
    ('i', 7, 1),
    ('í', 2, 4),
    ('j', 1, 5),
    ('k', 3, 2),
    ('l', 3, 2),
    ('m', 2, 2),
    ('n', 7, 1),
    ('o', 3, 3),
    ('ó', 2, 6),
    ('p', 1, 8),
    ('r', 7, 1),
    ('s', 7, 1),
    ('t', 5, 1),
    ('u', 6, 1),
    ('ú', 1, 8),
    ('v', 2, 3),
    ('x', 1, 10),
    ('y', 1, 7),
    ('ý', 1, 9),
    ('þ', 1, 4),
    ('æ', 1, 5),
    ('ö', 1, 7),
];

/// Number of blank tiles in the default bag.
const NUM_BLANKS: u32 = 2;

/// Sort order, scores and tile bag composition for one alphabet.
///
/// An `Alphabet` assigns every letter an index `0..N` (used for
/// [`LabelSet`](crate::labelset::LabelSet) bit positions) and a 1-based
/// [`Label`](crate::tiles::Label)/[`Code`](crate::tiles::Code) (used by
/// [`Tile`](crate::Tile)/[`Letter`](crate::Letter)/[`Cell`](crate::Cell)).
#[derive(Debug, Clone)]
pub struct Alphabet {
    letters: Vec<LetterInfo>,
    codec: Codec,
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::new(ICELANDIC)
    }
}

impl Alphabet {
    fn new(letters: &[LetterInfo]) -> Alphabet {
        let order: String = letters.iter().map(|&(ch, _, _)| ch).collect();
        Alphabet {
            letters: letters.to_vec(),
            codec: Codec::new(&order),
        }
    }

    /// Number of letters in the alphabet (not counting the blank).
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The codec used to translate between characters and tile codes.
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// The letter at zero-based collation index `i`, the inverse of
    /// [`Alphabet::bit_of`].
    pub fn char_at(&self, i: usize) -> Option<char> {
        self.letters.get(i).map(|&(ch, _, _)| ch)
    }

    /// The letter a 1-based [`Label`](crate::tiles::Label) stands for, the
    /// inverse of [`Codec::encode`](crate::tiles::Codec) for a single letter.
    pub fn char_of(&self, label: crate::tiles::Label) -> Option<char> {
        if label == 0 {
            return None;
        }
        self.char_at(label as usize - 1)
    }

    /// Score of a tile `code`. An unassigned blank, or any code outside the
    /// alphabet, scores 0.
    pub fn score(&self, code: Code) -> u32 {
        let label = code & LETTER_MASK;
        if label == 0 {
            return 0;
        }
        self.letters
            .get(label as usize - 1)
            .map_or(0, |&(_, _, score)| score)
    }

    /// Score of a single letter character, or 0 if it is not in the alphabet.
    pub fn score_of(&self, ch: char) -> u32 {
        self.letters
            .iter()
            .find(|&&(c, _, _)| c == ch)
            .map_or(0, |&(_, _, score)| score)
    }

    /// The 1-based [`Label`](crate::tiles::Label) for `ch`, the inverse of
    /// [`Alphabet::char_of`]. Case-insensitive, like [`Alphabet::bit_of`].
    pub fn label_of(&self, ch: char) -> Option<crate::tiles::Label> {
        self.bit_of(ch).map(|bit| bit + 1)
    }

    /// Zero-based bit position of `ch` in the collation order, matching a
    /// [`LabelSet`](crate::labelset::LabelSet) bit index. Case-insensitive:
    /// an uppercase letter resolves to the same position as its lowercase
    /// form.
    pub fn bit_of(&self, ch: char) -> Option<BitLabel> {
        let lower = ch.to_lowercase().next().unwrap_or(ch);
        self.letters
            .iter()
            .position(|&(c, _, _)| c == lower)
            .map(|i| i as BitLabel)
    }

    /// OR of `bit_of` for every character of `word`; unknown characters are
    /// skipped.
    pub fn bit_pattern(&self, word: &str) -> LabelSet {
        word.chars().filter_map(|ch| self.bit_of(ch)).collect()
    }

    /// A `LabelSet` with every alphabet bit set, i.e. `(1<<N)-1`.
    pub fn all_bits_set(&self) -> LabelSet {
        (0..self.len() as BitLabel).collect()
    }

    /// A case-sensitive sort key: the collation index of every character,
    /// with uppercase letters sorting immediately after their lowercase form.
    pub fn sort_key(&self, word: &str) -> Vec<u16> {
        word.chars()
            .map(|ch| {
                let is_upper = ch.is_uppercase();
                let lower = ch.to_lowercase().next().unwrap_or(ch);
                let pos = self
                    .letters
                    .iter()
                    .position(|&(c, _, _)| c == lower)
                    .unwrap_or(self.letters.len()) as u16;
                pos * 2 + u16::from(is_upper)
            })
            .collect()
    }

    /// A case-insensitive sort key: the collation index of every character.
    pub fn sort_key_ci(&self, word: &str) -> Vec<u16> {
        word.chars()
            .filter_map(|ch| self.bit_of(ch))
            .map(u16::from)
            .collect()
    }

    /// The initial tile multiset: every letter's bag count plus two blanks.
    pub fn full_bag(&self) -> HashMultiSet<Code> {
        let mut bag = HashMultiSet::new();
        for (i, &(_, count, _)) in self.letters.iter().enumerate() {
            bag.insert_times((i + 1) as Code, count as usize);
        }
        bag.insert_times(BLANK, NUM_BLANKS as usize);
        bag
    }

    /// Multiset difference `a - b`, e.g. tiles remaining in the bag after
    /// tiles have been drawn into a rack.
    pub fn subtract(&self, a: HashMultiSet<Code>, b: HashMultiSet<Code>) -> HashMultiSet<Code> {
        a - b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.score_of('a'), 1);
        assert_eq!(alphabet.score_of('x'), 10);
        assert_eq!(alphabet.score_of('?'), 0);
    }

    #[test]
    fn test_bit_of() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.bit_of('a'), Some(0));
        assert_eq!(alphabet.bit_of('A'), Some(0));
        assert_eq!(alphabet.bit_of('ö'), Some(31));
        assert_eq!(alphabet.bit_of('w'), None);
    }

    #[test]
    fn test_all_bits_set() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.all_bits_set().len(), 32);
    }

    #[test]
    fn test_full_bag() {
        let alphabet = Alphabet::default();
        let bag = alphabet.full_bag();
        assert_eq!(bag.total_count(), 100);
        assert_eq!(bag.count_of(&BLANK), 2);
    }
}
