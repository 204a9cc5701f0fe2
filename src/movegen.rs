//! Move generation: the Appel & Jacobson anchor-square algorithm over a
//! [`crate::axis::Axis`], using the DAWG for both the left-part and the
//! right-extension search.
use crate::alphabet::Alphabet;
use crate::axis::Axis;
use crate::board::{Board, SIZE};
use crate::dawg::{navigate, Dictionary, Policy};
use crate::mv::Move;
use crate::rack::Rack;
use crate::tiles::{Code, BLANK, LETTER_MASK};
use std::collections::HashSet;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Enumerates DAWG-reachable prefixes of the rack, up to `max_len`
/// characters, without regard to a particular board position. Used to
/// prune which left-part lengths are worth trying before paying for a
/// full [`ExtendRightNavigator`] walk at each one.
///
/// Uses the same rack-consumption rule as
/// [`crate::dawg::PermutationNavigator`]: every edge whose first letter
/// is still available (or a blank is) is a candidate.
struct LeftPartNavigator {
    rack: Vec<char>,
    max_len: usize,
    depth: usize,
    saved: Vec<(Vec<char>, usize)>,
    lengths: HashSet<usize>,
}

impl LeftPartNavigator {
    fn new(rack: &[char], max_len: usize) -> Self {
        LeftPartNavigator {
            rack: rack.to_vec(),
            max_len,
            depth: 0,
            saved: Vec::new(),
            lengths: HashSet::new(),
        }
    }

    fn take(&mut self, ch: char) -> bool {
        if let Some(i) = self.rack.iter().position(|&c| c == ch) {
            self.rack.remove(i);
            return true;
        }
        if let Some(i) = self.rack.iter().position(|&c| c == '?') {
            self.rack.remove(i);
            return true;
        }
        false
    }
}

impl Policy for LeftPartNavigator {
    fn push_edge(&mut self, first_char: char) -> bool {
        let ok = self.rack.contains(&first_char) || self.rack.contains(&'?');
        if ok {
            self.saved.push((self.rack.clone(), self.depth));
        }
        ok
    }

    fn accepting(&self) -> bool {
        self.depth < self.max_len
    }

    fn accepts(&mut self, ch: char) -> bool {
        if self.depth >= self.max_len {
            return false;
        }
        if self.take(ch) {
            self.depth += 1;
            true
        } else {
            false
        }
    }

    fn accept(&mut self, matched: &str, _is_final: bool) {
        self.lengths.insert(matched.chars().count());
    }

    fn pop_edge(&mut self) -> bool {
        let (rack, depth) = self.saved.pop().expect("pop_edge without push_edge");
        self.rack = rack;
        self.depth = depth;
        true
    }
}

/// One square's origin within a candidate word under construction: a
/// letter already on the board, or a rack tile consumed to fill an empty
/// square (`blank` marks a wildcard assigned to that letter).
#[derive(Clone, Copy)]
enum Origin {
    Board,
    Rack { blank: bool },
}

/// Walks the DAWG from the root, placing `matched`'s characters onto
/// consecutive squares of one axis starting at `start_col`: squares
/// already covered must match the existing letter exactly; empty squares
/// must pass the axis's cross-check and consume a rack tile (preferring
/// an exact letter over a blank). Materializes a candidate [`Move`] for
/// every placement that reaches past the anchor square and is not
/// immediately followed by more existing letters (i.e. is the complete
/// word, not a strict prefix of one already on the board).
struct ExtendRightNavigator<'a> {
    axis: &'a Axis,
    alphabet: &'a Alphabet,
    start_col: usize,
    anchor_len: usize,
    rack: Vec<Code>,
    origin: Vec<Origin>,
    saved: Vec<(Vec<Code>, usize)>,
    moves: Vec<Move>,
}

impl<'a> ExtendRightNavigator<'a> {
    fn new(axis: &'a Axis, alphabet: &'a Alphabet, start_col: usize, anchor_len: usize, rack: &[Code]) -> Self {
        ExtendRightNavigator {
            axis,
            alphabet,
            start_col,
            anchor_len,
            rack: rack.to_vec(),
            origin: Vec::new(),
            saved: Vec::new(),
            moves: Vec::new(),
        }
    }

    fn pos(&self) -> usize {
        self.start_col + self.origin.len()
    }

    /// Consume `ch` from the rack, preferring the exact letter over a
    /// blank. Returns the tile code used, or `None` if unavailable.
    fn take_rack(&mut self, ch: char) -> Option<Code> {
        let label = self.alphabet.label_of(ch)?;
        if let Some(i) = self.rack.iter().position(|&c| c == label) {
            self.rack.remove(i);
            return Some(label);
        }
        if let Some(i) = self.rack.iter().position(|&c| c == BLANK) {
            self.rack.remove(i);
            return Some(BLANK);
        }
        None
    }

    fn materialize(&mut self, matched: &str) {
        let mut mv = Move::new();
        for (i, ch) in matched.chars().enumerate() {
            if let Origin::Rack { blank } = self.origin[i] {
                let row_col = if self.axis.horizontal {
                    (self.axis.index, self.start_col + i)
                } else {
                    (self.start_col + i, self.axis.index)
                };
                let label = self.alphabet.label_of(ch).expect("origin letter is in the alphabet");
                let tile = if blank { BLANK } else { label };
                if !mv.add_cover(self.alphabet, row_col.0, row_col.1, tile, ch) {
                    return;
                }
            }
        }
        if !mv.covers().is_empty() {
            self.moves.push(mv);
        }
    }
}

impl<'a> Policy for ExtendRightNavigator<'a> {
    fn push_edge(&mut self, first_char: char) -> bool {
        let pos = self.pos();
        if pos >= SIZE {
            return false;
        }
        let square = &self.axis.squares()[pos];
        let ok = if let Some(existing) = square.letter {
            existing == first_char
        } else {
            match self.alphabet.bit_of(first_char) {
                Some(bit) => square.cc.contains(bit) && (self.rack.contains(&(bit + 1)) || self.rack.contains(&BLANK)),
                None => false,
            }
        };
        if ok {
            self.saved.push((self.rack.clone(), self.origin.len()));
        }
        ok
    }

    fn accepting(&self) -> bool {
        let pos = self.pos();
        if pos >= SIZE {
            return false;
        }
        !self.rack.is_empty() || self.axis.squares()[pos].letter.is_some()
    }

    fn accepts(&mut self, ch: char) -> bool {
        let pos = self.pos();
        if pos >= SIZE {
            return false;
        }
        let square = &self.axis.squares()[pos];
        if let Some(existing) = square.letter {
            if existing != ch {
                return false;
            }
            self.origin.push(Origin::Board);
            true
        } else {
            let bit = match self.alphabet.bit_of(ch) {
                Some(b) => b,
                None => return false,
            };
            if !square.cc.contains(bit) {
                return false;
            }
            match self.take_rack(ch) {
                Some(tile) => {
                    self.origin.push(Origin::Rack { blank: tile == BLANK });
                    true
                }
                None => false,
            }
        }
    }

    fn accept(&mut self, matched: &str, is_final: bool) {
        if !is_final || matched.chars().count() <= self.anchor_len {
            return;
        }
        let next_pos = self.start_col + matched.chars().count();
        let blocked = next_pos < SIZE && self.axis.squares()[next_pos].letter.is_some();
        if !blocked {
            self.materialize(matched);
        }
    }

    fn pop_edge(&mut self) -> bool {
        let (rack, len) = self.saved.pop().expect("pop_edge without push_edge");
        self.rack = rack;
        self.origin.truncate(len);
        true
    }
}

fn rack_chars(alphabet: &Alphabet, codes: &[Code]) -> Vec<char> {
    codes
        .iter()
        .map(|&code| {
            if code == BLANK {
                '?'
            } else {
                alphabet.char_of(code & LETTER_MASK).unwrap_or('?')
            }
        })
        .collect()
}

/// Number of consecutive empty, cross-check-open, non-anchor squares
/// immediately to the left of `idx` on `axis`.
fn open_run_left(axis: &Axis, idx: usize) -> usize {
    let mut count = 0;
    let mut j = idx;
    while j > 0 {
        j -= 1;
        let sq = &axis.squares()[j];
        if sq.is_empty() && !sq.cc.is_empty() && !sq.anchor {
            count += 1;
        } else {
            break;
        }
    }
    count
}

fn extend_right(axis: &Axis, alphabet: &Alphabet, dict: &Dictionary, start_col: usize, anchor: usize, rack: &[Code]) -> Vec<Move> {
    let anchor_len = anchor - start_col;
    let mut policy = ExtendRightNavigator::new(axis, alphabet, start_col, anchor_len, rack);
    navigate(dict, &mut policy);
    policy.moves
}

fn moves_for_anchor(axis: &Axis, alphabet: &Alphabet, dict: &Dictionary, anchor: usize, rack: &[Code]) -> Vec<Move> {
    let mut moves = Vec::new();
    if anchor > 0 && axis.squares()[anchor - 1].letter.is_some() {
        let mut start_col = anchor - 1;
        while start_col > 0 && axis.squares()[start_col - 1].letter.is_some() {
            start_col -= 1;
        }
        moves.extend(extend_right(axis, alphabet, dict, start_col, anchor, rack));
    } else {
        moves.extend(extend_right(axis, alphabet, dict, anchor, anchor, rack));
        let open = open_run_left(axis, anchor);
        let max_len = open.min(rack.len().saturating_sub(1));
        if max_len > 0 {
            let chars = rack_chars(alphabet, rack);
            let mut left_nav = LeftPartNavigator::new(&chars, max_len);
            navigate(dict, &mut left_nav);
            let mut lengths: Vec<usize> = left_nav.lengths.into_iter().collect();
            lengths.sort_unstable();
            for len in lengths {
                if len == 0 || len > anchor {
                    continue;
                }
                moves.extend(extend_right(axis, alphabet, dict, anchor - len, anchor, rack));
            }
        }
    }
    moves
}

fn moves_for_axis(axis: &Axis, alphabet: &Alphabet, dict: &Dictionary, rack: &[Code]) -> Vec<Move> {
    let mut moves = Vec::new();
    for idx in 0..SIZE {
        if axis.squares()[idx].anchor {
            moves.extend(moves_for_anchor(axis, alphabet, dict, idx, rack));
        }
    }
    moves
}

/// All candidate moves for `rack` on `board`, verified legal against
/// `dict`. Iterates every row and column axis; on an empty board only the
/// center row carries any anchors (see [`crate::axis`]), so only that
/// axis does real work.
///
/// With the `rayon` feature enabled, rows and columns are each searched in
/// parallel.
pub fn generate_moves(board: &Board, rack: &Rack, dict: &Dictionary) -> Vec<Move> {
    let alphabet = board.alphabet();
    let codes = rack.tiles();
    let row_moves = |row: usize| {
        let axis = Axis::from_row(board, dict, &codes, row);
        moves_for_axis(&axis, alphabet, dict, &codes)
    };
    let col_moves = |col: usize| {
        let axis = Axis::from_column(board, dict, &codes, col);
        moves_for_axis(&axis, alphabet, dict, &codes)
    };
    let mut out: Vec<Move> = Vec::new();
    #[cfg(feature = "rayon")]
    {
        out.par_extend((0..SIZE).into_par_iter().map(row_moves).flatten());
        out.par_extend((0..SIZE).into_par_iter().map(col_moves).flatten());
    }
    #[cfg(not(feature = "rayon"))]
    {
        out.extend((0..SIZE).flat_map(row_moves));
        out.extend((0..SIZE).flat_map(col_moves));
    }
    out.retain(|mv| {
        let mut probe = mv.clone();
        probe.check_legality(board, rack, dict, false) == crate::mv::Legality::Legal
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CENTER;
    use crate::mv::Legality;
    use std::convert::TryFrom;

    fn build_dict(alphabet: &Alphabet, words: &[&str]) -> Dictionary {
        let mut sorted: Vec<&str> = words.to_vec();
        sorted.sort_by_key(|w| alphabet.sort_key_ci(w));
        let mut builder = crate::dawg::Builder::new(alphabet);
        for w in &sorted {
            builder.add_word(w).unwrap();
        }
        Dictionary::parse(&builder.finish().to_text()).unwrap()
    }

    fn set_rack(alphabet: &Alphabet, letters: &str) -> Rack {
        let mut rack = Rack::new();
        let codes: Vec<Code> = letters
            .chars()
            .map(|ch| if ch == '?' { BLANK } else { alphabet.label_of(ch).unwrap() })
            .collect();
        rack.set_tiles(&codes);
        rack
    }

    /// Property 8: every move the generator returns passes legality.
    fn assert_all_legal(board: &Board, rack: &Rack, dict: &Dictionary, moves: &[Move]) {
        for mv in moves {
            let mut probe = mv.clone();
            assert_eq!(probe.check_legality(board, rack, dict, false), Legality::Legal);
        }
    }

    #[test]
    fn test_s3_first_move_covers_center() {
        let alphabet = Alphabet::default();
        let dict = build_dict(&alphabet, &["stuð", "stuði"]);
        let board = Board::new(&alphabet);
        let rack = set_rack(&alphabet, "stuði");
        let moves = generate_moves(&board, &rack, &dict);
        assert!(!moves.is_empty());
        assert_all_legal(&board, &rack, &dict, &moves);
        for mv in &moves {
            let covers_center = mv.covers().iter().any(|c| c.row == CENTER && c.col == CENTER);
            assert!(covers_center, "every opening move must cover the center square");
        }
    }

    #[test]
    fn test_s4_cross_check_closure() {
        let alphabet = Alphabet::default();
        // Only "stuði" is a word; no word starts with or contains "x", so
        // no legal cross word can ever be formed with the lone rack tile.
        let dict = build_dict(&alphabet, &["stuði"]);
        let mut board = Board::new(&alphabet);
        let word = "stuði";
        for (i, ch) in word.chars().enumerate() {
            let code = alphabet.label_of(ch).unwrap();
            let tile = crate::tiles::Tile::try_from(code).unwrap();
            board.set_tile(7, 3 + i, Some(tile));
        }
        let rack = set_rack(&alphabet, "x");
        let moves = generate_moves(&board, &rack, &dict);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_s5_blank_scores_zero() {
        let alphabet = Alphabet::default();
        let dict = build_dict(&alphabet, &["far", "ari"]);
        let board = Board::new(&alphabet);
        let rack = set_rack(&alphabet, "?ar");
        let moves = generate_moves(&board, &rack, &dict);
        let blank_move = moves
            .iter()
            .find(|mv| mv.word() == "far" && mv.covers().iter().any(|c| c.is_blank()))
            .expect("expected a move spelling \"far\" using the blank as 'f'");
        let blank_cover = blank_move.covers().iter().find(|c| c.is_blank()).unwrap();
        assert_eq!(blank_cover.letter, 'f');
        assert_eq!(alphabet.score(blank_cover.tile), 0);
    }
}
