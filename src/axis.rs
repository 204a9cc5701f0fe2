//! A one-dimensional row or column view of the board with cross-check
//! bitmasks and anchor squares, computed fresh before each move search.
//!
//! Cross-checks are always recomputed from the board rather than cached
//! on it, to avoid tracking when a cache goes stale.
use crate::board::{Board, SIZE};
use crate::dawg::{navigate, Dictionary, MatchNavigator};
use crate::labelset::LabelSet;
use crate::tiles::Code;

/// Per-square state along one axis.
#[derive(Debug, Clone, Copy)]
pub struct AxisSquare {
    pub letter: Option<char>,
    /// Bitmask of alphabet letters that keep the perpendicular word valid
    /// if placed here. Meaningless (and ignored) on an occupied square.
    pub cc: LabelSet,
    pub anchor: bool,
}

impl AxisSquare {
    fn empty() -> AxisSquare {
        AxisSquare {
            letter: None,
            cc: LabelSet::new(),
            anchor: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.letter.is_none()
    }
}

/// A single row (if `horizontal`) or column.
#[derive(Debug, Clone)]
pub struct Axis {
    pub index: usize,
    pub horizontal: bool,
    squares: [AxisSquare; SIZE],
}

impl Axis {
    pub fn squares(&self) -> &[AxisSquare; SIZE] {
        &self.squares
    }

    pub fn is_open_for(&self, index: usize, bit: u8) -> bool {
        self.squares[index].is_empty() && self.squares[index].cc.contains(bit)
    }

    pub fn from_row(board: &Board, dict: &Dictionary, rack: &[Code], row: usize) -> Axis {
        Axis::build(board, dict, rack, row, true)
    }

    pub fn from_column(board: &Board, dict: &Dictionary, rack: &[Code], col: usize) -> Axis {
        Axis::build(board, dict, rack, col, false)
    }

    fn build(board: &Board, dict: &Dictionary, rack: &[Code], index: usize, horizontal: bool) -> Axis {
        let default_cc = rack_bit_pattern(board.alphabet(), rack);
        let mut squares = [AxisSquare::empty(); SIZE];
        for i in 0..SIZE {
            let (row, col) = if horizontal { (index, i) } else { (i, index) };
            let letter = board.letter_at(row, col);
            squares[i].letter = letter;
            if letter.is_none() {
                let (above, below) = if horizontal {
                    (board.letters_above(row, col), board.letters_below(row, col))
                } else {
                    (board.letters_left(row, col), board.letters_right(row, col))
                };
                squares[i].cc = crosscheck(board.alphabet(), dict, default_cc, &above, &below);
            }
        }
        mark_anchors(board, &mut squares, index, horizontal);
        Axis {
            index,
            horizontal,
            squares,
        }
    }
}

/// Bitmask of letters that keep square open: `default_cc` (the rack's own
/// letters) narrowed, if there are perpendicular neighbors, to those that
/// also complete a dictionary word spanning `above + '?' + below`. An
/// empty cross (no letters on either side) leaves `default_cc` untouched.
fn crosscheck(alphabet: &crate::Alphabet, dict: &Dictionary, default_cc: LabelSet, above: &str, below: &str) -> LabelSet {
    if above.is_empty() && below.is_empty() {
        return default_cc;
    }
    let query = format!("{}?{}", above, below);
    let mut policy = MatchNavigator::new(&query);
    navigate(dict, &mut policy);
    let pos = above.chars().count();
    let mut fillers = LabelSet::new();
    for word in policy.matches() {
        if let Some(ch) = word.chars().nth(pos) {
            if let Some(bit) = alphabet.bit_of(ch) {
                fillers.insert(bit);
            }
        }
    }
    intersect(default_cc, fillers)
}

fn intersect(a: LabelSet, b: LabelSet) -> LabelSet {
    a.iter().filter(|bit| b.contains(*bit)).collect()
}

fn mark_anchors(board: &Board, squares: &mut [AxisSquare; SIZE], index: usize, horizontal: bool) {
    if board.is_empty() {
        // Empty board: only the center square of the arbitrary reference
        // axis is an anchor (the perpendicular axis is symmetric).
        if horizontal && index == crate::board::CENTER {
            squares[crate::board::CENTER].anchor = true;
        }
        return;
    }
    for i in 0..SIZE {
        if squares[i].is_empty() {
            continue;
        }
        if i > 0 && squares[i - 1].is_empty() && !squares[i - 1].cc.is_empty() {
            squares[i - 1].anchor = true;
        }
        if i + 1 < SIZE && squares[i + 1].is_empty() && !squares[i + 1].cc.is_empty() {
            squares[i + 1].anchor = true;
        }
    }
}

/// Query letters still usable by the rack, as a bitmask: every alphabet
/// letter present (wildcard present ⇒ every bit set).
pub fn rack_bit_pattern(alphabet: &crate::Alphabet, rack: &[Code]) -> LabelSet {
    use crate::tiles::BLANK;
    if rack.contains(&BLANK) {
        return alphabet.all_bits_set();
    }
    let mut set = LabelSet::new();
    for &code in rack {
        let label = code & crate::tiles::LETTER_MASK;
        if label > 0 {
            set.insert(label - 1);
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dawg::Dictionary;
    use crate::Alphabet;

    const S1: &str = "do:3_ca:2_ea:2\nt|s:0_r|s:0\n|_g|s:0_ne:0\n";

    #[test]
    fn test_empty_board_center_anchor() {
        let alphabet = Alphabet::default();
        let board = Board::new(&alphabet);
        let dict = Dictionary::parse(S1).unwrap();
        let rack = [alphabet.label_of('c').unwrap()];
        let axis = Axis::from_row(&board, &dict, &rack, crate::board::CENTER);
        assert!(axis.squares()[crate::board::CENTER].anchor);
        assert!(!axis.squares()[0].anchor);
    }

    #[test]
    fn test_crosscheck_open_when_no_neighbors() {
        let alphabet = Alphabet::default();
        let dict = Dictionary::parse(S1).unwrap();
        let all = alphabet.all_bits_set();
        let cc = crosscheck(&alphabet, &dict, all, "", "");
        assert_eq!(cc.len(), alphabet.len());
    }
}
