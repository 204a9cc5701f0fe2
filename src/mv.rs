//! Moves, their legality check, and scoring.
use crate::alphabet::Alphabet;
use crate::board::{Board, BINGO_BONUS, CENTER, SIZE};
use crate::dawg::Dictionary;
use crate::rack::{Rack, MAX_TILES};
use crate::tiles::{Code, Tile, BLANK};
use std::convert::TryFrom;

/// A single tile laid on a board square by a move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cover {
    pub row: usize,
    pub col: usize,
    /// The rack tile consumed: [`BLANK`] for a wildcard, otherwise the
    /// letter's own code.
    pub tile: Code,
    /// The letter this square resolves to (what a blank stands for).
    pub letter: char,
}

impl Cover {
    pub fn is_blank(&self) -> bool {
        self.tile == BLANK
    }
}

/// The outcome of [`Move::check_legality`], matching the source's integer
/// error codes one for one, plus `GameOver` for a move attempted after the
/// game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Legality {
    Legal,
    NullMove,
    FirstMoveNotInCenter,
    Disjoint,
    NotAdjacent,
    SquareAlreadyOccupied,
    HasGap,
    WordNotInDictionary,
    CrossWordNotInDictionary,
    TooManyTilesPlayed,
    TileNotInRack,
    GameOver,
}

/// A candidate or played move: a set of covers forming one word, plus the
/// full word and placement once legality has been checked.
#[derive(Debug, Clone, Default)]
pub struct Move {
    covers: Vec<Cover>,
    horizontal: bool,
    row: usize,
    col: usize,
    word: String,
}

impl Move {
    pub fn new() -> Move {
        Move {
            covers: Vec::new(),
            horizontal: true,
            row: 0,
            col: 0,
            word: String::new(),
        }
    }

    /// Validate and append one tile placement. Mirrors `Move.add_cover`.
    pub fn add_cover(&mut self, alphabet: &Alphabet, row: usize, col: usize, tile: Code, letter: char) -> bool {
        if row >= SIZE || col >= SIZE {
            return false;
        }
        let letter_code = match alphabet.label_of(letter) {
            Some(label) => label,
            None => return false,
        };
        if tile != BLANK && tile != letter_code {
            return false;
        }
        if self.covers.len() >= MAX_TILES {
            return false;
        }
        self.covers.push(Cover { row, col, tile, letter });
        true
    }

    pub fn covers(&self) -> &[Cover] {
        &self.covers
    }

    pub fn horizontal(&self) -> bool {
        self.horizontal
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Check this move against `board`/`rack`, filling in `word`, `row`,
    /// `col` and `horizontal` along the way. Mirrors `Move.check_legality`.
    pub fn check_legality(&mut self, board: &Board, rack: &Rack, dict: &Dictionary, game_over: bool) -> Legality {
        if game_over {
            return Legality::GameOver;
        }
        if self.covers.is_empty() {
            return Legality::NullMove;
        }
        if self.covers.len() > MAX_TILES {
            return Legality::TooManyTilesPlayed;
        }
        let played: Vec<Code> = self.covers.iter().map(|c| c.tile).collect();
        if !rack.contains(&played) {
            return Legality::TileNotInRack;
        }

        let first = self.covers[0];
        let horiz = self.covers.iter().all(|c| c.row == first.row);
        let vert = self.covers.iter().all(|c| c.col == first.col);
        if !horiz && !vert {
            return Legality::Disjoint;
        }
        self.horizontal = horiz;
        if horiz {
            self.covers.sort_by_key(|c| c.col);
        } else {
            self.covers.sort_by_key(|c| c.row);
        }

        let mut prev: Option<(usize, usize)> = None;
        for c in &self.covers {
            if board.is_covered(c.row, c.col) {
                return Legality::SquareAlreadyOccupied;
            }
            if let Some((prow, pcol)) = prev {
                if horiz {
                    for ix in (pcol + 1)..c.col {
                        if !board.is_covered(c.row, ix) {
                            return Legality::HasGap;
                        }
                    }
                } else {
                    for ix in (prow + 1)..c.row {
                        if !board.is_covered(ix, c.col) {
                            return Legality::HasGap;
                        }
                    }
                }
            }
            prev = Some((c.row, c.col));
        }

        self.row = self.covers[0].row;
        self.col = self.covers[0].col;
        let mut end_row = self.covers.last().unwrap().row;
        let mut end_col = self.covers.last().unwrap().col;
        if horiz {
            while self.col > 0 && board.is_covered(self.row, self.col - 1) {
                self.col -= 1;
            }
            while end_col + 1 < SIZE && board.is_covered(self.row, end_col + 1) {
                end_col += 1;
            }
        } else {
            while self.row > 0 && board.is_covered(self.row - 1, self.col) {
                self.row -= 1;
            }
            while end_row + 1 < SIZE && board.is_covered(end_row + 1, self.col) {
                end_row += 1;
            }
        }
        let numletters = if horiz { end_col - self.col + 1 } else { end_row - self.row + 1 };

        let mut word = String::new();
        let mut cix = 0;
        for ix in 0..numletters {
            let (at_row, at_col) = if horiz {
                (self.row, self.col + ix)
            } else {
                (self.row + ix, self.col)
            };
            if cix < self.covers.len() && (at_row, at_col) == (self.covers[cix].row, self.covers[cix].col) {
                word.push(self.covers[cix].letter);
                cix += 1;
            } else {
                word.push(board.letter_at(at_row, at_col).unwrap_or('?'));
            }
        }
        self.word = word;

        if !dict.is_word(&self.word) {
            return Legality::WordNotInDictionary;
        }

        if board.is_empty() {
            if !self.covers.iter().any(|c| c.row == CENTER && c.col == CENTER) {
                return Legality::FirstMoveNotInCenter;
            }
        } else {
            if !self.covers.iter().any(|c| board.has_adjacent(c.row, c.col)) {
                return Legality::NotAdjacent;
            }
            for c in &self.covers {
                if board.is_closed(c.row, c.col) {
                    return Legality::CrossWordNotInDictionary;
                }
                let cross = if self.horizontal {
                    format!(
                        "{}{}{}",
                        board.letters_above(c.row, c.col),
                        c.letter,
                        board.letters_below(c.row, c.col)
                    )
                } else {
                    format!(
                        "{}{}{}",
                        board.letters_left(c.row, c.col),
                        c.letter,
                        board.letters_right(c.row, c.col)
                    )
                };
                if cross.chars().count() > 1 && !dict.is_word(&cross) {
                    return Legality::CrossWordNotInDictionary;
                }
            }
        }
        Legality::Legal
    }

    /// Score this move, assumed legal and already processed by
    /// [`Move::check_legality`]. Mirrors `Move.score`.
    pub fn score(&self, board: &Board) -> u32 {
        let numletters = self.word.chars().count();
        let mut sc: u32 = 0;
        let mut wsc: u32 = 1;
        let mut cix = 0;
        let chars: Vec<char> = self.word.chars().collect();
        for ix in 0..numletters {
            let (at_row, at_col) = if self.horizontal {
                (self.row, self.col + ix)
            } else {
                (self.row + ix, self.col)
            };
            if cix < self.covers.len() && (at_row, at_col) == (self.covers[cix].row, self.covers[cix].col) {
                let c = self.covers[cix];
                let lscore = if c.is_blank() { 0 } else { board.alphabet().score_of(c.letter) };
                sc += lscore * board.letter_multiplier(c.row, c.col);
                wsc *= board.word_multiplier(c.row, c.col);
                cix += 1;
            } else {
                sc += board.alphabet().score_of(chars[ix]);
            }
        }
        let mut total = sc * wsc;

        for c in &self.covers {
            let cross = if self.horizontal {
                format!("{}{}", board.tiles_above(c.row, c.col), board.tiles_below(c.row, c.col))
            } else {
                format!("{}{}", board.tiles_left(c.row, c.col), board.tiles_right(c.row, c.col))
            };
            if !cross.is_empty() {
                let mut csc = if c.is_blank() { 0 } else { board.alphabet().score_of(c.letter) };
                csc *= board.letter_multiplier(c.row, c.col);
                let cwsc = board.word_multiplier(c.row, c.col);
                for tile in cross.chars() {
                    csc += if tile == '?' { 0 } else { board.alphabet().score_of(tile) };
                }
                total += csc * cwsc;
            }
        }

        if self.covers.len() == MAX_TILES {
            total += BINGO_BONUS;
        }
        total
    }

    /// Apply this move, assumed legal, removing its tiles from `rack` and
    /// placing them on `board`. Mirrors `Move.apply`.
    pub fn apply(&self, board: &mut Board, rack: &mut Rack) {
        for c in &self.covers {
            let tile = if c.is_blank() {
                let label = board
                    .alphabet()
                    .label_of(c.letter)
                    .expect("cover letter is part of the alphabet");
                Tile::wildcard_from_letter(label)
            } else {
                Tile::try_from(c.tile).expect("cover tile code is a valid label")
            };
            board.set_tile(c.row, c.col, Some(tile));
            rack.remove_tile(c.tile);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rack::Rack;

    const S1: &str = "do:3_ca:2_ea:2\nt|s:0_r|s:0\n|_g|s:0_ne:0\n";

    fn code_of(alphabet: &Alphabet, letter: char) -> Code {
        alphabet.label_of(letter).unwrap()
    }

    fn make_move(alphabet: &Alphabet, placements: &[(usize, usize, char)]) -> Move {
        let mut mv = Move::new();
        for &(row, col, letter) in placements {
            let code = code_of(alphabet, letter);
            assert!(mv.add_cover(alphabet, row, col, code, letter));
        }
        mv
    }

    #[test]
    fn test_first_move_must_cover_center() {
        let alphabet = Alphabet::default();
        let board = Board::new(&alphabet);
        let dict = Dictionary::parse(S1).unwrap();
        let mut rack = Rack::new();
        rack.set_tiles(&[code_of(&alphabet, 'c'), code_of(&alphabet, 'a'), code_of(&alphabet, 't')]);
        let mut mv = make_move(&alphabet, &[(CENTER, CENTER - 1, 'c'), (CENTER, CENTER, 'a'), (CENTER, CENTER + 1, 't')]);
        assert_eq!(mv.check_legality(&board, &rack, &dict, false), Legality::Legal);
        assert_eq!(mv.word(), "cat");
    }

    #[test]
    fn test_off_center_first_move_rejected() {
        let alphabet = Alphabet::default();
        let board = Board::new(&alphabet);
        let dict = Dictionary::parse(S1).unwrap();
        let mut rack = Rack::new();
        rack.set_tiles(&[code_of(&alphabet, 'd'), code_of(&alphabet, 'o')]);
        let mut mv = make_move(&alphabet, &[(0, 0, 'd'), (0, 1, 'o')]);
        assert_eq!(
            mv.check_legality(&board, &rack, &dict, false),
            Legality::FirstMoveNotInCenter
        );
    }

    #[test]
    fn test_bingo_bonus() {
        let alphabet = Alphabet::default();
        let board = Board::new(&alphabet);
        let mut mv = make_move(
            &alphabet,
            &[
                (CENTER, CENTER - 3, 'c'),
                (CENTER, CENTER - 2, 'a'),
                (CENTER, CENTER - 1, 't'),
                (CENTER, CENTER, 's'),
                (CENTER, CENTER + 1, 'c'),
                (CENTER, CENTER + 2, 'a'),
                (CENTER, CENTER + 3, 't'),
            ],
        );
        mv.horizontal = true;
        mv.row = CENTER;
        mv.col = CENTER - 3;
        mv.word = "catscat".to_string();
        assert!(mv.score(&board) >= BINGO_BONUS);
    }
}
