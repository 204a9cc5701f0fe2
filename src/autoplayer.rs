//! Ranks candidate moves and falls back to an exchange or a pass.
use crate::bag::Bag;
use crate::board::Board;
use crate::dawg::Dictionary;
use crate::movegen::generate_moves;
use crate::mv::Move;
use crate::rack::{Rack, MAX_TILES};
use crate::tiles::Code;

/// What the autoplayer decided to do this turn. [`choose_move`] only ever
/// returns the first three variants; `Resign` exists so callers can route
/// a player's own resignation through the same type.
#[derive(Debug, Clone)]
pub enum Candidate {
    Place(Move),
    Exchange(Vec<Code>),
    Pass,
    Resign,
}

/// Pick the best-scoring legal move, or fall back to an exchange (if the
/// bag holds enough tiles to make one) or a pass.
pub fn choose_move(board: &Board, rack: &Rack, bag: &Bag, dict: &Dictionary) -> Candidate {
    let mut candidates = generate_moves(board, rack, dict);
    if candidates.is_empty() {
        return if bag.len() >= MAX_TILES {
            Candidate::Exchange(rack.tiles())
        } else {
            Candidate::Pass
        };
    }
    let first_move = board.is_empty();
    // Stable sort: descending score, then (first move) the lowest row,
    // else the most covers.
    candidates.sort_by(|a, b| {
        let sa = a.score(board);
        let sb = b.score(board);
        sb.cmp(&sa).then_with(|| {
            if first_move {
                a.row().cmp(&b.row())
            } else {
                b.covers().len().cmp(&a.covers().len())
            }
        })
    });
    Candidate::Place(candidates.into_iter().next().expect("checked non-empty above"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;

    const S1: &str = "do:3_ca:2_ea:2\nt|s:0_r|s:0\n|_g|s:0_ne:0\n";

    #[test]
    fn test_empty_rack_passes_when_bag_short() {
        let alphabet = Alphabet::default();
        let board = Board::new(&alphabet);
        let dict = Dictionary::parse(S1).unwrap();
        let rack = Rack::new();
        let mut bag = Bag::new(&alphabet);
        while bag.len() > 3 {
            bag.draw_tile();
        }
        match choose_move(&board, &rack, &bag, &dict) {
            Candidate::Pass => {}
            other => panic!("expected Pass, got {:?}", other),
        }
    }
}
