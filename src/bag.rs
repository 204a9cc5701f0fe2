//! The pool of tiles not yet drawn onto a rack.
use crate::alphabet::Alphabet;
use crate::tiles::Code;
use multiset::HashMultiSet;
use rand::Rng;

/// A multiset of tile codes, drawn from uniformly at random.
#[derive(Debug, Clone)]
pub struct Bag(HashMultiSet<Code>);

impl Bag {
    /// A freshly filled bag for `alphabet`.
    pub fn new(alphabet: &Alphabet) -> Bag {
        Bag(alphabet.full_bag())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.total_count()
    }

    /// Draw a single tile uniformly at random, or `None` if the bag is empty.
    pub fn draw_tile(&mut self) -> Option<Code> {
        if self.0.is_empty() {
            return None;
        }
        let tiles: Vec<Code> = self.0.iter().copied().collect();
        let tile = tiles[rand::thread_rng().gen_range(0..tiles.len())];
        self.0.remove(&tile);
        Some(tile)
    }

    /// Return tiles to the bag, e.g. after an exchange move.
    pub fn return_tiles(&mut self, tiles: &[Code]) {
        for &tile in tiles {
            self.0.insert(tile);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_empties_bag() {
        let alphabet = Alphabet::default();
        let mut bag = Bag::new(&alphabet);
        let total = bag.len();
        let mut drawn = Vec::new();
        while let Some(tile) = bag.draw_tile() {
            drawn.push(tile);
        }
        assert_eq!(drawn.len(), total);
        assert!(bag.is_empty());
    }

    #[test]
    fn test_return_tiles() {
        let alphabet = Alphabet::default();
        let mut bag = Bag::new(&alphabet);
        let before = bag.len();
        let tile = bag.draw_tile().unwrap();
        bag.return_tiles(&[tile]);
        assert_eq!(bag.len(), before);
    }
}
