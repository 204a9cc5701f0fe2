//! A player's hand of up to seven tiles.
use crate::bag::Bag;
use crate::tiles::{Code, BLANK};
use multiset::HashMultiSet;

/// Maximum number of tiles a rack can hold.
pub const MAX_TILES: usize = 7;

/// A multiset of tile codes (a blank is the code [`BLANK`]), capped at
/// [`MAX_TILES`].
#[derive(Debug, Clone, Default)]
pub struct Rack(HashMultiSet<Code>);

impl Rack {
    pub fn new() -> Rack {
        Rack(HashMultiSet::new())
    }

    pub fn len(&self) -> usize {
        self.0.total_count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Draw tiles from `bag` until the rack holds `MAX_TILES` tiles or the
    /// bag runs out.
    pub fn replenish(&mut self, bag: &mut Bag) {
        while self.len() < MAX_TILES {
            match bag.draw_tile() {
                Some(tile) => self.0.insert(tile),
                None => break,
            };
        }
    }

    /// Remove one occurrence of `tile`. No-op if the rack doesn't hold it.
    pub fn remove_tile(&mut self, tile: Code) {
        self.0.remove(&tile);
    }

    /// Does the rack hold every tile in `tiles`, counting duplicates?
    pub fn contains(&self, tiles: &[Code]) -> bool {
        let mut remaining = self.0.clone();
        for &tile in tiles {
            if !remaining.remove(&tile) {
                return false;
            }
        }
        true
    }

    /// Overwrite the rack's contents, for tests and scripted scenarios.
    pub fn set_tiles(&mut self, tiles: &[Code]) {
        self.0 = HashMultiSet::new();
        for &tile in tiles {
            self.0.insert(tile);
        }
    }

    pub fn tiles(&self) -> Vec<Code> {
        self.0.iter().copied().collect()
    }

    pub fn has_blank(&self) -> bool {
        self.0.count_of(&BLANK) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;

    #[test]
    fn test_replenish() {
        let alphabet = Alphabet::default();
        let mut bag = Bag::new(&alphabet);
        let mut rack = Rack::new();
        rack.replenish(&mut bag);
        assert_eq!(rack.len(), MAX_TILES);
    }

    #[test]
    fn test_contains() {
        let mut rack = Rack::new();
        rack.set_tiles(&[1, 2, 2, BLANK]);
        assert!(rack.contains(&[1, 2]));
        assert!(rack.contains(&[2, 2]));
        assert!(!rack.contains(&[2, 2, 2]));
        assert!(rack.contains(&[BLANK]));
    }

    #[test]
    fn test_remove_tile() {
        let mut rack = Rack::new();
        rack.set_tiles(&[1, 1, 2]);
        rack.remove_tile(1);
        assert_eq!(rack.len(), 2);
        assert!(rack.contains(&[1, 2]));
        assert!(!rack.contains(&[1, 1]));
    }
}
