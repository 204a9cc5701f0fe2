use super::navigator::Policy;

/// Exact-match lookup: does `word` appear in the dictionary?
///
/// Grounded in `DawgDictionary._nav_from_node`/`_follow_edge`: at most one
/// sibling edge can ever match a given character, so `pop_edge` never asks
/// for another sibling.
pub struct FindNavigator {
    word: Vec<char>,
    pos: usize,
    found: bool,
}

impl FindNavigator {
    pub fn new(word: &str) -> Self {
        FindNavigator {
            word: word.chars().collect(),
            pos: 0,
            found: false,
        }
    }

    pub fn found(&self) -> bool {
        self.found
    }
}

impl Policy for FindNavigator {
    fn push_edge(&mut self, first_char: char) -> bool {
        self.pos < self.word.len() && self.word[self.pos] == first_char
    }

    fn accepting(&self) -> bool {
        self.pos < self.word.len()
    }

    fn accepts(&mut self, ch: char) -> bool {
        if self.pos < self.word.len() && self.word[self.pos] == ch {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn accept(&mut self, _matched: &str, is_final: bool) {
        if is_final && self.pos == self.word.len() {
            self.found = true;
        }
    }

    fn pop_edge(&mut self) -> bool {
        false
    }
}

/// Wildcard pattern match: `?` matches any single letter. Collects every
/// dictionary word whose length equals `pattern.len()`.
///
/// Grounded in `DawgDictionary.find_matches`/`_match_from_node`. Unlike
/// `FindNavigator`, a wildcard position can have more than one viable
/// sibling edge, so each entered edge saves the pattern position it
/// started from and `pop_edge` restores it, continuing siblings only when
/// that position was a wildcard.
pub struct MatchNavigator {
    pattern: Vec<char>,
    pos: usize,
    saved: Vec<usize>,
    matches: Vec<String>,
}

impl MatchNavigator {
    pub fn new(pattern: &str) -> Self {
        MatchNavigator {
            pattern: pattern.chars().collect(),
            pos: 0,
            saved: Vec::new(),
            matches: Vec::new(),
        }
    }

    /// Matches found, in DAWG sibling order (alphabet collation).
    pub fn into_matches(self) -> Vec<String> {
        self.matches
    }

    pub fn matches(&self) -> &[String] {
        &self.matches
    }
}

impl Policy for MatchNavigator {
    fn push_edge(&mut self, first_char: char) -> bool {
        if self.pos >= self.pattern.len() {
            return false;
        }
        let pc = self.pattern[self.pos];
        let ok = pc == '?' || pc == first_char;
        if ok {
            self.saved.push(self.pos);
        }
        ok
    }

    fn accepting(&self) -> bool {
        self.pos < self.pattern.len()
    }

    fn accepts(&mut self, ch: char) -> bool {
        if self.pos >= self.pattern.len() {
            return false;
        }
        let pc = self.pattern[self.pos];
        if pc == '?' || pc == ch {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn accept(&mut self, matched: &str, is_final: bool) {
        if is_final && self.pos == self.pattern.len() {
            self.matches.push(matched.to_string());
        }
    }

    fn pop_edge(&mut self) -> bool {
        let saved = self.saved.pop().expect("pop_edge without push_edge");
        let was_wildcard = self.pattern.get(saved) == Some(&'?');
        self.pos = saved;
        was_wildcard
    }
}

/// Rack permutation search: every dictionary word of at least `min_len`
/// letters that can be built from the multiset `rack` (which may contain
/// `'?'` wildcards, each standing for any single letter).
///
/// Grounded in `DawgDictionary.find_permutations`/`_perm_from_node`. Every
/// edge whose first letter is still available is a candidate (not just
/// one, as in `MatchNavigator`), so `pop_edge` always continues siblings
/// after restoring the rack.
pub struct PermutationNavigator {
    rack: Vec<char>,
    min_len: usize,
    saved: Vec<Vec<char>>,
    matches: Vec<String>,
}

impl PermutationNavigator {
    pub fn new(rack: &str, min_len: usize) -> Self {
        PermutationNavigator {
            rack: rack.chars().collect(),
            min_len,
            saved: Vec::new(),
            matches: Vec::new(),
        }
    }

    pub fn into_matches(self) -> Vec<String> {
        self.matches
    }

    pub fn matches(&self) -> &[String] {
        &self.matches
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

impl Policy for PermutationNavigator {
    fn push_edge(&mut self, first_char: char) -> bool {
        let ok = self.rack.contains(&first_char) || self.rack.contains(&'?');
        if ok {
            self.saved.push(self.rack.clone());
        }
        ok
    }

    fn accepting(&self) -> bool {
        !self.rack.is_empty()
    }

    fn accepts(&mut self, ch: char) -> bool {
        self.take(ch)
    }

    fn accept(&mut self, matched: &str, is_final: bool) {
        if is_final && matched.chars().count() >= self.min_len {
            self.matches.push(matched.to_string());
        }
    }

    fn pop_edge(&mut self) -> bool {
        self.rack = self.saved.pop().expect("pop_edge without push_edge");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dawg::{navigate, Dictionary};

    const S1: &str = "do:3_ca:2_ea:2\nt|s:0_r|s:0\n|_g|s:0_ne:0\n";

    #[test]
    fn test_find() {
        let dict = Dictionary::parse(S1).unwrap();
        let mut p = FindNavigator::new("cats");
        navigate(&dict, &mut p);
        assert!(p.found());

        let mut p = FindNavigator::new("dogged");
        navigate(&dict, &mut p);
        assert!(!p.found());
    }

    #[test]
    fn test_match() {
        let dict = Dictionary::parse(S1).unwrap();
        let mut p = MatchNavigator::new("?at");
        navigate(&dict, &mut p);
        let mut m = p.into_matches();
        m.sort();
        assert_eq!(m, vec!["cat", "eat"]);
    }

    #[test]
    fn test_permutation() {
        let dict = Dictionary::parse(S1).unwrap();
        let mut p = PermutationNavigator::new("tac", 1);
        navigate(&dict, &mut p);
        let mut m = p.into_matches();
        m.sort();
        assert_eq!(m, vec!["cat"]);
    }
}
