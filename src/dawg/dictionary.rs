use crate::error::Error;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Identifies a node in a loaded [`Dictionary`]. The root is the
/// synthetic id `0` (it is line 1 on disk); every other node's id is its
/// line number, `2..M`. An edge with no target (`None`) means its prefix's
/// last letter is an implicit final letter with no successor node.
pub type NodeId = u32;

/// In-memory id of the root node.
pub const ROOT: NodeId = 0;

#[derive(Debug, Default, Clone)]
struct Node {
    is_final: bool,
    /// `(prefix, child)` pairs, sorted by the alphabet's collation order on
    /// the prefix's first character.
    edges: Vec<(String, Option<NodeId>)>,
}

/// A loaded, immutable DAWG, ready for [`navigate`](crate::dawg::navigate).
///
/// Loading is exposed as [`Dictionary::load_once`], backed by a
/// [`OnceLock`]: the first caller to request the dictionary performs the
/// load, all later callers share the same `Arc`.
#[derive(Debug, Default)]
pub struct Dictionary {
    nodes: HashMap<NodeId, Node>,
}

static DICTIONARY: OnceLock<Arc<Dictionary>> = OnceLock::new();

impl Dictionary {
    /// Parse a dictionary from its text-DAWG representation (see the
    /// module documentation for the grammar).
    pub fn parse(text: &str) -> Result<Dictionary, Error> {
        let mut nodes: HashMap<NodeId, Node> = HashMap::new();
        let mut index: u32 = 1;
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            let nodeid = if index > 1 { index } else { ROOT };
            index += 1;
            let node = parse_line(line, lineno + 1)?;
            nodes.insert(nodeid, node);
        }
        Ok(Dictionary { nodes })
    }

    /// Load a dictionary from a text-DAWG file.
    pub fn load(path: impl AsRef<Path>) -> Result<Dictionary, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        Dictionary::parse(&text)
    }

    /// Load the dictionary at `path` once per process and share it across
    /// every later call, regardless of the path given on subsequent calls.
    pub fn load_once(path: impl AsRef<Path>) -> Result<Arc<Dictionary>, Error> {
        if let Some(dict) = DICTIONARY.get() {
            return Ok(dict.clone());
        }
        let dict = Arc::new(Dictionary::load(path)?);
        Ok(DICTIONARY.get_or_init(|| dict).clone())
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn is_final(&self, node: NodeId) -> bool {
        self.nodes.get(&node).map_or(false, |n| n.is_final)
    }

    pub fn edges(&self, node: NodeId) -> &[(String, Option<NodeId>)] {
        self.nodes
            .get(&node)
            .map_or(&[] as &[(String, Option<NodeId>)], |n| n.edges.as_slice())
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Exact membership test, using [`crate::dawg::FindNavigator`].
    pub fn is_word(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut policy = crate::dawg::FindNavigator::new(word);
        crate::dawg::navigate(self, &mut policy);
        policy.found()
    }
}

fn parse_line(line: &str, lineno: usize) -> Result<Node, Error> {
    let mut parts = line.split('_');
    let mut node = Node::default();
    let first = parts.next().unwrap_or("");
    let (first, is_final) = match first.strip_prefix('|') {
        Some(rest) => (rest, true),
        None => (first, false),
    };
    node.is_final = is_final;
    if !first.is_empty() {
        node.edges.push(parse_edge(first, line, lineno)?);
    }
    for part in parts {
        node.edges.push(parse_edge(part, line, lineno)?);
    }
    Ok(node)
}

fn parse_edge(edge: &str, line: &str, lineno: usize) -> Result<(String, Option<NodeId>), Error> {
    let (prefix, id) = edge
        .rsplit_once(':')
        .ok_or_else(|| Error::MalformedDawgLine {
            line: lineno,
            text: line.to_string(),
        })?;
    let id: NodeId = id.parse().map_err(|_| Error::MalformedDawgLine {
        line: lineno,
        text: line.to_string(),
    })?;
    if prefix.is_empty() {
        return Err(Error::MalformedDawgLine {
            line: lineno,
            text: line.to_string(),
        });
    }
    let target = if id == 0 { None } else { Some(id) };
    Ok((prefix.to_string(), target))
}

#[cfg(test)]
mod tests {
    use super::*;

    const S1: &str = "do:3_ca:2_ea:2\nt|s:0_r|s:0\n|_g|s:0_ne:0\n";

    #[test]
    fn test_parse_s1() {
        let dict = Dictionary::parse(S1).unwrap();
        assert_eq!(dict.num_nodes(), 3);
        assert!(dict.is_word("cats"));
        assert!(dict.is_word("do"));
        assert!(dict.is_word("done"));
        assert!(!dict.is_word("dogged"));
        assert!(!dict.is_word(""));
    }

    #[test]
    fn test_malformed_line() {
        assert!(Dictionary::parse("ca2\n").is_err());
    }

    /// Property 4: no serialized prefix starts with `|` or doubles it, and
    /// every edge target is `0` or a valid node id.
    #[test]
    fn test_edge_prefix_hygiene() {
        let alphabet = crate::alphabet::Alphabet::default();
        let mut builder = crate::dawg::Builder::new(&alphabet);
        let mut words = ["car", "cars", "cat", "cats", "do", "dog", "dogs", "done"];
        words.sort_by_key(|w| alphabet.sort_key_ci(w));
        for w in words {
            builder.add_word(w).unwrap();
        }
        let dawg = builder.finish();
        let text = dawg.to_text();
        let _dict = Dictionary::parse(&text).unwrap();
        let max_id = text.lines().count() as NodeId;
        for line in text.lines() {
            let body = line.strip_prefix("|_").unwrap_or(line);
            for edge in body.split('_') {
                let (prefix, id) = edge.rsplit_once(':').unwrap();
                assert!(!prefix.starts_with('|'));
                assert!(!prefix.contains("||"));
                let id: NodeId = id.parse().unwrap();
                assert!(id == 0 || (2..=max_id).contains(&id));
            }
        }
    }
}
