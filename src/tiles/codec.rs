use super::{
    codes::{Code, BLANK, EMPTY, LETTER_MASK},
    DIM,
};
use crate::error::Error;
use std::collections::HashMap;

/// String corresponding to tile code
pub type Token = String;

/// A list of `Token`'s
pub type Tokens = Vec<Token>;

const NCODE: usize = 256;
const NOCODE: [Option<char>; 2] = [None; 2];

/// The letter order of the default alphabet, taken from the Icelandic
/// Scrabble tile set: `a á b d ð e é f g h i í j k l m n o ó p r s t u ú v x y ý þ æ ö`.
pub const ICELANDIC_ORDER: &str = "aábdðeéfghiíjklmnoóprstuúvxyýþæö";

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct CodeSet {
    encoder: HashMap<String, Code>,
    decoder: Vec<[Option<char>; 2]>,
}

impl CodeSet {
    /// Build a codec for the letters of `order`, in index order. Each letter
    /// gets code `i+1`; its uppercase form (via `char::to_uppercase`) gets
    /// the same label with the wildcard bit set, matching a blank assigned
    /// to that letter.
    pub fn new(order: &str) -> CodeSet {
        let mut encoder = HashMap::new();

        for (i, ch) in order.chars().enumerate() {
            let code = (i as u8 + 1) & LETTER_MASK;
            encoder.insert(String::from(ch), code);
            for uc in ch.to_uppercase() {
                encoder.insert(String::from(uc), code | BLANK);
            }
        }
        encoder.insert(String::from("."), EMPTY);
        encoder.insert(String::from("*"), BLANK);

        let mut decoder = vec![NOCODE; NCODE];
        for (k, &v) in &encoder {
            let mut it = k.chars();
            decoder[v as usize] = [it.next(), it.next()];
        }
        encoder.insert(String::from(" "), EMPTY); // encode both '.' and ' ' to EMPTY, but always decode to '.'
        CodeSet { encoder, decoder }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Translate between letters and their tile codes.
/// - 0: No tile (empty square)
/// - 1 .. N: letters of the alphabet, in `order`
/// - `BLANK` (0x40): unassigned blank tile
/// - `BLANK | label`: blank tile assigned to `label`
pub struct Codec {
    codeset: CodeSet,
}

impl Default for Codec {
    /// The default codec uses the Icelandic alphabet order.
    fn default() -> Codec {
        Codec::new(ICELANDIC_ORDER)
    }
}

impl Codec {
    /// Return a new `Codec` for the letters of `order`, plus `"*"` (blank)
    /// and `"."`/`" "` (empty).
    /// ## Examples
    /// ```
    /// use crossword_engine::Codec;
    /// let codec = Codec::new("aábdðeéfghiíjklmnoóprstuúvxyýþæö");
    /// ```
    pub fn new(order: &str) -> Codec {
        Codec {
            codeset: CodeSet::new(order),
        }
    }

    /// A simple tokenizer for single char tiles.
    fn tokenize(&self, word: &str) -> Tokens {
        word.chars().map(String::from).collect::<Vec<_>>()
    }

    /// Encode string, and return a list of `u8` labels.
    /// ## Errors
    /// An error is returned if the string can not be encoded with the codec.
    /// ## Examples
    /// ```
    /// use crossword_engine::{Codec, Error};
    /// let codec = Codec::default();
    /// let labels = codec.encode("aA *")?;
    /// assert_eq!(labels, vec![1, 65, 0, 64]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn encode(&self, word: &str) -> Result<Vec<u8>, Error> {
        let tokens = self.tokenize(word);
        if tokens.len() > DIM {
            return Err(Error::EncodeStringTooLong(String::from(word)));
        }
        let codes = tokens
            .into_iter()
            .map(|token| {
                self.codeset
                    .encoder
                    .get(&token)
                    .copied()
                    .ok_or(Error::EncodeInvalidToken(token))
            })
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(codes)
    }
    /// Decode labels, and return a list of strings.
    /// ## Errors
    /// An error is returned if the labels can not be decoded with the codec.
    /// ## Examples
    /// ```
    /// use crossword_engine::Codec;
    /// let codec = Codec::default();
    /// let labels = &[1, 65, 0, 64];
    /// let decoded = codec.decode(labels);
    /// assert_eq!(decoded, &["a", "A", ".", "*"]);
    /// ```
    pub fn decode(&self, codes: &[Code]) -> Vec<String> {
        codes
            .iter()
            .map(|&code| {
                let chars = self.codeset.decoder[code as usize];
                let mut s = String::new();
                s.push(chars[0].unwrap());
                if let Some(ch) = chars[1] {
                    s.push(ch);
                }
                s
            })
            .collect::<Vec<_>>()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_tokenize() {
        let codec = Codec::default();
        let word = "þinga";
        let tokens = codec.tokenize(word);
        assert_eq!(tokens, vec!["þ", "i", "n", "g", "a"]);
    }

    #[test]
    fn test_encode() {
        let codec = Codec::default();
        let word = "aöA*";
        let codes = codec.encode(word).unwrap();
        // a=1, ö=32, A=1|BLANK, *=BLANK
        assert_eq!(codes, vec![1, 32, 1 | BLANK, BLANK]);
    }

    #[test]
    #[should_panic(expected = "EncodeInvalidToken")]
    fn test_encode_error() {
        let codec = Codec::default();
        let word = "Illegal!";
        let codes = codec.encode(word).unwrap();
        println!("{:?}", codes);
    }
}
