/// Tile code used to represent `Tile` or `Letter`. See [`Codec`](crate::Codec).
pub type Code = u8;

/// 1-based letter code, `1..=N` for the `N`-letter alphabet in use.
pub type Label = u8;

/// code for EMPTY (no tile)
pub const EMPTY: Code = 0;

/// code for BLANK tile (unassigned wildcard)
pub const BLANK: Code = 0x40;

/// Mask to get the label value, stripping the wildcard bit. Six bits
/// accommodate alphabets of up to 63 letters (the default Icelandic
/// alphabet uses 32).
pub const LETTER_MASK: u8 = 0x3f;

/// bitflag for wildcard
pub const IS_WILDCARD: Code = 0x40;

/// An uninitialized tile
pub(super) const UNINIT: Code = 0x7f;
