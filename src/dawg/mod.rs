//! Directed Acyclic Word Graph: construction, textual serialization and
//! generic policy-driven navigation.
mod builder;
mod dictionary;
mod navigator;
mod policies;

pub use builder::{Builder, Dawg};
pub use dictionary::{Dictionary, NodeId, ROOT};
pub use navigator::{navigate, Policy};
pub use policies::{FindNavigator, MatchNavigator, PermutationNavigator};

/// Longest word the builder will accept.
pub const MAXLEN: usize = 48;
