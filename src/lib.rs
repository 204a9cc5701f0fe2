#![deny(clippy::wrong_pub_self_convention, clippy::used_underscore_binding,
   clippy::map_unwrap_or,
   clippy::int_plus_one, clippy::string_add_assign, clippy::if_not_else,
   clippy::invalid_upcast_comparisons,
   clippy::mutex_integer, clippy::mut_mut, clippy::items_after_statements,
   clippy::print_stdout, clippy::mem_forget, clippy::maybe_infinite_iter)]

//! A crossword-game engine for Rust.
//! <br>
//! This crate builds and navigates minimized Directed Acyclic Word Graphs,
//! and generates every legal move on a 15x15 board for the 32-letter
//! Icelandic alphabet using the Appel & Jacobson anchor-square algorithm.
//! It can use the `rayon` crate to evaluate moves in parallel.
//!
//! # How to use `crossword_engine`
//! Build or load a [`Dictionary`], draw a [`Rack`] from a [`Bag`], and ask
//! [`generate_moves`] for every legal placement on a [`Board`], or let
//! [`choose_move`] pick the best one.
//!
//! # Basic usage
//! ```
//! # use crossword_engine::{Alphabet, Board, Bag, Rack};
//! let alphabet = Alphabet::default();
//! let board = Board::new(&alphabet);
//! let mut bag = Bag::new(&alphabet);
//! let mut rack = Rack::new();
//! rack.replenish(&mut bag);
//! assert_eq!(rack.len(), 7);
//! assert!(board.is_empty());
//! ```
mod alphabet;
mod autoplayer;
mod axis;
mod bag;
mod board;
mod dawg;
mod error;
mod grid;
mod labelset;
mod movegen;
mod mv;
mod rack;
mod tiles;

pub use crate::alphabet::Alphabet;
pub use crate::autoplayer::{choose_move, Candidate};
pub use crate::axis::{Axis, AxisSquare};
pub use crate::bag::Bag;
pub use crate::board::{Board, BINGO_BONUS, CENTER, SIZE};
pub use crate::dawg::{
    navigate as dawg_navigate, Builder as DawgBuilder, Dawg, Dictionary, FindNavigator,
    MatchNavigator, NodeId, PermutationNavigator, Policy as DawgPolicy, ROOT as DAWG_ROOT,
};
pub use crate::error::Error;
pub use crate::grid::Grid;
pub use crate::movegen::generate_moves;
pub use crate::mv::{Cover, Legality, Move};
pub use crate::rack::{Rack, MAX_TILES};
pub use crate::tiles::{
    Cell, Code, Codec, Item, ItemList, Label, Letter, Letters, List, Row, Tile, Word,
};
