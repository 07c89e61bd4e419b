//! Input module - terminal key events to game commands

pub mod map;

pub use map::{is_pause, map_game_key, should_quit};
