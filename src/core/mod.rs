//! Core module - pure game logic with no I/O dependencies

pub mod board;
pub mod game_state;
pub mod ledger;
pub mod perks;
pub mod pieces;
pub mod rng;

// Re-export commonly used types
pub use board::Board;
pub use game_state::{ActivePiece, GameState};
pub use ledger::{RankedEntry, ScoreEntry, ScoreLedger};
pub use perks::{ActiveEffects, EffectTimer, PerkCooldown, PerkInventory};
pub use pieces::{spawn_shape, PieceShape};
pub use rng::{entropy_seed, SimpleRng};
