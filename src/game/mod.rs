//! Core Connect Four rules: board representation, player seats, win
//! detection and the turn-based game state machine.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS, MIN_DIMENSION, RUN_LENGTH};
pub use player::{Player, PlayerId};
pub use state::{GameState, GameStatus, MoveError, Placement};
