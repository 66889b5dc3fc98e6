pub(crate) mod bitboard;
pub(crate) mod board;
pub(crate) mod notation;
pub mod side;
pub mod square;

pub use bitboard::Bitboard;
pub use board::{Board, GameState, MoveGenerator};
pub use notation::types::*;
pub use side::Side;
pub use square::{Coord, Direction, Square};
