pub mod bitboard;
pub mod board;
pub mod direction;
pub mod piece;
pub use board::*;
