pub mod evaluation;
pub mod piece_square_tables;
pub use evaluation::*;
