use super::bitboard::Bitboard;
use super::piece::{Piece, PieceType};
use num_enum::UnsafeFromPrimitive;
use std::collections::HashMap;
use std::fmt::Display;
use std::ops::{Index, IndexMut};

const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const RANK_1: Bitboard = Bitboard(0xFF00000000000000);
pub const RANK_2: Bitboard = Bitboard(0x00FF000000000000);
pub const RANK_3: Bitboard = Bitboard(0x0000FF0000000000);
pub const RANK_4: Bitboard = Bitboard(0x000000FF00000000);
pub const RANK_5: Bitboard = Bitboard(0x00000000FF000000);
pub const RANK_6: Bitboard = Bitboard(0x0000000000FF0000);
pub const RANK_7: Bitboard = Bitboard(0x000000000000FF00);
pub const RANK_8: Bitboard = Bitboard(0x00000000000000FF);
pub const RANKS: [Bitboard; 8] = [RANK_1, RANK_2, RANK_3, RANK_4, RANK_5, RANK_6, RANK_7, RANK_8];

/// Mirrors a square vertically, keeping its file.
pub fn flip_rank(square: usize) -> usize {
    let rank = square / 8;
    let file = square % 8;
    let new_rank = 7 - rank;
    new_rank * 8 + file
}

/// A static snapshot of a position. The evaluator only ever reads it.
#[derive(Clone)]
pub struct Board {
    pub squares: [Option<Piece>; 64],
    pub side: Side,
    pub occupied_squares: Bitboard,
    pub side_squares: [Bitboard; 2],
    pub piece_squares: [Bitboard; 12],
}

impl Board {
    pub fn from_fen(fen: &str) -> Self {
        let mut board = Self::default();
        board.load_fen(fen);
        board
    }
    pub fn start_pos() -> Self {
        Self::from_fen(STARTING_FEN)
    }

    // Only the piece placement and side-to-move fields matter for a static
    // snapshot; castling rights, en passant and the clocks are ignored.
    fn load_fen(&mut self, fen: &str) {
        let piece_types = HashMap::from([('p', PieceType::Pawn), ('n', PieceType::Knight), ('b', PieceType::Bishop), ('r', PieceType::Rook), ('q', PieceType::Queen), ('k', PieceType::King)]);
        let fields: Vec<&str> = fen.split(' ').collect();
        let ranks: Vec<&str> = fields.first().unwrap().split('/').collect();
        for (rank, rank_string) in ranks.iter().enumerate() {
            let mut file = 0;
            for piece_char in rank_string.chars() {
                if let Some(skipped) = piece_char.to_digit(10) {
                    file += skipped as usize;
                } else {
                    let square = rank * 8 + file;
                    let piece_type = piece_types.get(&piece_char.to_ascii_lowercase()).copied().unwrap();
                    let side = if piece_char.is_uppercase() { Side::White } else { Side::Black };
                    self.squares[square] = Some(Piece::new(piece_type, side));
                    file += 1;
                }
            }
        }

        match *fields.get(1).unwrap_or(&"w") {
            "w" => self.side = Side::White,
            "b" => self.side = Side::Black,
            _ => panic!("Invalid fen string"),
        }

        self.initialize_bitboards();
    }

    fn initialize_bitboards(&mut self) {
        for square in 0..64 {
            if let Some(piece) = self.squares[square] {
                self.piece_squares[piece].set_bit(square);
                self.side_squares[piece.side()].set_bit(square);
                self.occupied_squares.set_bit(square);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [None; 64],
            side: Side::White,
            occupied_squares: Bitboard(0),
            side_squares: [Bitboard(0); 2],
            piece_squares: [Bitboard(0); 12],
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let piece_chars = HashMap::from([(PieceType::Pawn, 'p'), (PieceType::Knight, 'n'), (PieceType::Bishop, 'b'), (PieceType::Rook, 'r'), (PieceType::Queen, 'q'), (PieceType::King, 'k')]);
        for rank in 0..8 {
            write!(f, "{}", 8 - rank).unwrap();
            for file in 0..8 {
                write!(f, " ").unwrap();
                match self.squares[rank * 8 + file] {
                    Some(piece) => {
                        let piece_char = piece_chars.get(&piece.piece_type()).unwrap();
                        match piece.side() {
                            Side::White => write!(f, "{}", piece_char.to_ascii_uppercase()).unwrap(),
                            Side::Black => write!(f, "{}", piece_char).unwrap(),
                        }
                    }
                    None => write!(f, ".").unwrap(),
                }
            }
            writeln!(f).unwrap();
        }
        write!(f, " ").unwrap();
        for file in 'a'..='h' {
            write!(f, " {}", file).unwrap();
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, UnsafeFromPrimitive)]
#[repr(u8)]
pub enum Side {
    White = 0,
    Black,
}

impl Side {
    pub fn enemy(&self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
    pub fn factor(&self) -> i32 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }
    /// Maps a square into the White frame of reference. All side-relative
    /// geometry goes through this one transform so both sides stay exact
    /// mirrors of each other.
    pub fn relative_square(&self, square: usize) -> usize {
        match self {
            Side::White => square,
            Side::Black => flip_rank(square),
        }
    }
    /// Ranks advanced from this side's own back rank, 0..=7.
    pub fn relative_rank(&self, square: usize) -> usize {
        7 - self.relative_square(square) / 8
    }
}
impl<T, const N: usize> Index<Side> for [T; N] {
    type Output = T;

    fn index(&self, index: Side) -> &Self::Output {
        &self[index as usize]
    }
}
impl<T, const N: usize> IndexMut<Side> for [T; N] {
    fn index_mut(&mut self, index: Side) -> &mut Self::Output {
        &mut self[index as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_correct_bitboards_from_squares() {
        let board = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1");
        let white_pawn_bitboard = board.piece_squares[Piece::new(PieceType::Pawn, Side::White)];
        assert_eq!(white_pawn_bitboard.0, 0x00FF000000000000);
        assert_eq!(board.piece_squares[Piece::BlackKing].lsb(), 4);
        assert_eq!(board.occupied_squares.count_ones(), 32);
    }
    #[test]
    fn parses_side_to_move() {
        assert_eq!(Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").side, Side::White);
        assert_eq!(Board::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").side, Side::Black);
    }
    #[test]
    fn relative_geometry_mirrors_between_sides() {
        // e2 and e7 are the same square from each side's point of view
        let e2 = 52;
        let e7 = 12;
        assert_eq!(Side::Black.relative_square(e7), e2);
        assert_eq!(Side::White.relative_rank(e2), 1);
        assert_eq!(Side::Black.relative_rank(e7), 1);
        assert_eq!(flip_rank(flip_rank(17)), 17);
    }
}
