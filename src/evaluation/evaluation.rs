use crate::attack_tables::{bishop_attacks, rook_attacks};
use crate::board::bitboard::Bitboard;
use crate::board::direction::Direction;
use crate::board::piece::{Piece, PieceType};
use crate::board::{Board, Side, RANK_2};
use crate::evaluation::piece_square_tables::*;

/// Piece material at which a position counts as fully midgame.
const MAX_MATERIAL: i32 = 3100;
/// Returned when a side's king has been captured.
pub const KING_CAPTURED_SCORE: i32 = 10000;

const PASSED_PAWN_BONUS: i32 = 50;
const DOUBLED_PAWN_PENALTY: i32 = 10;
const ISOLATED_PAWN_PENALTY: i32 = 20;
const BACKWARD_PAWN_PENALTY: i32 = 10;
const UNSAFE_KING_PENALTY: i32 = 24;
const BISHOP_PAIR_BONUS: i32 = 40;
const BISHOP_MOBILITY_BONUS: i32 = 2;
const ROOK_MOBILITY_BONUS: i32 = 3;
const OPEN_FILE_BONUS: i32 = 20;
const SEMI_OPEN_FILE_BONUS: i32 = 10;
const KNIGHT_KING_PROXIMITY_BONUS: i32 = 3;
const BISHOP_KING_PROXIMITY_BONUS: i32 = 1;
const ROOK_KING_PROXIMITY_BONUS: i32 = 2;
const QUEEN_KING_PROXIMITY_BONUS: i32 = 4;

/// Static evaluation tables, generated once and shared read-only between all
/// evaluation calls.
pub struct Evaluator {
    pawn_table: PieceSquareTable,
    pawn_table_endgame: PieceSquareTable,
    knight_table: PieceSquareTable,
    bishop_table: PieceSquareTable,
    rook_table: PieceSquareTable,
    queen_table: PieceSquareTable,
    king_table: PieceSquareTable,
    king_table_endgame: PieceSquareTable,
    square_proximity: [[i32; 64]; 64],
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            pawn_table: generate_piece_square_table(&PAWN_PARAMS),
            pawn_table_endgame: generate_piece_square_table(&PAWN_ENDGAME_PARAMS),
            knight_table: generate_piece_square_table(&KNIGHT_PARAMS),
            bishop_table: generate_piece_square_table(&BISHOP_PARAMS),
            queen_table: generate_piece_square_table(&QUEEN_PARAMS),
            king_table_endgame: generate_piece_square_table(&KING_ENDGAME_PARAMS),
            rook_table: mirrored_table(&ROOK_SQUARE_TABLE),
            king_table: mirrored_table(&KING_SQUARE_TABLE),
            square_proximity: king_proximity_table(),
        }
    }

    /// Score from the playing side's perspective.
    pub fn nega_evaluate(&self, board: &Board, side_to_move: Side) -> i32 {
        self.evaluate(board) * side_to_move.factor()
    }

    /// Score in centipawns, positive when White is better.
    pub fn evaluate(&self, board: &Board) -> i32 {
        if board.piece_squares[Piece::BlackKing] == 0 {
            return KING_CAPTURED_SCORE;
        }
        if board.piece_squares[Piece::WhiteKing] == 0 {
            return -KING_CAPTURED_SCORE;
        }

        let material = [piece_material(board, Side::White), piece_material(board, Side::Black)];
        let total_material = material[0] + material[1];

        let pawns = board.piece_squares[Piece::WhitePawn] | board.piece_squares[Piece::BlackPawn];
        if total_material <= 300 && pawns == 0 {
            // draw by insufficient mating material
            return 0;
        }

        let structure = PawnStructure::new(board);
        self.side_score(board, Side::White, &structure, material, total_material) - self.side_score(board, Side::Black, &structure, material, total_material)
    }

    fn side_score(&self, board: &Board, side: Side, structure: &PawnStructure, material: [i32; 2], total_material: i32) -> i32 {
        let enemy = side.enemy();
        let mut score = 0;

        let pawns = board.piece_squares[Piece::new(PieceType::Pawn, side)];
        score += structure.passed_pawns[side].count_ones() as i32 * PASSED_PAWN_BONUS * (MAX_MATERIAL - total_material) / MAX_MATERIAL;
        score -= structure.doubled_pawns[side].count_ones() as i32 * DOUBLED_PAWN_PENALTY;
        score -= structure.isolated_pawns[side].count_ones() as i32 * ISOLATED_PAWN_PENALTY;
        score -= structure.backward_pawns[side].count_ones() as i32 * BACKWARD_PAWN_PENALTY;
        for square in pawns {
            score += taper(self.pawn_table[side][square], self.pawn_table_endgame[side][square], total_material);
        }

        let king_square = board.piece_squares[Piece::new(PieceType::King, side)].lsb();
        score += taper(self.king_table[side][king_square], self.king_table_endgame[side][king_square], total_material);
        // an unsafe king only matters while the opponent keeps attacking material
        score -= self.king_safety_penalty(board, side, king_square, structure) * material[enemy] / MAX_MATERIAL;

        let enemy_king_square = board.piece_squares[Piece::new(PieceType::King, enemy)].lsb();
        let friendly_squares = board.side_squares[side];
        let mut proximity_bonus = 0;

        let bishops = board.piece_squares[Piece::new(PieceType::Bishop, side)];
        if bishops.count_ones() == 2 {
            score += BISHOP_PAIR_BONUS;
        }
        for square in bishops {
            score += self.bishop_table[side][square];
            score += BISHOP_MOBILITY_BONUS * ((bishop_attacks(square, board.occupied_squares) & !friendly_squares).count_ones() as i32 - 5);
            proximity_bonus += self.square_proximity[enemy_king_square][square] * BISHOP_KING_PROXIMITY_BONUS;
        }

        for square in board.piece_squares[Piece::new(PieceType::Knight, side)] {
            score += self.knight_table[side][square];
            proximity_bonus += self.square_proximity[enemy_king_square][square] * KNIGHT_KING_PROXIMITY_BONUS;
        }

        let rooks = board.piece_squares[Piece::new(PieceType::Rook, side)];
        let queens = board.piece_squares[Piece::new(PieceType::Queen, side)];

        score += (structure.open_files & (rooks | queens)).count_ones() as i32 * OPEN_FILE_BONUS;
        score += (structure.semi_open_files[side] & (rooks | queens)).count_ones() as i32 * SEMI_OPEN_FILE_BONUS;

        for square in rooks {
            score += self.rook_table[side][square];
            score += ROOK_MOBILITY_BONUS * ((rook_attacks(square, board.occupied_squares) & !friendly_squares).count_ones() as i32 - 5);
            proximity_bonus += self.square_proximity[enemy_king_square][square] * ROOK_KING_PROXIMITY_BONUS;
        }
        for square in queens {
            score += self.queen_table[side][square];
            proximity_bonus += self.square_proximity[enemy_king_square][square] * QUEEN_KING_PROXIMITY_BONUS;
        }

        // attacking bonuses fade as the attacking side loses material
        score += proximity_bonus * material[side] / MAX_MATERIAL;

        score
    }

    fn king_safety_penalty(&self, board: &Board, side: Side, king_square: usize, structure: &PawnStructure) -> i32 {
        let shield = pawn_shield_mask(side, king_square);
        let pawns = board.piece_squares[Piece::new(PieceType::Pawn, side)];
        let mut penalty = 0;

        let open_files_around_king = structure.open_files & shield;
        penalty += open_files_around_king.count_ones() as i32 * UNSAFE_KING_PENALTY;

        // pawns missing directly in front of the king
        let pawn_missing_front_of_king = !pawns & shield;
        penalty += pawn_missing_front_of_king.count_ones() as i32 * UNSAFE_KING_PENALTY;

        // and on the squares one further up
        let pawn_missing_two_front_of_king = !pawns & pawn_missing_front_of_king.shift(Direction::up(side));
        penalty += pawn_missing_two_front_of_king.count_ones() as i32 * UNSAFE_KING_PENALTY;

        penalty
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Weighted piece count, pawns and king excluded. Used as the game phase
/// indicator rather than added to the score directly.
fn piece_material(board: &Board, side: Side) -> i32 {
    [PieceType::Knight, PieceType::Bishop, PieceType::Rook, PieceType::Queen]
        .iter()
        .map(|&piece_type| board.piece_squares[Piece::new(piece_type, side)].count_ones() as i32 * piece_type.material_value())
        .sum()
}

/// Blends a midgame and an endgame value by the material left on the board.
fn taper(midgame_value: i32, endgame_value: i32, total_material: i32) -> i32 {
    endgame_value + (midgame_value - endgame_value) * total_material / MAX_MATERIAL
}

/// The three squares on the rank directly in front of the king, built in the
/// White frame and mirrored back for Black.
fn pawn_shield_mask(side: Side, king_square: usize) -> Bitboard {
    let up = Bitboard::from_square(side.relative_square(king_square)).north();
    let mask = (up.west() | up | up.east()) & RANK_2;
    match side {
        Side::White => mask,
        Side::Black => Bitboard(mask.0.swap_bytes()),
    }
}

fn pawn_attack_spans(side: Side, pawns: Bitboard) -> Bitboard {
    let up = pawns.shift(Direction::up(side));
    up.west() | up.east()
}

fn forward_fill(side: Side, bitboard: Bitboard) -> Bitboard {
    match side {
        Side::White => bitboard.north_fill(),
        Side::Black => bitboard.south_fill(),
    }
}

/// Pawn classification masks for both sides, derived once per evaluation from
/// the two pawn bitboards.
struct PawnStructure {
    open_files: Bitboard,
    semi_open_files: [Bitboard; 2],
    passed_pawns: [Bitboard; 2],
    doubled_pawns: [Bitboard; 2],
    isolated_pawns: [Bitboard; 2],
    backward_pawns: [Bitboard; 2],
}

impl PawnStructure {
    fn new(board: &Board) -> Self {
        let pawns = [board.piece_squares[Piece::WhitePawn], board.piece_squares[Piece::BlackPawn]];
        let protection = [pawn_attack_spans(Side::White, pawns[0]), pawn_attack_spans(Side::Black, pawns[1])];
        let pawn_files = [pawns[0].file_fill(), pawns[1].file_fill()];

        let mut structure = Self {
            open_files: !(pawn_files[0] | pawn_files[1]),
            semi_open_files: [Bitboard(0); 2],
            passed_pawns: [Bitboard(0); 2],
            doubled_pawns: [Bitboard(0); 2],
            isolated_pawns: [Bitboard(0); 2],
            backward_pawns: [Bitboard(0); 2],
        };

        for side in [Side::White, Side::Black] {
            let enemy = side.enemy();

            structure.semi_open_files[side] = !pawn_files[side] & pawn_files[enemy];

            // a pawn on any of the enemy's filled stop or attack squares is not passed
            let blocking_squares = forward_fill(enemy, pawns[enemy].shift(Direction::up(enemy)) | protection[enemy]);
            structure.passed_pawns[side] = pawns[side] & !blocking_squares;

            structure.doubled_pawns[side] = pawns[side] & forward_fill(side, pawns[side].shift(Direction::up(side)));

            structure.isolated_pawns[side] = pawns[side] & !protection[side].file_fill();

            // a backward pawn cannot advance without being taken by an enemy pawn
            let dominated_stop_squares = !forward_fill(side, protection[side]) & protection[enemy];
            structure.backward_pawns[side] = pawns[side] & forward_fill(enemy, dominated_stop_squares);
        }

        structure
    }
}
