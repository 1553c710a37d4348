use crate::board::{flip_rank, Side};

/// Positional values for one piece kind, indexed by [side][square].
pub type PieceSquareTable = [[i32; 64]; 2];

/// Tuning knobs for one generated table. The base value carries the piece's
/// material worth, the two bonus/saturation pairs shape the center and
/// opponent-back-rank rewards.
pub struct TableParams {
    pub base_value: i32,
    pub center_bonus: i32,
    pub center_s_max: f64,
    pub back_rank_bonus: i32,
    pub back_rank_s_max: f64,
}

pub const PAWN_PARAMS: TableParams = TableParams {
    base_value: 100,
    center_bonus: 20,
    center_s_max: 2.0,
    back_rank_bonus: 20,
    back_rank_s_max: 5.0,
};
pub const PAWN_ENDGAME_PARAMS: TableParams = TableParams {
    base_value: 100,
    center_bonus: 10,
    center_s_max: 2.0,
    back_rank_bonus: 70,
    back_rank_s_max: 5.0,
};
pub const KNIGHT_PARAMS: TableParams = TableParams {
    base_value: 300,
    center_bonus: 45,
    center_s_max: 1.0,
    back_rank_bonus: 10,
    back_rank_s_max: 4.0,
};
pub const BISHOP_PARAMS: TableParams = TableParams {
    base_value: 300,
    center_bonus: 30,
    center_s_max: 1.0,
    back_rank_bonus: 5,
    back_rank_s_max: 4.0,
};
pub const QUEEN_PARAMS: TableParams = TableParams {
    base_value: 900,
    center_bonus: 25,
    center_s_max: 2.0,
    back_rank_bonus: 10,
    back_rank_s_max: 6.0,
};
pub const KING_ENDGAME_PARAMS: TableParams = TableParams {
    base_value: 0,
    center_bonus: 60,
    center_s_max: 2.0,
    back_rank_bonus: 0,
    back_rank_s_max: 4.0,
};

// Rooks are rewarded for open files in the scorer rather than through curve
// shaping, so their table is hand supplied: base value plus a seventh-rank
// and central-file nudge.
#[rustfmt::skip]
pub const ROOK_SQUARE_TABLE: [i32; 64] = [
    500, 500, 500, 500, 500, 500, 500, 500,
    505, 510, 510, 510, 510, 510, 510, 505,
    495, 500, 500, 500, 500, 500, 500, 495,
    495, 500, 500, 500, 500, 500, 500, 495,
    495, 500, 500, 500, 500, 500, 500, 495,
    495, 500, 500, 500, 500, 500, 500, 495,
    495, 500, 500, 500, 500, 500, 500, 495,
    500, 500, 500, 505, 505, 500, 500, 500,
];

// Midgame king table: hide in a castled corner, stay off the center.
#[rustfmt::skip]
pub const KING_SQUARE_TABLE: [i32; 64] = [
    -80, -70, -70, -70, -70, -70, -70, -80,
    -60, -60, -60, -60, -60, -60, -60, -60,
    -40, -50, -50, -60, -60, -50, -50, -40,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -10, -20, -20, -20, -20, -20, -20, -10,
     20,  20,  -5,  -5,  -5,  -5,  20,  20,
     20,  30,  10,   0,   0,  10,  30,  20,
];

/// S-shaped curve from 0 to 1 with S(0) = 0.5, saturating as x approaches
/// `high` on either side.
pub fn sigmoid(x: f64, high: f64) -> f64 {
    1.0 / (1.0 + f64::powf(10.0, -x / (high / 2.0)))
}

/// The value of a square is the base piece value plus smooth bonuses for
/// being near the center and near the opponent's back rank.
fn calculate_square_value(params: &TableParams, side: Side, square: usize) -> i32 {
    const AVG_CENTER_DISTANCE: f64 = 3.5;

    let row = side.relative_rank(square) as f64;
    let col = (square % 8) as f64;

    // between -1.5 and 1.5, peaking on the four central squares
    let center_proximity = 2.0 - f64::max((row - AVG_CENTER_DISTANCE).abs(), (col - AVG_CENTER_DISTANCE).abs());
    // between -3.5 and 3.5, growing as the piece advances
    let back_rank_proximity = row - AVG_CENTER_DISTANCE;

    let mut square_value = params.base_value as f64;
    square_value += params.center_bonus as f64 * sigmoid(center_proximity, params.center_s_max);
    square_value += params.back_rank_bonus as f64 * sigmoid(back_rank_proximity, params.back_rank_s_max);

    square_value.round() as i32
}

pub fn generate_piece_square_table(params: &TableParams) -> PieceSquareTable {
    let mut table = [[0; 64]; 2];
    for square in 0..64 {
        table[Side::White as usize][square] = calculate_square_value(params, Side::White, square);
        table[Side::Black as usize][square] = calculate_square_value(params, Side::Black, square);
    }
    table
}

/// Expands a hand-supplied White table into both sides, mirroring vertically
/// for Black.
pub fn mirrored_table(values: &[i32; 64]) -> PieceSquareTable {
    let mut table = [[0; 64]; 2];
    for square in 0..64 {
        table[Side::White as usize][square] = values[square];
        table[Side::Black as usize][square] = values[flip_rank(square)];
    }
    table
}

/// Closeness of every square pair, 7 minus their Chebyshev distance.
pub fn king_proximity_table() -> [[i32; 64]; 64] {
    let mut proximity = [[0; 64]; 64];
    for i in 0..64 {
        for j in 0..64 {
            let rank_distance = (i as i32 / 8 - j as i32 / 8).abs();
            let file_distance = (i as i32 % 8 - j as i32 % 8).abs();
            proximity[i][j] = 7 - i32::max(file_distance, rank_distance);
        }
    }
    proximity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_centered_and_monotonic() {
        assert!((sigmoid(0.0, 2.0) - 0.5).abs() < 1e-9);
        assert!(sigmoid(1.0, 2.0) > sigmoid(0.5, 2.0));
        assert!(sigmoid(-1.5, 2.0) < 0.5);
        assert!(sigmoid(3.5, 5.0) < 1.0);
    }
    #[test]
    fn table_generation_is_deterministic() {
        assert_eq!(generate_piece_square_table(&KNIGHT_PARAMS), generate_piece_square_table(&KNIGHT_PARAMS));
        assert_eq!(king_proximity_table(), king_proximity_table());
    }
    #[test]
    fn generated_tables_are_point_symmetric() {
        for params in [&PAWN_PARAMS, &PAWN_ENDGAME_PARAMS, &KNIGHT_PARAMS, &BISHOP_PARAMS, &QUEEN_PARAMS, &KING_ENDGAME_PARAMS] {
            let table = generate_piece_square_table(params);
            for square in 0..64 {
                assert_eq!(table[Side::White as usize][square], table[Side::Black as usize][flip_rank(square)]);
            }
        }
        let rook = mirrored_table(&ROOK_SQUARE_TABLE);
        for square in 0..64 {
            assert_eq!(rook[Side::White as usize][square], rook[Side::Black as usize][flip_rank(square)]);
        }
    }
    #[test]
    fn advancing_raises_generated_pawn_values() {
        let table = generate_piece_square_table(&PAWN_ENDGAME_PARAMS);
        // e2 -> e7 in White's frame
        assert!(table[Side::White as usize][12] > table[Side::White as usize][52]);
    }
    #[test]
    fn proximity_is_symmetric_and_bounded() {
        let proximity = king_proximity_table();
        for i in 0..64 {
            assert_eq!(proximity[i][i], 7);
            for j in 0..64 {
                assert_eq!(proximity[i][j], proximity[j][i]);
                assert!((0..=7).contains(&proximity[i][j]));
            }
        }
        // a1 to h8 is the longest diagonal
        assert_eq!(proximity[56][7], 0);
    }
}
