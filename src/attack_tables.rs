use crate::board::bitboard::Bitboard;
use crate::board::direction::Direction;
use ctor::ctor;
use std::cmp::min;

static mut SQUARES_TO_EDGE: [[u32; 8]; 64] = [[0; 8]; 64];
static mut ATTACK_RAYS: [[Bitboard; 8]; 64] = [[Bitboard(0); 8]; 64];

// The ray tables are filled once on process start and are read-only afterwards.
#[ctor]
pub fn initialize_tables() {
    unsafe {
        SQUARES_TO_EDGE = precompute_squares_to_edge();
        ATTACK_RAYS = precompute_attack_rays();
    }
}

#[inline(always)]
pub fn get_squares_to_edge(square: usize, direction: Direction) -> u32 {
    unsafe { SQUARES_TO_EDGE[square][direction as usize] }
}

#[inline(always)]
pub fn get_attack_ray(square: usize, direction: Direction) -> Bitboard {
    unsafe { ATTACK_RAYS[square][direction as usize] }
}

#[inline]
pub fn bishop_attacks(square: usize, blockers: Bitboard) -> Bitboard {
    sliding_attacks(square, blockers, Direction::diagonal())
}
#[inline]
pub fn rook_attacks(square: usize, blockers: Bitboard) -> Bitboard {
    sliding_attacks(square, blockers, Direction::orthogonal())
}

fn sliding_attacks(square: usize, blockers: Bitboard, directions: [Direction; 4]) -> Bitboard {
    let mut attacks = Bitboard(0);
    for direction in directions {
        let ray = get_attack_ray(square, direction);
        attacks |= ray;
        let blockers_on_ray = ray & blockers;
        if blockers_on_ray != 0 {
            // rays with a negative offset run toward lower square indices,
            // so their nearest blocker is the highest set bit
            let blocker_square = if direction.value() < 0 { blockers_on_ray.msb() } else { blockers_on_ray.lsb() };
            attacks &= !get_attack_ray(blocker_square, direction);
        }
    }
    attacks
}

fn precompute_squares_to_edge() -> [[u32; 8]; 64] {
    let mut squares_to_edge = [[0; 8]; 64];
    for file in 0..8 {
        for rank in 0..8 {
            let north = rank as u32;
            let south = (7 - rank) as u32;
            let west = file as u32;
            let east = (7 - file) as u32;

            let square = rank * 8 + file;

            squares_to_edge[square][Direction::North] = north;
            squares_to_edge[square][Direction::South] = south;
            squares_to_edge[square][Direction::West] = west;
            squares_to_edge[square][Direction::East] = east;
            squares_to_edge[square][Direction::NorthWest] = min(north, west);
            squares_to_edge[square][Direction::NorthEast] = min(north, east);
            squares_to_edge[square][Direction::SouthWest] = min(south, west);
            squares_to_edge[square][Direction::SouthEast] = min(south, east);
        }
    }
    squares_to_edge
}
fn precompute_attack_rays() -> [[Bitboard; 8]; 64] {
    let mut attack_rays = [[Bitboard(0); 8]; 64];
    for square in 0..64 {
        let mut square_attack_rays = [Bitboard(0); 8];
        for direction in Direction::all() {
            let mut attack_ray = Bitboard(0);
            for squares_to_edge in 1..get_squares_to_edge(square, direction) + 1 {
                let end_square = square as i32 + direction.value() * squares_to_edge as i32;
                attack_ray.set_bit(end_square as usize);
            }
            square_attack_rays[direction] = attack_ray;
        }
        attack_rays[square] = square_attack_rays;
    }
    attack_rays
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_attacks_on_empty_board() {
        let attacks = rook_attacks(36, Bitboard(0));
        assert_eq!(attacks.count_ones(), 14);
        assert_eq!(attacks & Bitboard::from_square(36), 0);
    }
    #[test]
    fn rook_attacks_stop_at_blockers() {
        // rook on a8, blocker on c8
        let attacks = rook_attacks(0, Bitboard::from_square(2));
        assert_eq!(attacks & Bitboard::from_square(1), Bitboard::from_square(1));
        assert_eq!(attacks & Bitboard::from_square(2), Bitboard::from_square(2));
        assert_eq!(attacks & Bitboard::from_square(3), 0);
        assert_eq!(attacks.count_ones(), 9);
    }
    #[test]
    fn bishop_attacks_stop_at_blockers() {
        // bishop on e4, blockers on c6 and f3
        let blockers = Bitboard::from_square(18) | Bitboard::from_square(45);
        let attacks = bishop_attacks(36, blockers);
        assert_eq!(attacks & Bitboard::from_square(18), Bitboard::from_square(18));
        assert_eq!(attacks & Bitboard::from_square(9), 0);
        assert_eq!(attacks & Bitboard::from_square(45), Bitboard::from_square(45));
        assert_eq!(attacks & Bitboard::from_square(54), 0);
    }
}
