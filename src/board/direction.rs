use num_enum::UnsafeFromPrimitive;
use std::ops::{Index, IndexMut};

use crate::board::Side;

#[derive(Clone, Copy, PartialEq, Eq, Hash, UnsafeFromPrimitive)]
#[repr(u8)]
pub enum Direction {
    North,
    West,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
    East,
    South,
}

const DIRECTION_VALUES: [i32; 8] = [-8, -1, -9, -7, 7, 9, 1, 8];

impl Direction {
    pub const fn value(self) -> i32 {
        DIRECTION_VALUES[self as usize]
    }
    pub const fn all() -> [Direction; 8] {
        [
            Direction::North,
            Direction::West,
            Direction::NorthWest,
            Direction::NorthEast,
            Direction::SouthWest,
            Direction::SouthEast,
            Direction::East,
            Direction::South,
        ]
    }
    pub const fn orthogonal() -> [Direction; 4] {
        [Direction::West, Direction::East, Direction::North, Direction::South]
    }
    pub const fn diagonal() -> [Direction; 4] {
        [Direction::NorthWest, Direction::NorthEast, Direction::SouthWest, Direction::SouthEast]
    }
    pub fn up(side: Side) -> Direction {
        unsafe { UnsafeFromPrimitive::unchecked_transmute_from(7 * side as u8) }
    }
}

impl<T, const N: usize> Index<Direction> for [T; N] {
    type Output = T;

    fn index(&self, index: Direction) -> &Self::Output {
        &self[index as usize]
    }
}
impl<T, const N: usize> IndexMut<Direction> for [T; N] {
    fn index_mut(&mut self, index: Direction) -> &mut Self::Output {
        &mut self[index as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_points_toward_the_opponent() {
        assert!(Direction::up(Side::White) == Direction::North);
        assert!(Direction::up(Side::Black) == Direction::South);
    }
}
