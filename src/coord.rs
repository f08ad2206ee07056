use std::fmt;

use crate::error::PathError;

/// Inclusive file/rank range of the standard board.
pub const BOARD_MIN: i8 = 1;
pub const BOARD_MAX: i8 = 8;

/// The 8 knight steps around the origin, in the fixed enumeration order the
/// search expands them. The order decides which of several equally short
/// paths is discovered first, so it must stay deterministic.
pub const KNIGHT_STEPS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (2, -1),
    (1, -2),
    (-2, 1),
    (-1, 2),
    (-2, -1),
    (-1, -2),
];

/// Whether `(file, rank)` lies on the board. Shared by coordinate
/// construction and move filtering.
#[inline]
pub const fn in_board_bounds(file: i8, rank: i8) -> bool {
    BOARD_MIN <= file && file <= BOARD_MAX && BOARD_MIN <= rank && rank <= BOARD_MAX
}

/// One square of the board as a (file, rank) pair, both in `1..=8`.
///
/// The range invariant is checked on construction and holds for every value
/// thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    file: i8,
    rank: i8,
}

impl Coord {
    pub fn new(file: i8, rank: i8) -> Result<Coord, PathError> {
        if in_board_bounds(file, rank) {
            Ok(Coord { file, rank })
        } else {
            Err(PathError::OutOfBounds { file, rank })
        }
    }

    #[inline]
    pub fn file(self) -> i8 {
        self.file
    }

    #[inline]
    pub fn rank(self) -> i8 {
        self.rank
    }

    /// The coordinate shifted by `(df, dr)`, if it stays on the board.
    #[inline]
    pub fn shifted(self, df: i8, dr: i8) -> Option<Coord> {
        let (file, rank) = (self.file + df, self.rank + dr);
        if in_board_bounds(file, rank) {
            Some(Coord { file, rank })
        } else {
            None
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (b'A' + self.file as u8 - 1) as char;
        write!(f, "{letter}{}", self.rank)
    }
}
