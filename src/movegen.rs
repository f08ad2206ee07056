//! Knight move generation.

use crate::coord::{Coord, KNIGHT_STEPS};

/// All legal knight destinations from `from`, in [`KNIGHT_STEPS`] order.
///
/// Between 2 (corner) and 8 (centre) results on the standard board; never
/// contains `from` itself.
pub fn legal_moves(from: Coord) -> Vec<Coord> {
    KNIGHT_STEPS
        .iter()
        .filter_map(|&(df, dr)| from.shifted(df, dr))
        .collect()
}
