//! Shortest knight paths on a standard 8x8 chessboard.
//!
//! Given two square labels such as "A1" and "B1", [`find_optimal_path`]
//! returns the shortest sequence of squares a knight travels between them,
//! optionally bounded by a maximum number of moves.

pub mod codec;
pub mod coord;
pub mod error;
pub mod movegen;
pub mod search;

pub use coord::Coord;
pub use error::PathError;
pub use search::{find_path, find_path_counted, SearchCounts};

/// Shortest knight path between two labelled squares, endpoints included.
///
/// `max_moves` bounds the number of moves (not squares); a negative value
/// means unbounded. Returns the path as square labels, or an empty `Vec`
/// when no path exists within the bound — that is a normal result, not an
/// error. Labels that do not match `[A-H][1-8]` fail with
/// [`PathError::InvalidLabel`].
///
/// ```
/// let path = knight_paths::find_optimal_path("A1", "B1", -1)?;
/// assert_eq!(path, ["A1", "C2", "A3", "B1"]);
/// # Ok::<(), knight_paths::PathError>(())
/// ```
pub fn find_optimal_path(
    start: &str,
    target: &str,
    max_moves: i32,
) -> Result<Vec<String>, PathError> {
    let start = codec::parse(start)?;
    let target = codec::parse(target)?;
    Ok(codec::render(&search::find_path(start, target, max_moves)))
}
