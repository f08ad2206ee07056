use thiserror::Error;

/// Validation failures surfaced to callers.
///
/// A search that finds no path is not an error; it reports an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A square label does not match `[A-H][1-8]`.
    #[error("invalid square label {0:?}: expected a file letter A-H followed by a rank digit 1-8")]
    InvalidLabel(String),
    /// A coordinate was constructed off the board. Move generation filters
    /// bounds before constructing, so hitting this through the public API
    /// indicates a defect.
    #[error("coordinates ({file}, {rank}) are off the board; files and ranks run 1-8")]
    OutOfBounds { file: i8, rank: i8 },
}
