//! Conversions between square labels ("A5") and board coordinates.

use crate::coord::Coord;
use crate::error::PathError;

/// Parse a two-character square label: an uppercase file letter `A..=H`
/// followed by a rank digit `1..=8`. Anything else is rejected.
pub fn parse(label: &str) -> Result<Coord, PathError> {
    let bytes = label.as_bytes();
    if bytes.len() != 2
        || !(b'A'..=b'H').contains(&bytes[0])
        || !(b'1'..=b'8').contains(&bytes[1])
    {
        return Err(PathError::InvalidLabel(label.to_string()));
    }
    Coord::new((bytes[0] - b'A' + 1) as i8, (bytes[1] - b'0') as i8)
}

/// Inverse of [`parse`]; total for any constructed [`Coord`].
pub fn format(c: Coord) -> String {
    c.to_string()
}

/// Render a path as display labels. An empty path renders to an empty list,
/// the "no path" signal.
pub fn render(path: &[Coord]) -> Vec<String> {
    path.iter().map(|&c| format(c)).collect()
}
