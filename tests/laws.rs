use rustc_hash::FxHashSet;

use knight_paths::codec;
use knight_paths::coord::Coord;
use knight_paths::movegen::legal_moves;
use knight_paths::search::{find_path, find_path_counted};

fn all_squares() -> Vec<Coord> {
    (1..=8)
        .flat_map(|file| (1..=8).map(move |rank| Coord::new(file, rank).unwrap()))
        .collect()
}

fn is_knight_step(a: Coord, b: Coord) -> bool {
    let df = (a.file() - b.file()).abs();
    let dr = (a.rank() - b.rank()).abs();
    (df, dr) == (1, 2) || (df, dr) == (2, 1)
}

#[test]
fn codec_round_trips_every_square() {
    for c in all_squares() {
        let label = codec::format(c);
        assert_eq!(codec::parse(&label).unwrap(), c);
    }
    for file in b'A'..=b'H' {
        for rank in b'1'..=b'8' {
            let label = String::from_utf8(vec![file, rank]).unwrap();
            assert_eq!(codec::format(codec::parse(&label).unwrap()), label);
        }
    }
}

#[test]
fn legal_moves_stay_on_the_board_and_exclude_the_origin() {
    for c in all_squares() {
        let moves = legal_moves(c);
        assert!(
            (2..=8).contains(&moves.len()),
            "square {c} has {} moves",
            moves.len()
        );
        assert!(!moves.contains(&c));
        let distinct: FxHashSet<Coord> = moves.iter().copied().collect();
        assert_eq!(distinct.len(), moves.len());
        for &m in &moves {
            assert!(is_knight_step(c, m), "{c} -> {m} is not a knight move");
        }
    }
}

#[test]
fn every_pair_has_a_minimal_valid_knight_walk() {
    for s in all_squares() {
        for t in all_squares() {
            let path = find_path(s, t, -1);
            assert!(!path.is_empty(), "no path {s} -> {t}");
            assert_eq!(path[0], s);
            assert_eq!(*path.last().unwrap(), t);
            // Knight graph diameter on the 8x8 board is 6 moves.
            assert!(path.len() <= 7, "{s} -> {t} took {} squares", path.len());
            for w in path.windows(2) {
                assert!(is_knight_step(w[0], w[1]));
            }
            let mut seen = FxHashSet::default();
            for &c in &path {
                assert!(seen.insert(c), "{s} -> {t} revisits {c}");
            }

            // Minimality: the found length is exactly sufficient as a bound,
            // and one move fewer admits no path at all.
            let moves = path.len() as i32 - 1;
            assert_eq!(find_path(s, t, moves), path);
            if s != t {
                assert!(find_path(s, t, moves - 1).is_empty());
            }
        }
    }
}

#[test]
fn search_never_enqueues_more_coordinates_than_the_board_has() {
    for s in all_squares() {
        for t in all_squares() {
            let (_, counts) = find_path_counted(s, t, -1);
            assert!(
                counts.enqueued <= 64,
                "{s} -> {t} enqueued {}",
                counts.enqueued
            );
        }
    }
    // An insufficient bound exhausts the frontier instead of the board.
    let a1 = codec::parse("A1").unwrap();
    let b1 = codec::parse("B1").unwrap();
    let (path, counts) = find_path_counted(a1, b1, 2);
    assert!(path.is_empty());
    assert!(counts.enqueued <= 64);
}
