//! Breadth-first shortest-path search over the knight move graph.
//!
//! The graph is implicit: vertices are the 64 board coordinates, edges come
//! from [`crate::movegen::legal_moves`]. Each queue entry owns its full path
//! prefix; for a 64-vertex board that is cheaper to reason about than a
//! predecessor map and costs nothing measurable.

use std::collections::VecDeque;

use log::debug;
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::coord::Coord;
use crate::movegen::legal_moves;

/// Counters tracked during one search invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchCounts {
    /// Coordinates discovered via a move and enqueued. At most 64.
    pub enqueued: u64,
    /// Paths dequeued and expanded.
    pub expanded: u64,
}

/// Shortest knight path from `start` to `target`, both endpoints included.
///
/// `max_moves` bounds the number of moves (path length minus one); a
/// negative value means unbounded. Returns an empty path when no path
/// exists within the bound.
pub fn find_path(start: Coord, target: Coord, max_moves: i32) -> Vec<Coord> {
    find_path_counted(start, target, max_moves).0
}

/// Same as [`find_path`], also reporting search counters.
pub fn find_path_counted(
    start: Coord,
    target: Coord,
    max_moves: i32,
) -> (Vec<Coord>, SearchCounts) {
    let mut counts = SearchCounts::default();

    // Zero moves are needed, so any bound (even 0 or negative) is satisfied.
    if start == target {
        return (vec![start], counts);
    }

    debug!("searching knight path {start} -> {target} (max_moves {max_moves})");

    // Only coordinates discovered via a move are marked visited; the origin
    // never is.
    let mut visited: FxHashSet<Coord> = FxHashSet::default();
    let mut queue: VecDeque<Vec<Coord>> = VecDeque::new();
    queue.push_back(vec![start]);

    while let Some(path) = queue.pop_front() {
        // A path of n coordinates takes n - 1 moves to follow, so a path
        // already holding max_moves + 1 coordinates cannot be extended
        // without overshooting the bound. Drop it unexpanded.
        if max_moves >= 0 && path.len() as i32 > max_moves {
            continue;
        }
        counts.expanded += 1;
        let last = *path.last().expect("queued paths are never empty");
        for mv in legal_moves(last) {
            if visited.contains(&mv) {
                continue;
            }
            let mut extended = path.clone();
            extended.push(mv);
            if mv == target {
                return (extended, counts);
            }
            visited.insert(mv);
            counts.enqueued += 1;
            queue.push_back(extended);
        }
    }

    debug!("no knight path {start} -> {target} within {max_moves} moves");
    (Vec::new(), counts)
}
