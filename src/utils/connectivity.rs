//! # Map Connectivity
//!
//! Flood-fill reachability over walkable tiles, used to validate generated
//! dungeons.

use crate::{Grid, Position};
use ::pathfinding::prelude::bfs_reach;
use std::collections::HashSet;

/// Every walkable tile reachable from `start` through cardinal steps.
///
/// Returns an empty set if `start` itself is blocked.
pub fn reachable_from(grid: &Grid, start: Position) -> HashSet<Position> {
    if grid.is_blocked_tile(start) {
        return HashSet::new();
    }
    bfs_reach(start, |&pos| {
        pos.cardinal_adjacent_positions()
            .into_iter()
            .filter(|next| !grid.is_blocked_tile(*next))
            .collect::<Vec<_>>()
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reachable_within_room() {
        let mut grid = Grid::new(10, 10);
        for y in 1..4 {
            for x in 1..4 {
                grid.carve(Position::new(x, y)).unwrap();
            }
        }
        grid.carve(Position::new(7, 7)).unwrap();

        let reached = reachable_from(&grid, Position::new(2, 2));
        assert_eq!(reached.len(), 9);
        assert!(!reached.contains(&Position::new(7, 7)));
    }

    #[test]
    fn test_blocked_start_reaches_nothing() {
        let grid = Grid::new(5, 5);
        assert!(reachable_from(&grid, Position::new(2, 2)).is_empty());
    }
}
