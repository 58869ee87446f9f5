//! Shared test fixtures for the `game` unit tests.

use crate::{GameState, GeneratedDungeon, Grid, Position, Rect};

/// A single open room filling the grid, player spawning at (2, 2).
pub(crate) fn arena(width: i32, height: i32) -> GeneratedDungeon {
    let mut grid = Grid::new(width, height);
    let room = Rect::new(0, 0, width - 1, height - 1);
    for pos in room.interior() {
        grid.carve(pos).unwrap();
    }
    GeneratedDungeon {
        grid,
        rooms: vec![room],
        player_spawn: Position::new(2, 2),
        entities: Vec::new(),
    }
}

/// A 20x10 arena with the player at `spawn` and nothing else on the map.
pub(crate) fn arena_state(spawn: Position) -> GameState {
    let mut dungeon = arena(20, 10);
    dungeon.player_spawn = spawn;
    GameState::new_with_dungeon(dungeon, 1)
}
