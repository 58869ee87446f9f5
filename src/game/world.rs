//! # World Representation
//!
//! The fixed-size tile grid the dungeon is carved into.

use crate::{Position, TombsError, TombsResult};

/// A single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Whether movement into this tile is impossible
    pub blocked: bool,
    /// Whether this tile stops line of sight
    pub blocks_sight: bool,
    /// Whether the player has ever seen this tile
    pub explored: bool,
}

impl Tile {
    /// Creates a tile. Without an explicit sight value a blocked tile also
    /// blocks sight.
    ///
    /// # Examples
    ///
    /// ```
    /// use tombs::Tile;
    ///
    /// assert!(Tile::new(true, None).blocks_sight);
    /// assert!(!Tile::new(true, Some(false)).blocks_sight);
    /// ```
    pub fn new(blocked: bool, blocks_sight: Option<bool>) -> Self {
        Self {
            blocked,
            blocks_sight: blocks_sight.unwrap_or(blocked),
            explored: false,
        }
    }

    /// Solid rock.
    pub fn wall() -> Self {
        Self::new(true, None)
    }

    /// Open floor.
    pub fn floor() -> Self {
        Self::new(false, None)
    }
}

/// Ordered 2D array of tiles with the origin at the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    /// Rows of tiles, indexed `tiles[y][x]`
    pub tiles: Vec<Vec<Tile>>,
}

impl Grid {
    /// Creates a grid where every cell is a wall.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            tiles: vec![vec![Tile::wall(); width as usize]; height as usize],
        }
    }

    /// Checks whether a position lies inside the grid.
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    pub fn get_tile(&self, pos: Position) -> Option<&Tile> {
        if !self.is_valid_position(pos) {
            return None;
        }
        Some(&self.tiles[pos.y as usize][pos.x as usize])
    }

    pub fn get_tile_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        if !self.is_valid_position(pos) {
            return None;
        }
        Some(&mut self.tiles[pos.y as usize][pos.x as usize])
    }

    /// Replaces the tile at a position.
    pub fn set_tile(&mut self, pos: Position, tile: Tile) -> TombsResult<()> {
        let slot = self.get_tile_mut(pos).ok_or_else(|| {
            TombsError::InvalidState(format!("Position {:?} is outside the grid", pos))
        })?;
        *slot = tile;
        Ok(())
    }

    /// Makes a tile passable and transparent, keeping its explored flag.
    pub fn carve(&mut self, pos: Position) -> TombsResult<()> {
        let tile = self.get_tile_mut(pos).ok_or_else(|| {
            TombsError::GenerationFailed(format!("Cannot carve outside the grid at {:?}", pos))
        })?;
        tile.blocked = false;
        tile.blocks_sight = false;
        Ok(())
    }

    /// Whether the terrain itself blocks movement. Outside the grid counts as blocked.
    pub fn is_blocked_tile(&self, pos: Position) -> bool {
        self.get_tile(pos).map_or(true, |tile| tile.blocked)
    }

    /// Whether the terrain blocks sight. Outside the grid counts as opaque.
    pub fn blocks_sight(&self, pos: Position) -> bool {
        self.get_tile(pos).map_or(true, |tile| tile.blocks_sight)
    }

    pub fn is_explored(&self, pos: Position) -> bool {
        self.get_tile(pos).is_some_and(|tile| tile.explored)
    }

    /// Marks a tile as explored. Exploration is never revoked.
    pub fn mark_explored(&mut self, pos: Position) {
        if let Some(tile) = self.get_tile_mut(pos) {
            tile.explored = true;
        }
    }

    /// Iterates over every position of the grid in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }

    /// Number of walkable tiles.
    pub fn floor_count(&self) -> usize {
        self.tiles
            .iter()
            .flat_map(|row| row.iter())
            .filter(|tile| !tile.blocked)
            .count()
    }
}
