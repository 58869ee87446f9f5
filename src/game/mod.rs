//! # Game Module
//!
//! Core simulation state, world representation, and entity systems.
//!
//! This module contains the fundamental building blocks of the dungeon crawl:
//! - The tile grid and its visibility tracking
//! - Entities with optional combat, AI and item capabilities
//! - Combat resolution, monster AI and item use
//! - The turn engine that turns player actions into game progress

pub mod actions;
pub mod ai;
pub mod combat;
pub mod entities;
pub mod inventory;
pub mod messages;
pub mod state;
pub mod visibility;
pub mod world;

#[cfg(test)]
pub(crate) mod test_support;

pub use actions::*;
pub use ai::*;
pub use combat::*;
pub use entities::*;
pub use inventory::*;
pub use messages::*;
pub use state::*;
pub use visibility::*;
pub use world::*;

use uuid::Uuid;

/// Represents a 2D coordinate on the dungeon grid.
///
/// # Examples
///
/// ```
/// use tombs::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
/// assert_eq!(pos.offset(1, -1), Position::new(11, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by the given delta.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Calculates the Euclidean distance to another position.
    pub fn euclidean_distance(self, other: Position) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns only the 4 cardinal adjacent positions (no diagonals).
    pub fn cardinal_adjacent_positions(self) -> [Position; 4] {
        [
            Position::new(self.x, self.y - 1), // N
            Position::new(self.x - 1, self.y), // W
            Position::new(self.x + 1, self.y), // E
            Position::new(self.x, self.y + 1), // S
        ]
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

/// Backend-independent RGB color used for glyphs, tiles and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const DARK_RED: Rgb = Rgb::new(191, 0, 0);
    pub const DARKER_RED: Rgb = Rgb::new(127, 0, 0);
    pub const LIGHT_RED: Rgb = Rgb::new(255, 63, 63);
    pub const ORANGE: Rgb = Rgb::new(255, 127, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const DESATURATED_GREEN: Rgb = Rgb::new(63, 127, 63);
    pub const DARKER_GREEN: Rgb = Rgb::new(0, 127, 0);
    pub const VIOLET: Rgb = Rgb::new(127, 0, 255);
    pub const LIGHT_VIOLET: Rgb = Rgb::new(159, 63, 255);
    pub const LIGHT_GRAY: Rgb = Rgb::new(159, 159, 159);

    /// Walls outside the field of view.
    pub const DARK_WALL: Rgb = Rgb::new(0, 0, 100);
    /// Floor outside the field of view.
    pub const DARK_GROUND: Rgb = Rgb::new(50, 50, 150);
    /// Walls inside the field of view.
    pub const LIGHT_WALL: Rgb = Rgb::new(130, 110, 50);
    /// Floor inside the field of view.
    pub const LIGHT_GROUND: Rgb = Rgb::new(200, 180, 50);
}

/// Unique identifier for game entities.
///
/// Handles stay valid while the live entity list is reordered or an entity
/// moves into the inventory.
pub type EntityId = Uuid;

/// Creates a new unique entity ID.
pub fn new_entity_id() -> EntityId {
    Uuid::new_v4()
}
