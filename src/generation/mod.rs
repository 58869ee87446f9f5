//! # Generation Module
//!
//! Procedural content generation for dungeon layouts, monsters and items.
//!
//! A [`Generator`] turns a [`GenerationConfig`] and a seeded random number
//! generator into content. The same seed always yields the same dungeon.

pub mod dungeon;
pub mod encounters;
pub mod items;

pub use dungeon::*;
pub use encounters::*;
pub use items::*;

use crate::config::{MAP_HEIGHT, MAP_WIDTH};
use crate::{Entity, Grid, Position, TombsError, TombsResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for procedural generation.
///
/// Can be loaded from a JSON file so dungeon shape can be tuned without
/// rebuilding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Grid width in tiles
    pub map_width: i32,
    /// Grid height in tiles
    pub map_height: i32,
    /// Minimum room size
    pub min_room_size: i32,
    /// Maximum room size
    pub max_room_size: i32,
    /// Number of room placement attempts
    pub max_rooms: u32,
    /// Upper bound of monsters rolled per room
    pub max_monsters_per_room: u32,
    /// Upper bound of items rolled per room
    pub max_items_per_room: u32,
}

impl GenerationConfig {
    /// Creates the standard configuration for a full-size map.
    ///
    /// # Examples
    ///
    /// ```
    /// use tombs::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(42);
    /// assert_eq!(config.map_width, 80);
    /// assert!(config.max_room_size >= config.min_room_size);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            map_width: MAP_WIDTH,
            map_height: MAP_HEIGHT,
            min_room_size: 6,
            max_room_size: 10,
            max_rooms: 30,
            max_monsters_per_room: 3,
            max_items_per_room: 2,
        }
    }

    /// Creates a configuration for testing with a smaller map.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            map_width: 40,
            map_height: 25,
            min_room_size: 4,
            max_room_size: 7,
            max_rooms: 12,
            max_monsters_per_room: 2,
            max_items_per_room: 1,
        }
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> TombsResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.check()?;
        Ok(config)
    }

    /// Creates a seeded random number generator from this config.
    pub fn create_rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    /// Rejects parameter combinations the room sampler cannot satisfy.
    pub fn check(&self) -> TombsResult<()> {
        if self.min_room_size < 2 || self.min_room_size > self.max_room_size {
            return Err(TombsError::GenerationFailed(format!(
                "Room size range {}..={} is invalid",
                self.min_room_size, self.max_room_size
            )));
        }
        if self.map_width <= self.max_room_size + 1 || self.map_height <= self.max_room_size + 1 {
            return Err(TombsError::GenerationFailed(format!(
                "Map {}x{} cannot fit rooms of size {}",
                self.map_width, self.map_height, self.max_room_size
            )));
        }
        if self.max_rooms == 0 {
            return Err(TombsError::GenerationFailed(
                "At least one room attempt is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Axis-aligned rectangle used for rooms.
///
/// `x2`/`y2` are one past the width/height offset, so the carved interior
/// is everything strictly between the corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    ///
    /// # Examples
    ///
    /// ```
    /// use tombs::{Position, Rect};
    ///
    /// let room = Rect::new(5, 5, 10, 8);
    /// assert_eq!(room.center(), Position::new(10, 9));
    /// assert!(room.contains(Position::new(6, 6)));
    /// assert!(!room.contains(Position::new(5, 5)));
    /// ```
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + w,
            y2: y + h,
        }
    }

    pub fn center(&self) -> Position {
        Position::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Whether two rectangles touch or overlap, borders included.
    pub fn intersect(&self, other: &Rect) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }

    /// Whether a position lies strictly inside the rectangle.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x > self.x1 && pos.x < self.x2 && pos.y > self.y1 && pos.y < self.y2
    }

    /// Every position strictly inside the rectangle, row by row.
    pub fn interior(&self) -> impl Iterator<Item = Position> {
        let (x1, x2) = (self.x1, self.x2);
        ((self.y1 + 1)..self.y2)
            .flat_map(move |y| ((x1 + 1)..x2).map(move |x| Position::new(x, y)))
    }
}

/// Output of dungeon generation.
#[derive(Debug, Clone)]
pub struct GeneratedDungeon {
    pub grid: Grid,
    /// Accepted rooms, in acceptance order
    pub rooms: Vec<Rect>,
    /// Center of the first room
    pub player_spawn: Position,
    /// Monsters and items, in draw order; the player is not included
    pub entities: Vec<Entity>,
}

/// Trait for procedural generators.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> TombsResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> TombsResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Whether a cell is blocked by terrain or by a blocking entity in `entities`.
pub(crate) fn is_occupied(grid: &Grid, entities: &[Entity], pos: Position) -> bool {
    grid.is_blocked_tile(pos)
        || entities
            .iter()
            .any(|entity| entity.blocks && entity.position == pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_generation_config_creation() {
        let config = GenerationConfig::new(12345);
        assert_eq!(config.seed, 12345);
        assert_eq!((config.map_width, config.map_height), (80, 43));
        assert_eq!((config.min_room_size, config.max_room_size), (6, 10));
        assert_eq!(config.max_rooms, 30);
        assert!(config.check().is_ok());
        assert!(GenerationConfig::for_testing(1).check().is_ok());
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let mut config = GenerationConfig::new(1);
        config.min_room_size = 12;
        assert!(config.check().is_err());

        let mut config = GenerationConfig::new(1);
        config.map_height = 8;
        assert!(config.check().is_err());

        let mut config = GenerationConfig::new(1);
        config.max_rooms = 0;
        assert!(config.check().is_err());
    }

    #[test]
    fn test_config_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let config = GenerationConfig::for_testing(99);
        write!(file, "{}", serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = GenerationConfig::from_json_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_from_bad_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ \"seed\": 1 }}").unwrap();
        assert!(matches!(
            GenerationConfig::from_json_file(file.path()),
            Err(TombsError::Serde(_))
        ));
        assert!(matches!(
            GenerationConfig::from_json_file("/definitely/not/here.json"),
            Err(TombsError::Io(_))
        ));
    }

    #[test]
    fn test_same_seed_same_rng() {
        use rand::Rng;
        let config = GenerationConfig::new(7);
        let a: u64 = config.create_rng().gen();
        let b: u64 = config.create_rng().gen();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rect_geometry() {
        let room = Rect::new(5, 5, 10, 8);
        assert_eq!((room.x2, room.y2), (15, 13));
        assert_eq!(room.center(), Position::new(10, 9));
        assert_eq!(room.interior().count(), 9 * 7);
        assert!(room.interior().all(|pos| room.contains(pos)));
        assert!(!room.contains(Position::new(15, 9)));
    }

    #[test]
    fn test_rect_intersect_is_closed() {
        let room = Rect::new(0, 0, 5, 5);
        assert!(room.intersect(&Rect::new(5, 0, 5, 5)));
        assert!(room.intersect(&Rect::new(2, 2, 2, 2)));
        assert!(!room.intersect(&Rect::new(6, 0, 5, 5)));
        assert!(!room.intersect(&Rect::new(0, 6, 5, 5)));
    }

    #[test]
    fn test_is_occupied() {
        let mut grid = Grid::new(5, 5);
        grid.carve(Position::new(1, 1)).unwrap();
        grid.carve(Position::new(2, 1)).unwrap();
        let entities = vec![
            Entity::monster(crate::MonsterKind::Orc, Position::new(2, 1)),
            Entity::healing_potion(Position::new(1, 1)),
        ];
        assert!(!is_occupied(&grid, &entities, Position::new(1, 1)));
        assert!(is_occupied(&grid, &entities, Position::new(2, 1)));
        assert!(is_occupied(&grid, &entities, Position::new(3, 3)));
    }
}
