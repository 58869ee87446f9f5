//! # Dungeon Generation
//!
//! Room-and-corridor dungeon layout.
//!
//! The generator tries `max_rooms` random rectangles, keeps those that do
//! not touch an earlier room, carves and populates them, and joins each new
//! room to the previously accepted one with an L-shaped tunnel.

use crate::{
    reachable_from, EncounterGenerator, GeneratedDungeon, GenerationConfig, Generator, Grid,
    ItemGenerator, Position, Rect, TombsError, TombsResult,
};
use log::{debug, info};
use rand::{rngs::StdRng, Rng};

/// Primary dungeon generator using the room-and-corridor algorithm.
///
/// # Examples
///
/// ```
/// use tombs::{GenerationConfig, Generator, RoomCorridorGenerator};
///
/// let config = GenerationConfig::for_testing(3);
/// let generator = RoomCorridorGenerator::new();
/// let dungeon = generator.generate(&config, &mut config.create_rng()).unwrap();
/// assert!(!dungeon.rooms.is_empty());
/// assert_eq!(dungeon.player_spawn, dungeon.rooms[0].center());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoomCorridorGenerator {
    encounters: EncounterGenerator,
    items: ItemGenerator,
}

impl RoomCorridorGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples a room that lies fully inside the map.
    fn sample_room(&self, config: &GenerationConfig, rng: &mut StdRng) -> Rect {
        let w = rng.gen_range(config.min_room_size..=config.max_room_size);
        let h = rng.gen_range(config.min_room_size..=config.max_room_size);
        let x = rng.gen_range(0..=(config.map_width - w - 1));
        let y = rng.gen_range(0..=(config.map_height - h - 1));
        Rect::new(x, y, w, h)
    }

    fn carve_room(&self, grid: &mut Grid, room: &Rect) -> TombsResult<()> {
        for pos in room.interior() {
            grid.carve(pos)?;
        }
        Ok(())
    }

    /// Carves a horizontal run on row `y`, both ends included.
    fn carve_h_tunnel(&self, grid: &mut Grid, x1: i32, x2: i32, y: i32) -> TombsResult<()> {
        for x in x1.min(x2)..=x1.max(x2) {
            grid.carve(Position::new(x, y))?;
        }
        Ok(())
    }

    /// Carves a vertical run on column `x`, both ends included.
    fn carve_v_tunnel(&self, grid: &mut Grid, y1: i32, y2: i32, x: i32) -> TombsResult<()> {
        for y in y1.min(y2)..=y1.max(y2) {
            grid.carve(Position::new(x, y))?;
        }
        Ok(())
    }

    /// Joins two room centers with an L-shaped tunnel.
    ///
    /// `horizontal_first` bends at `(to.x, from.y)`, otherwise at
    /// `(from.x, to.y)`.
    fn carve_l_tunnel(
        &self,
        grid: &mut Grid,
        from: Position,
        to: Position,
        horizontal_first: bool,
    ) -> TombsResult<()> {
        if horizontal_first {
            self.carve_h_tunnel(grid, from.x, to.x, from.y)?;
            self.carve_v_tunnel(grid, from.y, to.y, to.x)
        } else {
            self.carve_v_tunnel(grid, from.y, to.y, from.x)?;
            self.carve_h_tunnel(grid, from.x, to.x, to.y)
        }
    }
}

impl Generator<GeneratedDungeon> for RoomCorridorGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> TombsResult<GeneratedDungeon> {
        config.check()?;

        let mut grid = Grid::new(config.map_width, config.map_height);
        let mut rooms: Vec<Rect> = Vec::new();
        let mut entities = Vec::new();

        for attempt in 0..config.max_rooms {
            let room = self.sample_room(config, rng);
            if rooms.iter().any(|other| room.intersect(other)) {
                debug!("Room attempt {} rejected at {:?}", attempt, room);
                continue;
            }

            self.carve_room(&mut grid, &room)?;
            let center = room.center();
            let reserved = rooms.is_empty().then_some(center);
            self.encounters
                .populate_room(&room, &grid, &mut entities, reserved, config, rng);
            self.items
                .populate_room(&room, &grid, &mut entities, config, rng);

            if let Some(previous) = rooms.last() {
                let horizontal_first = rng.gen_range(0..=1) == 1;
                self.carve_l_tunnel(&mut grid, previous.center(), center, horizontal_first)?;
            }
            rooms.push(room);
        }

        let player_spawn = rooms.first().map(Rect::center).ok_or_else(|| {
            TombsError::GenerationFailed("Failed to place any rooms".to_string())
        })?;

        let dungeon = GeneratedDungeon {
            grid,
            rooms,
            player_spawn,
            entities,
        };
        self.validate(&dungeon, config)?;

        info!(
            "{} produced {} rooms, {} floor tiles, {} entities",
            self.generator_type(),
            dungeon.rooms.len(),
            dungeon.grid.floor_count(),
            dungeon.entities.len()
        );
        Ok(dungeon)
    }

    fn validate(&self, dungeon: &GeneratedDungeon, config: &GenerationConfig) -> TombsResult<()> {
        if dungeon.rooms.is_empty() {
            return Err(TombsError::GenerationFailed("Dungeon has no rooms".to_string()));
        }
        if dungeon.grid.width != config.map_width || dungeon.grid.height != config.map_height {
            return Err(TombsError::GenerationFailed(format!(
                "Grid is {}x{}, expected {}x{}",
                dungeon.grid.width, dungeon.grid.height, config.map_width, config.map_height
            )));
        }

        for (i, room) in dungeon.rooms.iter().enumerate() {
            if dungeon.rooms[i + 1..].iter().any(|other| room.intersect(other)) {
                return Err(TombsError::GenerationFailed(format!(
                    "Room {} overlaps a later room",
                    i
                )));
            }
        }

        let reachable = reachable_from(&dungeon.grid, dungeon.player_spawn);
        for (i, room) in dungeon.rooms.iter().enumerate() {
            if !reachable.contains(&room.center()) {
                return Err(TombsError::GenerationFailed(format!(
                    "Room {} at {:?} is not reachable from the spawn",
                    i,
                    room.center()
                )));
            }
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "RoomCorridorGenerator"
    }
}
