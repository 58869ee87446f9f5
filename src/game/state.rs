//! # Game State Module
//!
//! Central game state management and coordination between all game systems.
//!
//! [`GameState`] is the single session context every operation works on. It
//! owns the grid, the live entity list, the inventory and the message log;
//! the presentation layer only reads it between turns.

use crate::config::TORCH_RADIUS;
use crate::{
    Entity, EntityId, FovMap, GeneratedDungeon, GenerationConfig, Generator, Grid, Inventory,
    MessageLog, Position, Rgb, RoomCorridorGenerator, TombsError, TombsResult,
};
use log::{debug, info};

/// Whether the session is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCompletionState {
    /// Player is alive and taking turns
    Playing,
    /// Player died; terminal
    Dead,
}

/// Central game state containing all game data.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The dungeon terrain
    pub grid: Grid,
    /// Live entities on the map, in draw order (first drawn first)
    pub entities: Vec<Entity>,
    /// The player entity ID
    pub player_id: EntityId,
    /// Items carried by the player
    pub inventory: Inventory,
    /// Messages shown in the bottom panel
    pub messages: MessageLog,
    /// Current game completion state
    pub completion_state: GameCompletionState,
    /// Transparency map and current field of view
    pub fov: FovMap,
    /// Set when the field of view must be recomputed
    pub fov_dirty: bool,
    /// Sight radius used for field of view
    pub torch_radius: i32,
    /// Number of turns taken so far
    pub turn_number: u64,
    /// Random number generator seed
    pub rng_seed: u64,
}

impl GameState {
    /// Generates a new dungeon and places the player in its first room.
    ///
    /// # Examples
    ///
    /// ```
    /// use tombs::{GameCompletionState, GameState, GenerationConfig};
    ///
    /// let game_state = GameState::new(&GenerationConfig::for_testing(12345)).unwrap();
    /// assert_eq!(game_state.completion_state, GameCompletionState::Playing);
    /// assert_eq!(game_state.turn_number, 0);
    /// ```
    pub fn new(config: &GenerationConfig) -> TombsResult<Self> {
        let generator = RoomCorridorGenerator::new();
        let mut rng = config.create_rng();
        let dungeon = generator.generate(config, &mut rng)?;
        info!(
            "Generated dungeon with {} rooms and {} entities (seed {})",
            dungeon.rooms.len(),
            dungeon.entities.len(),
            config.seed
        );

        let mut game_state = Self::new_with_dungeon(dungeon, config.seed);
        game_state.messages.post_colored(
            "Welcome stranger! Prepare to perish in the Tombs of the Ancient Kings.",
            Rgb::RED,
        );
        Ok(game_state)
    }

    /// Creates a game state from a pre-generated dungeon.
    ///
    /// The player is created at the dungeon's spawn point and put at the
    /// front of the live entity list.
    pub fn new_with_dungeon(dungeon: GeneratedDungeon, seed: u64) -> Self {
        let player = Entity::player(dungeon.player_spawn);
        let player_id = player.id;
        let mut entities = Vec::with_capacity(dungeon.entities.len() + 1);
        entities.push(player);
        entities.extend(dungeon.entities);

        let fov = FovMap::from_grid(&dungeon.grid);
        let mut game_state = Self {
            grid: dungeon.grid,
            entities,
            player_id,
            inventory: Inventory::new(),
            messages: MessageLog::default(),
            completion_state: GameCompletionState::Playing,
            fov,
            fov_dirty: true,
            torch_radius: TORCH_RADIUS,
            turn_number: 0,
            rng_seed: seed,
        };
        game_state.refresh_fov();
        game_state
    }

    /// Gets the player entity.
    pub fn player(&self) -> &Entity {
        self.entities
            .iter()
            .find(|entity| entity.id == self.player_id)
            .unwrap_or_else(|| unreachable!("the player never leaves the live entity list"))
    }

    /// Gets the player entity mutably.
    pub fn player_mut(&mut self) -> &mut Entity {
        let player_id = self.player_id;
        self.entities
            .iter_mut()
            .find(|entity| entity.id == player_id)
            .unwrap_or_else(|| unreachable!("the player never leaves the live entity list"))
    }

    pub fn player_position(&self) -> Position {
        self.player().position
    }

    /// Player `(hp, max_hp)` for the status bar.
    pub fn player_hp(&self) -> (i32, i32) {
        self.player()
            .combatant
            .as_ref()
            .map_or((0, 0), |c| (c.hp, c.max_hp))
    }

    pub fn is_playing(&self) -> bool {
        self.completion_state == GameCompletionState::Playing
    }

    /// Index of an entity in the live list.
    pub fn entity_index(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|entity| entity.id == id)
    }

    pub fn get_entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    pub fn get_entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|entity| entity.id == id)
    }

    /// Looks up an entity, failing with `InvalidState` if it is gone.
    pub(crate) fn entity_or_err(&self, id: EntityId) -> TombsResult<&Entity> {
        self.get_entity(id)
            .ok_or_else(|| TombsError::InvalidState(format!("Entity {} is not on the map", id)))
    }

    /// Whether a position is blocked by terrain or by a blocking entity.
    pub fn is_blocked(&self, pos: Position) -> bool {
        self.grid.is_blocked_tile(pos)
            || self
                .entities
                .iter()
                .any(|entity| entity.blocks && entity.position == pos)
    }

    /// Moves an entity by the given delta unless the destination is blocked.
    ///
    /// Returns whether the entity actually moved.
    pub fn move_entity(&mut self, id: EntityId, dx: i32, dy: i32) -> TombsResult<bool> {
        let destination = self.entity_or_err(id)?.position.offset(dx, dy);
        if self.is_blocked(destination) {
            return Ok(false);
        }
        if let Some(entity) = self.get_entity_mut(id) {
            entity.position = destination;
        }
        Ok(true)
    }

    /// Moves an entity to the front of the list so everything else draws over it.
    pub fn send_to_back(&mut self, id: EntityId) {
        if let Some(index) = self.entity_index(id) {
            let entity = self.entities.remove(index);
            self.entities.insert(0, entity);
        }
    }

    /// Recomputes the field of view if it is dirty and marks newly seen
    /// tiles as explored.
    pub fn refresh_fov(&mut self) {
        if !self.fov_dirty {
            return;
        }
        let origin = self.player_position();
        self.fov.compute(origin, self.torch_radius);
        for pos in self.fov.visible_positions() {
            self.grid.mark_explored(pos);
        }
        self.fov_dirty = false;
        debug!("Recomputed field of view from {:?}", origin);
    }

    pub fn is_in_fov(&self, pos: Position) -> bool {
        self.fov.is_in_fov(pos)
    }

    /// Entities in the order they should be drawn, with the player on top.
    pub fn draw_order(&self) -> impl Iterator<Item = &Entity> {
        self.entities
            .iter()
            .filter(move |entity| entity.id != self.player_id)
            .chain(std::iter::once(self.player()))
    }

    /// Comma-separated names of the entities in view at a tile, capitalized.
    pub fn names_under_mouse(&self, tile: Position) -> String {
        if !self.is_in_fov(tile) {
            return String::new();
        }
        let names: Vec<&str> = self
            .entities
            .iter()
            .filter(|entity| entity.position == tile)
            .map(|entity| entity.name.as_str())
            .collect();
        crate::utils::capitalize(&names.join(", "))
    }

    /// Names of the carried items, in slot order.
    pub fn inventory_names(&self) -> Vec<String> {
        self.inventory.names()
    }
}
