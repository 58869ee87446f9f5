//! # Item Generation
//!
//! Per-room item placement. Every item generated today is a healing potion.

use super::is_occupied;
use crate::{Entity, GenerationConfig, Grid, Position, Rect};
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

/// Scatters items on the floor of freshly carved rooms.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemGenerator;

impl ItemGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Rolls up to `max_items_per_room` potions for a room.
    ///
    /// Items go to the front of `entities` so they are drawn beneath
    /// monsters. Cells blocked by terrain or a blocking entity are skipped.
    /// Returns the number placed.
    pub fn populate_room(
        &self,
        room: &Rect,
        grid: &Grid,
        entities: &mut Vec<Entity>,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> usize {
        let count = rng.gen_range(0..=config.max_items_per_room);
        let mut placed = 0;

        for _ in 0..count {
            let pos = Position::new(
                rng.gen_range((room.x1 + 1)..=(room.x2 - 1)),
                rng.gen_range((room.y1 + 1)..=(room.y2 - 1)),
            );
            if is_occupied(grid, entities, pos) {
                continue;
            }
            entities.insert(0, Entity::healing_potion(pos));
            placed += 1;
        }

        debug!("Placed {} of {} items in room at {:?}", placed, count, room.center());
        placed
    }
}
