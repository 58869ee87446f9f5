//! # Encounter Generation
//!
//! Per-room monster placement.

use super::is_occupied;
use crate::{Entity, GenerationConfig, Grid, MonsterKind, Position, Rect};
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

/// Percent chance that a rolled monster is an orc rather than a troll.
pub const ORC_CHANCE: u32 = 80;

/// Places monsters inside freshly carved rooms.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncounterGenerator;

impl EncounterGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Rolls up to `max_monsters_per_room` monsters for a room and appends
    /// them to `entities`.
    ///
    /// Each monster picks a random interior cell; a cell that is blocked,
    /// already holds a blocking entity, or equals `reserved` is skipped, so
    /// fewer monsters than rolled may appear. Returns the number placed.
    pub fn populate_room(
        &self,
        room: &Rect,
        grid: &Grid,
        entities: &mut Vec<Entity>,
        reserved: Option<Position>,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> usize {
        let count = rng.gen_range(0..=config.max_monsters_per_room);
        let mut placed = 0;

        for _ in 0..count {
            let pos = Position::new(
                rng.gen_range((room.x1 + 1)..=(room.x2 - 1)),
                rng.gen_range((room.y1 + 1)..=(room.y2 - 1)),
            );
            if Some(pos) == reserved || is_occupied(grid, entities, pos) {
                continue;
            }
            let kind = self.roll_kind(rng);
            entities.push(Entity::monster(kind, pos));
            placed += 1;
        }

        debug!("Placed {} of {} monsters in room at {:?}", placed, count, room.center());
        placed
    }

    /// Picks the monster type: mostly orcs, sometimes a troll.
    pub fn roll_kind(&self, rng: &mut StdRng) -> MonsterKind {
        if rng.gen_range(0..=100) < ORC_CHANCE {
            MonsterKind::Orc
        } else {
            MonsterKind::Troll
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn carved_room() -> (Grid, Rect) {
        let mut grid = Grid::new(20, 20);
        let room = Rect::new(2, 2, 8, 8);
        for pos in room.interior() {
            grid.carve(pos).unwrap();
        }
        (grid, room)
    }

    #[test]
    fn test_monsters_land_inside_room_without_overlap() {
        let (grid, room) = carved_room();
        let mut config = GenerationConfig::new(3);
        config.max_monsters_per_room = 10;

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut entities = Vec::new();
            let placed = EncounterGenerator::new().populate_room(
                &room,
                &grid,
                &mut entities,
                None,
                &config,
                &mut rng,
            );
            assert_eq!(placed, entities.len());
            assert!(placed <= 10);
            for (i, monster) in entities.iter().enumerate() {
                assert!(room.contains(monster.position));
                assert!(monster.combatant.is_some());
                assert!(entities[i + 1..].iter().all(|other| other.position != monster.position));
            }
        }
    }

    #[test]
    fn test_reserved_cell_is_skipped() {
        let mut grid = Grid::new(5, 5);
        let room = Rect::new(1, 1, 2, 2);
        grid.carve(Position::new(2, 2)).unwrap();
        let mut config = GenerationConfig::new(3);
        config.max_monsters_per_room = 5;

        let mut rng = StdRng::seed_from_u64(9);
        let mut entities = Vec::new();
        EncounterGenerator::new().populate_room(
            &room,
            &grid,
            &mut entities,
            Some(Position::new(2, 2)),
            &config,
            &mut rng,
        );
        assert!(entities.is_empty());
    }

    #[test]
    fn test_orcs_outnumber_trolls() {
        let mut rng = StdRng::seed_from_u64(1234);
        let generator = EncounterGenerator::new();
        let orcs = (0..1000)
            .filter(|_| generator.roll_kind(&mut rng) == MonsterKind::Orc)
            .count();
        assert!((700..900).contains(&orcs), "rolled {} orcs", orcs);
    }
}
