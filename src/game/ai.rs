//! # Monster AI
//!
//! Per-turn behaviour for entities carrying an [`Ai`] capability. Monsters
//! share the player's field of view: a monster acts exactly when the player
//! can see it.

use crate::{Ai, EntityId, GameState, TombsResult};
use log::debug;

impl GameState {
    /// Runs one AI step for every entity with an AI, in live-list order.
    pub fn run_ai_turns(&mut self) -> TombsResult<()> {
        let actors: Vec<EntityId> = self
            .entities
            .iter()
            .filter(|entity| entity.ai.is_some())
            .map(|entity| entity.id)
            .collect();

        for id in actors {
            self.take_ai_turn(id)?;
        }
        Ok(())
    }

    /// Dispatches a single entity's AI.
    pub fn take_ai_turn(&mut self, id: EntityId) -> TombsResult<()> {
        let Some(ai) = self.get_entity(id).and_then(|entity| entity.ai) else {
            return Ok(());
        };
        match ai {
            Ai::Idle => Ok(()),
            Ai::BasicMonster => self.basic_monster_turn(id),
        }
    }

    /// Closes in on the player while in view and attacks when adjacent.
    fn basic_monster_turn(&mut self, id: EntityId) -> TombsResult<()> {
        let monster_pos = self.entity_or_err(id)?.position;
        if !self.is_in_fov(monster_pos) {
            return Ok(());
        }

        let player_pos = self.player_position();
        if monster_pos.euclidean_distance(player_pos) >= 2.0 {
            let (dx, dy) = crate::utils::step_towards(monster_pos, player_pos);
            let moved = self.move_entity(id, dx, dy)?;
            debug!("Monster {} stepping ({}, {}) moved: {}", id, dx, dy, moved);
        } else if self.player().is_alive() {
            self.attack(id, self.player_id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::{arena, arena_state};
    use crate::{Entity, MonsterKind, Position};

    #[test]
    fn test_visible_monster_approaches() {
        let mut game_state = arena_state(Position::new(2, 2));
        let orc = Entity::monster(MonsterKind::Orc, Position::new(6, 2));
        let orc_id = orc.id;
        game_state.entities.push(orc);

        game_state.run_ai_turns().unwrap();
        assert_eq!(game_state.get_entity(orc_id).unwrap().position, Position::new(5, 2));
    }

    #[test]
    fn test_monster_steps_diagonally() {
        let mut game_state = arena_state(Position::new(2, 2));
        let orc = Entity::monster(MonsterKind::Orc, Position::new(6, 6));
        let orc_id = orc.id;
        game_state.entities.push(orc);

        game_state.run_ai_turns().unwrap();
        assert_eq!(game_state.get_entity(orc_id).unwrap().position, Position::new(5, 5));
    }

    #[test]
    fn test_adjacent_monster_attacks() {
        let mut game_state = arena_state(Position::new(2, 2));
        game_state
            .entities
            .push(Entity::monster(MonsterKind::Troll, Position::new(3, 3)));

        game_state.run_ai_turns().unwrap();
        // troll power 4 against player defense 2
        assert_eq!(game_state.player_hp(), (28, 30));
        assert_eq!(
            game_state.messages.last().unwrap().text,
            "Troll attacks player for 2 hit points!"
        );
    }

    #[test]
    fn test_unseen_monster_waits() {
        let mut game_state = GameState::new_with_dungeon(arena(40, 10), 1);
        let orc = Entity::monster(MonsterKind::Orc, Position::new(35, 5));
        let orc_id = orc.id;
        game_state.entities.push(orc);

        game_state.run_ai_turns().unwrap();
        assert_eq!(game_state.get_entity(orc_id).unwrap().position, Position::new(35, 5));
    }

    #[test]
    fn test_monster_does_not_attack_dead_player() {
        let mut game_state = arena_state(Position::new(2, 2));
        game_state.player_mut().combatant.as_mut().unwrap().hp = 0;
        game_state
            .entities
            .push(Entity::monster(MonsterKind::Orc, Position::new(3, 2)));
        let before = game_state.messages.len();

        game_state.run_ai_turns().unwrap();
        assert_eq!(game_state.messages.len(), before);
    }

    #[test]
    fn test_idle_ai_does_nothing() {
        let mut game_state = arena_state(Position::new(2, 2));
        let mut orc = Entity::monster(MonsterKind::Orc, Position::new(6, 2));
        orc.ai = Some(Ai::Idle);
        let orc_id = orc.id;
        game_state.entities.push(orc);

        game_state.run_ai_turns().unwrap();
        assert_eq!(game_state.get_entity(orc_id).unwrap().position, Position::new(6, 2));
    }
}
