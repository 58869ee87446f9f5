//! # Combat Resolver
//!
//! Melee attacks, damage application and death handling.

use crate::{DeathKind, EntityId, GameCompletionState, GameState, Rgb, TombsResult};
use log::info;

/// Result of a single attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// The defender lost this many hit points
    Hit { damage: i32, killed: bool },
    /// Power did not exceed defense
    NoEffect,
}

impl GameState {
    /// Resolves an attack of one combatant against another.
    ///
    /// Damage is `attacker.power - defender.defense`; anything not above
    /// zero has no effect.
    pub fn attack(&mut self, attacker_id: EntityId, defender_id: EntityId) -> TombsResult<AttackOutcome> {
        let attacker = self.entity_or_err(attacker_id)?;
        let defender = self.entity_or_err(defender_id)?;
        let (Some(offense), Some(defense)) = (&attacker.combatant, &defender.combatant) else {
            return Err(crate::TombsError::InvalidAction(format!(
                "{} cannot attack {}",
                attacker.name, defender.name
            )));
        };

        let damage = offense.damage_against(defense.defense);
        let attacker_name = crate::utils::capitalize(&attacker.name);
        let defender_name = defender.name.clone();

        if damage > 0 {
            self.messages.post_colored(
                &format!(
                    "{} attacks {} for {} hit points!",
                    attacker_name, defender_name, damage
                ),
                Rgb::YELLOW,
            );
            let killed = self.take_damage(defender_id, damage)?;
            Ok(AttackOutcome::Hit { damage, killed })
        } else {
            self.messages.post(&format!(
                "{} attacks {} but has no effect.",
                attacker_name, defender_name
            ));
            Ok(AttackOutcome::NoEffect)
        }
    }

    /// Applies damage to an entity's combatant and runs its death handler
    /// on the killing blow. Returns whether this hit killed it.
    pub fn take_damage(&mut self, id: EntityId, damage: i32) -> TombsResult<bool> {
        let entity = self.get_entity_mut(id).ok_or_else(|| {
            crate::TombsError::InvalidState(format!("Entity {} is not on the map", id))
        })?;
        let Some(combatant) = entity.combatant.as_mut() else {
            return Ok(false);
        };
        let death = combatant.death;
        if !combatant.take_damage(damage) {
            return Ok(false);
        }
        match death {
            DeathKind::Player => self.player_death(id),
            DeathKind::Monster => self.monster_death(id),
        }
        Ok(true)
    }

    /// The game ends and the player turns into a corpse.
    fn player_death(&mut self, id: EntityId) {
        info!("Player died on turn {}", self.turn_number);
        self.messages.post_colored("You died!", Rgb::RED);
        self.completion_state = GameCompletionState::Dead;
        if let Some(player) = self.get_entity_mut(id) {
            player.glyph = '%';
            player.color = Rgb::DARK_RED;
        }
    }

    /// The monster turns into remains that neither block nor act.
    fn monster_death(&mut self, id: EntityId) {
        let Some(monster) = self.get_entity_mut(id) else {
            return;
        };
        let message = format!("{} is dead!", crate::utils::capitalize(&monster.name));
        info!("{} killed at {:?}", monster.name, monster.position);
        monster.glyph = '%';
        monster.color = Rgb::DARK_RED;
        monster.blocks = false;
        monster.combatant = None;
        monster.ai = None;
        monster.name = format!("Remains of {}", monster.name);
        self.messages.post_colored(&message, Rgb::ORANGE);
        self.send_to_back(id);
    }
}
