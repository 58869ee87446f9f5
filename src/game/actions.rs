//! # Action System
//!
//! Turn engine: resolves one player action, then lets every monster act if
//! the action consumed a turn.

use crate::{GameState, TombsResult};
use log::{debug, info};

/// Actions the player can ask the simulation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Step or attack in a direction
    Move { dx: i32, dy: i32 },
    /// Pick up the item under the player
    PickUp,
    /// Use the item in an inventory slot
    UseItem(usize),
    /// Leave the game
    Quit,
}

impl PlayerAction {
    /// Whether resolving this action gives the monsters a turn.
    pub fn takes_turn(self) -> bool {
        matches!(self, PlayerAction::Move { .. })
    }
}

/// What the caller's loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A turn passed and monsters acted
    TookTurn,
    /// The action resolved without consuming a turn
    NoTurn,
    /// Stop the game loop
    Exit,
}

impl GameState {
    /// Resolves one player action and, if it took a turn, the AI pass.
    ///
    /// Once the player is dead only `Quit` has any effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use tombs::{ActionOutcome, GameState, GenerationConfig, PlayerAction};
    ///
    /// let mut game_state = GameState::new(&GenerationConfig::for_testing(7)).unwrap();
    /// let outcome = game_state.handle_action(PlayerAction::Quit).unwrap();
    /// assert_eq!(outcome, ActionOutcome::Exit);
    /// ```
    pub fn handle_action(&mut self, action: PlayerAction) -> TombsResult<ActionOutcome> {
        debug!("Handling {:?}", action);
        match action {
            PlayerAction::Quit => {
                info!("Player quit on turn {}", self.turn_number);
                return Ok(ActionOutcome::Exit);
            }
            _ if !self.is_playing() => return Ok(ActionOutcome::NoTurn),
            PlayerAction::Move { dx, dy } => {
                self.attack_or_move(dx, dy)?;
            }
            PlayerAction::PickUp => {
                self.pick_up()?;
            }
            PlayerAction::UseItem(slot) => {
                self.use_item(slot)?;
            }
        }

        if !action.takes_turn() {
            return Ok(ActionOutcome::NoTurn);
        }
        self.turn_number += 1;
        if self.is_playing() {
            self.run_ai_turns()?;
        }
        Ok(ActionOutcome::TookTurn)
    }

    /// Attacks whatever combatant stands in the target cell, or walks there.
    ///
    /// A successful step marks the field of view dirty and recomputes it.
    pub fn attack_or_move(&mut self, dx: i32, dy: i32) -> TombsResult<()> {
        let target = self.player_position().offset(dx, dy);
        let defender = self
            .entities
            .iter()
            .find(|entity| {
                entity.combatant.is_some()
                    && entity.position == target
                    && entity.id != self.player_id
            })
            .map(|entity| entity.id);

        match defender {
            Some(defender_id) => {
                self.attack(self.player_id, defender_id)?;
            }
            None => {
                if self.move_entity(self.player_id, dx, dy)? {
                    self.fov_dirty = true;
                    self.refresh_fov();
                }
            }
        }
        Ok(())
    }
}
