//! # Inventory & Item Use
//!
//! Capacity-limited item storage. Picking an item up moves its entity out of
//! the live list into the inventory; using it consumes it unless the effect
//! was cancelled.

use crate::config::{HEAL_AMOUNT, INVENTORY_CAPACITY};
use crate::{Entity, GameState, ItemEffect, Rgb, TombsError, TombsResult};
use log::debug;

/// Ordered collection of carried item entities.
#[derive(Debug, Clone)]
pub struct Inventory {
    items: Vec<Entity>,
    capacity: usize,
}

impl Inventory {
    pub fn new() -> Self {
        Self::with_capacity(INVENTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, slot: usize) -> Option<&Entity> {
        self.items.get(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.items.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name.clone()).collect()
    }

    /// Adds an item, handing it back if there is no room.
    pub fn add(&mut self, item: Entity) -> Result<(), Entity> {
        if self.is_full() {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    fn remove(&mut self, slot: usize) -> Entity {
        self.items.remove(slot)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

/// What an item effect reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseResult {
    /// The effect happened; the item is spent
    Used,
    /// Nothing happened; the item is kept
    Cancelled,
}

impl GameState {
    /// Picks up the first item lying on the player's tile.
    ///
    /// Returns whether an item moved into the inventory. A full inventory
    /// leaves the item on the ground.
    pub fn pick_up(&mut self) -> TombsResult<bool> {
        let player_pos = self.player_position();
        let Some(index) = self
            .entities
            .iter()
            .position(|entity| entity.position == player_pos && entity.item.is_some())
        else {
            return Ok(false);
        };

        if self.inventory.is_full() {
            let name = self.entities[index].name.clone();
            self.messages.post_colored(
                &format!("Your inventory is full, cannot pick up {}.", name),
                Rgb::RED,
            );
            return Ok(false);
        }

        let item = self.entities.remove(index);
        let name = item.name.clone();
        self.inventory.add(item).map_err(|item| {
            TombsError::InvalidState(format!("No room for {} after capacity check", item.name))
        })?;
        self.messages
            .post_colored(&format!("You picked up a {}!", name), Rgb::GREEN);
        debug!("Picked up {} ({} carried)", name, self.inventory.len());
        Ok(true)
    }

    /// Uses the item in the given inventory slot.
    pub fn use_item(&mut self, slot: usize) -> TombsResult<UseResult> {
        let item = self.inventory.get(slot).ok_or_else(|| {
            TombsError::InvalidAction(format!("No item in inventory slot {}", slot))
        })?;

        let Some(effect) = item.item.and_then(|item| item.effect) else {
            let name = item.name.clone();
            self.messages
                .post(&format!("The {} cannot be used.", name));
            return Ok(UseResult::Cancelled);
        };

        let result = match effect {
            ItemEffect::Heal => self.cast_heal(),
        };
        if result == UseResult::Used {
            let spent = self.inventory.remove(slot);
            debug!("Consumed {}", spent.name);
        }
        Ok(result)
    }

    /// Heals the player, unless already at full health.
    pub fn cast_heal(&mut self) -> UseResult {
        let Some(combatant) = self.player_mut().combatant.as_mut() else {
            return UseResult::Cancelled;
        };
        if combatant.is_at_full_health() {
            self.messages
                .post_colored("You are already at full health.", Rgb::RED);
            return UseResult::Cancelled;
        }
        combatant.heal(HEAL_AMOUNT);
        self.messages
            .post_colored("Your wounds begin to heal!", Rgb::LIGHT_VIOLET);
        UseResult::Used
    }
}
