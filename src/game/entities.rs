//! # Entity Model
//!
//! Generic positioned, drawable game objects. Behaviour is attached through
//! optional capabilities rather than through distinct entity types: a monster
//! is an entity with a [`Combatant`] and an [`Ai`], a potion is an entity with
//! an [`Item`].

use crate::{new_entity_id, EntityId, Position, Rgb};

/// What happens when a combatant's hit points run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathKind {
    /// Ends the game
    Player,
    /// Leaves remains on the floor
    Monster,
}

/// Combat-related properties (player, monsters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    pub max_hp: i32,
    pub hp: i32,
    pub defense: i32,
    pub power: i32,
    pub death: DeathKind,
}

impl Combatant {
    /// Creates a combatant at full health.
    pub fn new(hp: i32, defense: i32, power: i32, death: DeathKind) -> Self {
        Self {
            max_hp: hp,
            hp,
            defense,
            power,
            death,
        }
    }

    /// Damage this combatant deals against the given defense.
    ///
    /// # Examples
    ///
    /// ```
    /// use tombs::{Combatant, DeathKind};
    ///
    /// let fighter = Combatant::new(30, 2, 5, DeathKind::Player);
    /// assert_eq!(fighter.damage_against(2), 3);
    /// ```
    pub fn damage_against(&self, defense: i32) -> i32 {
        self.power - defense
    }

    /// Applies damage and reports whether this hit was the killing blow.
    ///
    /// Hit points never drop below zero, and only the hit that takes them
    /// from positive to zero returns `true`; hitting an already dead
    /// combatant never reports a second death.
    pub fn take_damage(&mut self, damage: i32) -> bool {
        if damage <= 0 {
            return false;
        }
        let was_alive = self.hp > 0;
        self.hp = (self.hp - damage).max(0);
        was_alive && self.hp == 0
    }

    /// Restores hit points without going over the maximum.
    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn is_at_full_health(&self) -> bool {
        self.hp >= self.max_hp
    }
}

/// Closed set of monster behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ai {
    /// Never acts
    Idle,
    /// Chases and attacks the player while in view
    BasicMonster,
}

/// Closed set of effects an item can have when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    /// Restores the player's hit points
    Heal,
}

/// An object that can be picked up and used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Item {
    pub effect: Option<ItemEffect>,
}

/// Monster presets placed by the dungeon generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonsterKind {
    Orc,
    Troll,
}

/// A generic object: the player, a monster, an item...
///
/// It is always drawn as a single glyph on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub id: EntityId,
    pub position: Position,
    pub glyph: char,
    pub color: Rgb,
    pub name: String,
    /// Whether this entity prevents others from entering its cell
    pub blocks: bool,
    pub combatant: Option<Combatant>,
    pub ai: Option<Ai>,
    pub item: Option<Item>,
}

impl Entity {
    /// Creates a plain entity without any capability.
    pub fn new(position: Position, glyph: char, color: Rgb, name: impl Into<String>, blocks: bool) -> Self {
        Self {
            id: new_entity_id(),
            position,
            glyph,
            color,
            name: name.into(),
            blocks,
            combatant: None,
            ai: None,
            item: None,
        }
    }

    pub fn with_combatant(mut self, combatant: Combatant) -> Self {
        self.combatant = Some(combatant);
        self
    }

    pub fn with_ai(mut self, ai: Ai) -> Self {
        self.ai = Some(ai);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.item = Some(item);
        self
    }

    /// The player character.
    pub fn player(position: Position) -> Self {
        Self::new(position, '@', Rgb::WHITE, "player", true)
            .with_combatant(Combatant::new(30, 2, 5, DeathKind::Player))
    }

    /// A monster of the given kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use tombs::{Entity, MonsterKind, Position};
    ///
    /// let troll = Entity::monster(MonsterKind::Troll, Position::new(3, 4));
    /// assert_eq!(troll.glyph, 'T');
    /// assert!(troll.blocks);
    /// assert_eq!(troll.combatant.unwrap().max_hp, 16);
    /// ```
    pub fn monster(kind: MonsterKind, position: Position) -> Self {
        let (glyph, color, name, combatant) = match kind {
            MonsterKind::Orc => (
                'o',
                Rgb::DESATURATED_GREEN,
                "Orc",
                Combatant::new(10, 0, 3, DeathKind::Monster),
            ),
            MonsterKind::Troll => (
                'T',
                Rgb::DARKER_GREEN,
                "Troll",
                Combatant::new(16, 1, 4, DeathKind::Monster),
            ),
        };
        Self::new(position, glyph, color, name, true)
            .with_combatant(combatant)
            .with_ai(Ai::BasicMonster)
    }

    /// A single-use healing potion.
    pub fn healing_potion(position: Position) -> Self {
        Self::new(position, '!', Rgb::VIOLET, "Healing Potion", false).with_item(Item {
            effect: Some(ItemEffect::Heal),
        })
    }

    /// Euclidean distance to another entity.
    pub fn distance_to(&self, other: &Entity) -> f64 {
        self.position.euclidean_distance(other.position)
    }

    /// Whether this entity can still fight.
    pub fn is_alive(&self) -> bool {
        self.combatant.as_ref().is_some_and(Combatant::is_alive)
    }
}
