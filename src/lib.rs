//! # Tombs
//!
//! A turn-based dungeon crawl through the Tombs of the Ancient Kings.
//!
//! ## Architecture Overview
//!
//! The crate is split into a backend-agnostic simulation core and a thin
//! macroquad presentation shell:
//!
//! - **Game State**: the single session context owning the grid, the live
//!   entities, the inventory and the message log
//! - **Entity Model**: one `Entity` struct with optional combat, AI and item
//!   capabilities
//! - **Action System**: abstract player commands resolved one turn at a time
//! - **Generation System**: room-and-tunnel dungeon layout with per-room
//!   monster and item population
//! - **Rendering System**: character-grid drawing with a status panel,
//!   message log and inventory menu

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod scenes;
pub mod utils;

pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use utils::*;

pub use game::{
    // From actions
    ActionOutcome,
    PlayerAction,
    // From entities
    Ai,
    Combatant,
    DeathKind,
    Entity,
    EntityId,
    Item,
    ItemEffect,
    // From messages
    Message,
    MessageLog,
    // From state
    GameCompletionState,
    GameState,
    // From world
    Grid,
    Position,
    Rgb,
    Tile,
};

pub use generation::{GeneratedDungeon, GenerationConfig, Generator, Rect, RoomCorridorGenerator};

/// Core error type for the Tombs game engine.
#[derive(thiserror::Error, Debug)]
pub enum TombsError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Action cannot be performed
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Tombs codebase.
pub type TombsResult<T> = Result<T, TombsError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Width of the whole window in character cells
    pub const SCREEN_WIDTH: i32 = 80;

    /// Height of the whole window in character cells
    pub const SCREEN_HEIGHT: i32 = 50;

    /// Default dungeon width in tiles
    pub const MAP_WIDTH: i32 = 80;

    /// Default dungeon height in tiles
    pub const MAP_HEIGHT: i32 = 43;

    /// Width of the HP bar in the status panel
    pub const BAR_WIDTH: i32 = 20;

    /// Height of the bottom status panel
    pub const PANEL_HEIGHT: i32 = 7;

    /// First row of the status panel
    pub const PANEL_Y: i32 = SCREEN_HEIGHT - PANEL_HEIGHT;

    /// Column where log messages start
    pub const MSG_X: i32 = BAR_WIDTH + 2;

    /// Wrap width of the message log
    pub const MSG_WIDTH: usize = (SCREEN_WIDTH - BAR_WIDTH - 2) as usize;

    /// Number of log lines kept and shown
    pub const MSG_HEIGHT: usize = (PANEL_HEIGHT - 1) as usize;

    /// Width of the inventory menu window
    pub const INVENTORY_WIDTH: i32 = 50;

    /// Maximum number of items the player can carry
    pub const INVENTORY_CAPACITY: usize = 26;

    /// Hit points restored by a healing potion
    pub const HEAL_AMOUNT: i32 = 4;

    /// Sight radius of the player's torch
    pub const TORCH_RADIUS: i32 = 10;
}
