//! # Rendering Module
//!
//! Character-cell presentation built on macroquad. The simulation never
//! depends on this module; it only reads [`GameState`](crate::GameState).

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;
