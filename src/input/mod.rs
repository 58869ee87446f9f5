//! # Input Module
//!
//! Keyboard and mouse polling. Raw macroquad events are turned into
//! [`Command`]s here; nothing in this module touches the game state.

pub mod commands;

pub use commands::*;

use crate::Position;
use macroquad::prelude::*;

/// Polls macroquad for key presses and the mouse position.
#[derive(Debug, Clone, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use tombs::InputHandler;
    ///
    /// let input_handler = InputHandler::new();
    /// // Ready to process input
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Command for the key pressed this frame while exploring the map.
    pub fn poll_command(&self) -> Option<Command> {
        let alt = is_key_down(KeyCode::LeftAlt) || is_key_down(KeyCode::RightAlt);
        if alt && is_key_pressed(KeyCode::Enter) {
            return Some(Command::ToggleFullscreen);
        }
        if is_key_pressed(KeyCode::Escape) {
            return Some(Command::Quit);
        }

        if is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W) {
            return Some(Command::MoveUp);
        }
        if is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S) {
            return Some(Command::MoveDown);
        }
        if is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A) {
            return Some(Command::MoveLeft);
        }
        if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D) {
            return Some(Command::MoveRight);
        }

        if is_key_pressed(KeyCode::G) {
            return Some(Command::PickUp);
        }
        if is_key_pressed(KeyCode::I) {
            return Some(Command::OpenInventory);
        }

        None
    }

    /// Command for the key pressed this frame while a menu is open.
    ///
    /// A letter picks an option; any other key cancels. The typed character
    /// queue is emptied on every call.
    pub fn poll_menu_command(&self) -> Option<Command> {
        let typed: Vec<char> = std::iter::from_fn(get_char_pressed).collect();
        Command::from_menu_input(get_last_key_pressed().is_some(), &typed)
    }

    /// Drops typed characters queued by macroquad.
    ///
    /// Map mode reads key states only, so characters pile up in the queue
    /// until something drains it.
    pub fn discard_typed_chars(&self) {
        macroquad::input::clear_input_queue();
    }

    /// Map tile under the mouse pointer for the given cell size in pixels.
    pub fn mouse_tile(&self, cell_width: f32, cell_height: f32) -> Position {
        let (x, y) = mouse_position();
        pixel_to_tile(x, y, cell_width, cell_height)
    }
}

/// Converts a pixel coordinate to the character cell containing it.
pub fn pixel_to_tile(x: f32, y: f32, cell_width: f32, cell_height: f32) -> Position {
    if cell_width <= 0.0 || cell_height <= 0.0 {
        return Position::new(-1, -1);
    }
    Position::new(
        (x / cell_width).floor() as i32,
        (y / cell_height).floor() as i32,
    )
}
