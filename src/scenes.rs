//! # Scene Management System
//!
//! Owns the game state, the display and the input handler, and runs the
//! frame loop. Each frame polls one command, applies it, then redraws;
//! `next_frame` paces the loop to the display refresh.

use crate::{
    ActionOutcome, Command, GameState, InputHandler, MacroquadDisplay, Menu, TombsResult,
};
use log::{debug, info};
use macroquad::prelude::*;

/// Represents the current scene in the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneType {
    /// Exploring the map
    Playing,
    /// The inventory menu is open over the map
    Inventory(Menu),
}

/// The main scene manager that coordinates all game scenes
pub struct SceneManager {
    current_scene: SceneType,
    game_state: GameState,
    display: MacroquadDisplay,
    input_handler: InputHandler,
    fullscreen: bool,
}

impl SceneManager {
    /// Creates a new scene manager for a freshly generated game.
    pub fn new(game_state: GameState, input_handler: InputHandler) -> Self {
        Self {
            current_scene: SceneType::Playing,
            game_state,
            display: MacroquadDisplay::new(),
            input_handler,
            fullscreen: false,
        }
    }

    /// Runs the main scene loop until the game exits
    pub async fn run(&mut self) -> TombsResult<()> {
        loop {
            self.display.update_layout();

            let exit = match self.current_scene.clone() {
                SceneType::Playing => self.update_playing_scene()?,
                SceneType::Inventory(menu) => self.update_inventory_scene(&menu)?,
            };
            if exit {
                break;
            }

            self.render();
            next_frame().await;
        }
        info!("Game loop ended after {} turns", self.game_state.turn_number);
        Ok(())
    }

    /// Updates the playing scene, returns true if exit is requested
    fn update_playing_scene(&mut self) -> TombsResult<bool> {
        let command = self.input_handler.poll_command();
        self.input_handler.discard_typed_chars();
        let Some(command) = command else {
            return Ok(false);
        };
        debug!("Command {:?}", command);

        match command {
            Command::ToggleFullscreen => {
                self.toggle_fullscreen();
                Ok(false)
            }
            Command::OpenInventory => {
                if self.game_state.is_playing() {
                    let menu = Menu::inventory(self.game_state.inventory_names())?;
                    self.current_scene = SceneType::Inventory(menu);
                }
                Ok(false)
            }
            _ => self.apply(command),
        }
    }

    /// Updates the inventory scene; any key closes the menu.
    fn update_inventory_scene(&mut self, menu: &Menu) -> TombsResult<bool> {
        let Some(command) = self.input_handler.poll_menu_command() else {
            return Ok(false);
        };
        self.current_scene = SceneType::Playing;

        match menu.selection(command) {
            Some(slot) => self.apply(Command::UseItem(slot)),
            None => Ok(false),
        }
    }

    /// Hands a command's action to the simulation, returns true on exit.
    fn apply(&mut self, command: Command) -> TombsResult<bool> {
        let Some(action) = command.to_action() else {
            return Ok(false);
        };
        let outcome = self.game_state.handle_action(action)?;
        Ok(outcome == ActionOutcome::Exit)
    }

    fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        set_fullscreen(self.fullscreen);
    }

    fn render(&self) {
        let mouse_tile = self
            .input_handler
            .mouse_tile(self.display.cell_width, self.display.cell_height);
        self.display.render_game(&self.game_state, mouse_tile);
        if let SceneType::Inventory(menu) = &self.current_scene {
            self.display.render_menu(menu);
        }
    }
}
