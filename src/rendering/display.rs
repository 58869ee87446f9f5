//! # Display Management
//!
//! Draws the game as a grid of character cells using macroquad.
//!
//! The window is treated as a `SCREEN_WIDTH x SCREEN_HEIGHT` console: the
//! map occupies the top rows and the status panel the bottom
//! `PANEL_HEIGHT` rows.

use crate::config::{
    BAR_WIDTH, MAP_HEIGHT, MSG_X, PANEL_HEIGHT, PANEL_Y, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::rendering::{bar_fill, Menu};
use crate::{GameState, Position, Rgb};
use macroquad::prelude::*;

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
    }
}

/// Background color of a map tile for its visibility state, or `None` for
/// tiles never seen.
pub fn tile_color(visible: bool, explored: bool, wall: bool) -> Option<Rgb> {
    match (visible, explored, wall) {
        (true, _, true) => Some(Rgb::LIGHT_WALL),
        (true, _, false) => Some(Rgb::LIGHT_GROUND),
        (false, true, true) => Some(Rgb::DARK_WALL),
        (false, true, false) => Some(Rgb::DARK_GROUND),
        (false, false, _) => None,
    }
}

/// Macroquad display manager for the game.
#[derive(Debug, Clone)]
pub struct MacroquadDisplay {
    /// Cell width in pixels
    pub cell_width: f32,
    /// Cell height in pixels
    pub cell_height: f32,
}

impl Default for MacroquadDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl MacroquadDisplay {
    /// Creates a display sized to the current window.
    pub fn new() -> Self {
        let mut display = Self {
            cell_width: 1.0,
            cell_height: 1.0,
        };
        display.update_layout();
        display
    }

    /// Recomputes the cell size after the window was resized.
    pub fn update_layout(&mut self) {
        self.cell_width = screen_width() / SCREEN_WIDTH as f32;
        self.cell_height = screen_height() / SCREEN_HEIGHT as f32;
    }

    /// Renders the map, the entities in view and the status panel.
    pub fn render_game(&self, game_state: &GameState, mouse_tile: Position) {
        clear_background(BLACK);
        self.render_map(game_state);
        self.render_entities(game_state);
        self.render_panel(game_state, mouse_tile);
    }

    fn render_map(&self, game_state: &GameState) {
        let grid = &game_state.grid;
        for pos in grid.positions() {
            if pos.y >= MAP_HEIGHT {
                continue;
            }
            let Some(tile) = grid.get_tile(pos) else {
                continue;
            };
            let visible = game_state.is_in_fov(pos);
            if let Some(color) = tile_color(visible, tile.explored, tile.blocks_sight) {
                self.fill_cell(pos.x, pos.y, color);
            }
        }
    }

    /// Entities are only drawn while in view; the player is drawn last.
    fn render_entities(&self, game_state: &GameState) {
        for entity in game_state.draw_order() {
            if game_state.is_in_fov(entity.position) {
                self.put_char(entity.position.x, entity.position.y, entity.glyph, entity.color);
            }
        }
    }

    fn render_panel(&self, game_state: &GameState, mouse_tile: Position) {
        let top = PANEL_Y as f32 * self.cell_height;
        draw_rectangle(
            0.0,
            top,
            screen_width(),
            PANEL_HEIGHT as f32 * self.cell_height,
            BLACK,
        );

        for (i, message) in game_state.messages.iter().enumerate() {
            self.put_str(MSG_X, PANEL_Y + 1 + i as i32, &message.text, message.color);
        }

        let (hp, max_hp) = game_state.player_hp();
        self.render_bar(1, PANEL_Y + 1, "HP", hp, max_hp, Rgb::LIGHT_RED, Rgb::DARKER_RED);

        let names = game_state.names_under_mouse(mouse_tile);
        self.put_str(1, PANEL_Y, &names, Rgb::LIGHT_GRAY);
    }

    /// Status bar with a centered `NAME: value/maximum` caption.
    #[allow(clippy::too_many_arguments)]
    fn render_bar(
        &self,
        x: i32,
        y: i32,
        name: &str,
        value: i32,
        maximum: i32,
        bar_color: Rgb,
        back_color: Rgb,
    ) {
        for i in 0..BAR_WIDTH {
            self.fill_cell(x + i, y, back_color);
        }
        for i in 0..bar_fill(value, maximum, BAR_WIDTH) {
            self.fill_cell(x + i, y, bar_color);
        }
        let caption = format!("{}: {}/{}", name, value, maximum);
        let start = x + (BAR_WIDTH - caption.chars().count() as i32) / 2;
        self.put_str(start, y, &caption, Rgb::WHITE);
    }

    /// Draws a menu window centered on the screen over a dimmed backdrop.
    pub fn render_menu(&self, menu: &Menu) {
        let width = menu.width() as i32;
        let height = menu.height() as i32;
        let x = (SCREEN_WIDTH - width) / 2;
        let y = (SCREEN_HEIGHT - height) / 2;

        draw_rectangle(
            x as f32 * self.cell_width,
            y as f32 * self.cell_height,
            width as f32 * self.cell_width,
            height as f32 * self.cell_height,
            Color::new(0.0, 0.0, 0.0, 0.7),
        );

        let mut row = y;
        for line in menu.header() {
            self.put_str(x, row, line, Rgb::WHITE);
            row += 1;
        }
        for line in menu.option_lines() {
            self.put_str(x, row, &line, Rgb::WHITE);
            row += 1;
        }
    }

    fn fill_cell(&self, x: i32, y: i32, color: Rgb) {
        draw_rectangle(
            x as f32 * self.cell_width,
            y as f32 * self.cell_height,
            self.cell_width,
            self.cell_height,
            color.into(),
        );
    }

    fn put_char(&self, x: i32, y: i32, glyph: char, color: Rgb) {
        let mut buffer = [0u8; 4];
        let text: &str = glyph.encode_utf8(&mut buffer);
        let font_size = self.cell_height * 1.1;
        let dims = measure_text(text, None, font_size as u16, 1.0);
        let left = x as f32 * self.cell_width + (self.cell_width - dims.width) / 2.0;
        let baseline = y as f32 * self.cell_height + self.cell_height * 0.8;
        draw_text(text, left, baseline, font_size, color.into());
    }

    fn put_str(&self, x: i32, y: i32, text: &str, color: Rgb) {
        for (i, glyph) in text.chars().enumerate() {
            let column = x + i as i32;
            if column >= SCREEN_WIDTH {
                break;
            }
            if glyph != ' ' {
                self.put_char(column, y, glyph, color);
            }
        }
    }
}
