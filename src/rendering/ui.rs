//! # User Interface Elements
//!
//! Backend-independent layout for the status bar and the letter-keyed menu.

use crate::config::INVENTORY_WIDTH;
use crate::input::{menu_letter, Command, MENU_KEYS};
use crate::{wrap_text, TombsError, TombsResult};

/// Header shown above the inventory list.
pub const INVENTORY_HEADER: &str =
    "Press the key next to an item to use it, or any other to cancel.";

/// Placeholder line for an empty inventory.
pub const EMPTY_INVENTORY: &str = "Inventory is empty.";

/// Number of filled cells for a bar showing `value` out of `maximum`.
///
/// # Examples
///
/// ```
/// use tombs::bar_fill;
///
/// assert_eq!(bar_fill(15, 30, 20), 10);
/// assert_eq!(bar_fill(0, 30, 20), 0);
/// ```
pub fn bar_fill(value: i32, maximum: i32, total_width: i32) -> i32 {
    if maximum <= 0 {
        return 0;
    }
    let fill = (value as f64 / maximum as f64 * total_width as f64) as i32;
    fill.clamp(0, total_width)
}

/// A modal list of options selected with the letters `a` to `z`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    header: Vec<String>,
    options: Vec<String>,
    width: usize,
    selectable: bool,
}

impl Menu {
    /// Lays out a menu, wrapping the header to `width` columns.
    ///
    /// More options than there are letters is a programming error and
    /// fails with `InvalidState`.
    pub fn new(header: &str, options: Vec<String>, width: usize) -> TombsResult<Self> {
        if options.len() > MENU_KEYS {
            return Err(TombsError::InvalidState(format!(
                "Cannot have a menu with {} options",
                options.len()
            )));
        }
        let header = if header.is_empty() {
            Vec::new()
        } else {
            wrap_text(header, width)
        };
        Ok(Self {
            header,
            options,
            width,
            selectable: true,
        })
    }

    /// The inventory menu for the given item names.
    pub fn inventory(names: Vec<String>) -> TombsResult<Self> {
        if names.is_empty() {
            let mut menu = Self::new(
                INVENTORY_HEADER,
                vec![EMPTY_INVENTORY.to_string()],
                INVENTORY_WIDTH as usize,
            )?;
            menu.selectable = false;
            return Ok(menu);
        }
        Self::new(INVENTORY_HEADER, names, INVENTORY_WIDTH as usize)
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Total height in rows: header, then one row per option.
    pub fn height(&self) -> usize {
        self.header.len() + self.options.len()
    }

    /// Option rows as displayed, e.g. `(a) Healing Potion`.
    pub fn option_lines(&self) -> Vec<String> {
        self.options
            .iter()
            .enumerate()
            .filter_map(|(i, option)| menu_letter(i).map(|letter| format!("({}) {}", letter, option)))
            .collect()
    }

    /// The option index chosen by a menu command, if it names a real option.
    pub fn selection(&self, command: Command) -> Option<usize> {
        match command {
            Command::UseItem(index) if self.selectable && index < self.options.len() => Some(index),
            _ => None,
        }
    }
}
