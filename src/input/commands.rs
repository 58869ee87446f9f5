//! # Command Definitions
//!
//! Abstract commands produced by the input layer. A command either maps to a
//! [`PlayerAction`] for the simulation or only affects the presentation
//! (menus, fullscreen).

use crate::PlayerAction;

/// Number of letter keys available for menu selection.
pub const MENU_KEYS: usize = 26;

/// Everything the player can ask for from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    PickUp,
    OpenInventory,
    /// Use the inventory item in the given slot
    UseItem(usize),
    /// Close a menu without choosing
    Cancel,
    Quit,
    ToggleFullscreen,
}

impl Command {
    /// The simulation action for this command, if it has one.
    ///
    /// # Examples
    ///
    /// ```
    /// use tombs::{Command, PlayerAction};
    ///
    /// assert_eq!(Command::MoveLeft.to_action(), Some(PlayerAction::Move { dx: -1, dy: 0 }));
    /// assert_eq!(Command::OpenInventory.to_action(), None);
    /// ```
    pub fn to_action(self) -> Option<PlayerAction> {
        match self {
            Command::MoveUp => Some(PlayerAction::Move { dx: 0, dy: -1 }),
            Command::MoveDown => Some(PlayerAction::Move { dx: 0, dy: 1 }),
            Command::MoveLeft => Some(PlayerAction::Move { dx: -1, dy: 0 }),
            Command::MoveRight => Some(PlayerAction::Move { dx: 1, dy: 0 }),
            Command::PickUp => Some(PlayerAction::PickUp),
            Command::UseItem(slot) => Some(PlayerAction::UseItem(slot)),
            Command::Quit => Some(PlayerAction::Quit),
            Command::OpenInventory | Command::Cancel | Command::ToggleFullscreen => None,
        }
    }

    /// Interprets a key typed while a menu is open.
    ///
    /// Letters `a` to `z` select the matching option; any other key closes
    /// the menu.
    pub fn from_menu_key(key: char) -> Self {
        let key = key.to_ascii_lowercase();
        if key.is_ascii_lowercase() {
            Command::UseItem(key as usize - 'a' as usize)
        } else {
            Command::Cancel
        }
    }
}

impl Command {
    /// Interprets one frame of menu input.
    ///
    /// `typed` holds the characters queued since the last poll. They only
    /// count when a key went down this frame; otherwise they are leftovers
    /// from map movement and yield nothing. The last character typed wins,
    /// and a key press without a character closes the menu.
    ///
    /// # Examples
    ///
    /// ```
    /// use tombs::Command;
    ///
    /// assert_eq!(Command::from_menu_input(false, &['a']), None);
    /// assert_eq!(Command::from_menu_input(true, &['b']), Some(Command::UseItem(1)));
    /// assert_eq!(Command::from_menu_input(true, &[]), Some(Command::Cancel));
    /// ```
    pub fn from_menu_input(key_pressed: bool, typed: &[char]) -> Option<Self> {
        if !key_pressed {
            return None;
        }
        Some(typed.last().map_or(Command::Cancel, |&key| Command::from_menu_key(key)))
    }
}

/// Letter shown next to a menu option.
pub fn menu_letter(index: usize) -> Option<char> {
    (index < MENU_KEYS).then(|| (b'a' + index as u8) as char)
}
