//! # Game Mathematics
//!
//! Small numeric and text helpers shared by the simulation.

use crate::Position;

/// One-tile step from `from` towards `to`.
///
/// The direction vector is normalized and each component rounded, so the
/// step is one of the eight neighbours (or `(0, 0)` when the points match).
///
/// # Examples
///
/// ```
/// use tombs::{step_towards, Position};
///
/// assert_eq!(step_towards(Position::new(0, 0), Position::new(5, 5)), (1, 1));
/// assert_eq!(step_towards(Position::new(8, 2), Position::new(2, 3)), (-1, 0));
/// ```
pub fn step_towards(from: Position, to: Position) -> (i32, i32) {
    let dx = (to.x - from.x) as f64;
    let dy = (to.y - from.y) as f64;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance == 0.0 {
        return (0, 0);
    }
    ((dx / distance).round() as i32, (dy / distance).round() as i32)
}

/// Uppercases the first character of a string.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
