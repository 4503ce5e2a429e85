//! Core position and action types shared across the crate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell coordinate on the maze grid, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Destination reached by taking `action` from this position, as signed
    /// coordinates.
    ///
    /// Moving up from row 0 yields a row of -1; maze queries treat any
    /// out-of-bounds coordinate as a wall, so callers can hand the result
    /// straight to them without a bounds check.
    pub fn step(self, action: Action) -> (isize, isize) {
        let (dr, dc) = action.delta();
        (self.row as isize + dr, self.col as isize + dc)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// One of the four movement directions.
///
/// The declaration order is fixed: greedy selection breaks ties in favor of
/// the earliest action in [`Action::ALL`], and per-state value arrays are
/// indexed by [`Action::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Number of actions; the length of a per-state value array.
    pub const COUNT: usize = 4;

    /// All actions in their fixed selection order.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// The (row delta, column delta) applied when taking this action.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }

    /// Index of this action within [`Action::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Action::Up => 0,
            Action::Down => 1,
            Action::Left => 2,
            Action::Right => 3,
        }
    }

    /// Lowercase name, matching the serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_order_and_deltas() {
        assert_eq!(
            Action::ALL,
            [Action::Up, Action::Down, Action::Left, Action::Right]
        );
        assert_eq!(Action::Up.delta(), (-1, 0));
        assert_eq!(Action::Down.delta(), (1, 0));
        assert_eq!(Action::Left.delta(), (0, -1));
        assert_eq!(Action::Right.delta(), (0, 1));
    }

    #[test]
    fn test_action_index_matches_all_ordering() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
        }
    }

    #[test]
    fn test_position_step() {
        let pos = Position::new(0, 0);
        assert_eq!(pos.step(Action::Up), (-1, 0));
        assert_eq!(pos.step(Action::Down), (1, 0));
        assert_eq!(pos.step(Action::Left), (0, -1));
        assert_eq!(pos.step(Action::Right), (0, 1));
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(Position::new(2, 3).to_string(), "2,3");
        assert_eq!(Action::Up.to_string(), "up");
        assert_eq!(Action::Right.to_string(), "right");
    }
}
