//! Maze domain: grid cells, parsing, and the query layer used by training.
//!
//! A [`Grid`] owns the cell layout; a [`Maze`] borrows one and answers the
//! geometry and semantics queries the learner needs. All queries take signed
//! coordinates and treat out-of-bounds as a wall, which lets the episode loop
//! probe any move destination without bounds checks.
//!
//! # Usage
//!
//! ```
//! use qmaze::maze::{Grid, Maze};
//!
//! let grid = Grid::parse("S.G\n.#.").unwrap();
//! let maze = Maze::new(&grid);
//!
//! assert!(maze.is_wall(1, 1));
//! assert!(maze.is_wall(-1, 0)); // out of bounds counts as a wall
//! assert!(maze.is_goal(0, 2));
//! assert_eq!(maze.reward(0, 2), 100.0);
//! ```

pub mod grid;

pub use grid::{Cell, Grid};

/// Rewards assigned on a transition into a cell.
pub mod reward {
    /// Reaching the goal cell.
    pub const GOAL: f64 = 100.0;

    /// Hitting a wall or stepping out of bounds.
    pub const WALL: f64 = -10.0;

    /// Any other move.
    pub const STEP: f64 = -1.0;
}

/// Read-only query layer over a [`Grid`].
///
/// Stateless beyond the grid reference; cheap to copy and construct.
#[derive(Debug, Clone, Copy)]
pub struct Maze<'g> {
    grid: &'g Grid,
}

impl<'g> Maze<'g> {
    /// Wrap a grid in the query layer.
    pub fn new(grid: &'g Grid) -> Self {
        Maze { grid }
    }

    /// The underlying grid.
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Number of rows in the underlying grid.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns in the underlying grid.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.grid.get(row as usize, col as usize)
    }

    /// True if (row, col) is outside the grid or a wall cell.
    ///
    /// Never panics; out-of-bounds coordinates count as walls.
    pub fn is_wall(&self, row: isize, col: isize) -> bool {
        match self.cell_at(row, col) {
            Some(cell) => cell == Cell::Wall,
            None => true,
        }
    }

    /// True if (row, col) is in bounds and the goal cell.
    pub fn is_goal(&self, row: isize, col: isize) -> bool {
        matches!(self.cell_at(row, col), Some(Cell::Goal))
    }

    /// True if (row, col) is a cell the agent may occupy: in bounds and not a
    /// wall.
    pub fn is_valid(&self, row: isize, col: isize) -> bool {
        matches!(self.cell_at(row, col), Some(cell) if cell != Cell::Wall)
    }

    /// Reward for a transition into (row, col).
    ///
    /// [`reward::GOAL`] at the goal, [`reward::WALL`] at walls and out of
    /// bounds, [`reward::STEP`] everywhere else. Undiscounted; discounting
    /// happens in the value update.
    pub fn reward(&self, row: isize, col: isize) -> f64 {
        if self.is_goal(row, col) {
            reward::GOAL
        } else if self.is_wall(row, col) {
            reward::WALL
        } else {
            reward::STEP
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        Grid::parse("S.G\n.#.\n...").unwrap()
    }

    #[test]
    fn test_is_wall() {
        let grid = sample_grid();
        let maze = Maze::new(&grid);
        assert!(maze.is_wall(1, 1));
        assert!(!maze.is_wall(0, 0));
        assert!(!maze.is_wall(0, 2));
        assert!(!maze.is_wall(2, 2));
    }

    #[test]
    fn test_out_of_bounds_is_wall() {
        let grid = sample_grid();
        let maze = Maze::new(&grid);
        assert!(maze.is_wall(-1, 0));
        assert!(maze.is_wall(0, -1));
        assert!(maze.is_wall(3, 0));
        assert!(maze.is_wall(0, 3));
        assert!(maze.is_wall(-5, -5));
    }

    #[test]
    fn test_is_goal() {
        let grid = sample_grid();
        let maze = Maze::new(&grid);
        assert!(maze.is_goal(0, 2));
        assert!(!maze.is_goal(0, 0));
        assert!(!maze.is_goal(1, 1));
        assert!(!maze.is_goal(-1, 2));
        assert!(!maze.is_goal(0, 3));
    }

    #[test]
    fn test_is_valid() {
        let grid = sample_grid();
        let maze = Maze::new(&grid);
        assert!(maze.is_valid(0, 0));
        assert!(maze.is_valid(0, 2));
        assert!(maze.is_valid(2, 0));
        assert!(!maze.is_valid(1, 1));
        assert!(!maze.is_valid(-1, 0));
        assert!(!maze.is_valid(0, 3));
    }

    #[test]
    fn test_reward_values() {
        let grid = sample_grid();
        let maze = Maze::new(&grid);
        assert_eq!(maze.reward(0, 2), 100.0);
        assert_eq!(maze.reward(1, 1), -10.0);
        assert_eq!(maze.reward(-1, 0), -10.0);
        assert_eq!(maze.reward(0, 3), -10.0);
        assert_eq!(maze.reward(0, 0), -1.0);
        assert_eq!(maze.reward(2, 2), -1.0);
    }
}
