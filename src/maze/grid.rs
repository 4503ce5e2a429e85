//! Grid representation: cell symbols, parsing, and validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Position;

/// A single cell symbol in a maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Start,
    Goal,
    Wall,
    Empty,
}

impl Cell {
    /// Convert the cell to its character representation.
    pub const fn to_char(self) -> char {
        match self {
            Cell::Start => 'S',
            Cell::Goal => 'G',
            Cell::Wall => '#',
            Cell::Empty => '.',
        }
    }

    /// Parse a cell from a character, returning `None` for unknown characters.
    ///
    /// Space parses as an empty cell so padded maze files stay readable.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            'S' | 's' => Some(Cell::Start),
            'G' | 'g' => Some(Cell::Goal),
            '#' => Some(Cell::Wall),
            '.' | ' ' => Some(Cell::Empty),
            _ => None,
        }
    }
}

/// A rectangular maze grid.
///
/// Construction enforces rectangularity, so every downstream query can assume
/// equal-length rows. The cell layout is immutable after construction; a
/// training run borrows the grid and never mutates it.
///
/// # Examples
///
/// ```
/// use qmaze::maze::{Cell, Grid};
///
/// let grid = Grid::parse("S.G\n.#.\n...").unwrap();
/// assert_eq!(grid.rows(), 3);
/// assert_eq!(grid.cols(), 3);
/// assert_eq!(grid.get(1, 1), Some(Cell::Wall));
/// assert!(grid.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGrid`] if there are no rows or no columns, and
    /// [`Error::RaggedRow`] if any row differs in length from the first.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(Error::EmptyGrid);
        }
        let cols = rows[0].len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(Error::RaggedRow {
                    row,
                    expected: cols,
                    got: cells.len(),
                });
            }
        }
        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * cols);
        for row in rows {
            cells.extend(row);
        }
        Ok(Grid {
            cells,
            rows: row_count,
            cols,
        })
    }

    /// Parse a grid from maze text, one row per line.
    ///
    /// Lines are right-trimmed (so CRLF files work) and blank lines are
    /// skipped. Interior spaces parse as empty cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCellCharacter`] with the offending line and
    /// column, plus the structural errors of [`Grid::from_rows`].
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (line_no, raw) in text.lines().enumerate() {
            let line = raw.trim_end();
            if line.is_empty() {
                continue;
            }
            let mut cells = Vec::with_capacity(line.len());
            for (col, character) in line.chars().enumerate() {
                let cell =
                    Cell::from_char(character).ok_or(Error::InvalidCellCharacter {
                        character,
                        row: line_no,
                        col,
                    })?;
                cells.push(cell);
            }
            rows.push(cells);
        }
        Self::from_rows(rows)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at (row, col), or `None` out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Iterate over all cells with their positions, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (Position::new(i / self.cols, i % self.cols), cell))
    }

    fn find(&self, target: Cell) -> Option<Position> {
        self.iter()
            .find(|&(_, cell)| cell == target)
            .map(|(pos, _)| pos)
    }

    fn count(&self, target: Cell) -> usize {
        self.cells.iter().filter(|&&cell| cell == target).count()
    }

    /// Position of the start cell, if any (first in row-major order).
    pub fn find_start(&self) -> Option<Position> {
        self.find(Cell::Start)
    }

    /// Position of the goal cell, if any (first in row-major order).
    pub fn find_goal(&self) -> Option<Position> {
        self.find(Cell::Goal)
    }

    /// Check the single-start/single-goal precondition for training.
    ///
    /// The engine itself only requires a start cell; this is the stricter
    /// check callers run before handing a grid to training.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingStart`], [`Error::MultipleStarts`],
    /// [`Error::MissingGoal`], or [`Error::MultipleGoals`].
    pub fn validate(&self) -> Result<()> {
        let starts = self.count(Cell::Start);
        if starts == 0 {
            return Err(Error::MissingStart);
        }
        if starts > 1 {
            return Err(Error::MultipleStarts { count: starts });
        }
        let goals = self.count(Cell::Goal);
        if goals == 0 {
            return Err(Error::MissingGoal);
        }
        if goals > 1 {
            return Err(Error::MultipleGoals { count: goals });
        }
        Ok(())
    }

    /// Render each row as a contiguous string of cell characters.
    pub fn render_rows(&self) -> Vec<String> {
        (0..self.rows)
            .map(|r| {
                (0..self.cols)
                    .map(|c| self.cells[r * self.cols + c].to_char())
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.render_rows().iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_char_round_trip() {
        for cell in [Cell::Start, Cell::Goal, Cell::Wall, Cell::Empty] {
            assert_eq!(Cell::from_char(cell.to_char()), Some(cell));
        }
        assert_eq!(Cell::from_char(' '), Some(Cell::Empty));
        assert_eq!(Cell::from_char('s'), Some(Cell::Start));
        assert_eq!(Cell::from_char('?'), None);
    }

    #[test]
    fn test_parse_simple_grid() {
        let grid = Grid::parse("S.G\n.#.\n...").unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(0, 0), Some(Cell::Start));
        assert_eq!(grid.get(0, 2), Some(Cell::Goal));
        assert_eq!(grid.get(1, 1), Some(Cell::Wall));
        assert_eq!(grid.get(2, 2), Some(Cell::Empty));
    }

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let grid = Grid::parse("\nS.G\r\n\n").unwrap();
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.cols(), 3);
    }

    #[test]
    fn test_parse_rejects_unknown_character() {
        let err = Grid::parse("S.G\n.X.").unwrap_err();
        match err {
            Error::InvalidCellCharacter {
                character,
                row,
                col,
            } => {
                assert_eq!(character, 'X');
                assert_eq!(row, 1);
                assert_eq!(col, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_rows_rejects_ragged_and_empty() {
        assert!(matches!(Grid::from_rows(Vec::new()), Err(Error::EmptyGrid)));
        assert!(matches!(
            Grid::from_rows(vec![Vec::new()]),
            Err(Error::EmptyGrid)
        ));
        let err = Grid::from_rows(vec![
            vec![Cell::Start, Cell::Empty],
            vec![Cell::Empty],
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedRow {
                row: 1,
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::parse("S.G").unwrap();
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.get(1, 0), None);
    }

    #[test]
    fn test_find_start_and_goal() {
        let grid = Grid::parse("..#\n.S.\nG..").unwrap();
        assert_eq!(grid.find_start(), Some(Position::new(1, 1)));
        assert_eq!(grid.find_goal(), Some(Position::new(2, 0)));

        let no_start = Grid::parse("...\n..G").unwrap();
        assert_eq!(no_start.find_start(), None);
    }

    #[test]
    fn test_validate_counts() {
        assert!(Grid::parse("S.G").unwrap().validate().is_ok());
        assert!(matches!(
            Grid::parse("..G").unwrap().validate(),
            Err(Error::MissingStart)
        ));
        assert!(matches!(
            Grid::parse("S..").unwrap().validate(),
            Err(Error::MissingGoal)
        ));
        assert!(matches!(
            Grid::parse("SSG").unwrap().validate(),
            Err(Error::MultipleStarts { count: 2 })
        ));
        assert!(matches!(
            Grid::parse("SGG").unwrap().validate(),
            Err(Error::MultipleGoals { count: 2 })
        ));
    }

    #[test]
    fn test_display_round_trip() {
        let text = "S.G\n.#.\n...";
        let grid = Grid::parse(text).unwrap();
        assert_eq!(grid.to_string(), text);
        assert_eq!(Grid::parse(&grid.to_string()).unwrap(), grid);
    }
}
