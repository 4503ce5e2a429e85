//! Output formatting for CLI

use std::collections::HashSet;

use crate::{
    maze::{Cell, Grid},
    types::Position,
};

/// Render the maze with `path` overlaid as `*` marks.
///
/// Start, goal, and wall cells keep their letters; only open cells on the
/// path are replaced.
pub fn render_with_path(grid: &Grid, path: &[Position]) -> Vec<String> {
    let on_path: HashSet<Position> = path.iter().copied().collect();
    (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| match grid.get(row, col) {
                    Some(Cell::Empty) if on_path.contains(&Position::new(row, col)) => '*',
                    Some(cell) => cell.to_char(),
                    None => ' ',
                })
                .collect()
        })
        .collect()
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_path_marks_open_cells_only() {
        let grid = Grid::parse("S.G\n.#.\n...").unwrap();
        let path = vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)];
        let rendered = render_with_path(&grid, &path);
        assert_eq!(rendered, vec!["S*G", ".#.", "..."]);
    }

    #[test]
    fn test_render_with_empty_path() {
        let grid = Grid::parse("S.G").unwrap();
        assert_eq!(render_with_path(&grid, &[]), vec!["S.G"]);
    }
}
