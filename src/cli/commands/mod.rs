//! CLI command implementations

use std::path::Path;

use anyhow::{Context, Result};

use crate::maze::Grid;

pub mod solve;
pub mod train;

/// Load a maze grid from a file and validate its start/goal cells.
pub(crate) fn read_grid(path: &Path) -> Result<Grid> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read maze file {}", path.display()))?;
    let grid = Grid::parse(&text)?;
    grid.validate()?;
    Ok(grid)
}
