//! Tabular Q-learning engine for maze solving.
//!
//! | Piece | Role |
//! |-------|------|
//! | [`QTable`] | Per-cell action values and the TD update |
//! | [`QLearner`] | ε-greedy policy, episode loop, path extraction |
//! | [`TrainConfig`] | Run hyperparameters (α, γ, ε, episodes, seed) |
//! | [`EpisodeRecord`] | Per-episode history, recorded on every run |
//!
//! Training is synchronous and self-contained: a run builds a fresh table,
//! executes the configured episodes, and hands back the entire history in one
//! payload. Concurrent runs need nothing more than independent learners.
//!
//! ## Usage Example
//!
//! ```
//! use qmaze::maze::Grid;
//! use qmaze::q_learning::{self, TrainConfig};
//! use qmaze::types::Position;
//!
//! let grid = Grid::parse("S..\n.#.\n..G").unwrap();
//! let config = TrainConfig::default().with_episodes(300).with_seed(1);
//! let run = q_learning::train_with_history(&grid, config).unwrap();
//!
//! assert_eq!(run.episodes.len(), 300);
//! assert_eq!(run.final_path.first(), Some(&Position::new(0, 0)));
//! ```

pub mod agent;
pub mod config;
pub mod history;
pub mod q_table;

// Public re-exports
pub use agent::{
    BEST_PATH_STEPS, MAX_EPISODE_STEPS, OPTIMAL_PATH_STEPS, QLearner, valid_actions,
};
pub use config::TrainConfig;
pub use history::{EpisodeError, EpisodeErrorKind, EpisodeRecord, TrainingRun, TrainingSummary};
pub use q_table::QTable;

use crate::{Result, maze::Grid, types::Position};

/// Train a fresh learner on `grid` and return the final greedy path.
///
/// Convenience wrapper over [`QLearner::solve`].
///
/// # Errors
///
/// Fails when the configuration is out of range or the grid has no start
/// cell.
pub fn solve(grid: &Grid, config: TrainConfig) -> Result<Vec<Position>> {
    let mut learner = QLearner::new(config)?;
    learner.solve(grid)
}

/// Train a fresh learner on `grid` and return the full history, the final
/// path, and the trained value table.
///
/// Convenience wrapper over [`QLearner::train_with_history`].
///
/// # Errors
///
/// Same failure modes as [`solve`].
pub fn train_with_history(grid: &Grid, config: TrainConfig) -> Result<TrainingRun> {
    let mut learner = QLearner::new(config)?;
    learner.train_with_history(grid)
}
