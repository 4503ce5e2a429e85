//! Tabular Q-learning maze solver
//!
//! This crate provides:
//! - ASCII grid maze parsing and validation
//! - A tabular Q-learning agent with ε-greedy action selection
//! - Per-episode training history with greedy-path snapshots
//! - Observers for progress reporting and JSONL episode streams
//! - JSON and CSV export of training results

pub mod cli;
pub mod error;
pub mod export;
pub mod maze;
pub mod observers;
pub mod q_learning;
pub mod types;

pub use error::{Error, Result};
pub use maze::{Cell, Grid, Maze};
pub use q_learning::{EpisodeRecord, QLearner, QTable, TrainConfig, TrainingRun, TrainingSummary};
pub use types::{Action, Position};
