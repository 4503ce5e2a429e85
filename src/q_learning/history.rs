//! Per-episode training records and run summaries.

use serde::{Deserialize, Serialize};

use crate::q_learning::q_table::QTable;
use crate::types::Position;

/// Kind of anomaly recorded during an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeErrorKind {
    /// No valid action from the current state; the episode ends here.
    Blocked,
    /// A selected move left the grid. Unreachable through valid-action
    /// filtering; recorded as an invariant guard and the episode ends.
    OutOfBounds,
    /// A selected move entered a wall cell. Same guard; the episode
    /// continues.
    HitWall,
}

/// An anomaly recorded at a specific step of an episode.
///
/// These are diagnostics, not failures: training absorbs them into the
/// episode record and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeError {
    /// Step index within the episode at which the anomaly fired.
    pub step: usize,
    pub kind: EpisodeErrorKind,
    /// State the agent occupied when the anomaly was recorded.
    pub position: Position,
}

impl EpisodeError {
    pub fn new(step: usize, kind: EpisodeErrorKind, position: Position) -> Self {
        Self {
            step,
            kind,
            position,
        }
    }
}

/// Everything recorded about a single training episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// Zero-based episode index.
    pub episode: usize,
    /// Sum of signed step rewards over the episode.
    pub total_reward: f64,
    /// Moves completed before the episode ended.
    pub steps: usize,
    /// Every state occupied, in order, starting with the start cell.
    pub visited: Vec<Position>,
    /// Greedy path extracted from the value table as it stood after this
    /// episode.
    pub best_path: Vec<Position>,
    /// Anomalies recorded during the episode.
    pub errors: Vec<EpisodeError>,
    /// Number of exploration (random) action selections.
    pub explored: usize,
    /// Whether the episode ended on the goal cell.
    pub reached_goal: bool,
}

/// Result of a full training run with history.
///
/// Holds the ordered episode records, the final greedy path, and the trained
/// value table for inspection. Produced by
/// [`QLearner::train_with_history`](crate::q_learning::QLearner::train_with_history).
#[derive(Debug, Clone)]
pub struct TrainingRun {
    /// One record per episode, in episode order.
    pub episodes: Vec<EpisodeRecord>,
    /// Greedy path from the trained table, capped at the optimal-path limit.
    pub final_path: Vec<Position>,
    /// The trained value table.
    pub q_table: QTable,
}

impl TrainingRun {
    /// Aggregate statistics over the run's episode records.
    pub fn summary(&self) -> TrainingSummary {
        TrainingSummary::from_records(&self.episodes)
    }
}

/// Aggregate statistics over a training history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Episodes run.
    pub episodes: usize,
    /// Episodes that ended on the goal cell.
    pub reached_goal: usize,
    /// Fraction of episodes that reached the goal.
    pub success_rate: f64,
    /// Index of the first episode that reached the goal.
    pub first_success: Option<usize>,
    /// Fewest steps among goal-reaching episodes.
    pub best_steps: Option<usize>,
    /// Cumulative reward of the last episode.
    pub final_reward: Option<f64>,
    /// Exploration actions taken across all episodes.
    pub total_explored: usize,
}

impl TrainingSummary {
    /// Compute summary statistics from episode records.
    pub fn from_records(records: &[EpisodeRecord]) -> Self {
        let episodes = records.len();
        let reached_goal = records.iter().filter(|r| r.reached_goal).count();
        let success_rate = if episodes == 0 {
            0.0
        } else {
            reached_goal as f64 / episodes as f64
        };
        Self {
            episodes,
            reached_goal,
            success_rate,
            first_success: records.iter().position(|r| r.reached_goal),
            best_steps: records
                .iter()
                .filter(|r| r.reached_goal)
                .map(|r| r.steps)
                .min(),
            final_reward: records.last().map(|r| r.total_reward),
            total_explored: records.iter().map(|r| r.explored).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(episode: usize, steps: usize, reached_goal: bool, explored: usize) -> EpisodeRecord {
        EpisodeRecord {
            episode,
            total_reward: if reached_goal {
                100.0 - steps as f64
            } else {
                -(steps as f64)
            },
            steps,
            visited: vec![Position::new(0, 0)],
            best_path: vec![Position::new(0, 0)],
            errors: Vec::new(),
            explored,
            reached_goal,
        }
    }

    #[test]
    fn test_summary_from_records() {
        let records = vec![
            record(0, 100, false, 12),
            record(1, 9, true, 3),
            record(2, 5, true, 1),
        ];
        let summary = TrainingSummary::from_records(&records);
        assert_eq!(summary.episodes, 3);
        assert_eq!(summary.reached_goal, 2);
        assert!((summary.success_rate - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.first_success, Some(1));
        assert_eq!(summary.best_steps, Some(5));
        assert_eq!(summary.final_reward, Some(95.0));
        assert_eq!(summary.total_explored, 16);
    }

    #[test]
    fn test_summary_empty_history() {
        let summary = TrainingSummary::from_records(&[]);
        assert_eq!(summary.episodes, 0);
        assert_eq!(summary.success_rate, 0.0);
        assert_eq!(summary.first_success, None);
        assert_eq!(summary.best_steps, None);
        assert_eq!(summary.final_reward, None);
    }

    #[test]
    fn test_error_kind_serialized_names() {
        let json = serde_json::to_string(&EpisodeErrorKind::OutOfBounds).unwrap();
        assert_eq!(json, "\"out_of_bounds\"");
        let json = serde_json::to_string(&EpisodeErrorKind::Blocked).unwrap();
        assert_eq!(json, "\"blocked\"");
        let json = serde_json::to_string(&EpisodeErrorKind::HitWall).unwrap();
        assert_eq!(json, "\"hit_wall\"");
    }

    #[test]
    fn test_episode_record_position_serialization() {
        let error = EpisodeError::new(4, EpisodeErrorKind::Blocked, Position::new(2, 1));
        let json = serde_json::to_value(error).unwrap();
        assert_eq!(json["step"], 4);
        assert_eq!(json["kind"], "blocked");
        assert_eq!(json["position"]["row"], 2);
        assert_eq!(json["position"]["col"], 1);
    }
}
