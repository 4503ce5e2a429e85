//! CSV export of per-episode training history.

use std::path::Path;

use serde::Serialize;

use crate::{Result, q_learning::EpisodeRecord};

/// One CSV row per episode.
#[derive(Debug, Serialize)]
struct HistoryRow {
    episode: usize,
    total_reward: f64,
    steps: usize,
    explored: usize,
    reached_goal: bool,
    errors: usize,
    best_path_len: usize,
}

impl From<&EpisodeRecord> for HistoryRow {
    fn from(record: &EpisodeRecord) -> Self {
        Self {
            episode: record.episode,
            total_reward: record.total_reward,
            steps: record.steps,
            explored: record.explored,
            reached_goal: record.reached_goal,
            errors: record.errors.len(),
            best_path_len: record.best_path.len(),
        }
    }
}

/// Write one row per episode record to a CSV file at `path`, with a header.
///
/// The header is written even when `records` is empty.
///
/// # Errors
///
/// Returns CSV or IO errors from writing the file.
pub fn write_history_csv<P: AsRef<Path>>(path: P, records: &[EpisodeRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record([
        "episode",
        "total_reward",
        "steps",
        "explored",
        "reached_goal",
        "errors",
        "best_path_len",
    ])?;
    for record in records {
        writer.serialize(HistoryRow::from(record))?;
    }
    writer.flush()?;
    Ok(())
}
