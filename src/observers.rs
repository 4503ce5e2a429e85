//! Observer hooks for watching a training run.
//!
//! Observers are notified while training runs so side channels like progress
//! bars and episode traces can be attached without coupling the engine to an
//! output format. History recording never depends on them: the engine always
//! returns the full history itself.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Result, q_learning::EpisodeRecord};

/// Observer trait for monitoring training.
///
/// Methods are called in order: `on_training_start` once, `on_episode_end`
/// after every episode, `on_training_end` once. All methods default to
/// no-ops, so implementors override only what they need.
///
/// # Examples
///
/// ```
/// use qmaze::observers::TrainingObserver;
/// use qmaze::q_learning::EpisodeRecord;
///
/// struct EpisodeCounter {
///     episodes: usize,
/// }
///
/// impl TrainingObserver for EpisodeCounter {
///     fn on_episode_end(&mut self, _record: &EpisodeRecord) -> qmaze::Result<()> {
///         self.episodes += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait TrainingObserver: Send {
    /// Called once before the first episode.
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each episode with its finished record.
    fn on_episode_end(&mut self, _record: &EpisodeRecord) -> Result<()> {
        Ok(())
    }

    /// Called once after the last episode. Use this to finalize output.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Progress bar observer showing episode progress and the running solve
/// count.
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    solved: usize,
}

impl ProgressObserver {
    /// Create a new progress observer.
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            solved: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainingObserver for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, record: &EpisodeRecord) -> Result<()> {
        if record.reached_goal {
            self.solved += 1;
        }
        if let Some(pb) = &self.progress_bar {
            pb.set_position(record.episode as u64 + 1);
            pb.set_message(format!("solved: {}", self.solved));
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("solved: {}", self.solved));
        }
        Ok(())
    }
}

/// Streams each episode record as one JSON line, for replay and debugging.
pub struct JsonlObserver {
    writer: BufWriter<File>,
}

impl JsonlObserver {
    /// Create a JSONL observer writing to `path`.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be created.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl TrainingObserver for JsonlObserver {
    fn on_episode_end(&mut self, record: &EpisodeRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        writeln!(&mut self.writer)?;
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    fn record(episode: usize, reached_goal: bool) -> EpisodeRecord {
        EpisodeRecord {
            episode,
            total_reward: if reached_goal { 99.0 } else { -100.0 },
            steps: 1,
            visited: vec![Position::new(0, 0), Position::new(0, 1)],
            best_path: vec![Position::new(0, 0)],
            errors: Vec::new(),
            explored: 0,
            reached_goal,
        }
    }

    #[test]
    fn test_progress_observer_counts_solves() {
        let mut observer = ProgressObserver::new();
        observer.on_training_start(3).unwrap();
        observer.on_episode_end(&record(0, false)).unwrap();
        observer.on_episode_end(&record(1, true)).unwrap();
        observer.on_episode_end(&record(2, true)).unwrap();
        observer.on_training_end().unwrap();
        assert_eq!(observer.solved, 2);
    }

    #[test]
    fn test_progress_observer_without_start_is_harmless() {
        let mut observer = ProgressObserver::new();
        observer.on_episode_end(&record(0, true)).unwrap();
        assert_eq!(observer.solved, 1);
    }

    #[test]
    fn test_jsonl_observer_writes_one_line_per_episode() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut observer = JsonlObserver::new(file.path()).unwrap();
        observer.on_training_start(2).unwrap();
        observer.on_episode_end(&record(0, false)).unwrap();
        observer.on_episode_end(&record(1, true)).unwrap();
        observer.on_training_end().unwrap();
        drop(observer);

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: EpisodeRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.episode, 0);
        assert!(!first.reached_goal);
        let second: EpisodeRecord = serde_json::from_str(lines[1]).unwrap();
        assert!(second.reached_goal);
    }
}
