//! JSON report payloads for solve and training runs.
//!
//! Path point lists serialize as `"row,col"` strings. Positions inside
//! episode records keep their structured `{row, col}` form. The value table
//! serializes as a map keyed by `"row,col"`, sorted for stable output.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::{
    Result,
    maze::Grid,
    q_learning::{EpisodeRecord, QTable, TrainConfig, TrainingRun, TrainingSummary},
    types::{Action, Position},
};

/// Render a path as `"row,col"` strings.
pub fn path_strings(path: &[Position]) -> Vec<String> {
    path.iter().map(Position::to_string).collect()
}

/// Value-table entries as a map keyed by `"row,col"`, sorted by key.
pub fn table_entries(table: &QTable) -> BTreeMap<String, [f64; Action::COUNT]> {
    table
        .entries()
        .map(|(position, values)| (position.to_string(), *values))
        .collect()
}

/// Report for a single solve run.
#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub maze: Vec<String>,
    pub path: Vec<String>,
    pub solved: bool,
}

impl SolveReport {
    /// Build a report from the maze grid and the extracted greedy path.
    ///
    /// `solved` is true when the path ends on the goal cell.
    pub fn new(grid: &Grid, path: &[Position]) -> Self {
        let solved = match grid.find_goal() {
            Some(goal) => path.last() == Some(&goal),
            None => false,
        };
        Self {
            maze: grid.render_rows(),
            path: path_strings(path),
            solved,
        }
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_json(path, self)
    }
}

/// Report for a full training run: configuration echo, per-episode history,
/// the final greedy path, and the learned value table.
#[derive(Debug, Serialize)]
pub struct TrainReport {
    pub config: TrainConfig,
    pub summary: TrainingSummary,
    pub final_path: Vec<String>,
    pub q_table: BTreeMap<String, [f64; Action::COUNT]>,
    pub episodes: Vec<EpisodeRecord>,
}

impl TrainReport {
    pub fn new(config: TrainConfig, run: &TrainingRun) -> Self {
        Self {
            config,
            summary: run.summary(),
            final_path: path_strings(&run.final_path),
            q_table: table_entries(&run.q_table),
            episodes: run.episodes.clone(),
        }
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_json(path, self)
    }
}

fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::q_learning;

    #[test]
    fn test_path_strings() {
        let path = vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)];
        assert_eq!(path_strings(&path), vec!["0,0", "0,1", "1,1"]);
    }

    #[test]
    fn test_solve_report_marks_solved_path() {
        let grid = Grid::parse("S.G").unwrap();
        let path = vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)];
        let report = SolveReport::new(&grid, &path);
        assert!(report.solved);
        assert_eq!(report.maze, vec!["S.G"]);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["path"][0], "0,0");
        assert_eq!(value["path"][2], "0,2");
    }

    #[test]
    fn test_solve_report_single_point_path_is_unsolved() {
        let grid = Grid::parse("S\n#\nG").unwrap();
        let report = SolveReport::new(&grid, &[Position::new(0, 0)]);
        assert!(!report.solved);
        assert_eq!(report.path, vec!["0,0"]);
    }

    #[test]
    fn test_train_report_shape() {
        let grid = Grid::parse("S.G").unwrap();
        let config = TrainConfig::new().with_episodes(20).with_seed(3);
        let run = q_learning::train_with_history(&grid, config).unwrap();
        let report = TrainReport::new(config, &run);
        assert_eq!(report.episodes.len(), 20);
        assert_eq!(report.config, config);

        let value = serde_json::to_value(&report).unwrap();
        let table = value["q_table"].as_object().unwrap();
        assert!(table.contains_key("0,0"));
        assert_eq!(table["0,0"].as_array().unwrap().len(), 4);
        assert_eq!(value["summary"]["episodes"], 20);
    }

    #[test]
    fn test_write_json_round_trip() {
        let grid = Grid::parse("S.G").unwrap();
        let path = q_learning::solve(&grid, TrainConfig::new().with_episodes(60).with_seed(9))
            .unwrap();
        let report = SolveReport::new(&grid, &path);

        let file = tempfile::NamedTempFile::new().unwrap();
        report.write_json(file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["solved"], true);
        assert_eq!(value["path"].as_array().unwrap().len(), 3);
    }
}
