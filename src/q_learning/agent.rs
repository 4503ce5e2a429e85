//! The Q-learning agent: ε-greedy policy, episode loop, and path extraction.

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    error::{Error, Result},
    maze::{Grid, Maze},
    observers::TrainingObserver,
    q_learning::{
        config::TrainConfig,
        history::{EpisodeError, EpisodeErrorKind, EpisodeRecord, TrainingRun},
        q_table::QTable,
    },
    types::{Action, Position},
};

/// Maximum steps per training episode.
pub const MAX_EPISODE_STEPS: usize = 100;

/// Step cap for the final greedy path.
pub const OPTIMAL_PATH_STEPS: usize = 50;

/// Step cap for the per-episode greedy path.
pub const BEST_PATH_STEPS: usize = 100;

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Valid actions from `state`: those whose destination is in bounds and not a
/// wall, in the fixed [`Action::ALL`] order.
pub fn valid_actions(maze: &Maze<'_>, state: Position) -> Vec<Action> {
    Action::ALL
        .iter()
        .copied()
        .filter(|&action| {
            let (r, c) = state.step(action);
            maze.is_valid(r, c)
        })
        .collect()
}

/// Tabular Q-learning agent for maze navigation.
///
/// Each call to [`QLearner::train`] (or the wrappers [`QLearner::solve`] and
/// [`QLearner::train_with_history`]) starts from a fresh value table; nothing
/// persists between runs. Exploration draws come from a `StdRng` that can be
/// seeded through the configuration, making runs reproducible.
///
/// # Examples
///
/// ```
/// use qmaze::maze::Grid;
/// use qmaze::q_learning::{QLearner, TrainConfig};
///
/// let grid = Grid::parse("S.G").unwrap();
/// let config = TrainConfig::default().with_episodes(100).with_seed(7);
/// let mut learner = QLearner::new(config).unwrap();
///
/// let path = learner.solve(&grid).unwrap();
/// assert_eq!(path.len(), 3);
/// ```
pub struct QLearner {
    config: TrainConfig,
    q_table: QTable,
    rng: StdRng,
    observers: Vec<Box<dyn TrainingObserver>>,
}

impl QLearner {
    /// Create a learner from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when a hyperparameter is out
    /// of range.
    pub fn new(config: TrainConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            q_table: QTable::new(config.learning_rate, config.discount_factor),
            rng: build_rng(config.seed),
            observers: Vec::new(),
        })
    }

    /// Reseed the RNG for a deterministic run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Attach an observer notified during training.
    pub fn with_observer(mut self, observer: Box<dyn TrainingObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// The current value table.
    ///
    /// Empty until the first training run; rebuilt from scratch by each run.
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// ε-greedy action selection; `None` when the state is blocked.
    ///
    /// The boolean is true when the action came from an exploration draw.
    fn select_action(&mut self, maze: &Maze<'_>, state: Position) -> Option<(Action, bool)> {
        let valid = valid_actions(maze, state);
        if valid.is_empty() {
            return None;
        }
        if self.rng.random::<f64>() < self.config.epsilon {
            // Explore: uniform choice among valid actions
            Some((*valid.choose(&mut self.rng).unwrap(), true))
        } else {
            // Exploit: greedy action, ties broken by the fixed action order
            Some((
                self.q_table.greedy_action(state, &valid).unwrap_or(valid[0]),
                false,
            ))
        }
    }

    /// Train on `grid`, returning one record per episode.
    ///
    /// Builds a fresh value table covering the grid's non-wall cells, then
    /// runs the configured number of episodes from the start cell. Attached
    /// observers are notified as the run progresses.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingStart`] when the grid has no start cell; the
    /// learner's table is left untouched in that case. Observer failures
    /// abort the run.
    pub fn train(&mut self, grid: &Grid) -> Result<Vec<EpisodeRecord>> {
        let maze = Maze::new(grid);
        let start = grid.find_start().ok_or(Error::MissingStart)?;
        self.q_table =
            QTable::for_maze(&maze, self.config.learning_rate, self.config.discount_factor);

        for observer in &mut self.observers {
            observer.on_training_start(self.config.episodes)?;
        }

        let mut records = Vec::with_capacity(self.config.episodes);
        for episode in 0..self.config.episodes {
            let record = self.run_episode(&maze, start, episode);
            for observer in &mut self.observers {
                observer.on_episode_end(&record)?;
            }
            records.push(record);
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }
        Ok(records)
    }

    fn run_episode(&mut self, maze: &Maze<'_>, start: Position, episode: usize) -> EpisodeRecord {
        let mut state = start;
        let mut total_reward = 0.0;
        let mut steps = 0;
        let mut visited = vec![start];
        let mut errors = Vec::new();
        let mut explored = 0;
        let mut reached_goal = false;

        for step in 0..MAX_EPISODE_STEPS {
            let Some((action, explored_step)) = self.select_action(maze, state) else {
                // Dead end with no escape; the episode ends here.
                errors.push(EpisodeError::new(step, EpisodeErrorKind::Blocked, state));
                break;
            };
            if explored_step {
                explored += 1;
            }

            let (r, c) = state.step(action);
            let in_bounds =
                r >= 0 && c >= 0 && (r as usize) < maze.rows() && (c as usize) < maze.cols();
            if !in_bounds {
                // Unreachable through valid-action filtering; kept as an
                // invariant guard against policy-selection bugs.
                errors.push(EpisodeError::new(step, EpisodeErrorKind::OutOfBounds, state));
                break;
            }
            let next = Position::new(r as usize, c as usize);

            let reward = maze.reward(r, c);
            if maze.is_wall(r, c) {
                // Same guard; the update and transition still apply.
                errors.push(EpisodeError::new(step, EpisodeErrorKind::HitWall, state));
            }

            let next_valid = valid_actions(maze, next);
            self.q_table.update(state, action, reward, next, &next_valid);

            state = next;
            visited.push(next);
            total_reward += reward;
            steps += 1;

            if maze.is_goal(r, c) {
                reached_goal = true;
                break;
            }
        }

        let best_path = self.greedy_path(maze, start, BEST_PATH_STEPS);
        EpisodeRecord {
            episode,
            total_reward,
            steps,
            visited,
            best_path,
            errors,
            explored,
            reached_goal,
        }
    }

    /// Walk the current table greedily from `start`, never exploring.
    ///
    /// Stops on a revisit (cycle guard), a dead end, the goal (included in
    /// the path), or after `max_steps` moves. Always returns at least the
    /// start position.
    fn greedy_path(&self, maze: &Maze<'_>, start: Position, max_steps: usize) -> Vec<Position> {
        let mut path = vec![start];
        let mut visited = HashSet::from([start]);
        let mut state = start;

        for _ in 0..max_steps {
            let valid = valid_actions(maze, state);
            let Some(action) = self.q_table.greedy_action(state, &valid) else {
                break;
            };
            let (r, c) = state.step(action);
            // action validity guarantees the destination is in bounds
            let next = Position::new(r as usize, c as usize);
            if !visited.insert(next) {
                break;
            }
            path.push(next);
            state = next;
            if maze.is_goal(r, c) {
                break;
            }
        }
        path
    }

    /// Final greedy path from the trained table, capped at
    /// [`OPTIMAL_PATH_STEPS`].
    ///
    /// A path of length 1 means the goal is unreachable from the start under
    /// the current table; that is a result, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingStart`] when the grid has no start cell.
    pub fn optimal_path(&self, grid: &Grid) -> Result<Vec<Position>> {
        let start = grid.find_start().ok_or(Error::MissingStart)?;
        Ok(self.greedy_path(&Maze::new(grid), start, OPTIMAL_PATH_STEPS))
    }

    /// Greedy path from the current table with the in-training cap
    /// ([`BEST_PATH_STEPS`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingStart`] when the grid has no start cell.
    pub fn best_path(&self, grid: &Grid) -> Result<Vec<Position>> {
        let start = grid.find_start().ok_or(Error::MissingStart)?;
        Ok(self.greedy_path(&Maze::new(grid), start, BEST_PATH_STEPS))
    }

    /// Train from scratch and return the final greedy path.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`QLearner::train`].
    pub fn solve(&mut self, grid: &Grid) -> Result<Vec<Position>> {
        self.train(grid)?;
        self.optimal_path(grid)
    }

    /// Train from scratch and return the full history, the final path, and
    /// the trained value table.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`QLearner::train`].
    pub fn train_with_history(&mut self, grid: &Grid) -> Result<TrainingRun> {
        let episodes = self.train(grid)?;
        let final_path = self.optimal_path(grid)?;
        Ok(TrainingRun {
            episodes,
            final_path,
            q_table: self.q_table.clone(),
        })
    }
}
