//! Value table for tabular Q-learning over maze cells.

use std::collections::HashMap;

use crate::maze::Maze;
use crate::types::{Action, Position};

/// Q-table mapping each reachable maze cell to its per-action values.
///
/// Entries exist for exactly the non-wall cells of the grid the table was
/// initialized from; wall and out-of-grid cells never get one. Each entry is
/// a `[f64; 4]` indexed by [`Action::index`], so the fixed action ordering is
/// built into the representation.
#[derive(Debug, Clone)]
pub struct QTable {
    /// Per-state action values, keyed by cell position
    values: HashMap<Position, [f64; Action::COUNT]>,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
}

impl QTable {
    /// Create an empty Q-table.
    pub fn new(learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            values: HashMap::new(),
            learning_rate,
            discount_factor,
        }
    }

    /// Create a Q-table with a zeroed entry for every non-wall cell of the
    /// maze.
    pub fn for_maze(maze: &Maze<'_>, learning_rate: f64, discount_factor: f64) -> Self {
        let mut table = Self::new(learning_rate, discount_factor);
        for (pos, _) in maze
            .grid()
            .iter()
            .filter(|&(pos, _)| maze.is_valid(pos.row as isize, pos.col as isize))
        {
            table.values.insert(pos, [0.0; Action::COUNT]);
        }
        table
    }

    /// Get the value for a state-action pair.
    ///
    /// States without an entry (walls, out of grid) read as 0.0.
    pub fn get(&self, state: Position, action: Action) -> f64 {
        self.values
            .get(&state)
            .map_or(0.0, |entry| entry[action.index()])
    }

    /// Set the value for a state-action pair, creating the entry if needed.
    pub fn set(&mut self, state: Position, action: Action, value: f64) {
        self.values.entry(state).or_insert([0.0; Action::COUNT])[action.index()] = value;
    }

    /// The full action-value entry for a state, if one exists.
    pub fn entry(&self, state: Position) -> Option<&[f64; Action::COUNT]> {
        self.values.get(&state)
    }

    /// Whether the table has an entry for `state`.
    pub fn contains(&self, state: Position) -> bool {
        self.values.contains_key(&state)
    }

    /// Maximum value over the given actions in a state.
    ///
    /// Returns 0.0 when `actions` is empty, which is the future-reward term
    /// the update rule wants for a dead-end successor.
    pub fn max_value(&self, state: Position, actions: &[Action]) -> f64 {
        if actions.is_empty() {
            return 0.0;
        }
        actions
            .iter()
            .map(|&action| self.get(state, action))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Greedy action among `actions`: the highest-valued one, ties broken in
    /// favor of the earliest action in the slice.
    ///
    /// Callers pass actions in the fixed [`Action::ALL`] order, which makes
    /// the tie-break deterministic. Returns `None` when `actions` is empty.
    pub fn greedy_action(&self, state: Position, actions: &[Action]) -> Option<Action> {
        let mut best: Option<(Action, f64)> = None;
        for &action in actions {
            let value = self.get(state, action);
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((action, value)),
            }
        }
        best.map(|(action, _)| action)
    }

    /// Q-learning update: off-policy TD control.
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') − Q(s,a)]
    ///
    /// `next_actions` are the valid actions from `next_state`; when there are
    /// none the future term is 0.
    pub fn update(
        &mut self,
        state: Position,
        action: Action,
        reward: f64,
        next_state: Position,
        next_actions: &[Action],
    ) {
        let current_q = self.get(state, action);
        let max_next_q = self.max_value(next_state, next_actions);
        let td_target = reward + self.discount_factor * max_next_q;
        let td_error = td_target - current_q;
        let new_q = current_q + self.learning_rate * td_error;
        self.set(state, action, new_q);
    }

    /// Number of states with an entry.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all (state, action-values) entries, in no particular
    /// order.
    pub fn entries(&self) -> impl Iterator<Item = (Position, &[f64; Action::COUNT])> {
        self.values.iter().map(|(&pos, entry)| (pos, entry))
    }
}
