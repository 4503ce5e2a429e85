//! Export functionality for training results.
//!
//! JSON reports carry the boundary payloads for solve and training runs;
//! the CSV exporter writes one row per episode of training history.

mod history_csv;
mod report;

pub use history_csv::write_history_csv;
pub use report::{SolveReport, TrainReport, path_strings, table_entries};
