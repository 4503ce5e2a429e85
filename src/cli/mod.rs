//! CLI infrastructure for the maze solver
//!
//! This module provides the command-line interface for solving mazes and for
//! running training with per-episode history exports.

pub mod commands;
pub mod output;
