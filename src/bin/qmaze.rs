//! Maze solver CLI - tabular Q-learning over ASCII grid mazes
//!
//! This CLI provides commands for:
//! - Solving a maze and printing the learned path
//! - Running training with per-episode history exports

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "qmaze")]
#[command(version, about = "Q-learning maze solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on a maze and print the learned path
    Solve(qmaze::cli::commands::solve::SolveArgs),

    /// Train on a maze and record per-episode history
    Train(qmaze::cli::commands::train::TrainArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => qmaze::cli::commands::solve::execute(args),
        Commands::Train(args) => qmaze::cli::commands::train::execute(args),
    }
}
