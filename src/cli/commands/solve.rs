//! Solve command - train on a maze and print the learned path

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{commands::read_grid, output},
    export::{SolveReport, path_strings},
    maze::Grid,
    q_learning::{QLearner, TrainConfig},
    types::Position,
};

#[derive(Parser, Debug)]
#[command(about = "Train on a maze and print the learned path")]
pub struct SolveArgs {
    /// Path to the maze file ('S' start, 'G' goal, '#' wall, '.' open)
    pub maze: PathBuf,

    /// Learning rate alpha
    #[arg(long, default_value_t = 0.1)]
    pub alpha: f64,

    /// Discount factor gamma
    #[arg(long, default_value_t = 0.9)]
    pub gamma: f64,

    /// Exploration rate epsilon
    #[arg(long, default_value_t = 0.1)]
    pub epsilon: f64,

    /// Number of training episodes
    #[arg(long, short = 'e', default_value_t = 1000)]
    pub episodes: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report as JSON instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Optional path for writing the report JSON
    #[arg(long, short = 'O')]
    pub output: Option<PathBuf>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let grid = read_grid(&args.maze)?;

    let mut config = TrainConfig::default()
        .with_learning_rate(args.alpha)
        .with_discount_factor(args.gamma)
        .with_epsilon(args.epsilon)
        .with_episodes(args.episodes);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut learner = QLearner::new(config)?;
    let path = learner.solve(&grid)?;
    let report = SolveReport::new(&grid, &path);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_solution(&grid, &path, report.solved);
    }

    if let Some(ref output_path) = args.output {
        report.write_json(output_path)?;
        println!("\nReport written to {}", output_path.display());
    }

    Ok(())
}

fn print_solution(grid: &Grid, path: &[Position], solved: bool) {
    output::print_section("Learned path");
    for line in output::render_with_path(grid, path) {
        println!("{line}");
    }
    println!();
    output::print_kv("Path", &path_strings(path).join(" -> "));
    output::print_kv("Length", &path.len().to_string());

    if solved {
        println!("\n✓ Reached the goal in {} moves", path.len() - 1);
    } else {
        println!("\n⚠️  No route to the goal was learned; try more episodes.");
    }
}
