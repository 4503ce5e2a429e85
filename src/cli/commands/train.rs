//! Train command - run training and export per-episode history

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{commands::read_grid, output},
    export::{TrainReport, write_history_csv},
    observers::{JsonlObserver, ProgressObserver},
    q_learning::{QLearner, TrainConfig},
};

#[derive(Parser, Debug)]
#[command(about = "Train on a maze and record per-episode history")]
pub struct TrainArgs {
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

    /// Disable the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    /// Optional path for JSONL per-episode records
    #[arg(long)]
    pub history_jsonl: Option<PathBuf>,

    /// Optional path for CSV per-episode history
    #[arg(long)]
    pub history_csv: Option<PathBuf>,

    /// Optional path for the full report JSON (config, history, table, path)
    #[arg(long)]
    pub report: Option<PathBuf>,
}

pub fn execute(args: TrainArgs) -> Result<()> {
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
    if !args.no_progress {
        learner = learner.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(ref jsonl_path) = args.history_jsonl {
        learner = learner.with_observer(Box::new(JsonlObserver::new(jsonl_path)?));
    }

    let run = learner.train_with_history(&grid)?;
    let summary = run.summary();

    println!("\n=== Training Complete ===");
    output::print_kv("Episodes", &summary.episodes.to_string());
    output::print_kv(
        "Reached goal",
        &format!(
            "{} ({:.1}%)",
            summary.reached_goal,
            summary.success_rate * 100.0
        ),
    );
    if let Some(first) = summary.first_success {
        output::print_kv("First success", &format!("episode {first}"));
    }
    if let Some(best) = summary.best_steps {
        output::print_kv("Best episode", &format!("{best} steps"));
    }
    if let Some(reward) = summary.final_reward {
        output::print_kv("Final reward", &format!("{reward:.1}"));
    }
    output::print_kv("Explorations", &summary.total_explored.to_string());

    output::print_section("Learned path");
    for line in output::render_with_path(&grid, &run.final_path) {
        println!("{line}");
    }
    println!();
    output::print_kv("Length", &run.final_path.len().to_string());
    println!();

    if let Some(ref jsonl_path) = args.history_jsonl {
        println!("✓ Episode records written to {}", jsonl_path.display());
    }
    if let Some(ref csv_path) = args.history_csv {
        write_history_csv(csv_path, &run.episodes)?;
        println!("✓ History CSV written to {}", csv_path.display());
    }
    if let Some(ref report_path) = args.report {
        TrainReport::new(config, &run).write_json(report_path)?;
        println!("✓ Report written to {}", report_path.display());
    }

    Ok(())
}
