//! Monte Carlo driver aggregating many independent game trials.
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::game::{self, GameResult, Side};
use crate::lineup::Lineup;
use crate::numbers::usize_to_f64;
use crate::rng::RngBundle;

/// Plan for a Monte Carlo batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationPlan {
    pub iterations: usize,
    pub seed: u64,
}

impl SimulationPlan {
    #[must_use]
    pub const fn new(iterations: usize, seed: u64) -> Self {
        Self { iterations, seed }
    }

    /// Normalize the plan: a batch runs at least one trial.
    #[must_use]
    pub fn sanitize(mut self) -> Self {
        self.iterations = self.iterations.max(1);
        self
    }
}

/// Aggregate over one team's per-game run totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    pub name: String,
    /// Final runs per game, ordered by trial index.
    pub runs: Vec<u32>,
    pub mean_runs: f64,
    pub stdev_runs: f64,
    pub win_probability: f64,
}

/// Result of a Monte Carlo batch over two lineups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    /// Trials actually completed; lower than planned only when cancelled.
    pub iterations_run: usize,
    pub away: TeamSummary,
    pub home: TeamSummary,
}

/// Run the full planned batch.
///
/// Trials fan out across the rayon worker pool; each derives its own RNG
/// bundle from the plan seed and trial index, and batting cursors reset at
/// the top of every trial, so the summary is independent of execution
/// order and thread count. Lineups were validated at construction, so the
/// batch never fails mid-run.
#[must_use]
pub fn run_simulation(away: &Lineup, home: &Lineup, plan: SimulationPlan) -> SimulationSummary {
    run_until_cancelled(away, home, plan, &AtomicBool::new(false))
}

/// Like [`run_simulation`], but checks `cancel` between trials and
/// aggregates whatever completed when the flag is raised.
#[must_use]
pub fn run_until_cancelled(
    away: &Lineup,
    home: &Lineup,
    plan: SimulationPlan,
    cancel: &AtomicBool,
) -> SimulationSummary {
    let plan = plan.sanitize();
    let results: Vec<GameResult> = (0..plan.iterations)
        .into_par_iter()
        .filter_map(|iteration| {
            if cancel.load(Ordering::Relaxed) {
                return None;
            }
            let trial = u64::try_from(iteration).unwrap_or(u64::MAX);
            let rng = RngBundle::for_trial(plan.seed, trial);
            Some(game::simulate_game(away, home, &rng))
        })
        .collect();
    summarize(away.name(), home.name(), &results)
}

/// Reduce completed game results into per-team summaries.
///
/// The reduction is a plain sum / sum-of-squares / win tally, so any
/// ordering of the same results produces the same summary.
#[must_use]
pub fn summarize(away_name: &str, home_name: &str, results: &[GameResult]) -> SimulationSummary {
    let total = results.len();
    let away_runs: Vec<u32> = results.iter().map(|game| game.away_runs).collect();
    let home_runs: Vec<u32> = results.iter().map(|game| game.home_runs).collect();
    let away_wins = results
        .iter()
        .filter(|game| game.winner == Side::Away)
        .count();
    let home_wins = total - away_wins;

    SimulationSummary {
        iterations_run: total,
        away: team_summary(away_name, away_runs, away_wins, total),
        home: team_summary(home_name, home_runs, home_wins, total),
    }
}

fn team_summary(name: &str, runs: Vec<u32>, wins: usize, total: usize) -> TeamSummary {
    let mean_runs = mean(&runs);
    let stdev_runs = sample_stdev(&runs, mean_runs);
    let win_probability = if total == 0 {
        0.0
    } else {
        usize_to_f64(wins) / usize_to_f64(total)
    };
    TeamSummary {
        name: name.to_string(),
        runs,
        mean_runs,
        stdev_runs,
        win_probability,
    }
}

fn mean(runs: &[u32]) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    let sum: f64 = runs.iter().map(|&r| f64::from(r)).sum();
    sum / usize_to_f64(runs.len())
}

fn sample_stdev(runs: &[u32], mean_runs: f64) -> f64 {
    if runs.len() < 2 {
        return 0.0;
    }
    let squared: f64 = runs
        .iter()
        .map(|&r| {
            let delta = f64::from(r) - mean_runs;
            delta * delta
        })
        .sum();
    (squared / usize_to_f64(runs.len() - 1)).sqrt()
}
