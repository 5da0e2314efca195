//! Scorecast Simulation Engine
//!
//! Platform-agnostic core logic for estimating baseball game outcomes by
//! Monte Carlo simulation. Raw season batting lines become per-player rate
//! profiles, rate profiles drive a plate-appearance sampler, a base-state
//! machine turns sampled outcomes into runs, and a driver repeats full
//! games over deterministic seeded RNG streams to estimate mean score,
//! score spread, and win probability.
//!
//! Data retrieval, schedule handling and report rendering live with the
//! callers; this crate consumes already-fetched lineup rows and returns
//! plain summaries.

pub mod atbat;
pub mod bases;
pub mod game;
pub mod inning;
pub mod lineup;
pub mod montecarlo;
pub mod numbers;
pub mod outcome;
pub mod profile;
pub mod rng;
pub mod stats;

// Re-export commonly used types
pub use atbat::resolve_plate_appearance;
pub use bases::{Advance, BaseState, apply_outcome};
pub use game::{GameResult, LineScore, REGULATION_INNINGS, Side, simulate_game};
pub use inning::{HalfInningResult, OUTS_PER_HALF, play_half_inning};
pub use lineup::{BattingOrder, Lineup, LineupError};
pub use montecarlo::{
    SimulationPlan, SimulationSummary, TeamSummary, run_simulation, run_until_cancelled, summarize,
};
pub use outcome::PlateOutcome;
pub use profile::{InvalidStatsError, ProfileError, RateProfile, SamplingRangeError};
pub use rng::{CountingRng, RngBundle};
pub use stats::{BattingLine, LineupSheet};
