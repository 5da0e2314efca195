//! Base occupancy and runner advancement.
use serde::{Deserialize, Serialize};

use crate::outcome::PlateOutcome;

/// Occupancy of the three bases at a point in a half-inning.
///
/// Each slot holds the lineup slot of the runner who reached. State lives
/// only within the current half-inning and starts empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseState {
    pub first: Option<u8>,
    pub second: Option<u8>,
    pub third: Option<u8>,
}

impl BaseState {
    /// All bases empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            first: None,
            second: None,
            third: None,
        }
    }

    /// Number of occupied bases.
    #[must_use]
    pub const fn runners(&self) -> u32 {
        self.first.is_some() as u32 + self.second.is_some() as u32 + self.third.is_some() as u32
    }
}

/// Result of applying one outcome to a base state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    pub bases: BaseState,
    pub runs: u32,
}

/// Apply one plate-appearance outcome to the bases.
///
/// Deterministic: the same (state, outcome) pair always yields the same
/// (state, runs) pair. A walk advances runners only under the forced-
/// advancement rule — a runner moves when the batter or a trailing forced
/// runner requires the base — so a lone runner on second holds. An out
/// leaves the bases untouched; the caller owns the out counter.
#[must_use]
pub fn apply_outcome(bases: BaseState, batter: u8, outcome: PlateOutcome) -> Advance {
    match outcome {
        PlateOutcome::Single => Advance {
            bases: BaseState {
                first: Some(batter),
                second: bases.first,
                third: bases.second,
            },
            runs: u32::from(bases.third.is_some()),
        },
        PlateOutcome::Double => Advance {
            bases: BaseState {
                first: None,
                second: Some(batter),
                third: bases.first,
            },
            runs: u32::from(bases.second.is_some()) + u32::from(bases.third.is_some()),
        },
        PlateOutcome::Triple => Advance {
            bases: BaseState {
                first: None,
                second: None,
                third: Some(batter),
            },
            runs: bases.runners(),
        },
        PlateOutcome::HomeRun => Advance {
            bases: BaseState::empty(),
            runs: bases.runners() + 1,
        },
        PlateOutcome::Walk => resolve_walk(bases, batter),
        PlateOutcome::Out => Advance { bases, runs: 0 },
    }
}

fn resolve_walk(bases: BaseState, batter: u8) -> Advance {
    match (bases.first, bases.second, bases.third) {
        // Batter takes an open first base; nobody else is forced.
        (None, second, third) => Advance {
            bases: BaseState {
                first: Some(batter),
                second,
                third,
            },
            runs: 0,
        },
        // Runner on first is pushed to an open second.
        (Some(r1), None, third) => Advance {
            bases: BaseState {
                first: Some(batter),
                second: Some(r1),
                third,
            },
            runs: 0,
        },
        // First and second occupied: the chain pushes both up one base.
        (Some(r1), Some(r2), None) => Advance {
            bases: BaseState {
                first: Some(batter),
                second: Some(r1),
                third: Some(r2),
            },
            runs: 0,
        },
        // Bases loaded: the runner on third is forced home.
        (Some(r1), Some(r2), Some(_)) => Advance {
            bases: BaseState {
                first: Some(batter),
                second: Some(r1),
                third: Some(r2),
            },
            runs: 1,
        },
    }
}
