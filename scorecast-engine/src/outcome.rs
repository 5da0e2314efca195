//! Plate-appearance outcomes.
use serde::{Deserialize, Serialize};

/// The closed set of results a plate appearance can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateOutcome {
    Single,
    Double,
    Triple,
    HomeRun,
    Walk,
    Out,
}

impl PlateOutcome {
    /// Check if the outcome is a base hit.
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Single | Self::Double | Self::Triple | Self::HomeRun)
    }

    /// Check if the outcome puts the batter on base.
    #[must_use]
    pub const fn reaches_base(self) -> bool {
        !matches!(self, Self::Out)
    }

    /// Check if the outcome records an out. Only this outcome advances the
    /// out counter of a half-inning.
    #[must_use]
    pub const fn is_out(self) -> bool {
        matches!(self, Self::Out)
    }
}

impl std::fmt::Display for PlateOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlateOutcome::Single => write!(f, "single"),
            PlateOutcome::Double => write!(f, "double"),
            PlateOutcome::Triple => write!(f, "triple"),
            PlateOutcome::HomeRun => write!(f, "home_run"),
            PlateOutcome::Walk => write!(f, "walk"),
            PlateOutcome::Out => write!(f, "out"),
        }
    }
}
