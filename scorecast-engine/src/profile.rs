//! Per-player outcome probabilities derived from season totals.
use serde::Serialize;
use thiserror::Error;

use crate::stats::BattingLine;

/// Malformed or degenerate season statistics, rejected before simulation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidStatsError {
    #[error("{name}: at-bat total is zero")]
    ZeroAtBats { name: String },
    #[error("{name}: hit total is zero")]
    ZeroHits { name: String },
    #[error("{name}: {hits} hits exceed {at_bats} at-bats")]
    HitsExceedAtBats {
        name: String,
        hits: u32,
        at_bats: u32,
    },
    #[error("{name}: extra-base hits sum to {extra_base} but only {hits} hits were recorded")]
    ExtraBaseHitsExceedHits {
        name: String,
        extra_base: u32,
        hits: u32,
    },
}

/// A derived probability left the range the sampler can consume.
///
/// Unreachable from arithmetically consistent inputs; raised when a count
/// field contradicts its denominator (for example more strikeouts than
/// at-bats) or when a batter would never record an out.
#[derive(Debug, Error, PartialEq)]
pub enum SamplingRangeError {
    #[error("{name}: {field} rate {value:.4} falls outside [0, 1]")]
    OutsideUnitInterval {
        name: String,
        field: &'static str,
        value: f64,
    },
    #[error("{name}: on-base rate {value:.4} leaves no chance of an out")]
    NoOutChance { name: String, value: f64 },
}

/// Errors raised while deriving a rate profile.
#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error(transparent)]
    InvalidStats(#[from] InvalidStatsError),
    #[error(transparent)]
    SamplingRange(#[from] SamplingRangeError),
}

/// A player's empirical outcome probabilities, immutable once built.
///
/// The sampler consumes `batting_average` and `on_base` directly: the walk
/// band of the unit interval is everything between them, so the stored
/// `walk_rate` (`on_base - batting_average`) is a derived report field and
/// is never re-added to the hit rate during sampling. The strikeout,
/// sacrifice, double-play and stolen-base rates are computed from the same
/// season line but do not drive run generation; they are reserved for
/// future strategy modeling.
// No Deserialize: profiles are only built through `from_line`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateProfile {
    name: String,
    batting_average: f64,
    on_base: f64,
    walk_rate: f64,
    slugging: f64,
    share_single: f64,
    share_double: f64,
    share_triple: f64,
    share_home_run: f64,
    strikeout_rate: f64,
    sac_fly_rate: f64,
    sac_hit_rate: f64,
    double_play_rate: f64,
    steal_rate: f64,
    caught_stealing_rate: f64,
}

impl RateProfile {
    /// Derive a profile from one season batting line.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStatsError` for degenerate inputs (zero at-bats,
    /// zero hits, hits exceeding at-bats, extra-base hits exceeding hits)
    /// and `SamplingRangeError` when any derived probability leaves [0, 1]
    /// or the batter could never make an out.
    pub fn from_line(line: &BattingLine) -> Result<Self, ProfileError> {
        let singles = Self::check_counts(line)?;

        let ab = f64::from(line.ab);
        let h = f64::from(line.h);
        let bb = f64::from(line.bb);
        let times_on = h + bb;

        let profile = Self {
            name: line.name.clone(),
            batting_average: h / ab,
            on_base: times_on / (ab + bb),
            walk_rate: times_on / (ab + bb) - h / ab,
            slugging: (f64::from(singles)
                + 2.0 * f64::from(line.doubles)
                + 3.0 * f64::from(line.triples)
                + 4.0 * f64::from(line.hr))
                / ab,
            share_single: f64::from(singles) / h,
            share_double: f64::from(line.doubles) / h,
            share_triple: f64::from(line.triples) / h,
            share_home_run: f64::from(line.hr) / h,
            strikeout_rate: f64::from(line.so) / ab,
            sac_fly_rate: f64::from(line.sf) / ab,
            sac_hit_rate: f64::from(line.sh) / ab,
            double_play_rate: f64::from(line.gdp) / ab,
            steal_rate: f64::from(line.sb) / times_on,
            caught_stealing_rate: f64::from(line.cs) / times_on,
        };
        profile.check_ranges()?;
        Ok(profile)
    }

    fn check_counts(line: &BattingLine) -> Result<u32, InvalidStatsError> {
        if line.ab == 0 {
            return Err(InvalidStatsError::ZeroAtBats {
                name: line.name.clone(),
            });
        }
        if line.h == 0 {
            return Err(InvalidStatsError::ZeroHits {
                name: line.name.clone(),
            });
        }
        if line.h > line.ab {
            return Err(InvalidStatsError::HitsExceedAtBats {
                name: line.name.clone(),
                hits: line.h,
                at_bats: line.ab,
            });
        }
        let extra_base = line.doubles + line.triples + line.hr;
        if extra_base > line.h {
            return Err(InvalidStatsError::ExtraBaseHitsExceedHits {
                name: line.name.clone(),
                extra_base,
                hits: line.h,
            });
        }
        Ok(line.h - extra_base)
    }

    fn check_ranges(&self) -> Result<(), SamplingRangeError> {
        // Slugging is a total-bases average and legitimately exceeds 1.
        let rates = [
            ("batting average", self.batting_average),
            ("on-base", self.on_base),
            ("walk", self.walk_rate),
            ("single share", self.share_single),
            ("double share", self.share_double),
            ("triple share", self.share_triple),
            ("home-run share", self.share_home_run),
            ("strikeout", self.strikeout_rate),
            ("sacrifice-fly", self.sac_fly_rate),
            ("sacrifice-hit", self.sac_hit_rate),
            ("double-play", self.double_play_rate),
            ("steal", self.steal_rate),
            ("caught-stealing", self.caught_stealing_rate),
        ];
        for (field, value) in rates {
            if !(0.0..=1.0).contains(&value) {
                return Err(SamplingRangeError::OutsideUnitInterval {
                    name: self.name.clone(),
                    field,
                    value,
                });
            }
        }
        if self.on_base >= 1.0 {
            return Err(SamplingRangeError::NoOutChance {
                name: self.name.clone(),
                value: self.on_base,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Probability the at-bat is a hit.
    #[must_use]
    pub const fn batting_average(&self) -> f64 {
        self.batting_average
    }

    /// Probability the batter reaches base; the sampler's walk threshold.
    #[must_use]
    pub const fn on_base(&self) -> f64 {
        self.on_base
    }

    /// On-base rate minus hit rate: the width of the walk band.
    #[must_use]
    pub const fn walk_rate(&self) -> f64 {
        self.walk_rate
    }

    /// Total bases per at-bat.
    #[must_use]
    pub const fn slugging(&self) -> f64 {
        self.slugging
    }

    #[must_use]
    pub const fn share_single(&self) -> f64 {
        self.share_single
    }

    #[must_use]
    pub const fn share_double(&self) -> f64 {
        self.share_double
    }

    #[must_use]
    pub const fn share_triple(&self) -> f64 {
        self.share_triple
    }

    #[must_use]
    pub const fn share_home_run(&self) -> f64 {
        self.share_home_run
    }

    #[must_use]
    pub const fn strikeout_rate(&self) -> f64 {
        self.strikeout_rate
    }

    #[must_use]
    pub const fn sac_fly_rate(&self) -> f64 {
        self.sac_fly_rate
    }

    #[must_use]
    pub const fn sac_hit_rate(&self) -> f64 {
        self.sac_hit_rate
    }

    #[must_use]
    pub const fn double_play_rate(&self) -> f64 {
        self.double_play_rate
    }

    #[must_use]
    pub const fn steal_rate(&self) -> f64 {
        self.steal_rate
    }

    #[must_use]
    pub const fn caught_stealing_rate(&self) -> f64 {
        self.caught_stealing_rate
    }
}
