//! Plate-appearance resolution.
use rand::Rng;

use crate::outcome::PlateOutcome;
use crate::profile::RateProfile;

/// Resolve one plate appearance against the batter's rate profile.
///
/// The first draw decides the band: below the batting average the at-bat
/// is a hit, below the on-base rate it is a walk, otherwise an out. The
/// walk threshold is the literal on-base percentage rather than a
/// recomputed hit-plus-walk sum, because the two are derived from
/// different denominators. A hit takes a second draw over the cumulative
/// hit-type shares; the home-run branch absorbs the remainder so floating
/// rounding can never leave the interval uncovered.
///
/// Never fails on a validated profile; consumes one or two uniform draws.
#[must_use]
pub fn resolve_plate_appearance<R: Rng + ?Sized>(
    profile: &RateProfile,
    rng: &mut R,
) -> PlateOutcome {
    let draw = rng.r#gen::<f64>();
    if draw < profile.batting_average() {
        return resolve_hit_type(profile, rng.r#gen::<f64>());
    }
    if draw < profile.on_base() {
        return PlateOutcome::Walk;
    }
    PlateOutcome::Out
}

fn resolve_hit_type(profile: &RateProfile, draw: f64) -> PlateOutcome {
    let mut threshold = profile.share_single();
    if draw < threshold {
        return PlateOutcome::Single;
    }
    threshold += profile.share_double();
    if draw < threshold {
        return PlateOutcome::Double;
    }
    threshold += profile.share_triple();
    if draw < threshold {
        return PlateOutcome::Triple;
    }
    PlateOutcome::HomeRun
}
