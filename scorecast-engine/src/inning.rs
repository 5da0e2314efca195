//! Half-inning simulation to three outs.
use rand::Rng;

use crate::atbat::resolve_plate_appearance;
use crate::bases::{self, BaseState};
use crate::lineup::BattingOrder;

/// Outs that end a half-inning.
pub const OUTS_PER_HALF: u8 = 3;

/// Runs scored in one half-inning plus the cursor left for the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfInningResult {
    pub runs: u32,
    /// Index of the batter due up when this team next comes to the plate.
    pub next_batter: usize,
}

/// Drive one half-inning: bases start empty, the order supplies batters
/// until three outs are recorded. The cursor advances on every plate
/// appearance regardless of outcome; only `Out` advances the out counter.
///
/// Terminates with probability 1 because lineup validation guarantees
/// every batter an out chance.
pub fn play_half_inning<R: Rng + ?Sized>(
    order: &mut BattingOrder<'_>,
    rng: &mut R,
) -> HalfInningResult {
    let mut bases = BaseState::empty();
    let mut outs = 0u8;
    let mut runs = 0u32;

    while outs < OUTS_PER_HALF {
        let (slot, batter) = order.next_batter();
        let outcome = resolve_plate_appearance(batter, rng);
        let advance = bases::apply_outcome(bases, slot, outcome);
        bases = advance.bases;
        runs += advance.runs;
        if outcome.is_out() {
            outs += 1;
        }
    }

    HalfInningResult {
        runs,
        next_batter: order.cursor(),
    }
}
