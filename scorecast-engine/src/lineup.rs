//! Team rosters and the batting-order cursor.
use thiserror::Error;

use crate::profile::{ProfileError, RateProfile};
use crate::stats::LineupSheet;

/// Errors raised while assembling a lineup.
#[derive(Debug, Error, PartialEq)]
pub enum LineupError {
    #[error("lineup {name} has no eligible batters")]
    EmptyLineup { name: String },
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// A validated batting lineup: the team name plus one immutable rate
/// profile per batter, in batting order.
///
/// Construction is the single validation gate — every profile is derived
/// and range-checked here, so simulation over a `Lineup` never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Lineup {
    name: String,
    batters: Vec<RateProfile>,
}

impl Lineup {
    /// Assemble a lineup from already-derived profiles.
    ///
    /// # Errors
    ///
    /// Returns `LineupError::EmptyLineup` when no batters are supplied.
    pub fn new(name: impl Into<String>, batters: Vec<RateProfile>) -> Result<Self, LineupError> {
        let name = name.into();
        if batters.is_empty() {
            return Err(LineupError::EmptyLineup { name });
        }
        Ok(Self { name, batters })
    }

    /// Derive and validate a lineup from a collaborator-supplied sheet.
    ///
    /// # Errors
    ///
    /// Returns the first profile derivation failure, or
    /// `LineupError::EmptyLineup` for a sheet with no rows.
    pub fn from_sheet(sheet: &LineupSheet) -> Result<Self, LineupError> {
        let batters = sheet
            .batters
            .iter()
            .map(RateProfile::from_line)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(sheet.team.clone(), batters)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.batters.len()
    }

    /// Always false for a constructed lineup; present for slice-like
    /// completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batters.is_empty()
    }

    #[must_use]
    pub fn batters(&self) -> &[RateProfile] {
        &self.batters
    }
}

/// Batting-order cursor for one team over the course of a game.
///
/// The cursor persists across half-innings and wraps modulo the lineup
/// size; each independent game trial starts from a fresh order (slot 0).
#[derive(Debug, Clone)]
pub struct BattingOrder<'a> {
    lineup: &'a Lineup,
    cursor: usize,
}

impl<'a> BattingOrder<'a> {
    #[must_use]
    pub const fn new(lineup: &'a Lineup) -> Self {
        Self { lineup, cursor: 0 }
    }

    /// The batter due up and their lineup slot, advancing the cursor.
    pub fn next_batter(&mut self) -> (u8, &'a RateProfile) {
        let slot = self.cursor;
        self.cursor = (self.cursor + 1) % self.lineup.len();
        let id = u8::try_from(slot).unwrap_or(u8::MAX);
        (id, &self.lineup.batters[slot])
    }

    /// Index of the batter due up next.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Return to the top of the order, as at the start of a new trial.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
