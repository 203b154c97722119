use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MATCH_AWARD: isize = 1;
pub const MISMATCH_PENALTY: isize = -1;
pub const GAP_PENALTY: isize = -2;

/// The largest magnitude allowed for any score in a scheme. Matrix cells
/// are bounded by this times the sum of the sequence lengths, which keeps
/// them far from overflowing.
pub const MAX_SCORE_MAGNITUDE: isize = 1_000_000;

#[derive(Error, Debug)]
#[error("{name} must be within [-{max}, {max}], got: {value}", max = MAX_SCORE_MAGNITUDE)]
pub struct ScoreOutOfRangeError {
    name: &'static str,
    value: isize,
}

/// The linear scoring scheme used to fill a Needleman-Wunsch score matrix.
///
/// Penalties are stored as signed values and are added, so a
/// penalty of -2 lowers a score by 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringScheme {
    /// The score added for a column of two identical symbols
    pub match_award: isize,
    /// The score added for a column of two different symbols
    pub mismatch_penalty: isize,
    /// The score added for a column of a symbol against a gap
    pub gap_penalty: isize,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self {
            match_award: MATCH_AWARD,
            mismatch_penalty: MISMATCH_PENALTY,
            gap_penalty: GAP_PENALTY,
        }
    }
}

impl ScoringScheme {
    pub fn new(match_award: isize, mismatch_penalty: isize, gap_penalty: isize) -> Self {
        Self {
            match_award,
            mismatch_penalty,
            gap_penalty,
        }
    }

    /// Load a scoring scheme from a JSON file. Any field
    /// that is left out takes its default value.
    pub fn from_json_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).context(format!(
            "failed to open scoring file: {}",
            path.to_string_lossy()
        ))?;

        let scoring: Self = serde_json::from_reader(BufReader::new(file)).context(format!(
            "failed to parse scoring file: {}",
            path.to_string_lossy()
        ))?;

        scoring.validate()?;
        Ok(scoring)
    }

    /// Check that every score is within `MAX_SCORE_MAGNITUDE`.
    pub fn validate(&self) -> Result<(), ScoreOutOfRangeError> {
        [
            ("match_award", self.match_award),
            ("mismatch_penalty", self.mismatch_penalty),
            ("gap_penalty", self.gap_penalty),
        ]
        .into_iter()
        .try_for_each(|(name, value)| {
            if (-MAX_SCORE_MAGNITUDE..=MAX_SCORE_MAGNITUDE).contains(&value) {
                Ok(())
            } else {
                Err(ScoreOutOfRangeError { name, value })
            }
        })
    }

    #[inline]
    pub fn substitution<T: PartialEq>(&self, a: &T, b: &T) -> isize {
        if a == b {
            self.match_award
        } else {
            self.mismatch_penalty
        }
    }
}
