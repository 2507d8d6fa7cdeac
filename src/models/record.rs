//! Per-user, per-season score records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{HistoryError, Result, Season};

/// Shape of a user-year entry as written to disk. Every field is optional so
/// a missing key can be reported as a malformed record instead of failing the
/// whole file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawYearRecord {
    #[serde(default)]
    pub scores: Option<Vec<f64>>,
    #[serde(default)]
    pub death_week: Option<i64>,
}

/// Validated scores for one user in one season.
///
/// `death_week`, when present, is always within `1..=scores.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawYearRecord")]
pub struct PlayerYearRecord {
    scores: Vec<f64>,
    death_week: Option<u32>,
}

impl PlayerYearRecord {
    /// Build a record, checking scores and death week bounds.
    pub fn try_new(scores: Vec<f64>, death_week: Option<u32>) -> std::result::Result<Self, String> {
        if scores.len() > usize::from(u16::MAX) {
            return Err(format!("{} weekly scores, at most {} allowed", scores.len(), u16::MAX));
        }

        if let Some((idx, bad)) = scores
            .iter()
            .enumerate()
            .find(|(_, s)| !s.is_finite() || **s < 0.0)
        {
            return Err(format!("week {} has invalid score {}", idx + 1, bad));
        }

        if let Some(week) = death_week {
            if week == 0 || week as usize > scores.len() {
                return Err(format!(
                    "death_week {} outside 1..={}",
                    week,
                    scores.len()
                ));
            }
        }

        Ok(Self { scores, death_week })
    }

    /// Validate a raw snapshot entry, naming the user and season on failure.
    pub fn from_raw(user: &str, season: Season, raw: RawYearRecord) -> Result<Self> {
        Self::try_from(raw).map_err(|reason| HistoryError::MalformedRecord {
            user: user.to_string(),
            season,
            reason,
        })
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn death_week(&self) -> Option<u32> {
        self.death_week
    }

    /// Death week with "survived" resolved to the number of weeks played.
    pub fn effective_death_week(&self) -> u32 {
        self.death_week.unwrap_or(self.scores.len() as u32)
    }

    /// Score of the last week played, 0 when no weeks were played.
    pub fn final_score(&self) -> f64 {
        self.scores.last().copied().unwrap_or(0.0)
    }

    /// Whether the team put up at least one positive score.
    pub fn has_played(&self) -> bool {
        self.scores.iter().any(|s| *s > 0.0)
    }

    /// Mark the team as having survived the whole season.
    pub fn clear_death_week(&mut self) {
        self.death_week = None;
    }
}

impl TryFrom<RawYearRecord> for PlayerYearRecord {
    type Error = String;

    fn try_from(raw: RawYearRecord) -> std::result::Result<Self, Self::Error> {
        let scores = raw.scores.ok_or_else(|| "missing scores".to_string())?;
        let death_week = match raw.death_week {
            None => None,
            Some(w) if w < 1 || w > u32::MAX as i64 => {
                return Err(format!("death_week {} is not a positive week", w))
            }
            Some(w) => Some(w as u32),
        };
        Self::try_new(scores, death_week)
    }
}

/// One season's `username -> record` mapping for a single platform.
pub type YearSnapshot = BTreeMap<String, PlayerYearRecord>;

/// Raw, unvalidated form of a [`YearSnapshot`] as it sits on disk.
pub type RawYearSnapshot = BTreeMap<String, RawYearRecord>;

/// Validate every entry of a raw snapshot.
///
/// Valid records are kept; each invalid one is returned as a
/// [`HistoryError::MalformedRecord`] so the caller can report it.
pub fn validate_snapshot(season: Season, raw: RawYearSnapshot) -> (YearSnapshot, Vec<HistoryError>) {
    let mut snapshot = YearSnapshot::new();
    let mut rejected = Vec::new();

    for (user, record) in raw {
        match PlayerYearRecord::from_raw(&user, season, record) {
            Ok(valid) => {
                snapshot.insert(user, valid);
            }
            Err(e) => rejected.push(e),
        }
    }

    (snapshot, rejected)
}
