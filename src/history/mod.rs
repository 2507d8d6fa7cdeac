//! League history aggregation
//!
//! Loads per-season snapshots from the data directory, folds them into one
//! [`FinalPlayerTable`] keyed by canonical username, and derives the season
//! reports from it:
//! - `deaths`: average death week and the survival leaderboard
//! - `extremes`: highest and lowest single-week scores per season
//! - `margins`: weekly score gaps (narrowest loss, bye week, David vs Goliath)
//! - `champion`: crowning the champion of a single-season snapshot

pub mod champion;
pub mod deaths;
pub mod extremes;
pub mod margins;


use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use crate::{
    core::storage::{load_json, save_json, season_dir, user_info_path, Platform},
    models::{validate_snapshot, FinalPlayerTable, RawYearSnapshot, YearSnapshot},
    HistoryError, Result, Season, SeasonRange,
};

pub use champion::{crown_champion, find_champion, sort_by_death_week};
pub use deaths::{average_death_week, calculate_avg_death_week, sorted_by_best_death_week};
pub use extremes::{highest_in_year, lowest_in_year, ScoreRecord};
pub use margins::{
    bucket_scores_by_week, bye_week, david_goliath, narrowest_loss, top_5_narrowest_losses,
    ScoreEntry, WeekMargin,
};

/// Find the snapshot file for a season.
///
/// The ESPN file is preferred when both platforms have one. A season with no
/// snapshot at all is a [`HistoryError::MissingYearData`].
pub fn locate_year(data_dir: &Path, season: Season) -> Result<(Platform, PathBuf)> {
    let mut found = Platform::ALL
        .iter()
        .map(|platform| (*platform, user_info_path(data_dir, season, *platform)))
        .filter(|(_, path)| path.is_file());

    let Some((platform, path)) = found.next() else {
        return Err(HistoryError::MissingYearData {
            season,
            dir: season_dir(data_dir, season),
        });
    };

    if let Some((ignored, _)) = found.next() {
        warn!(%season, using = %platform, %ignored, "both platforms have a snapshot for this season");
    }

    Ok((platform, path))
}

/// Read and validate a snapshot file. Malformed records are logged and skipped.
pub fn read_snapshot(path: &Path, season: Season) -> Result<YearSnapshot> {
    let raw: RawYearSnapshot = load_json(path)?;
    let (snapshot, rejected) = validate_snapshot(season, raw);
    for err in &rejected {
        warn!(error = %err, "skipping record");
    }

    info!(
        %season,
        path = %path.display(),
        users = snapshot.len(),
        skipped = rejected.len(),
        "loaded season snapshot"
    );
    Ok(snapshot)
}

/// Load one season's snapshot from `{data_dir}/{season}/`.
pub fn load_year(data_dir: &Path, season: Season) -> Result<YearSnapshot> {
    let (_, path) = locate_year(data_dir, season)?;
    read_snapshot(&path, season)
}

/// ESPN display name -> Sleeper username.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameAssociation(BTreeMap<String, String>);

impl NameAssociation {
    pub fn new(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }

    /// Load the association file. A missing file means nobody needs renaming.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            info!(path = %path.display(), "no name association file, using names as-is");
            return Ok(Self::default());
        }
        load_json(path)
    }

    /// Canonical username for `name`.
    pub fn canonical<'a>(&'a self, name: &'a str) -> &'a str {
        self.0.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Fold one season's snapshot into the table under canonical usernames.
pub fn add_year(
    table: &mut FinalPlayerTable,
    season: Season,
    snapshot: YearSnapshot,
    names: &NameAssociation,
) {
    for (user, record) in snapshot {
        let canonical = names.canonical(&user);
        if table.insert_year(canonical, season, record).is_some() {
            warn!(%season, user = %user, canonical, "duplicate season record, keeping the later one");
        }
    }
}

/// Build the multi-season table for every season in `seasons`.
///
/// Stops at the first season that cannot be loaded. Averages are not filled
/// in; call [`calculate_avg_death_week`] afterwards.
pub fn build_final_table(
    data_dir: &Path,
    seasons: SeasonRange,
    names: &NameAssociation,
) -> Result<FinalPlayerTable> {
    let mut table = FinalPlayerTable::new();
    for season in seasons.iter() {
        let snapshot = load_year(data_dir, season)?;
        add_year(&mut table, season, snapshot, names);
    }
    Ok(table)
}

/// Read a saved table back, recomputing averages from the season records.
pub fn load_final_table(path: &Path) -> Result<FinalPlayerTable> {
    let mut table: FinalPlayerTable = load_json(path)?;
    calculate_avg_death_week(&mut table);
    Ok(table)
}

pub fn save_final_table(table: &FinalPlayerTable, path: &Path) -> Result<()> {
    save_json(table, path)?;
    info!(path = %path.display(), users = table.len(), "saved final table");
    Ok(())
}
