//! Highest and lowest single-week scores per season.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::{models::FinalPlayerTable, Season, SeasonRange, Week};

/// A single team-week score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRecord {
    pub player: String,
    pub score: f64,
    pub week: Week,
}

/// First week holding the best score per `better`, ignoring non-positive scores.
fn best_week(scores: &[f64], better: impl Fn(f64, f64) -> bool) -> Option<(f64, Week)> {
    scores
        .iter()
        .enumerate()
        .filter(|(_, s)| **s > 0.0)
        .fold(None, |best, (idx, score)| match best {
            Some((b, _)) if !better(*score, b) => best,
            _ => Some((*score, Week::from_index(idx))),
        })
}

fn extreme_in_year(
    table: &FinalPlayerTable,
    seasons: SeasonRange,
    better: impl Fn(f64, f64) -> bool + Copy,
) -> BTreeMap<Season, ScoreRecord> {
    let mut out = BTreeMap::new();

    for season in seasons.iter() {
        let mut top: Option<ScoreRecord> = None;

        // Username order with a strict comparison: the first name wins ties.
        for (user, year) in table.season_records(season) {
            let Some((score, week)) = best_week(year.scores(), better) else {
                continue;
            };
            if top.as_ref().map_or(true, |t| better(score, t.score)) {
                top = Some(ScoreRecord {
                    player: user.to_string(),
                    score,
                    week,
                });
            }
        }

        if let Some(record) = top {
            out.insert(season, record);
        }
    }

    out
}

/// Highest weekly score for each season, with the week it happened.
pub fn highest_in_year(
    table: &FinalPlayerTable,
    seasons: SeasonRange,
) -> BTreeMap<Season, ScoreRecord> {
    extreme_in_year(table, seasons, |a, b| a > b)
}

/// Lowest positive weekly score for each season. Zero means the team did not play.
pub fn lowest_in_year(
    table: &FinalPlayerTable,
    seasons: SeasonRange,
) -> BTreeMap<Season, ScoreRecord> {
    extreme_in_year(table, seasons, |a, b| a < b)
}
