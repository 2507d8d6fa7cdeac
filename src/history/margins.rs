//! Weekly score gaps.
//!
//! All four analyses start from the same per-week buckets of positive scores
//! (see [`bucket_scores_by_week`]) and differ only in which pair of scores they
//! compare and whether they keep the smallest or largest gap.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::{models::FinalPlayerTable, Season, SeasonRange, Week, MAX_WEEKS};

/// How many weeks the top narrowest losses report keeps.
pub const TOP_NARROWEST_LOSSES: usize = 5;

/// One user's score in a given week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreEntry {
    pub user: String,
    pub score: f64,
}

/// Gap between two scores in the same week; `lower.score <= upper.score`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekMargin {
    pub week: Week,
    pub lower: ScoreEntry,
    pub upper: ScoreEntry,
    pub difference: f64,
}

/// Which two scores of a week are compared.
#[derive(Debug, Clone, Copy)]
enum Pairing {
    /// Lowest against second lowest.
    BottomTwo,
    /// Lowest against highest.
    BottomTop,
}

/// Per-week scores for one season, weeks `1..=MAX_WEEKS`, positive scores only.
///
/// Each bucket is sorted by score ascending, then by username. Weeks with no
/// positive score are absent.
pub fn bucket_scores_by_week(
    table: &FinalPlayerTable,
    season: Season,
) -> BTreeMap<Week, Vec<ScoreEntry>> {
    let mut buckets: BTreeMap<Week, Vec<ScoreEntry>> = BTreeMap::new();

    for (user, year) in table.season_records(season) {
        for (idx, score) in year.scores().iter().enumerate() {
            let week = Week::from_index(idx);
            if *score <= 0.0 || week.as_u16() > MAX_WEEKS {
                continue;
            }
            buckets.entry(week).or_default().push(ScoreEntry {
                user: user.to_string(),
                score: *score,
            });
        }
    }

    for entries in buckets.values_mut() {
        entries.sort_by(|a, b| a.score.total_cmp(&b.score).then_with(|| a.user.cmp(&b.user)));
    }

    buckets
}

/// Margins for every week with at least two scores, in week order.
fn weekly_margins(buckets: &BTreeMap<Week, Vec<ScoreEntry>>, pairing: Pairing) -> Vec<WeekMargin> {
    buckets
        .iter()
        .filter(|(_, entries)| entries.len() >= 2)
        .map(|(week, entries)| {
            let lower = &entries[0];
            let upper = match pairing {
                Pairing::BottomTwo => &entries[1],
                Pairing::BottomTop => &entries[entries.len() - 1],
            };
            WeekMargin {
                week: *week,
                lower: lower.clone(),
                upper: upper.clone(),
                difference: upper.score - lower.score,
            }
        })
        .collect()
}

/// The first margin that no later one beats.
fn pick_margin(margins: Vec<WeekMargin>, beats: impl Fn(f64, f64) -> bool) -> Option<WeekMargin> {
    margins.into_iter().fold(None, |best, m| match best {
        Some(b) if !beats(m.difference, b.difference) => Some(b),
        _ => Some(m),
    })
}

/// Best qualifying margin per season. Seasons where no week qualifies are left out.
fn per_season(
    table: &FinalPlayerTable,
    seasons: SeasonRange,
    pairing: Pairing,
    qualifies: impl Fn(&WeekMargin) -> bool + Copy,
    beats: impl Fn(f64, f64) -> bool + Copy,
) -> BTreeMap<Season, WeekMargin> {
    seasons
        .iter()
        .filter_map(|season| {
            let buckets = bucket_scores_by_week(table, season);
            let mut margins = weekly_margins(&buckets, pairing);
            margins.retain(qualifies);
            pick_margin(margins, beats).map(|m| (season, m))
        })
        .collect()
}

/// A "largest gap" needs an actual gap; level weeks never win.
fn has_gap(margin: &WeekMargin) -> bool {
    margin.difference > 0.0
}

/// Week with the smallest gap between the two lowest scores, per season.
pub fn narrowest_loss(table: &FinalPlayerTable, seasons: SeasonRange) -> BTreeMap<Season, WeekMargin> {
    per_season(table, seasons, Pairing::BottomTwo, |_| true, |a, b| a < b)
}

/// Week with the largest gap between the two lowest scores, per season.
/// Seasons whose weeks all ended level are left out.
///
/// Named for the weeks where a bye-depleted lineup trails the field by a mile.
pub fn bye_week(table: &FinalPlayerTable, seasons: SeasonRange) -> BTreeMap<Season, WeekMargin> {
    per_season(table, seasons, Pairing::BottomTwo, has_gap, |a, b| a > b)
}

/// Week with the largest gap between the lowest and highest score, per season.
/// Seasons whose weeks all ended level are left out.
pub fn david_goliath(table: &FinalPlayerTable, seasons: SeasonRange) -> BTreeMap<Season, WeekMargin> {
    per_season(table, seasons, Pairing::BottomTop, has_gap, |a, b| a > b)
}

/// The five weeks with the smallest bottom-two gap per season, smallest first.
///
/// Seasons with no qualifying week map to an empty list.
pub fn top_5_narrowest_losses(
    table: &FinalPlayerTable,
    seasons: SeasonRange,
) -> BTreeMap<Season, Vec<WeekMargin>> {
    seasons
        .iter()
        .map(|season| {
            let buckets = bucket_scores_by_week(table, season);
            let mut margins = weekly_margins(&buckets, Pairing::BottomTwo);
            margins.sort_by(|a, b| a.difference.total_cmp(&b.difference));
            margins.truncate(TOP_NARROWEST_LOSSES);
            (season, margins)
        })
        .collect()
}
