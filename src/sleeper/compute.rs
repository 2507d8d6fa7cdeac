use std::{collections::BTreeMap, fs, path::Path};
use tracing::{debug, warn};

use crate::{
    core::storage::{load_json, parse_week_file_name, season_dir},
    models::{PlayerYearRecord, YearSnapshot},
    sleeper::types::{Matchup, RosterAssociation, RosterOwner, SleeperUser},
    HistoryError, Result, Season,
};

#[cfg(test)]
mod tests;

/// Map roster ids to the users controlling them, leaving out skipped accounts.
pub fn associate_rosters<I>(owners: I, skip_users: &[String]) -> RosterAssociation
where
    I: IntoIterator<Item = (u32, SleeperUser)>,
{
    let mut association = RosterAssociation::new();
    for (roster_id, user) in owners {
        let Some(name) = user.name() else {
            warn!(roster_id, user_id = %user.user_id, "user has no name, skipping roster");
            continue;
        };
        if skip_users.iter().any(|s| s == name) {
            debug!(roster_id, user = name, "skipping configured account");
            continue;
        }
        association.insert(
            roster_id,
            RosterOwner {
                username: name.to_string(),
            },
        );
    }
    association
}

/// Sleeper death week: the last week with a positive score. `None` when the
/// team never scored.
pub fn sleeper_death_week(scores: &[f64]) -> Option<u32> {
    scores
        .iter()
        .rposition(|s| *s > 0.0)
        .map(|idx| idx as u32 + 1)
}

/// Read every saved `week_<n>.json` for a season, in week order.
///
/// A week saved as `null` yields no matchups.
pub fn load_week_matchups(data_dir: &Path, season: Season) -> Result<Vec<(u16, Vec<Matchup>)>> {
    let dir = season_dir(data_dir, season);
    let mut weeks = Vec::new();

    for entry in fs::read_dir(&dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(week) = name.to_str().and_then(parse_week_file_name) else {
            continue;
        };
        let matchups: Option<Vec<Matchup>> = load_json(&entry.path())?;
        weeks.push((week, matchups.unwrap_or_default()));
    }

    weeks.sort_by_key(|(week, _)| *week);
    Ok(weeks)
}

/// Build the season snapshot from the roster association and weekly matchups.
///
/// Every associated user appears, even with no scores.
pub fn user_info(
    association: &RosterAssociation,
    weeks: &[(u16, Vec<Matchup>)],
    season: Season,
) -> YearSnapshot {
    let mut scores: BTreeMap<&str, Vec<f64>> = association
        .values()
        .map(|owner| (owner.username.as_str(), Vec::new()))
        .collect();

    for (_, matchups) in weeks {
        for matchup in matchups {
            if let Some(owner) = association.get(&matchup.roster_id) {
                if let Some(user_scores) = scores.get_mut(owner.username.as_str()) {
                    user_scores.push(matchup.points.unwrap_or(0.0));
                }
            }
        }
    }

    let mut snapshot = YearSnapshot::new();
    for (user, user_scores) in scores {
        let death_week = sleeper_death_week(&user_scores);
        match PlayerYearRecord::try_new(user_scores, death_week) {
            Ok(record) => {
                snapshot.insert(user.to_string(), record);
            }
            Err(reason) => {
                let err = HistoryError::MalformedRecord {
                    user: user.to_string(),
                    season,
                    reason,
                };
                warn!(error = %err, "skipping user");
            }
        }
    }
    snapshot
}
