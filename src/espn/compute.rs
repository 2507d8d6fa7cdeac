use std::collections::BTreeMap;
use tracing::warn;

use crate::{
    espn::types::{LeagueResponse, Member, Team},
    models::{PlayerYearRecord, YearSnapshot},
    HistoryError, Season,
};


/// Weekly points per team id, one entry per matchup period.
///
/// Periods in which a team has no scheduled matchup count as 0.
pub fn team_weekly_scores(league: &LeagueResponse) -> BTreeMap<u32, Vec<f64>> {
    let periods = league
        .schedule
        .iter()
        .map(|m| m.matchup_period_id as usize)
        .max()
        .unwrap_or(0);

    let mut scores: BTreeMap<u32, Vec<f64>> = league
        .teams
        .iter()
        .map(|t| (t.id, vec![0.0; periods]))
        .collect();

    for matchup in &league.schedule {
        if matchup.matchup_period_id == 0 {
            continue;
        }
        let idx = matchup.matchup_period_id as usize - 1;
        for side in [&matchup.home, &matchup.away].into_iter().flatten() {
            if let Some(team_scores) = scores.get_mut(&side.team_id) {
                team_scores[idx] = side.total_points;
            }
        }
    }

    scores
}

/// ESPN death week: the first zero week after week 1, or the season length
/// when the team scored every week. Week 1 never counts as a death week
/// unless the season is a single week long.
pub fn espn_death_week(scores: &[f64]) -> Option<u32> {
    if scores.is_empty() {
        return None;
    }
    let mut week = 1;
    while week < scores.len() && scores[week] != 0.0 {
        week += 1;
    }
    Some(week as u32)
}

/// Name a team is tracked under: the primary owner's "First Last", falling
/// back to the member's display name, then the team name.
pub fn owner_name(team: &Team, members: &[Member]) -> String {
    let owner_id = team.primary_owner.as_ref().or(team.owners.first());
    let member = owner_id.and_then(|id| members.iter().find(|m| &m.id == id));

    member
        .and_then(|m| m.full_name().or_else(|| m.display_name.clone()))
        .unwrap_or_else(|| team.display_name())
}

/// Build the season snapshot: owner name -> weekly scores and death week.
pub fn user_info(league: &LeagueResponse, season: Season) -> YearSnapshot {
    let weekly = team_weekly_scores(league);
    let mut snapshot = YearSnapshot::new();

    for team in &league.teams {
        let name = owner_name(team, &league.members);
        let scores = weekly.get(&team.id).cloned().unwrap_or_default();
        let death_week = espn_death_week(&scores);

        match PlayerYearRecord::try_new(scores, death_week) {
            Ok(record) => {
                if snapshot.insert(name.clone(), record).is_some() {
                    warn!(%season, user = %name, "owner has more than one team, keeping the last");
                }
            }
            Err(reason) => {
                let err = HistoryError::MalformedRecord {
                    user: name,
                    season,
                    reason,
                };
                warn!(error = %err, "skipping team");
            }
        }
    }

    snapshot
}
