//! Sleeper fetch command implementation

use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::{
    config::YearMap,
    core::storage::{roster_association_path, save_json, sleeper_week_path, user_info_path, Platform},
    history::crown_champion,
    models::YearSnapshot,
    sleeper::{associate_rosters, load_week_matchups, user_info, SleeperClient, SLEEPER_BASE_URL},
    Result, Season, SleeperLeagueId, MAX_WEEKS,
};

/// Fetch one Sleeper season into `{data_dir}/{season}/`.
///
/// Writes the roster association, one `week_<n>.json` per week (`null` for a
/// week that failed to load), and finally `sleeper_user_info.json` rebuilt
/// from the saved week files.
/// Failed requests are logged and treated as missing data.
pub async fn fetch_sleeper_season(
    client: &SleeperClient,
    league_id: &SleeperLeagueId,
    season: Season,
    skip_users: &[String],
    data_dir: &Path,
) -> Result<YearSnapshot> {
    let rosters = match client.get_league_rosters(league_id).await {
        Ok(rosters) => rosters,
        Err(e) => {
            warn!(%season, %league_id, error = %e, "failed to fetch rosters");
            Vec::new()
        }
    };

    let mut owners = Vec::with_capacity(rosters.len());
    for roster in rosters {
        let Some(owner_id) = roster.owner_id.as_deref() else {
            debug!(roster_id = roster.roster_id, "roster has no owner");
            continue;
        };
        match client.get_user(owner_id).await {
            Ok(user) => owners.push((roster.roster_id, user)),
            Err(e) => warn!(roster_id = roster.roster_id, owner_id, error = %e, "failed to fetch user"),
        }
    }

    let association = associate_rosters(owners, skip_users);
    save_json(&association, &roster_association_path(data_dir, season))?;

    // A failed week is saved as `null` so a file from an earlier run cannot leak in.
    for week in 1..=MAX_WEEKS {
        let matchups = match client.get_weekly_matchups(league_id, week).await {
            Ok(matchups) => matchups,
            Err(e) => {
                warn!(%season, week, error = %e, "failed to fetch matchups");
                Value::Null
            }
        };
        save_json(&matchups, &sleeper_week_path(data_dir, season, week))?;
    }

    let weeks = load_week_matchups(data_dir, season)?;
    let mut snapshot = user_info(&association, &weeks, season);
    if let Some(champion) = crown_champion(&mut snapshot) {
        info!(%season, %champion, "Sleeper champion");
    }

    save_json(&snapshot, &user_info_path(data_dir, season, Platform::Sleeper))?;
    Ok(snapshot)
}

/// Handle the fetch-sleeper command
pub async fn handle_fetch_sleeper(
    year_map: &YearMap,
    skip_users: &[String],
    data_dir: &Path,
    verbose: bool,
) -> Result<()> {
    let client = SleeperClient::new(SLEEPER_BASE_URL)?;

    for (season, league_id) in year_map {
        // tarpaulin::skip - HTTP call, tested via integration tests
        let snapshot =
            fetch_sleeper_season(&client, league_id, *season, skip_users, data_dir).await?;
        println!("✓ {} Sleeper season saved ({} users)", season, snapshot.len());
        if verbose {
            let path = user_info_path(data_dir, *season, Platform::Sleeper);
            println!("  Written to: {}", path.display()); // tarpaulin::skip
        }
    }

    Ok(())
}
