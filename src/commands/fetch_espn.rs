//! ESPN fetch command implementation

use std::path::Path;
use tracing::{info, warn};

use crate::{
    config::{resolve_league_id, EspnCookies},
    core::storage::{save_json, season_dir, user_info_path, Platform, ESPN_MEMBERS_FILE},
    espn::{user_info, EspnClient, FFL_BASE_URL},
    history::crown_champion,
    models::YearSnapshot,
    LeagueId, Result, Season, SeasonRange,
};

/// Fetch one ESPN season and write `members.json` and `espn_user_info.json`.
///
/// A failed request is logged and yields `Ok(None)` so the remaining seasons
/// still get fetched.
pub async fn fetch_espn_season(
    client: &EspnClient,
    league_id: LeagueId,
    season: Season,
    data_dir: &Path,
) -> Result<Option<YearSnapshot>> {
    let league = match client.get_league(league_id, season).await {
        Ok(league) => league,
        Err(e) => {
            warn!(%season, %league_id, error = %e, "ESPN request failed, no data for season");
            return Ok(None);
        }
    };

    save_json(
        &league.members,
        &season_dir(data_dir, season).join(ESPN_MEMBERS_FILE),
    )?;

    let mut snapshot = user_info(&league, season);
    if let Some(champion) = crown_champion(&mut snapshot) {
        info!(%season, %champion, "ESPN champion");
    }

    save_json(&snapshot, &user_info_path(data_dir, season, Platform::Espn))?;
    Ok(Some(snapshot))
}

/// Handle the fetch-espn command
pub async fn handle_fetch_espn(
    league_id: Option<LeagueId>,
    seasons: SeasonRange,
    data_dir: &Path,
    verbose: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let cookies = EspnCookies::from_env();
    if cookies.is_none() {
        println!("No ESPN cookies set, only public leagues will load");
    }
    let client = EspnClient::new(FFL_BASE_URL, cookies.as_ref())?;

    for season in seasons.iter() {
        // tarpaulin::skip - HTTP call, tested via integration tests
        match fetch_espn_season(&client, league_id, season, data_dir).await? {
            Some(snapshot) => {
                println!("✓ {} ESPN season saved ({} users)", season, snapshot.len());
                if verbose {
                    let path = user_info_path(data_dir, season, Platform::Espn);
                    println!("  Written to: {}", path.display()); // tarpaulin::skip
                }
            }
            None => println!("✗ {} ESPN season unavailable", season),
        }
    }

    Ok(())
}
