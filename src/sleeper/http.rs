use reqwest::Client;
use serde_json::Value;

use crate::{
    sleeper::types::{Roster, SleeperUser},
    Result, SleeperLeagueId,
};


/// Base path for the Sleeper v1 REST API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Thin Sleeper client; the base URL is injectable so tests can point it at a mock server.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    client: Client,
    base_url: String,
}

impl SleeperClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent("ffl-history/0.1").build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let res = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        Ok(res)
    }

    pub async fn get_league_rosters(&self, league_id: &SleeperLeagueId) -> Result<Vec<Roster>> {
        self.get_json(&format!("{}/league/{}/rosters", self.base_url, league_id))
            .await
    }

    pub async fn get_user(&self, user_id: &str) -> Result<SleeperUser> {
        self.get_json(&format!("{}/user/{}", self.base_url, user_id))
            .await
    }

    /// Raw matchup payload for one week, kept as-is for the week snapshot.
    pub async fn get_weekly_matchups(&self, league_id: &SleeperLeagueId, week: u16) -> Result<Value> {
        self.get_json(&format!(
            "{}/league/{}/matchups/{}",
            self.base_url, league_id, week
        ))
        .await
    }
}
