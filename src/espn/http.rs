use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, COOKIE},
    Client,
};

use crate::{config::EspnCookies, espn::types::LeagueResponse, LeagueId, Result, Season};


/// Base path for ESPN Fantasy Football v3 API.
pub const FFL_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";

/// Views requested for a season: teams/members, the full schedule and settings.
const LEAGUE_VIEWS: [&str; 3] = ["mTeam", "mMatchup", "mSettings"];

/// Build request headers, adding the auth cookie for private leagues.
pub fn league_headers(cookies: Option<&EspnCookies>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(cookies) = cookies {
        h.insert(COOKIE, HeaderValue::from_str(&cookies.header_value())?);
    }
    Ok(h)
}

/// Thin ESPN client; the base URL is injectable so tests can point it at a mock server.
#[derive(Debug, Clone)]
pub struct EspnClient {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl EspnClient {
    pub fn new(base_url: impl Into<String>, cookies: Option<&EspnCookies>) -> Result<Self> {
        let client = Client::builder().user_agent("ffl-history/0.1").build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            headers: league_headers(cookies)?,
        })
    }

    /// Fetch members, teams and schedule for one season.
    pub async fn get_league(&self, league_id: LeagueId, season: Season) -> Result<LeagueResponse> {
        let url = format!(
            "{}/seasons/{}/segments/0/leagues/{}",
            self.base_url, season, league_id
        );
        let params: Vec<(&str, &str)> = LEAGUE_VIEWS.iter().map(|v| ("view", *v)).collect();

        let res = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<LeagueResponse>()
            .await?;

        Ok(res)
    }
}
