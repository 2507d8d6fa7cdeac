use serde::{Deserialize, Serialize};

/// League member (a human account) from `view=mTeam`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Member {
    pub id: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
}

impl Member {
    /// "First Last" when both are known.
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            _ => None,
        }
    }
}

/// Fantasy team; `owners` holds member ids
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(rename = "primaryOwner", default)]
    pub primary_owner: Option<String>,
}

impl Team {
    /// Team name, built from location + nickname on older seasons.
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        match (&self.location, &self.nickname) {
            (Some(loc), Some(nick)) => format!("{} {}", loc, nick),
            _ => format!("Team {}", self.id),
        }
    }
}

/// One side of a scheduled matchup
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchupSide {
    #[serde(rename = "teamId")]
    pub team_id: u32,
    #[serde(rename = "totalPoints", default)]
    pub total_points: f64,
}

/// Scheduled matchup from `view=mMatchup`; `away` is absent on byes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduleMatchup {
    #[serde(rename = "matchupPeriodId")]
    pub matchup_period_id: u16,
    #[serde(default)]
    pub home: Option<MatchupSide>,
    #[serde(default)]
    pub away: Option<MatchupSide>,
}

/// League payload for a season
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeagueResponse {
    #[serde(rename = "seasonId", default)]
    pub season_id: Option<u16>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub schedule: Vec<ScheduleMatchup>,
}
