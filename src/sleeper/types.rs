use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Roster entry from `/league/{id}/rosters`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Roster {
    pub roster_id: u32,
    #[serde(default)]
    pub owner_id: Option<String>,
}

/// User profile from `/user/{id}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SleeperUser {
    pub user_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl SleeperUser {
    /// The name league history is tracked under.
    pub fn name(&self) -> Option<&str> {
        self.display_name.as_deref().or(self.username.as_deref())
    }
}

/// One roster's result in `/league/{id}/matchups/{week}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Matchup {
    pub roster_id: u32,
    #[serde(default)]
    pub matchup_id: Option<u32>,
    #[serde(default)]
    pub points: Option<f64>,
}

/// Who controls a roster
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RosterOwner {
    pub username: String,
}

/// Roster id -> owner, saved as `roster_user_association_<season>.json`
pub type RosterAssociation = BTreeMap<u32, RosterOwner>;
